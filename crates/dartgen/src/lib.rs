//! Dart model generation from Laravel migrations or a live database.
//!
//! `dartgen` reads the schema either by replaying a directory of
//! Laravel-style migration files or by introspecting a SQLite
//! database, then writes one Dart model class per table with fields,
//! a named-parameter constructor, `fromJson` and `toJson`.
//!
//! # Architecture
//!
//! The pieces around the [`dartgen_core`] engine:
//!
//! - **Discover** - Finds migration files and replays them in
//!   file-name order
//! - **Introspect** - The database metadata contract and its SQLite
//!   implementation
//! - **Writer** - Renders models and writes them into the output
//!   directory
//!
//! # CLI Usage
//!
//! ```bash
//! # Rebuild the schema from database/migrations (the default)
//! dartgen --from-migrations
//!
//! # Read the schema from the live database instead
//! dartgen --from-database --database sqlite:app.sqlite3
//!
//! # Show what would be generated without touching the filesystem
//! dartgen --dry-run
//! ```

pub mod discover;
pub mod error;
pub mod introspect;
pub mod writer;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::discover::{discover_migrations, reconstruct_schema, MigrationFile};
    pub use crate::error::{GenerateError, Result};
    pub use crate::introspect::{introspect_schema, SchemaMetadata, SqliteMetadata};
    pub use crate::writer::ModelWriter;
}

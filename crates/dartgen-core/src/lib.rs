//! Schema reconstruction and Dart model rendering.
//!
//! This crate is the engine behind the `dartgen` tool. It rebuilds a
//! relational schema from Laravel-style migration files by replaying
//! create / alter / drop operations in order, and renders one Dart
//! model class per table. It is pure and synchronous; file discovery,
//! database access and output writing live in the `dartgen` binary
//! crate.
//!
//! The pipeline, leaves first:
//!
//! - [`scan`]: comment stripping, whitespace collapsing and
//!   quote-aware delimiter scanning over raw source text
//! - [`extract`]: shape-based recognition of `Schema::` calls and
//!   column statements, producing [`operation::Operation`] values
//! - [`state`]: the replay fold, operations in, final
//!   [`state::SchemaState`] out
//! - [`typemap`] / [`naming`]: pure lookups from type tokens to Dart
//!   types and from table/column names to Dart identifiers
//! - [`codegen`]: deterministic rendering of one class per table
//!
//! # Example
//!
//! ```
//! use dartgen_core::codegen::render_model;
//! use dartgen_core::extract::extract_operations;
//! use dartgen_core::state::SchemaState;
//!
//! let source = r"
//!     Schema::create('users', function (Blueprint $table) {
//!         $table->increments('id');
//!         $table->string('email');
//!         $table->timestamp('created_at')->nullable();
//!     });
//! ";
//!
//! let operations = extract_operations(source);
//! let state = SchemaState::from_operations(&operations);
//! let model = render_model("users", state.table("users").unwrap());
//!
//! assert!(model.contains("class User {"));
//! assert!(model.contains("final String email;"));
//! assert!(model.contains("final DateTime? createdAt;"));
//! ```

pub mod codegen;
pub mod extract;
pub mod naming;
pub mod operation;
pub mod scan;
pub mod schema;
pub mod state;
pub mod typemap;

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::codegen::render_model;
    pub use crate::extract::{extract_actions, extract_columns, extract_operations};
    pub use crate::naming::{class_name, field_name, model_file_name};
    pub use crate::operation::{AlterAction, Operation};
    pub use crate::schema::{ColumnDefinition, TableDefinition};
    pub use crate::state::SchemaState;
    pub use crate::typemap::{dart_type, to_canonical};
}

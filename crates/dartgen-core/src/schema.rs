//! Schema value types.
//!
//! A [`TableDefinition`] is an ordered set of columns keyed by name.
//! Insertion order is load-bearing: it is the order fields appear in
//! the generated Dart classes, so every mutation here is specified in
//! terms of what it does to that order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single column, as recovered from a migration file or a live
/// database.
///
/// `raw_type` holds whatever token the source offered: the migration
/// verb (`string`, `increments`, ...) on the file path, the canonical
/// type name (`integer`, `dateTime`, ...) on the database path. Both
/// vocabularies resolve through [`crate::typemap::dart_type`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub raw_type: String,
    pub nullable: bool,
}

impl ColumnDefinition {
    /// Creates a non-nullable column.
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
            nullable: false,
        }
    }

    /// Marks the column as accepting NULL.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// An ordered column set for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    columns: IndexMap<String, ColumnDefinition>,
}

impl TableDefinition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a column.
    ///
    /// A new name is appended after the existing columns; a known name
    /// is overwritten in place, keeping its position.
    pub fn upsert(&mut self, column: ColumnDefinition) {
        self.columns.insert(column.name.clone(), column);
    }

    /// Removes a column, preserving the order of the rest. Unknown
    /// names are ignored.
    pub fn drop_column(&mut self, name: &str) -> Option<ColumnDefinition> {
        self.columns.shift_remove(name)
    }

    /// Renames a column, keeping its type and nullability.
    ///
    /// The renamed column moves to the end of the order. Renaming onto
    /// an existing name overwrites that column in place; renaming an
    /// unknown column, or a column onto itself, does nothing.
    pub fn rename_column(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        if let Some(column) = self.columns.shift_remove(from) {
            self.columns.insert(
                to.to_string(),
                ColumnDefinition {
                    name: to.to_string(),
                    ..column
                },
            );
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Columns in definition order.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

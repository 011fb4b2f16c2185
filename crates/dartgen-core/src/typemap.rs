//! Type mapping.
//!
//! Two pure lookups bridge three vocabularies. Native database types
//! (`VARCHAR`, `INT`, ...) normalize to canonical names through
//! [`to_canonical`]; canonical names and migration verbs (`string`,
//! `increments`, ...) resolve to Dart types through [`dart_type`].
//! The database path composes both, the migration path only the
//! second.

/// Fallback canonical type for unrecognized native tokens.
pub const DEFAULT_CANONICAL_TYPE: &str = "string";

/// Fallback Dart type for unrecognized tokens.
pub const DEFAULT_DART_TYPE: &str = "dynamic";

/// Normalizes a native database type token to its canonical name.
///
/// Lookup is case-insensitive on the bare token (length suffixes such
/// as `(255)` must already be stripped). Unknown tokens fall back to
/// [`DEFAULT_CANONICAL_TYPE`].
#[must_use]
pub fn to_canonical(raw_type: &str) -> &'static str {
    match raw_type.to_ascii_lowercase().as_str() {
        "int" | "integer" | "mediumint" => "integer",
        "smallint" => "smallInteger",
        "bigint" => "bigInteger",
        // MySQL-style boolean column
        "tinyint" | "bool" | "boolean" => "boolean",
        "float" => "float",
        "double" | "real" => "double",
        "decimal" | "numeric" => "decimal",
        "date" => "date",
        "datetime" => "dateTime",
        "timestamp" => "timestamp",
        "time" => "time",
        "json" | "jsonb" => "json",
        "uuid" | "uniqueidentifier" => "uuid",
        "blob" | "binary" | "varbinary" => "binary",
        "char" | "varchar" | "nchar" | "nvarchar" | "tinytext" | "text" | "mediumtext"
        | "longtext" | "clob" => "string",
        _ => DEFAULT_CANONICAL_TYPE,
    }
}

/// Resolves a canonical type name or migration verb to a Dart type.
///
/// Lookup is exact and case-sensitive. Unknown tokens fall back to
/// [`DEFAULT_DART_TYPE`].
#[must_use]
pub fn dart_type(token: &str) -> &'static str {
    match token {
        "string" | "char" | "text" | "tinyText" | "mediumText" | "longText" | "uuid" | "ulid"
        | "time" | "ipAddress" | "macAddress" => "String",
        "integer" | "bigInteger" | "mediumInteger" | "smallInteger" | "tinyInteger"
        | "unsignedInteger" | "unsignedBigInteger" | "unsignedMediumInteger"
        | "unsignedSmallInteger" | "unsignedTinyInteger" | "increments" | "bigIncrements"
        | "mediumIncrements" | "smallIncrements" | "tinyIncrements" | "foreignId" => "int",
        "boolean" => "bool",
        "float" | "double" | "decimal" | "unsignedDecimal" => "double",
        "date" | "dateTime" | "dateTimeTz" | "timestamp" | "timestampTz" => "DateTime",
        "json" | "jsonb" => "Map<String, dynamic>",
        _ => DEFAULT_DART_TYPE,
    }
}

/// Returns whether `verb` is a recognized column-type verb.
///
/// Alter bodies only accept typed-column statements whose verb is in
/// this set; create bodies accept any verb.
#[must_use]
pub fn is_column_type_verb(verb: &str) -> bool {
    dart_type(verb) != DEFAULT_DART_TYPE
}

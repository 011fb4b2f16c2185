//! Dart model rendering.
//!
//! One table renders to one Dart class with four parts in fixed
//! order: final fields, a named-parameter constructor, a `fromJson`
//! factory, and a `toJson` method. Rendering is deterministic, so
//! regenerating from the same schema is byte-for-byte identical.
//!
//! Casting rules in the JSON code: `DateTime` fields parse from (and
//! serialize to) ISO-8601 strings, `int`/`double`/`bool` fields get
//! an `as` cast, everything else passes through untouched. Nullable
//! fields guard their cast behind a `!= null` check. JSON keys are
//! the original column names, not the camelCase field names.

use crate::naming;
use crate::schema::{ColumnDefinition, TableDefinition};
use crate::typemap;

/// Renders the complete Dart model class for one table.
#[must_use]
pub fn render_model(table: &str, definition: &TableDefinition) -> String {
    let class = naming::class_name(table);
    let mut out = format!("class {class} {{\n");

    for column in definition.columns() {
        out.push_str(&render_field(column));
    }
    if !definition.is_empty() {
        out.push('\n');
    }

    out.push_str(&render_constructor(&class, definition));
    out.push('\n');
    out.push_str(&render_from_json(&class, definition));
    out.push('\n');
    out.push_str(&render_to_json(definition));
    out.push_str("}\n");
    out
}

fn render_field(column: &ColumnDefinition) -> String {
    let dart = typemap::dart_type(&column.raw_type);
    let marker = if column.nullable { "?" } else { "" };
    let field = naming::field_name(&column.name);
    format!("  final {dart}{marker} {field};\n")
}

fn render_constructor(class: &str, definition: &TableDefinition) -> String {
    if definition.is_empty() {
        return format!("  {class}();\n");
    }
    let mut out = format!("  {class}({{\n");
    for column in definition.columns() {
        let field = naming::field_name(&column.name);
        if column.nullable {
            out.push_str(&format!("    this.{field},\n"));
        } else {
            out.push_str(&format!("    required this.{field},\n"));
        }
    }
    out.push_str("  });\n");
    out
}

fn render_from_json(class: &str, definition: &TableDefinition) -> String {
    let mut out = format!(
        "  factory {class}.fromJson(Map<String, dynamic> json) {{\n    return {class}(\n"
    );
    for column in definition.columns() {
        let field = naming::field_name(&column.name);
        let expr = from_json_expr(column);
        out.push_str(&format!("      {field}: {expr},\n"));
    }
    out.push_str("    );\n  }\n");
    out
}

fn render_to_json(definition: &TableDefinition) -> String {
    let mut out = String::from("  Map<String, dynamic> toJson() {\n    return {\n");
    for column in definition.columns() {
        let expr = to_json_expr(column);
        out.push_str(&format!("      '{}': {expr},\n", column.name));
    }
    out.push_str("    };\n  }\n");
    out
}

fn from_json_expr(column: &ColumnDefinition) -> String {
    let key = &column.name;
    match typemap::dart_type(&column.raw_type) {
        "DateTime" => {
            if column.nullable {
                format!("json['{key}'] != null ? DateTime.parse(json['{key}'] as String) : null")
            } else {
                format!("DateTime.parse(json['{key}'] as String)")
            }
        }
        dart @ ("int" | "double" | "bool") => {
            if column.nullable {
                format!("json['{key}'] != null ? json['{key}'] as {dart} : null")
            } else {
                format!("json['{key}'] as {dart}")
            }
        }
        _ => format!("json['{key}']"),
    }
}

fn to_json_expr(column: &ColumnDefinition) -> String {
    let field = naming::field_name(&column.name);
    if typemap::dart_type(&column.raw_type) == "DateTime" {
        let access = if column.nullable { "?." } else { "." };
        format!("{field}{access}toIso8601String()")
    } else {
        field
    }
}

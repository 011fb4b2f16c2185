//! Operation extraction.
//!
//! Turns one definition file's source text into an ordered list of
//! [`Operation`]s. Recognition is shape-based, not a PHP parse: a
//! small set of regular expressions finds `Schema::` calls and column
//! statements in the normalized text, and anything that matches no
//! known shape is skipped with a debug log. Body boundaries come from
//! a depth-tracking scan, so nested closures inside a body do not
//! truncate it.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::operation::{AlterAction, Operation};
use crate::scan;
use crate::schema::ColumnDefinition;
use crate::typemap;

static SCHEMA_CALL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Schema\s*::\s*(create|table|dropIfExists|drop)\s*\(\s*['"]([^'"]+)['"]"#)
        .unwrap()
});

/// `$table-><verb>('<name>'[, <length>])<modifiers>`
static COLUMN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\$\w+\s*->\s*(\w+)\s*\(\s*['"]([^'"]+)['"]\s*(?:,\s*\d+\s*)?\)(.*)$"#).unwrap()
});

static NULLABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"->\s*nullable\s*\(\s*\)").unwrap());

static DROP_COLUMN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\$\w+\s*->\s*dropColumn\s*\(\s*['"]([^'"]+)['"]\s*\)"#).unwrap()
});

static RENAME_COLUMN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\$\w+\s*->\s*renameColumn\s*\(\s*['"]([^'"]+)['"]\s*,\s*['"]([^'"]+)['"]\s*\)"#)
        .unwrap()
});

/// Extracts the schema operations of one definition file, in the
/// order they appear in the text.
///
/// `create` and `table` calls must be followed by a closure body;
/// calls without one are skipped. `drop` and `dropIfExists` carry no
/// body.
#[must_use]
pub fn extract_operations(source: &str) -> Vec<Operation> {
    let text = scan::normalize(source);
    let mut operations = Vec::new();
    for caps in SCHEMA_CALL_RE.captures_iter(&text) {
        let Some(head) = caps.get(0) else { continue };
        let table = caps[2].to_string();
        match &caps[1] {
            "create" => match closure_body(&text, head.end()) {
                Some(body) => {
                    operations.push(Operation::create_table(table, extract_columns(body)));
                }
                None => debug!("create {} has no closure body, skipped", table),
            },
            "table" => match closure_body(&text, head.end()) {
                Some(body) => {
                    operations.push(Operation::alter_table(table, extract_actions(body)));
                }
                None => debug!("alter {} has no closure body, skipped", table),
            },
            _ => operations.push(Operation::drop_table(table)),
        }
    }
    operations
}

/// Recovers ordered column declarations from a create-table body.
///
/// Each statement unit of the shape
/// `$table-><verb>('<name>'[, <length>])` yields a column whose raw
/// type is the verb; trailing modifiers are scanned for the
/// `->nullable()` marker. Any verb is accepted on this path, so
/// single-argument table helpers such as `index('email')` are
/// recorded as columns, a consequence of shape-based recognition.
/// Units matching no shape are skipped; duplicate names overwrite
/// earlier ones in place.
#[must_use]
pub fn extract_columns(body: &str) -> Vec<ColumnDefinition> {
    let mut columns: IndexMap<String, ColumnDefinition> = IndexMap::new();
    for unit in scan::split_statements(body) {
        if let Some(column) = column_statement(unit) {
            columns.insert(column.name.clone(), column);
        } else {
            debug!("unrecognized create statement skipped: {}", unit);
        }
    }
    columns.into_values().collect()
}

/// Recovers column actions from an alter-table body.
///
/// Three shapes are recognized: `dropColumn('<name>')`,
/// `renameColumn('<old>', '<new>')`, and the typed-column shape of
/// [`extract_columns`], the latter only when the verb is a known
/// column type, so table-level helpers (`index`, `unique`, ...) stay
/// out of the schema here. Everything else is skipped.
#[must_use]
pub fn extract_actions(body: &str) -> Vec<AlterAction> {
    let mut actions = Vec::new();
    for unit in scan::split_statements(body) {
        if let Some(caps) = DROP_COLUMN_RE.captures(unit) {
            actions.push(AlterAction::drop(&caps[1]));
        } else if let Some(caps) = RENAME_COLUMN_RE.captures(unit) {
            actions.push(AlterAction::rename(&caps[1], &caps[2]));
        } else if let Some(column) = column_statement(unit) {
            if typemap::is_column_type_verb(&column.raw_type) {
                actions.push(AlterAction::add(column));
            } else {
                debug!("unknown column verb {} in alter ignored", column.raw_type);
            }
        } else {
            debug!("unrecognized alter statement skipped: {}", unit);
        }
    }
    actions
}

/// Finds the `{ ... }` closure body following a schema call, scanning
/// from the end of the matched call head. A top-level `;` before any
/// `{` means the call had no closure argument.
fn closure_body(text: &str, from: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut chars = text[from..].char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '{' => {
                let open = from + i;
                let close = scan::matching_brace(text, open)?;
                return Some(&text[open + 1..close]);
            }
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => return None,
            '\'' | '"' => scan::skip_quoted(&mut chars, c),
            _ => {}
        }
    }
    None
}

fn column_statement(unit: &str) -> Option<ColumnDefinition> {
    let caps = COLUMN_RE.captures(unit)?;
    let modifiers = caps.get(3).map_or("", |m| m.as_str());
    let column = ColumnDefinition::new(&caps[2], &caps[1]);
    Some(if NULLABLE_RE.is_match(modifiers) {
        column.nullable()
    } else {
        column
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const USERS_MIGRATION: &str = r"
<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

class CreateUsersTable extends Migration
{
    public function up()
    {
        Schema::create('users', function (Blueprint $table) {
            $table->increments('id');
            $table->string('name', 100);
            $table->string('email');
            $table->timestamp('created_at')->nullable();
        });
    }
}
";

    fn summarize(columns: &[ColumnDefinition]) -> Vec<(&str, &str, bool)> {
        columns
            .iter()
            .map(|c| (c.name.as_str(), c.raw_type.as_str(), c.nullable))
            .collect()
    }

    #[test]
    fn extracts_create_from_a_full_migration_file() {
        let ops = extract_operations(USERS_MIGRATION);

        assert_eq!(ops.len(), 1);
        let Operation::CreateTable { table, columns } = &ops[0] else {
            panic!("expected a create operation, got {:?}", ops[0]);
        };
        assert_eq!(table, "users");
        assert_eq!(
            summarize(columns),
            vec![
                ("id", "increments", false),
                ("name", "string", false),
                ("email", "string", false),
                ("created_at", "timestamp", true),
            ]
        );
    }

    #[test]
    fn body_capture_survives_nested_closures() {
        let source = r"
            Schema::create('events', function (Blueprint $table) {
                $table->increments('id');
                collect(['a', 'b'])->each(function ($name) use ($table) {
                    $table->string($name);
                });
                $table->timestamp('seen_at')->nullable();
            });
        ";

        let ops = extract_operations(source);

        assert_eq!(ops.len(), 1);
        let Operation::CreateTable { columns, .. } = &ops[0] else {
            panic!("expected a create operation, got {:?}", ops[0]);
        };
        assert_eq!(
            summarize(columns),
            vec![("id", "increments", false), ("seen_at", "timestamp", true)]
        );
    }

    #[test]
    fn extracts_alter_actions_in_order() {
        let source = r"
            Schema::table('users', function (Blueprint $table) {
                $table->string('nickname')->nullable();
                $table->index('email');
                $table->renameColumn('name', 'full_name');
                $table->dropColumn('email');
            });
        ";

        let ops = extract_operations(source);

        assert_eq!(
            ops,
            vec![Operation::alter_table(
                "users",
                vec![
                    AlterAction::add(ColumnDefinition::new("nickname", "string").nullable()),
                    AlterAction::rename("name", "full_name"),
                    AlterAction::drop("email"),
                ]
            )]
        );
    }

    #[test]
    fn drop_verbs_need_no_body() {
        let source = "Schema::dropIfExists('legacy'); Schema::drop('sessions');";

        assert_eq!(
            extract_operations(source),
            vec![
                Operation::drop_table("legacy"),
                Operation::drop_table("sessions"),
            ]
        );
    }

    #[test]
    fn create_without_closure_is_skipped() {
        let source = "Schema::create('broken', 'no closure'); \
                      Schema::create('ok', function (Blueprint $table) { $table->increments('id'); });";

        let ops = extract_operations(source);

        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].table(), "ok");
    }

    #[test]
    fn operations_keep_textual_order() {
        let source = r"
            Schema::create('posts', function (Blueprint $table) {
                $table->increments('id');
            });
            Schema::table('posts', function (Blueprint $table) {
                $table->string('title');
            });
            Schema::drop('drafts');
        ";

        let ops = extract_operations(source);
        let tables: Vec<&str> = ops.iter().map(Operation::table).collect();

        assert_eq!(tables, vec!["posts", "posts", "drafts"]);
        assert!(matches!(ops[0], Operation::CreateTable { .. }));
        assert!(matches!(ops[1], Operation::AlterTable { .. }));
        assert!(matches!(ops[2], Operation::DropTable { .. }));
    }

    #[test]
    fn single_numeric_argument_is_accepted_more_are_not() {
        let body = "$table->decimal('weight', 5); \
                    $table->decimal('price', 8, 2); \
                    $table->enum('role', ['admin', 'user']);";

        assert_eq!(
            summarize(&extract_columns(body)),
            vec![("weight", "decimal", false)]
        );
    }

    #[test]
    fn create_path_records_single_name_helpers_as_columns() {
        // index('email') has the column shape and upserts under the
        // same name, overwriting the string column.
        let body = "$table->string('email'); $table->index('email');";

        assert_eq!(
            summarize(&extract_columns(body)),
            vec![("email", "index", false)]
        );
    }

    #[test]
    fn duplicate_columns_overwrite_in_place() {
        let body = "$table->string('token'); $table->integer('attempts'); $table->text('token');";

        assert_eq!(
            summarize(&extract_columns(body)),
            vec![("token", "text", false), ("attempts", "integer", false)]
        );
    }

    #[test]
    fn double_quoted_names_are_accepted() {
        let source = r#"Schema::create("tags", function (Blueprint $table) { $table->string("label"); });"#;

        let ops = extract_operations(source);

        assert_eq!(
            ops,
            vec![Operation::create_table(
                "tags",
                vec![ColumnDefinition::new("label", "string")]
            )]
        );
    }

    #[test]
    fn nullable_marker_is_found_among_chained_modifiers() {
        let body = "$table->string('bio')->default('none')->nullable()->unique();";

        assert_eq!(summarize(&extract_columns(body)), vec![("bio", "string", true)]);
    }
}

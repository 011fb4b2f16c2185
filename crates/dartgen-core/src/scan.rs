//! Source text scanning.
//!
//! Definition files arrive as free-form PHP source. Extraction works
//! on a normalized form: comments stripped and whitespace runs
//! collapsed to single spaces, with quoted literals preserved
//! byte-for-byte. All scanning here is quote-aware, so braces,
//! semicolons and comment markers inside string literals never count
//! as structure.

use std::str::CharIndices;

/// Strips `//`, `#` and `/* ... */` comments and collapses whitespace
/// runs to a single space.
///
/// Quoted literals pass through untouched, including backslash
/// escapes. Unterminated literals and block comments run to the end
/// of input rather than erroring.
#[must_use]
pub fn normalize(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                out.push(c);
                while let Some(inner) = chars.next() {
                    out.push(inner);
                    if inner == '\\' {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    } else if inner == c {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                while chars.next_if(|&n| n != '\n').is_some() {}
            }
            '#' => {
                while chars.next_if(|&n| n != '\n').is_some() {}
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                while let Some(inner) = chars.next() {
                    if inner == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        break;
                    }
                }
                push_space(&mut out);
            }
            c if c.is_whitespace() => push_space(&mut out),
            c => out.push(c),
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

fn push_space(out: &mut String) {
    if !out.is_empty() && !out.ends_with(' ') {
        out.push(' ');
    }
}

/// Finds the `}` matching the `{` at byte offset `open`.
///
/// Tracks nesting depth and skips quoted literals, so nested closures
/// and braces inside strings do not end the scan early. Returns the
/// byte offset of the matching brace, or `None` when `open` is not a
/// `{` or the text ends first.
#[must_use]
pub fn matching_brace(text: &str, open: usize) -> Option<usize> {
    if !text[open..].starts_with('{') {
        return None;
    }
    let mut depth = 0usize;
    let mut chars = text[open..].char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            '\'' | '"' => skip_quoted(&mut chars, c),
            _ => {}
        }
    }
    None
}

/// Splits a closure body into `;`-terminated statement units.
///
/// Terminators inside quoted literals or nested brackets do not
/// split. Units are trimmed and empty units dropped; a trailing
/// unterminated unit is kept.
#[must_use]
pub fn split_statements(body: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            '\'' | '"' => skip_quoted(&mut chars, c),
            ';' if depth == 0 => {
                let unit = body[start..i].trim();
                if !unit.is_empty() {
                    units.push(unit);
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    let tail = body[start..].trim();
    if !tail.is_empty() {
        units.push(tail);
    }
    units
}

/// Consumes characters up to and including the closing quote,
/// honoring backslash escapes.
pub(crate) fn skip_quoted(chars: &mut CharIndices<'_>, quote: char) {
    while let Some((_, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            c if c == quote => return,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_strips_comments_and_collapses_whitespace() {
        let source = "Schema::create('users', // inline\n    function (Blueprint $table) {\n        # hash style\n        /* block\n           comment */\n        $table->string('name');\n    });";
        assert_eq!(
            normalize(source),
            "Schema::create('users', function (Blueprint $table) { $table->string('name'); });"
        );
    }

    #[test]
    fn normalize_preserves_quoted_literals() {
        assert_eq!(
            normalize("$table->string('with // not a comment');"),
            "$table->string('with // not a comment');"
        );
        assert_eq!(
            normalize(r"$table->string('it\'s  quoted');"),
            r"$table->string('it\'s  quoted');"
        );
    }

    #[test]
    fn normalize_handles_unterminated_literals() {
        assert_eq!(normalize("before 'never closed"), "before 'never closed");
        assert_eq!(normalize("before /* never closed"), "before");
    }

    #[test]
    fn matching_brace_tracks_nesting() {
        let text = "{ a { b } c } tail";
        assert_eq!(matching_brace(text, 0), Some(12));
    }

    #[test]
    fn matching_brace_ignores_braces_in_strings() {
        let text = "{ $table->string('}'); }";
        assert_eq!(matching_brace(text, 0), Some(text.len() - 1));
    }

    #[test]
    fn matching_brace_rejects_bad_input() {
        assert_eq!(matching_brace("{ never closed", 0), None);
        assert_eq!(matching_brace("not a brace", 0), None);
    }

    #[test]
    fn split_statements_on_top_level_terminators() {
        let body = "$table->increments('id'); $table->string('name'); ";
        assert_eq!(
            split_statements(body),
            vec!["$table->increments('id')", "$table->string('name')"]
        );
    }

    #[test]
    fn split_statements_ignores_terminators_in_literals_and_brackets() {
        let body = "$table->string('a;b'); $table->custom(['x;y', 'z']); tail()";
        assert_eq!(
            split_statements(body),
            vec![
                "$table->string('a;b')",
                "$table->custom(['x;y', 'z'])",
                "tail()"
            ]
        );
    }

    #[test]
    fn split_statements_drops_empty_units() {
        assert_eq!(split_statements(" ; ;; "), Vec::<&str>::new());
    }
}

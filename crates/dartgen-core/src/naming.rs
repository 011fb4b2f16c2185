//! Identifier derivation for generated Dart code.

use inflector::Inflector;

/// Derives the Dart class name for a table: singular PascalCase.
#[must_use]
pub fn class_name(table: &str) -> String {
    table.to_singular().to_pascal_case()
}

/// Derives the Dart field name for a column: camelCase.
#[must_use]
pub fn field_name(column: &str) -> String {
    column.to_camel_case()
}

/// File name for a table's generated model.
#[must_use]
pub fn model_file_name(table: &str) -> String {
    format!("{}.dart", class_name(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_are_singular_pascal_case() {
        assert_eq!(class_name("users"), "User");
        assert_eq!(class_name("user_profiles"), "UserProfile");
        assert_eq!(class_name("categories"), "Category");
        assert_eq!(class_name("order"), "Order");
    }

    #[test]
    fn field_names_are_camel_case() {
        assert_eq!(field_name("created_at"), "createdAt");
        assert_eq!(field_name("email"), "email");
        assert_eq!(field_name("remember_token"), "rememberToken");
    }

    #[test]
    fn model_files_are_named_after_the_class() {
        assert_eq!(model_file_name("users"), "User.dart");
        assert_eq!(model_file_name("blog_posts"), "BlogPost.dart");
    }
}

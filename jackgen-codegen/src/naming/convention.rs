//! Naming conventions for target languages.

use super::NameStyle;

/// Language-specific naming conventions.
///
/// Defines how derived names are styled and how reserved words are handled.
/// Fixed names never pass through a convention.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a proposal into a type name (e.g., "line item" -> "LineItem")
    pub type_name: fn(&str) -> String,
    /// Transform a proposal into a field or method name
    pub member_name: fn(&str) -> String,
    /// Transform a proposal into an enum constant
    pub enum_case_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "_class")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Style a derived proposal into a valid identifier.
    pub fn style(&self, style: NameStyle, proposal: &str) -> String {
        let transformed = match style {
            NameStyle::Type => (self.type_name)(proposal),
            NameStyle::Member => (self.member_name)(proposal),
            NameStyle::EnumCase => (self.enum_case_name)(proposal),
        };
        let transformed = match transformed.chars().next() {
            None => "Empty".to_string(),
            Some(c) if c.is_ascii_digit() => format!("_{}", transformed),
            Some(_) => transformed,
        };
        self.safe_name(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use jackgen_core::{to_camel_case, to_pascal_case, to_upper_snake_case};

    use super::*;

    fn underscore(name: &str) -> String {
        format!("_{}", name)
    }

    const TEST_NAMING: NamingConvention = NamingConvention {
        type_name: to_pascal_case,
        member_name: to_camel_case,
        enum_case_name: to_upper_snake_case,
        reserved_words: &["class", "Object"],
        escape_reserved: underscore,
    };

    #[test]
    fn test_style() {
        assert_eq!(TEST_NAMING.style(NameStyle::Type, "line item"), "LineItem");
        assert_eq!(TEST_NAMING.style(NameStyle::Member, "get_user_id"), "getUserId");
        assert_eq!(TEST_NAMING.style(NameStyle::EnumCase, "in-progress"), "IN_PROGRESS");
    }

    #[test]
    fn test_style_escapes_reserved() {
        assert_eq!(TEST_NAMING.style(NameStyle::Member, "class"), "_class");
        assert_eq!(TEST_NAMING.style(NameStyle::Type, "object"), "_Object");
    }

    #[test]
    fn test_style_leading_digit_and_empty() {
        assert_eq!(TEST_NAMING.style(NameStyle::EnumCase, "2xl"), "_2XL");
        assert_eq!(TEST_NAMING.style(NameStyle::Member, "--"), "Empty");
    }
}

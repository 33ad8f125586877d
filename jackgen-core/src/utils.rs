//! Shared string helpers for naming generated identifiers.

/// Upper-case the first character and leave the rest untouched
/// (e.g., "class" -> "Class", "fooBar" -> "FooBar").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Split an identifier-ish string into words.
///
/// Any non-alphanumeric character separates words, and so does a
/// lowercase-or-digit to uppercase transition ("userId" -> ["user", "Id"]).
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if c.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
            && !current.is_empty()
        {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    let mut words = split_words(s).into_iter();
    let Some(first) = words.next() else {
        return String::new();
    };
    let mut result = decapitalize(&first);
    for word in words {
        result.push_str(&capitalize(&word));
    }
    result
}

/// Convert a string to UPPER_SNAKE_CASE (e.g., "in-progress" -> "IN_PROGRESS")
pub fn to_upper_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("class"), "Class");
        assert_eq!(capitalize("fooBar"), "FooBar");
        assert_eq!(capitalize("Enum"), "Enum");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("userId"), vec!["user", "Id"]);
        assert_eq!(split_words("first name"), vec!["first", "name"]);
        assert_eq!(split_words("a--b__c"), vec!["a", "b", "c"]);
        assert_eq!(split_words("v2Beta"), vec!["v2", "Beta"]);
        assert!(split_words("__").is_empty());
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("userId"), "UserId");
        assert_eq!(to_pascal_case("line-item"), "LineItem");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("get_user_id"), "getUserId");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_upper_snake_case() {
        assert_eq!(to_upper_snake_case("in-progress"), "IN_PROGRESS");
        assert_eq!(to_upper_snake_case("fooBar"), "FOO_BAR");
        assert_eq!(to_upper_snake_case("red"), "RED");
    }
}

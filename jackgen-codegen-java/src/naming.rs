//! Java-specific naming conventions.

use jackgen_codegen::NamingConvention;
use jackgen_core::{to_camel_case, to_pascal_case, to_upper_snake_case};

fn escape_java_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// Java naming conventions.
///
/// Besides the keywords, the reserved list holds the `java.lang` and
/// imported type names generated code refers to unqualified.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    type_name: to_pascal_case,
    member_name: to_camel_case,
    enum_case_name: to_upper_snake_case,
    reserved_words: &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
        "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
        "int", "interface", "long", "native", "new", "null", "package", "private", "protected",
        "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized",
        "this", "throw", "throws", "transient", "true", "try", "void", "volatile", "while",
        "Object", "Class", "System", "Long", "Double", "Boolean", "String", "List", "Map",
        "IOException", "JsonProperty", "JsonToken", "TypeReference",
    ],
    escape_reserved: escape_java_reserved,
};

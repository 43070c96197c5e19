//! Modifier transform table
//!
//! Maps the modifier part of a `$IDENT.MODIFIER$` token to a string transform.

use heck::{ToKebabCase, ToSnakeCase};

/// Represents a case transformation selected by a token modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    /// `UPPER`: every character upper-cased
    UpperCase,
    /// `LOWER`: every character lower-cased
    LowerCase,
    /// `PASCAL`: first character upper-cased, rest unchanged
    PascalCase,
    /// `CAMEL`: first character lower-cased, rest unchanged
    CamelCase,
    /// `NAME`: `PASCAL`, then everything but letters and digits removed
    Name,
    /// `SNAKE`: snake_case (e.g., my_project)
    SnakeCase,
    /// `KEBAB`: kebab-case (e.g., my-project)
    KebabCase,
}

impl CaseTransform {
    /// Every recognized transform
    pub const ALL: [CaseTransform; 7] = [
        CaseTransform::UpperCase,
        CaseTransform::LowerCase,
        CaseTransform::PascalCase,
        CaseTransform::CamelCase,
        CaseTransform::Name,
        CaseTransform::SnakeCase,
        CaseTransform::KebabCase,
    ];

    /// Look up the transform for a modifier name (case-sensitive)
    pub fn from_modifier(modifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.modifier() == modifier)
    }

    /// Modifier name as written in templates
    pub fn modifier(&self) -> &'static str {
        match self {
            CaseTransform::UpperCase => "UPPER",
            CaseTransform::LowerCase => "LOWER",
            CaseTransform::PascalCase => "PASCAL",
            CaseTransform::CamelCase => "CAMEL",
            CaseTransform::Name => "NAME",
            CaseTransform::SnakeCase => "SNAKE",
            CaseTransform::KebabCase => "KEBAB",
        }
    }

    /// Apply case transformation to a string
    ///
    /// The empty string maps to itself for every transform.
    pub fn apply(&self, input: &str) -> String {
        match self {
            CaseTransform::UpperCase => input.to_uppercase(),
            CaseTransform::LowerCase => input.to_lowercase(),
            CaseTransform::PascalCase => map_first_char(input, |c| c.to_uppercase().collect()),
            CaseTransform::CamelCase => map_first_char(input, |c| c.to_lowercase().collect()),
            CaseTransform::Name => CaseTransform::PascalCase
                .apply(input)
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect(),
            CaseTransform::SnakeCase => input.to_snake_case(),
            CaseTransform::KebabCase => input.to_kebab_case(),
        }
    }
}

/// Apply the transform named by `modifier`
///
/// Returns `None` for unknown modifiers; the caller then emits no token.
pub fn transform(value: &str, modifier: &str) -> Option<String> {
    CaseTransform::from_modifier(modifier).map(|t| t.apply(value))
}

fn map_first_char(input: &str, f: impl Fn(char) -> String) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let mut result = f(first);
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(transform("myProject", "UPPER").unwrap(), "MYPROJECT");
        assert_eq!(transform("MyProject", "LOWER").unwrap(), "myproject");
    }

    #[test]
    fn test_pascal_only_touches_first_char() {
        assert_eq!(transform("my_project", "PASCAL").unwrap(), "My_project");
        assert_eq!(transform("MyProject", "PASCAL").unwrap(), "MyProject");
    }

    #[test]
    fn test_camel_only_touches_first_char() {
        assert_eq!(transform("MyProject", "CAMEL").unwrap(), "myProject");
        assert_eq!(transform("HTTPServer", "CAMEL").unwrap(), "hTTPServer");
    }

    #[test]
    fn test_name_strips_non_alphanumerics() {
        assert_eq!(transform("my cool-type_2", "NAME").unwrap(), "Mycooltype2");
        assert_eq!(transform("__init__", "NAME").unwrap(), "init");
    }

    #[test]
    fn test_snake_and_kebab() {
        assert_eq!(transform("MyProject", "SNAKE").unwrap(), "my_project");
        assert_eq!(transform("MyProject", "KEBAB").unwrap(), "my-project");
    }

    #[test]
    fn test_empty_input_is_noop() {
        for t in CaseTransform::ALL {
            assert_eq!(t.apply(""), "", "{:?}", t);
        }
    }

    #[test]
    fn test_unknown_modifier() {
        assert!(transform("bob", "WEIRD").is_none());
        assert!(transform("bob", "upper").is_none());
        assert!(transform("bob", "").is_none());
    }

    #[test]
    fn test_modifier_names_round_trip() {
        for t in CaseTransform::ALL {
            assert_eq!(CaseTransform::from_modifier(t.modifier()), Some(t));
        }
    }

    #[test]
    fn test_non_ascii_first_char() {
        assert_eq!(transform("émile", "PASCAL").unwrap(), "Émile");
        assert_eq!(transform("ßtraße", "PASCAL").unwrap(), "SStraße");
    }
}

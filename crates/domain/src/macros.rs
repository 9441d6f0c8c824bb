//! Macro for implementing Display and FromStr for small domain enums
//!
//! This macro eliminates boilerplate for enum conversions by providing a
//! single implementation for both Display and FromStr traits. It handles
//! case-insensitive parsing and consistent string representation.
//!
//! # Example
//!
//! ```rust
//! use exitpass_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Morning,
//!     Evening,
//! }
//!
//! impl_domain_enum_conversions!(Shift {
//!     Morning => "morning",
//!     Evening => "evening",
//! });
//! ```

/// Implements Display and FromStr traits for domain enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(
                        ::std::format!("Invalid {}: {}", stringify!($enum_name), s),
                    ),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestKind {
        Class,
        Break,
    }

    impl_domain_enum_conversions!(TestKind {
        Class => "class",
        Break => "break",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestKind::Class.to_string(), "class");
        assert_eq!(TestKind::Break.to_string(), "break");
    }

    #[test]
    fn test_fromstr_mixed_case_and_whitespace() {
        assert_eq!(TestKind::from_str("Class").unwrap(), TestKind::Class);
        assert_eq!(TestKind::from_str(" BREAK ").unwrap(), TestKind::Break);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestKind::from_str("recess");
        assert!(result.unwrap_err().contains("Invalid TestKind: recess"));
        assert!(TestKind::from_str("").is_err());
    }

    mod with_domain_result_in_scope {
        use std::str::FromStr;

        #[allow(unused_imports)]
        use crate::errors::Result;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Shift {
            Morning,
            Evening,
        }

        impl_domain_enum_conversions!(Shift {
            Morning => "morning",
            Evening => "evening",
        });

        #[test]
        fn expands_next_to_the_one_parameter_result_alias() {
            assert_eq!(Shift::from_str("EVENING"), Ok(Shift::Evening));
            assert_eq!(Shift::Morning.to_string(), "morning");
        }
    }
}

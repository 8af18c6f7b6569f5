//! Macro for implementing Display and FromStr for wire enums
//!
//! Several payload fields are closed sets of strings on the server side
//! (subscription kind, schedule type, pull type). The macro maps each variant
//! to its exact wire spelling in both directions.
//!
//! # Example
//!
//! ```rust
//! use qinglong_domain::impl_wire_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Transport {
//!     Https,
//!     SshKey,
//! }
//!
//! impl_wire_conversions!(Transport {
//!     Https => "https",
//!     SshKey => "ssh-key",
//! });
//!
//! assert_eq!(Transport::SshKey.to_string(), "ssh-key");
//! assert_eq!("HTTPS".parse::<Transport>().unwrap(), Transport::Https);
//! ```

/// Implements Display and FromStr traits for wire enums
///
/// Parsing is case-insensitive; output always uses the given spelling.
#[macro_export]
macro_rules! impl_wire_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Wire spelling of this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::errors::QlError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::errors::QlError::Unsupported(format!(
                        "{} value: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.
//!
//! - [`error_codes!`]: closed code enum with `ALL`, `as_str`, `Display` and `FromStr`

/// Generate a fieldless code enum whose variants are named by their identifiers.
///
/// Each variant's stable name is its identifier, so the name used in logs,
/// JSON and `FromStr` never drifts from the Rust name.
///
/// ```ignore
/// error_codes! {
///     /// Failure categories.
///     pub enum Code {
///         /// First.
///         Foo,
///         Bar,
///     }
/// }
/// ```
macro_rules! error_codes {
    (
        $(#[$meta:meta])*
        pub enum $enum:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        pub enum $enum {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $enum {
            /// Every member, in declaration order.
            pub const ALL: &'static [$enum] = &[ $( $enum::$variant, )+ ];

            /// Stable name of the code.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }
        }

        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum {
            type Err = $crate::code::UnknownErrorCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( stringify!($variant) => Ok(Self::$variant), )+
                    other => Err($crate::code::UnknownErrorCode(other.to_string())),
                }
            }
        }
    };
}

pub(crate) use error_codes;

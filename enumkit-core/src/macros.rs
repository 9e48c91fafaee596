//! Declaration macro for enum types

/// Declare an enum type from named scalar constants.
///
/// Expands to a unit marker type, an [`EnumType`](crate::EnumType) impl
/// whose members follow declaration order, and one accessor function per
/// constant. Options can be overridden with a bracketed expression after
/// the type name.
///
/// Integer literals default to `i32`; suffix wider values (`5_000_000_000i64`).
///
/// # Example
/// ```
/// use enumkit_core::{scalar_enum, EnumOptions, EnumType};
///
/// scalar_enum! {
///     /// Order state.
///     pub struct OrderState {
///         OPEN = "open",
///         CLOSED = "closed",
///         ARCHIVED = 3,
///     }
/// }
///
/// scalar_enum! {
///     pub struct HttpCode [EnumOptions::loose()] {
///         OK = 200,
///         NOT_FOUND = 404,
///     }
/// }
///
/// assert_eq!(OrderState::keys(), vec!["OPEN", "CLOSED", "ARCHIVED"]);
/// assert_eq!(OrderState::OPEN().to_string(), "open");
/// assert!(HttpCode::is_valid(&"404".into()));
/// ```
#[macro_export]
macro_rules! scalar_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $([$options:expr])? {
            $($member:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        #[allow(non_snake_case, dead_code)]
        impl $name {
            $(
                #[doc = concat!("The `", stringify!($member), "` member.")]
                pub fn $member() -> $crate::EnumValue<$name> {
                    $crate::EnumValue::__declared(
                        stringify!($member),
                        $crate::Scalar::from($value),
                    )
                }
            )+
        }

        impl $crate::EnumType for $name {
            const NAME: &'static str = stringify!($name);

            fn declare() -> ::std::vec::Vec<(&'static str, $crate::Scalar)> {
                ::std::vec![
                    $((stringify!($member), $crate::Scalar::from($value))),+
                ]
            }

            $(
                fn options() -> $crate::EnumOptions {
                    $options
                }
            )?
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================

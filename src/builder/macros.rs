//! Macros for declaring caller-defined error kinds.

/// Declare a unit struct carrying custom [`ValidationError`](crate::core::ValidationError)
/// kinds as associated constants.
///
/// The kind identifier is the constant's name.
///
/// # Example
///
/// ```
/// use textrules::error_catalog;
///
/// error_catalog! {
///     pub struct MyErrors {
///         NO_SPACES => "Text must have spaces",
///         NO_DATE => "Inserted text must be a date",
///     }
/// }
///
/// assert_eq!(MyErrors::NO_SPACES.kind(), "NO_SPACES");
/// assert_eq!(MyErrors::NO_DATE.to_string(), "Inserted text must be a date");
/// assert_eq!(MyErrors::all().len(), 2);
/// ```
#[macro_export]
macro_rules! error_catalog {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$kind_meta:meta])*
                $kind:ident => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        $vis struct $name;

        impl $name {
            $(
                $(#[$kind_meta])*
                pub const $kind: $crate::core::ValidationError =
                    $crate::core::ValidationError::new_static(stringify!($kind), $message);
            )*

            /// Every kind declared in this catalog, in declaration order.
            pub fn all() -> ::std::vec::Vec<$crate::core::ValidationError> {
                ::std::vec![$(Self::$kind),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::ValidationError;

    error_catalog! {
        struct TestErrors {
            NO_SPACES => "Text must have spaces",
            /// Documented kind
            NO_DATE => "Inserted text must be a date",
        }
    }

    #[test]
    fn error_catalog_generates_constants() {
        assert_eq!(TestErrors::NO_SPACES.kind(), "NO_SPACES");
        assert_eq!(TestErrors::NO_SPACES.message(), "Text must have spaces");
        assert_eq!(
            TestErrors::NO_DATE,
            ValidationError::new("NO_DATE", "Inserted text must be a date")
        );
    }

    #[test]
    fn error_catalog_lists_all_in_order() {
        assert_eq!(
            TestErrors::all(),
            vec![TestErrors::NO_SPACES, TestErrors::NO_DATE]
        );
    }

    #[test]
    fn error_catalog_supports_visibility() {
        error_catalog! {
            pub struct PublicErrors {
                ONE => "one",
            }
        }

        assert_eq!(PublicErrors::all().len(), 1);
    }

    #[test]
    fn error_catalog_works_empty() {
        error_catalog! {
            struct NoErrors {}
        }

        assert!(NoErrors::all().is_empty());
    }
}

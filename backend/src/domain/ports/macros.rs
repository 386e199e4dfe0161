//! Helper macro for generating domain port error enums.
//!
//! Each variant gets a snake-case constructor whose parameters accept
//! `impl Into<T>`, so call sites can pass `&str` for `String` fields.
//! Variant fields may carry doc comments.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            /// Construct this variant.
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            /// Construct this variant.
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( {
                    $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
                } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $( $(#[$field_meta])* $field : $ty ),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::UserId;

    define_port_error! {
        pub enum SamplePortError {
            Unit => "unit failure",
            Missing {
                /// Identifier that was looked up.
                id: UserId,
            } => "missing {id}",
            Rejected { reason: String, attempts: u32 } => "rejected: {reason} after {attempts}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(SamplePortError::unit(), SamplePortError::Unit);
        assert_eq!(SamplePortError::unit().to_string(), "unit failure");
    }

    #[test]
    fn constructors_convert_via_into() {
        let err = SamplePortError::missing(7_i64);
        assert_eq!(err, SamplePortError::Missing { id: UserId::new(7) });
        assert_eq!(err.to_string(), "missing 7");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = SamplePortError::rejected("busy", 3_u32);
        assert_eq!(err.to_string(), "rejected: busy after 3");
    }
}

//! Helper macro for declaring driven-port error enums.
//!
//! Each variant gets a snake-case constructor whose `String` fields accept
//! anything `Into<String>`, plus a `kind()` accessor returning the same
//! snake-case name for structured log fields.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[must_use]
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
            #[must_use]
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
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Snake-case name of the variant.
            #[must_use]
            pub fn kind(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant { .. } => ::paste::paste! { stringify!([<$variant:snake>]) },
                    )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unavailable => "store unavailable",
            Timeout { seconds: u32 } => "timed out after {seconds}s",
            Rejected { message: String, status: u16 } => "rejected ({status}): {message}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        let err = SamplePortError::unavailable();
        assert_eq!(err.to_string(), "store unavailable");
        assert_eq!(err.kind(), "unavailable");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = SamplePortError::timeout(5_u32);
        assert_eq!(err.to_string(), "timed out after 5s");
        assert_eq!(err.kind(), "timeout");
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SamplePortError::rejected("quota", 429_u16);
        assert_eq!(err.to_string(), "rejected (429): quota");
        assert_eq!(err.kind(), "rejected");
    }
}

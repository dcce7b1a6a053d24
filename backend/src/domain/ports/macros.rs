//! Declarative builder for persistence error enums.
//!
//! Every variant carries the adapter's `message`; the macro derives the
//! `Display` text from a fixed prefix, a snake_case constructor per variant
//! and a shared [`message`](#method.message) accessor.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $prefix:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{prefix}: {message}", prefix = $prefix)]
                $variant { message: String },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build a `", stringify!($variant), "` error.")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                }
            )+

            /// Detail reported by the adapter.
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } => message, )+
                }
            }
        }
    };
}

pub(crate) use define_port_error;

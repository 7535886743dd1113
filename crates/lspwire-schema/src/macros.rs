//! Declarative helpers shared by the schema modules.

/// Declares an integer-valued protocol enumeration.
///
/// The protocol lets peers send values this crate does not know about, so the
/// type is an open newtype over the wire integer with one associated constant
/// per known value. `Display` and `Debug` print the protocol name of known
/// values and the raw number otherwise.
macro_rules! lsp_enum {
    (
        $(#[$meta:meta])*
        pub struct $typ:ident($repr:ty) {
            $(
                $(#[$attr:meta])*
                $name:ident = $value:literal => $label:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $typ($repr);

        impl $typ {
            $(
                $(#[$attr])*
                pub const $name: Self = Self($value);
            )*

            /// Wraps a raw wire value.
            #[must_use]
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            /// Returns the raw wire value.
            #[must_use]
            pub const fn value(self) -> $repr {
                self.0
            }

            /// Returns the protocol name for known values.
            #[must_use]
            pub const fn name(self) -> Option<&'static str> {
                match self {
                    $(Self::$name => Some($label),)*
                    _ => None,
                }
            }
        }

        impl From<$repr> for $typ {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<$typ> for $repr {
            fn from(value: $typ) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $typ {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.name() {
                    Some(name) => formatter.write_str(name),
                    None => write!(formatter, "{}", self.0),
                }
            }
        }

        impl std::fmt::Debug for $typ {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.name() {
                    Some(name) => formatter.write_str(name),
                    None => write!(formatter, "{}({})", stringify!($typ), self.0),
                }
            }
        }
    };
}

pub(crate) use lsp_enum;

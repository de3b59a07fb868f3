// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Declarative enum generation.
//!
//! [`mav_enum!`] expands one enum declaration into an open newtype over its
//! wire integer, associated constants for every declared entry, an
//! [`EnumMeta`](crate::schema::EnumMeta) descriptor, and a
//! [`WireScalar`](crate::wire::WireScalar) impl at the declared width.
//!
//! The newtype is open on purpose: decoding stores whatever raw value the
//! payload carries, including values declared by no entry, and re-encodes
//! it bit-exactly. Duplicate entry values are legal; value lookups resolve
//! to the first declared entry.

/// Generate an open enum newtype with metadata.
///
/// ```ignore
/// mav_enum! {
///     GpsFixType("GPS_FIX_TYPE", u8, "Type of GPS fix") {
///         GPS_FIX_TYPE_NO_GPS = 0, "No GPS connected";
///         GPS_FIX_TYPE_NO_FIX = 1, "No position information";
///     }
/// }
/// ```
///
/// Entries may append `params ["...", ...]` to document command parameters.
macro_rules! mav_enum {
    (
        $(#[$attr:meta])*
        $name:ident ($wire_name:literal, $repr:ty, $desc:literal) {
            $( $entry:ident = $value:expr, $edesc:literal $(, params [$($param:literal),* $(,)?])? ; )*
        }
    ) => {
        $(#[$attr])*
        #[doc = $desc]
        #[derive(
            Debug,
            Default,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            $(
                #[doc = $edesc]
                pub const $entry: Self = Self($value);
            )*

            /// Descriptor for this enum.
            pub const META: crate::schema::EnumMeta = crate::schema::EnumMeta {
                name: $wire_name,
                description: $desc,
                entries: &[
                    $(
                        crate::schema::EnumEntryMeta {
                            name: stringify!($entry),
                            value: ($value) as u64,
                            description: $edesc,
                            params: &[$($($param),*)?],
                        },
                    )*
                ],
            };

            /// Wrap a raw wire value.
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            /// Raw wire value.
            pub const fn raw(self) -> $repr {
                self.0
            }

            /// Name of the first declared entry with this value, if any.
            pub fn name(self) -> Option<&'static str> {
                Self::META.entry_for_value(self.0 as u64).map(|e| e.name)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{name}"),
                    None => write!(f, "{}({})", $wire_name, self.0),
                }
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl crate::wire::WireScalar for $name {
            const KIND: crate::schema::FieldKind =
                <$repr as crate::wire::WireScalar>::KIND;
            const ENUM_NAME: Option<&'static str> = Some($wire_name);

            fn empty() -> Self {
                Self(0)
            }

            fn write(self, writer: &mut crate::wire::PayloadWriter) {
                <$repr as crate::wire::WireScalar>::write(self.0, writer);
            }

            fn read(cursor: &mut crate::wire::PayloadCursor<'_>) -> crate::Result<Self> {
                Ok(Self(<$repr as crate::wire::WireScalar>::read(cursor)?))
            }
        }
    };
}

pub(crate) use mav_enum;

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Declaration macro for message types.
//!
//! `mav_message!` turns one block per message into the typed struct,
//! its wire constants, the static field table feeding the registry and
//! the CLI, and the [`crate::messages::Message`] impl. Fields are
//! declared in wire order; the payload layout is exactly the
//! declaration order with no padding. A field whose wire name is not a
//! Rust identifier (`type`) is declared as `ident as "wire_name"`.

/// Resolve the wire name of a field: the explicit literal when one was
/// given, the Rust identifier otherwise.
macro_rules! wire_field_name {
    ($fname:ident) => {
        stringify!($fname)
    };
    ($fname:ident $wire:literal) => {
        $wire
    };
}

macro_rules! mav_message {
    ($(
        $(#[$attr:meta])*
        $msg_name:ident {
            id: $id:literal,
            name: $name:literal,
            crc_extra: $crc:literal,
            description: $mdesc:literal,
            fields: {
                $( $fname:ident $(as $wire:literal)? : $fty:ty = $fdesc:literal ),+ $(,)?
            } $(,)?
        }
    )+) => {
        $(
            $(#[$attr])*
            #[doc = $mdesc]
            #[derive(Debug, Clone, PartialEq)]
            pub struct $msg_name {
                $( #[doc = $fdesc] pub $fname: $fty, )+
            }

            impl $msg_name {
                pub const ID: u32 = $id;
                pub const NAME: &'static str = $name;
                pub const CRC_EXTRA: u8 = $crc;
                pub const ENCODED_LEN: usize =
                    0 $( + <$fty as $crate::wire::WireField>::COUNT
                        * <$fty as $crate::wire::WireField>::KIND.size() )+;

                pub const FIELDS: &'static [$crate::schema::FieldSpec] = &[
                    $(
                        $crate::schema::FieldSpec {
                            name: $crate::messages::macros::wire_field_name!($fname $($wire)?),
                            kind: <$fty as $crate::wire::WireField>::KIND,
                            count: <$fty as $crate::wire::WireField>::COUNT,
                            enum_name: <$fty as $crate::wire::WireField>::ENUM_NAME,
                            description: $fdesc,
                        },
                    )+
                ];

                pub const SPEC: $crate::schema::MessageSpec = $crate::schema::MessageSpec {
                    id: Self::ID,
                    name: Self::NAME,
                    crc_extra: Self::CRC_EXTRA,
                    encoded_len: Self::ENCODED_LEN,
                    description: $mdesc,
                    fields: Self::FIELDS,
                };
            }

            // Some field arrays are longer than derive(Default) supports.
            impl Default for $msg_name {
                fn default() -> Self {
                    Self {
                        $( $fname: <$fty as $crate::wire::WireField>::empty(), )+
                    }
                }
            }

            impl $crate::messages::Message for $msg_name {
                fn message_id(&self) -> u32 {
                    Self::ID
                }

                fn message_name(&self) -> &'static str {
                    Self::NAME
                }

                fn crc_extra(&self) -> u8 {
                    Self::CRC_EXTRA
                }

                fn encoded_len(&self) -> usize {
                    Self::ENCODED_LEN
                }

                fn spec(&self) -> &'static $crate::schema::MessageSpec {
                    &Self::SPEC
                }

                fn encode_payload(&self, writer: &mut $crate::wire::PayloadWriter) {
                    $( $crate::wire::WireField::write_to(&self.$fname, writer); )+
                }

                fn decode_payload(
                    &mut self,
                    cursor: &mut $crate::wire::PayloadCursor<'_>,
                ) -> $crate::Result<()> {
                    $( self.$fname = <$fty as $crate::wire::WireField>::read_from(cursor)?; )+
                    Ok(())
                }

                fn clone_boxed(&self) -> Box<dyn $crate::messages::Message> {
                    Box::new(self.clone())
                }

                fn as_any(&self) -> &dyn std::any::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                    self
                }
            }
        )+
    };
}

pub(crate) use mav_message;
pub(crate) use wire_field_name;

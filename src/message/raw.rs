//! Header field access shared by the builder and the read-only view.
//!
//! The length field in bytes 2..4 is the single source of truth for how far
//! a message has been built; nothing else tracks progress.

use byteorder::{ByteOrder, NetworkEndian};

use crate::definitions::{StunTransactionId, STUN_HEADER_SIZE, STUN_TRANSACTION_ID_SIZE};
use crate::header::{decode_message_type, StunClass, StunMethod};

/// Attribute section length from the header, padding included.
pub(super) fn attribute_length(message: &[u8]) -> u16 {
    NetworkEndian::read_u16(&message[2..4])
}

pub(super) fn set_attribute_length(message: &mut [u8], length: u16) {
    NetworkEndian::write_u16(&mut message[2..4], length);
}

pub(super) fn message_type(message: &[u8]) -> (StunClass, StunMethod) {
    decode_message_type([message[0], message[1]])
}

pub(super) fn transaction_id(message: &[u8]) -> StunTransactionId {
    let mut id = [0u8; STUN_TRANSACTION_ID_SIZE];
    id.copy_from_slice(&message[STUN_HEADER_SIZE - STUN_TRANSACTION_ID_SIZE..STUN_HEADER_SIZE]);

    id
}

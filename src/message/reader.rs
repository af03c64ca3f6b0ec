use byteorder::{ByteOrder, NetworkEndian};

use super::errors::MessageRefError;
use super::raw;
use crate::attribute::{pad_len, AttributeType};
use crate::definitions::{
    StunTransactionId, STUN_ATTRIBUTE_HEADER_SIZE, STUN_HEADER_SIZE, STUN_MAGIC_COOKIE,
};
use crate::header::{StunClass, StunMethod};

/// Read-only view over the bytes of a received STUN message.
///
/// This is not a parser: it exposes just the header fields and raw attribute
/// TLVs the response initializers need. Integrity and fingerprint
/// verification, attribute decoding and credential checks belong to the
/// symmetric validator on the receive path.
#[derive(Debug, Copy, Clone)]
pub struct MessageRef<'a> {
    bytes: &'a [u8],
}

impl<'a> MessageRef<'a> {
    /// Wraps a byte slice, checking that it starts with a plausible STUN
    /// header: room for the fixed fields, the magic cookie in place, and a
    /// length field consistent with the slice.
    pub fn new(bytes: &'a [u8]) -> Result<Self, MessageRefError> {
        if bytes.len() < STUN_HEADER_SIZE {
            return Err(MessageRefError::BufferTooShort(bytes.len()));
        }

        if bytes[4..8] != STUN_MAGIC_COOKIE {
            return Err(MessageRefError::MagicCookieMismatch);
        }

        let declared = raw::attribute_length(bytes) as usize;
        let available = bytes.len() - STUN_HEADER_SIZE;
        if declared > available {
            return Err(MessageRefError::TruncatedMessage {
                declared,
                available,
            });
        }

        Ok(MessageRef { bytes })
    }

    /// Message class decoded from the type field.
    pub fn class(&self) -> StunClass {
        raw::message_type(self.bytes).0
    }

    /// Message method decoded from the type field.
    pub fn method(&self) -> StunMethod {
        raw::message_type(self.bytes).1
    }

    /// The 12-byte transaction id.
    pub fn transaction_id(&self) -> StunTransactionId {
        raw::transaction_id(self.bytes)
    }

    /// Attribute section length from the header, padding included.
    pub fn attribute_length(&self) -> u16 {
        raw::attribute_length(self.bytes)
    }

    /// Total message length: header plus attribute section.
    pub fn message_len(&self) -> usize {
        STUN_HEADER_SIZE + self.attribute_length() as usize
    }

    /// Iterates the raw attribute TLVs in wire order.
    pub fn attributes(&self) -> AttributeIter<'a> {
        AttributeIter {
            attributes: &self.bytes[STUN_HEADER_SIZE..self.message_len()],
            offset: 0,
        }
    }

    /// Comprehension-required attribute types this implementation does not
    /// recognize, deduplicated in order of first appearance. A non-empty
    /// result is what obliges a server to answer with error 420.
    pub fn unknown_attributes(&self) -> Vec<u16> {
        let mut unknown: Vec<u16> = Vec::new();

        for (attr_type, _) in self.attributes() {
            if AttributeType::is_comprehension_required(attr_type)
                && AttributeType::from_code(attr_type).is_none()
                && !unknown.contains(&attr_type)
            {
                unknown.push(attr_type);
            }
        }

        unknown
    }
}

/// Iterator over raw attribute TLVs, yielding `(type, value)` pairs.
///
/// Iteration stops at the first attribute whose declared value length runs
/// past the attribute section.
#[derive(Debug, Clone)]
pub struct AttributeIter<'a> {
    attributes: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for AttributeIter<'a> {
    type Item = (u16, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset + STUN_ATTRIBUTE_HEADER_SIZE > self.attributes.len() {
            return None;
        }

        let attr_type = NetworkEndian::read_u16(&self.attributes[self.offset..]);
        let value_len = NetworkEndian::read_u16(&self.attributes[self.offset + 2..]) as usize;
        let value_start = self.offset + STUN_ATTRIBUTE_HEADER_SIZE;

        if value_start + value_len > self.attributes.len() {
            return None;
        }

        let value = &self.attributes[value_start..value_start + value_len];
        self.offset = value_start + value_len + pad_len(value_len);

        Some((attr_type, value))
    }
}

#[cfg(test)]
mod tests {
    use super::{MessageRef, MessageRefError};

    #[test]
    fn rejects_short_buffers() {
        assert_eq!(
            MessageRef::new(&[0u8; 12]).unwrap_err(),
            MessageRefError::BufferTooShort(12)
        );
    }

    #[test]
    fn rejects_wrong_cookie() {
        let bytes = [0u8; 20];

        assert_eq!(
            MessageRef::new(&bytes).unwrap_err(),
            MessageRefError::MagicCookieMismatch
        );
    }

    #[test]
    fn rejects_truncated_messages() {
        let mut bytes = [0u8; 20];
        bytes[4..8].copy_from_slice(&[0x21, 0x12, 0xa4, 0x42]);
        bytes[3] = 8; // declares 8 attribute bytes that are not there

        assert_eq!(
            MessageRef::new(&bytes).unwrap_err(),
            MessageRefError::TruncatedMessage {
                declared: 8,
                available: 0
            }
        );
    }
}

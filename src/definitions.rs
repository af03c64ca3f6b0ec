pub const STUN_MAGIC_COOKIE: [u8; 4] = [0x21, 0x12, 0xa4, 0x42];
pub const STUN_MAGIC_COOKIE_U32: u32 = 0x2112_a442;
pub const STUN_HEADER_SIZE: usize = 20;
pub const STUN_ATTRIBUTE_HEADER_SIZE: usize = 4;
pub const STUN_FINGERPRINT_ATTR_SIZE: usize = 8;
pub const STUN_INTEGRITY_ATTR_SIZE: usize = 24;
pub const STUN_TRANSACTION_ID_SIZE: usize = 12;
/// Largest buffer prefix the builder will address. Keeps the attribute
/// section length representable in the 16-bit header field.
pub const STUN_MAX_MESSAGE_SIZE: usize = 0xffff - STUN_HEADER_SIZE;
/// Attribute padding filler. Legacy STUN implementations expect non-zero
/// padding to be ignored, so ASCII space is used rather than NUL.
pub const ATTRIBUTE_PADDING_BYTE: u8 = 0x20;
/// Value the FINGERPRINT CRC-32 is XORed with, per [RFC5389 Section 15.5](https://tools.ietf.org/html/rfc5389#section-15.5).
pub const STUN_FINGERPRINT_XOR: u32 = 0x5354_554e;
pub type StunTransactionId = [u8; STUN_TRANSACTION_ID_SIZE];

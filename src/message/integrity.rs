use crc::{crc32, Hasher32};
use hmac::{Hmac, Mac, NewMac};
use sha1::Sha1;

use super::raw;
use crate::definitions::{
    STUN_FINGERPRINT_ATTR_SIZE, STUN_FINGERPRINT_XOR, STUN_HEADER_SIZE, STUN_INTEGRITY_ATTR_SIZE,
};

/// Computes the MESSAGE-INTEGRITY HMAC-SHA1 according to [RFC5389](https://tools.ietf.org/html/rfc5389#section-15.4)
///
/// Called once both trailers are reserved, so the header length field already
/// counts the MESSAGE-INTEGRITY attribute (24 bytes) and the FINGERPRINT
/// attribute (8 bytes). Subtracting both yields the covered prefix: the
/// header plus every attribute preceding MESSAGE-INTEGRITY.
///
/// Arguments:
///
/// * `message`: Encoded message with the integrity and fingerprint slots reserved
/// * `key`: HMAC key to use (for short-term credentials, the password bytes)
pub(super) fn message_integrity_hash(message: &[u8], key: &[u8]) -> [u8; 20] {
    let attribute_length = raw::attribute_length(message) as usize;
    debug_assert!(
        attribute_length >= STUN_INTEGRITY_ATTR_SIZE + STUN_FINGERPRINT_ATTR_SIZE,
        "integrity and fingerprint slots must be reserved before signing"
    );

    let covered =
        STUN_HEADER_SIZE + attribute_length - STUN_INTEGRITY_ATTR_SIZE - STUN_FINGERPRINT_ATTR_SIZE;

    let mut mac = Hmac::<Sha1>::new_from_slice(key).expect("HMAC-SHA1 accepts keys of any length");
    mac.update(&message[..covered]);

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&mac.finalize().into_bytes());

    hash
}

/// Calculates the CRC32 Fingerprint for the message according to [RFC5389](https://tools.ietf.org/html/rfc5389#section-15.5)
///
/// Arguments:
///
/// * `covered`: Encoded message up to, but excluding, the fingerprint payload
pub(super) fn fingerprint(covered: &[u8]) -> u32 {
    let mut crc = crc32::Digest::new(crc32::IEEE);
    crc.write(covered);

    crc.sum32() ^ STUN_FINGERPRINT_XOR
}

use crate::address::StunAddress;
use crate::definitions::{
    StunTransactionId, ATTRIBUTE_PADDING_BYTE, STUN_MAGIC_COOKIE, STUN_MAGIC_COOKIE_U32,
};

/// Number of padding bytes required to bring an attribute value of `len`
/// bytes to the next 4-byte boundary.
pub fn pad_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Fills an attribute padding slot with the filler value.
pub(crate) fn write_padding(target: &mut [u8]) {
    for byte in target {
        *byte = ATTRIBUTE_PADDING_BYTE;
    }
}

/// XORs a u8 slice
pub(crate) fn xor_byte_range(target: &mut [u8], xor: &[u8]) {
    // Make sure the target slice size is matching or bigger than the xor slice size.
    std::debug_assert!(
        target.len() <= xor.len(),
        "Target size is bigger than the XOR slice size. Target: {}, XOR: {}.",
        target.len(),
        xor.len()
    );

    target
        .iter_mut()
        .zip(xor.iter())
        .for_each(|(x1, x2)| *x1 ^= *x2);
}

/// Applies the [RFC5389 Section 15.2](https://tools.ietf.org/html/rfc5389#section-15.2)
/// XOR transform: the port is XORed with the most significant 16 bits of the
/// magic cookie; IPv4 address bytes with the cookie; IPv6 address bytes with
/// the concatenation of cookie and transaction id.
///
/// The transform is its own inverse, so the symmetric parser undoes it by
/// applying it again.
pub(crate) fn xor_address(address: &StunAddress, transaction_id: &StunTransactionId) -> StunAddress {
    let xored_port = |port: u16| port ^ (STUN_MAGIC_COOKIE_U32 >> 16) as u16;

    match *address {
        StunAddress::V4 { addr, port } => StunAddress::V4 {
            addr: addr ^ STUN_MAGIC_COOKIE_U32,
            port: xored_port(port),
        },
        StunAddress::V6 { mut addr, port } => {
            xor_byte_range(&mut addr[0..4], &STUN_MAGIC_COOKIE);
            xor_byte_range(&mut addr[4..16], transaction_id);

            StunAddress::V6 {
                addr,
                port: xored_port(port),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{pad_len, xor_address};
    use crate::address::StunAddress;

    #[test]
    fn pad_len_reaches_boundary() {
        for len in 0..=16 {
            let padding = pad_len(len);

            assert!(padding <= 3);
            assert_eq!((len + padding) % 4, 0);
        }
    }

    #[test]
    fn xor_transform_is_an_involution() {
        let transaction_id = [0x77; 12];
        let v4 = StunAddress::from_ipv4_str("198.51.100.4", 40000).unwrap();
        let v6 = StunAddress::from_ipv6([0xfe; 16], 40000);

        assert_eq!(xor_address(&xor_address(&v4, &transaction_id), &transaction_id), v4);
        assert_eq!(xor_address(&xor_address(&v6, &transaction_id), &transaction_id), v6);
    }

    #[test]
    fn xor_transform_ipv4_values() {
        let address = StunAddress::from_ipv4(0xc000_0201, 0x8055);
        let xored = xor_address(&address, &[0u8; 12]);

        assert_eq!(xored, StunAddress::from_ipv4(0xe112_a643, 0xa147));
    }
}

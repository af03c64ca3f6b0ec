use byteorder::{ByteOrder, NetworkEndian};

use super::error_code::{reason_phrase, StunErrorCode};
use super::errors::BuilderError;
use super::integrity::{fingerprint, message_integrity_hash};
use super::raw;
use super::reader::MessageRef;
use crate::address::StunAddress;
use crate::attribute::utils::{pad_len, write_padding, xor_address};
use crate::attribute::AttributeType;
use crate::definitions::{
    StunTransactionId, STUN_ATTRIBUTE_HEADER_SIZE, STUN_HEADER_SIZE, STUN_INTEGRITY_ATTR_SIZE,
    STUN_MAGIC_COOKIE, STUN_MAX_MESSAGE_SIZE,
};
use crate::header::{encode_message_type, StunClass, StunMethod};
use crate::utils::generate_transaction_id;

/// Credential bundle consumed by [`MessageBuilder::finish_long`].
///
/// `key` is the raw HMAC key; for short-term credentials this is the password
/// bytes, for long-term credentials the caller derives it first (key policy
/// is not this crate's business).
#[derive(Debug, Default, Copy, Clone)]
pub struct Credentials<'a> {
    /// REALM attribute value
    pub realm: Option<&'a str>,
    /// USERNAME attribute value
    pub username: Option<&'a str>,
    /// MESSAGE-INTEGRITY HMAC key
    pub key: Option<&'a [u8]>,
    /// NONCE attribute value
    pub nonce: Option<&'a [u8]>,
}

/// In-place STUN message builder over a caller-owned buffer.
///
/// The builder writes the [RFC5389](https://tools.ietf.org/html/rfc5389)
/// wire format directly into the borrowed buffer; the header's length field
/// is the only record of progress, so a finished message is simply the
/// buffer's prefix of the returned length. The slice length is the declared
/// maximum message size, capped at [`STUN_MAX_MESSAGE_SIZE`].
///
/// Appenders reserve room for the MESSAGE-INTEGRITY trailer on every call,
/// which keeps the error model simple: appends can fail with
/// [`BuilderError::NoBufferSpace`], the `finish` family will not once the
/// attributes fit.
#[derive(Debug)]
pub struct MessageBuilder<'a> {
    buffer: &'a mut [u8],
}

impl<'a> MessageBuilder<'a> {
    /// Initializes the buffer with a 20-byte header carrying the given
    /// class, method and transaction id. The attribute section starts empty.
    ///
    /// The buffer must hold at least a header; anything smaller is a
    /// programmer error.
    pub fn init(
        buffer: &'a mut [u8],
        class: StunClass,
        method: StunMethod,
        transaction_id: StunTransactionId,
    ) -> Self {
        assert!(
            buffer.len() >= STUN_HEADER_SIZE,
            "A {}-byte buffer cannot hold a STUN header.",
            buffer.len()
        );

        let message_type = encode_message_type(class, method);
        buffer[0] = message_type[0];
        buffer[1] = message_type[1];
        NetworkEndian::write_u16(&mut buffer[2..4], 0);
        buffer[4..8].copy_from_slice(&STUN_MAGIC_COOKIE);
        buffer[8..STUN_HEADER_SIZE].copy_from_slice(&transaction_id);

        MessageBuilder { buffer }
    }

    /// Starts a request with a freshly generated transaction id.
    pub fn init_request(buffer: &'a mut [u8], method: StunMethod) -> Self {
        Self::init(
            buffer,
            StunClass::Request,
            method,
            generate_transaction_id(),
        )
    }

    /// Starts the success response to `request`, echoing its method and
    /// transaction id. Only requests can be answered.
    pub fn init_response(buffer: &'a mut [u8], request: &MessageRef<'_>) -> Self {
        assert_eq!(
            request.class(),
            StunClass::Request,
            "Only requests take responses."
        );

        Self::init(
            buffer,
            StunClass::SuccessResponse,
            request.method(),
            request.transaction_id(),
        )
    }

    /// Starts the error response to `request` and appends the ERROR-CODE
    /// attribute for `code` with its cataloged reason phrase.
    pub fn init_error(
        buffer: &'a mut [u8],
        request: &MessageRef<'_>,
        code: impl Into<u16>,
    ) -> Result<Self, BuilderError> {
        assert_eq!(
            request.class(),
            StunClass::Request,
            "Only requests take responses."
        );

        let mut builder = Self::init(
            buffer,
            StunClass::ErrorResponse,
            request.method(),
            request.transaction_id(),
        );
        builder.append_error_code(code)?;

        Ok(builder)
    }

    /// Starts the 420 error response to `request`, listing every
    /// comprehension-required attribute the request carried that this
    /// implementation does not understand.
    pub fn init_error_unknown(
        buffer: &'a mut [u8],
        request: &MessageRef<'_>,
    ) -> Result<Self, BuilderError> {
        let unknown = request.unknown_attributes();

        let mut builder = Self::init_error(buffer, request, StunErrorCode::UnknownAttribute)?;
        builder.append_unknown_attributes(&unknown)?;

        Ok(builder)
    }

    /// Attribute section length so far, padding included.
    pub fn attribute_length(&self) -> u16 {
        raw::attribute_length(self.buffer)
    }

    /// The transaction id written at init time.
    pub fn transaction_id(&self) -> StunTransactionId {
        raw::transaction_id(self.buffer)
    }

    /// Reserves one attribute: writes its TLV header and padding, advances
    /// the running length, and returns the offset of the (uninitialized)
    /// value slot.
    ///
    /// The overflow check demands room for a worst-case MESSAGE-INTEGRITY
    /// trailer on top of the attribute itself, so a later `finish` cannot
    /// run out of space for the integrity slot once the appends succeeded.
    fn append(&mut self, attr_type: u16, length: usize) -> Result<usize, BuilderError> {
        let mlen = self.attribute_length() as usize;
        debug_assert_eq!(mlen % 4, 0, "running attribute length must stay aligned");
        debug_assert!(length < 0xffff);

        let mut msize = self.buffer.len();
        if msize > STUN_MAX_MESSAGE_SIZE {
            msize = STUN_MAX_MESSAGE_SIZE;
        }

        let padding = pad_len(length);
        let needed = mlen + STUN_INTEGRITY_ATTR_SIZE + length + padding;
        if needed > msize {
            return Err(BuilderError::NoBufferSpace {
                needed,
                available: msize,
            });
        }

        let attr_offset = STUN_HEADER_SIZE + mlen;
        let value_offset = attr_offset + STUN_ATTRIBUTE_HEADER_SIZE;
        NetworkEndian::write_u16(&mut self.buffer[attr_offset..], attr_type);
        NetworkEndian::write_u16(&mut self.buffer[attr_offset + 2..], length as u16);
        write_padding(&mut self.buffer[value_offset + length..value_offset + length + padding]);

        raw::set_attribute_length(
            self.buffer,
            (mlen + STUN_ATTRIBUTE_HEADER_SIZE + length + padding) as u16,
        );

        Ok(value_offset)
    }

    /// Appends an attribute whose value is a verbatim copy of `data`.
    pub fn append_bytes(
        &mut self,
        attr_type: impl Into<u16>,
        data: &[u8],
    ) -> Result<(), BuilderError> {
        let offset = self.append(attr_type.into(), data.len())?;
        self.buffer[offset..offset + data.len()].copy_from_slice(data);

        Ok(())
    }

    /// Appends a zero-length flag attribute.
    pub fn append_flag(&mut self, attr_type: impl Into<u16>) -> Result<(), BuilderError> {
        self.append(attr_type.into(), 0).map(|_| ())
    }

    /// Appends a 32-bit attribute, written big-endian.
    pub fn append_u32(&mut self, attr_type: impl Into<u16>, value: u32) -> Result<(), BuilderError> {
        let mut bytes = [0u8; 4];
        NetworkEndian::write_u32(&mut bytes, value);

        self.append_bytes(attr_type, &bytes)
    }

    /// Appends a 64-bit attribute, written big-endian.
    pub fn append_u64(&mut self, attr_type: impl Into<u16>, value: u64) -> Result<(), BuilderError> {
        let mut bytes = [0u8; 8];
        NetworkEndian::write_u64(&mut bytes, value);

        self.append_bytes(attr_type, &bytes)
    }

    /// Appends a string attribute: the str bytes as-is, no terminator.
    pub fn append_string(
        &mut self,
        attr_type: impl Into<u16>,
        value: &str,
    ) -> Result<(), BuilderError> {
        self.append_bytes(attr_type, value.as_bytes())
    }

    /// Appends a MAPPED-ADDRESS-style attribute: a zero byte, the address
    /// family (1 = IPv4, 2 = IPv6), the port and the address bytes, all in
    /// network byte order.
    pub fn append_address(
        &mut self,
        attr_type: impl Into<u16>,
        address: &StunAddress,
    ) -> Result<(), BuilderError> {
        match *address {
            StunAddress::V4 { addr, port } => {
                let mut value = [0u8; 8];
                value[1] = address.family();
                NetworkEndian::write_u16(&mut value[2..4], port);
                NetworkEndian::write_u32(&mut value[4..8], addr);

                self.append_bytes(attr_type, &value)
            }
            StunAddress::V6 { addr, port } => {
                let mut value = [0u8; 20];
                value[1] = address.family();
                NetworkEndian::write_u16(&mut value[2..4], port);
                value[4..20].copy_from_slice(&addr);

                self.append_bytes(attr_type, &value)
            }
        }
    }

    /// Appends an XOR-MAPPED-ADDRESS-style attribute: the address is first
    /// obfuscated with the magic cookie and this message's transaction id
    /// per [RFC5389 Section 15.2](https://tools.ietf.org/html/rfc5389#section-15.2),
    /// then encoded like [`MessageBuilder::append_address`].
    pub fn append_xor_address(
        &mut self,
        attr_type: impl Into<u16>,
        address: &StunAddress,
    ) -> Result<(), BuilderError> {
        let transformed = xor_address(address, &self.transaction_id());

        self.append_address(attr_type, &transformed)
    }

    /// Appends the ERROR-CODE attribute: two zero bytes, the hundreds class,
    /// the remainder, and the cataloged reason phrase without terminator.
    pub fn append_error_code(&mut self, code: impl Into<u16>) -> Result<(), BuilderError> {
        let code = code.into();
        if !(300..=699).contains(&code) {
            return Err(BuilderError::ErrorCodeOutOfRange(code));
        }

        let reason = reason_phrase(code).as_bytes();
        let offset = self.append(AttributeType::ErrorCode.into(), 4 + reason.len())?;

        let value = &mut self.buffer[offset..offset + 4 + reason.len()];
        value[0] = 0;
        value[1] = 0;
        value[2] = (code / 100) as u8;
        value[3] = (code % 100) as u8;
        value[4..].copy_from_slice(reason);

        Ok(())
    }

    /// Appends the UNKNOWN-ATTRIBUTES attribute: each attribute type as a
    /// big-endian u16, back-to-back.
    pub fn append_unknown_attributes(&mut self, types: &[u16]) -> Result<(), BuilderError> {
        let offset = self.append(AttributeType::UnknownAttributes.into(), 2 * types.len())?;

        for (idx, attr_type) in types.iter().enumerate() {
            NetworkEndian::write_u16(&mut self.buffer[offset + 2 * idx..], *attr_type);
        }

        Ok(())
    }

    /// Closes the message with long-term-style credentials.
    ///
    /// Appends, in this fixed order: REALM, USERNAME and NONCE when present;
    /// a zeroed 20-byte MESSAGE-INTEGRITY slot when a key is present; the
    /// FINGERPRINT slot. Then fills MESSAGE-INTEGRITY with the HMAC-SHA1
    /// over the preceding bytes and seals the message with the CRC-32
    /// fingerprint of everything before the fingerprint payload.
    ///
    /// Returns the total message length. On failure the buffer may hold the
    /// partial writes made so far, but no length is reported.
    pub fn finish_long(mut self, credentials: &Credentials<'_>) -> Result<usize, BuilderError> {
        if let Some(realm) = credentials.realm {
            self.append_string(AttributeType::Realm, realm)?;
        }
        if let Some(username) = credentials.username {
            self.append_string(AttributeType::Username, username)?;
        }
        if let Some(nonce) = credentials.nonce {
            self.append_bytes(AttributeType::Nonce, nonce)?;
        }

        let integrity_offset = match credentials.key {
            Some(_) => {
                let offset = self.append(AttributeType::MessageIntegrity.into(), 20)?;
                // Zeroed until the covering HMAC is known
                for byte in &mut self.buffer[offset..offset + 20] {
                    *byte = 0;
                }

                Some(offset)
            }
            None => None,
        };

        let fingerprint_offset = self.append(AttributeType::Fingerprint.into(), 4)?;

        if let (Some(offset), Some(key)) = (integrity_offset, credentials.key) {
            let hash = message_integrity_hash(self.buffer, key);
            self.buffer[offset..offset + 20].copy_from_slice(&hash);
        }

        let crc = fingerprint(&self.buffer[..fingerprint_offset]);
        NetworkEndian::write_u32(&mut self.buffer[fingerprint_offset..], crc);

        Ok(STUN_HEADER_SIZE + self.attribute_length() as usize)
    }

    /// Closes the message with short-term credentials: the password bytes
    /// are the HMAC key and no REALM is written.
    pub fn finish_short(
        self,
        username: Option<&str>,
        password: Option<&str>,
        nonce: Option<&[u8]>,
    ) -> Result<usize, BuilderError> {
        self.finish_long(&Credentials {
            realm: None,
            username,
            key: password.map(str::as_bytes),
            nonce,
        })
    }

    /// Closes the message without credentials; only FINGERPRINT is added.
    pub fn finish(self) -> Result<usize, BuilderError> {
        self.finish_short(None, None, None)
    }
}

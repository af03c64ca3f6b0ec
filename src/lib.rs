//! An in-place STUN message builder for ICE agents.
//!
//! Messages are constructed according to [Session Traversal Utilities for NAT (STUN)](https://tools.ietf.org/html/rfc5389)
//! directly inside a caller-owned byte buffer: the 20-byte header first, then
//! TLV attributes padded to 32-bit boundaries, and finally the
//! MESSAGE-INTEGRITY and FINGERPRINT trailers computed over the exact bytes
//! already on the wire. The attribute codes an
//! [Interactive Connectivity Establishment (ICE)](https://tools.ietf.org/html/rfc8445)
//! agent needs are part of the registry, so PRIORITY, USE-CANDIDATE and the
//! role tiebreakers go through the generic appenders.
//!
//! The crate deliberately covers only the send path plus the few header
//! reads the response initializers need; full message validation is the
//! symmetric receive-path concern.
//!
//! ## Usage
//!
//! Building and sealing a Binding request with short-term credentials:
//!
//! ```
//! use stun_builder::{AttributeType, MessageBuilder, StunMethod};
//!
//! let mut buffer = [0u8; 256];
//!
//! let mut request = MessageBuilder::init_request(&mut buffer, StunMethod::BINDING);
//! request.append_u32(AttributeType::Priority, 0x6e7f_1eff)?;
//! let len = request.finish_short(Some("user"), Some("pass"), None)?;
//!
//! let packet = &buffer[..len]; // ready for the socket
//! # assert!(packet.len() > 20);
//! # Ok::<(), stun_builder::BuilderError>(())
//! ```
//!
//! Answering a request:
//!
//! ```
//! use stun_builder::{AttributeType, MessageBuilder, MessageRef, StunAddress, StunMethod};
//!
//! # let mut request_buffer = [0u8; 64];
//! # let request_len =
//! #     MessageBuilder::init_request(&mut request_buffer, StunMethod::BINDING).finish()?;
//! let request = MessageRef::new(&request_buffer[..request_len])?;
//!
//! let mut buffer = [0u8; 256];
//! let mut response = MessageBuilder::init_response(&mut buffer, &request);
//! let reflexive = StunAddress::from_ipv4_str("192.0.2.150", 32853)?;
//! response.append_xor_address(AttributeType::XorMappedAddress, &reflexive)?;
//! let len = response.finish()?;
//! # assert!(len > 20);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[macro_use]
extern crate num_derive;

mod address;
mod attribute;
mod definitions;
mod header;
mod message;
mod utils;

pub use address::{AddressError, StunAddress};
pub use attribute::{pad_len, AttributeType};
pub use definitions::{
    StunTransactionId, ATTRIBUTE_PADDING_BYTE, STUN_FINGERPRINT_XOR, STUN_HEADER_SIZE,
    STUN_MAGIC_COOKIE, STUN_MAGIC_COOKIE_U32, STUN_MAX_MESSAGE_SIZE,
};
pub use header::{StunClass, StunMethod};
pub use message::{
    reason_phrase, AttributeIter, BuilderError, Credentials, MessageBuilder, MessageRef,
    MessageRefError, StunErrorCode,
};
pub use utils::generate_transaction_id;

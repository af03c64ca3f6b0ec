use num_traits::FromPrimitive;

/// Readable representation of STUN attribute type codes.
///
/// The builder itself treats attribute types opaquely: every appender takes
/// `impl Into<u16>`, so raw codes pass through untouched. This registry names
/// the codes the builder writes on its own behalf plus the [RFC8445](https://tools.ietf.org/html/rfc8445)
/// attributes an ICE agent feeds through the generic appenders, and it doubles
/// as the "known" set for unknown-attribute discovery.
#[derive(Debug, Copy, Clone, Eq, PartialEq, FromPrimitive)]
pub enum AttributeType {
    MappedAddress = 0x0001,
    Username = 0x0006,
    MessageIntegrity = 0x0008,
    ErrorCode = 0x0009,
    UnknownAttributes = 0x000a,
    Realm = 0x0014,
    Nonce = 0x0015,
    XorMappedAddress = 0x0020,
    Priority = 0x0024,
    UseCandidate = 0x0025,
    Software = 0x8022,
    AlternateServer = 0x8023,
    Fingerprint = 0x8028,
    IceControlled = 0x8029,
    IceControlling = 0x802a,
}

impl AttributeType {
    /// Looks up a known attribute type by its wire code.
    pub fn from_code(code: u16) -> Option<Self> {
        FromPrimitive::from_u16(code)
    }

    /// Attributes with type values below 0x8000 are comprehension-required:
    /// a STUN agent cannot successfully process a message carrying one it
    /// does not understand.
    pub fn is_comprehension_required(code: u16) -> bool {
        code < 0x8000
    }
}

impl From<AttributeType> for u16 {
    fn from(attr_type: AttributeType) -> u16 {
        attr_type as u16
    }
}

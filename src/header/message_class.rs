#[derive(Debug, Copy, Clone, FromPrimitive, Ord, PartialOrd, Eq, PartialEq)]
/// [STUN message class](https://tools.ietf.org/html/rfc5389#section-6)
///
/// The message type defines the message class (request, success response,
/// failure response, or indication). The two class bits C1 and C0 are
/// interleaved with the method bits when the 16-bit message type field is
/// packed, so the discriminants here are the plain 2-bit values.
pub enum StunClass {
    /// STUN request
    Request = 0,
    /// STUN indication
    Indication = 1,
    /// STUN success response
    SuccessResponse = 2,
    /// STUN error response
    ErrorResponse = 3,
}

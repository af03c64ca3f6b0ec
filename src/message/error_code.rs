use num_traits::FromPrimitive;

/// STUN error codes with a cataloged reason phrase.
///
/// The numeric space is 300-699, consistent in its code assignments and
/// semantics with SIP and HTTP; the discriminants are the wire values carried
/// in the ERROR-CODE attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq, FromPrimitive)]
pub enum StunErrorCode {
    /// The client should contact an alternate server for this request.
    TryAlternate = 300,
    /// The request was malformed.
    BadRequest = 400,
    /// The request did not contain the correct credentials to proceed.
    Unauthorized = 401,
    /// The server received a comprehension-required attribute it did not understand.
    UnknownAttribute = 420,
    /// The credentials supplied with the request are no longer valid.
    StaleCredentials = 430,
    /// The username or password in the request did not verify.
    IntegrityCheckFailure = 431,
    /// The request lacked a USERNAME attribute required for authentication.
    MissingUsername = 432,
    /// The request must be sent over a secure connection.
    UseTls = 433,
    /// The request lacked a REALM attribute required for authentication.
    MissingRealm = 434,
    /// The request lacked a NONCE attribute required for authentication.
    MissingNonce = 435,
    /// The USERNAME supplied with the request is not known.
    UnknownUsername = 436,
    /// The NONCE supplied with the request is no longer valid.
    StaleNonce = 438,
    /// Both ICE agents believed they held the same role, see [RFC8445 Section 7.3.1.1](https://tools.ietf.org/html/rfc8445#section-7.3.1.1).
    RoleConflict = 487,
    /// The server suffered a temporary error; the client should try again.
    ServerError = 500,
    /// The server refused to fulfill the request; the client should not retry.
    GlobalFailure = 600,
}

impl From<StunErrorCode> for u16 {
    fn from(code: StunErrorCode) -> u16 {
        code as u16
    }
}

/// Canonical reason phrase for a STUN error code, as carried in the
/// ERROR-CODE attribute. Codes outside the catalog report `"Unknown error"`.
/// Every phrase fits the traditional 31-byte reason slot.
pub fn reason_phrase(code: u16) -> &'static str {
    match FromPrimitive::from_u16(code) {
        Some(StunErrorCode::TryAlternate) => "Try alternate server",
        Some(StunErrorCode::BadRequest) => "Bad request",
        Some(StunErrorCode::Unauthorized) => "Authorization required",
        Some(StunErrorCode::UnknownAttribute) => "Unknown attribute",
        Some(StunErrorCode::StaleCredentials) => "Authentication expired",
        Some(StunErrorCode::IntegrityCheckFailure) => "Incorrect username/password",
        Some(StunErrorCode::MissingUsername) => "Username required",
        Some(StunErrorCode::UseTls) => "Secure connection required",
        Some(StunErrorCode::MissingRealm) => "Authentication domain required",
        Some(StunErrorCode::MissingNonce) => "Authentication token missing",
        Some(StunErrorCode::UnknownUsername) => "Unknown user name",
        Some(StunErrorCode::StaleNonce) => "Authentication token expired",
        Some(StunErrorCode::RoleConflict) => "Role conflict",
        Some(StunErrorCode::ServerError) => "Temporary server error",
        Some(StunErrorCode::GlobalFailure) => "Unrecoverable failure",
        None => "Unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::{reason_phrase, StunErrorCode};

    #[test]
    fn cataloged_phrases() {
        assert_eq!(reason_phrase(300), "Try alternate server");
        assert_eq!(reason_phrase(401), "Authorization required");
        assert_eq!(reason_phrase(420), "Unknown attribute");
        assert_eq!(reason_phrase(487), "Role conflict");
        assert_eq!(reason_phrase(600), "Unrecoverable failure");
    }

    #[test]
    fn uncataloged_codes_fall_back() {
        assert_eq!(reason_phrase(299), "Unknown error");
        assert_eq!(reason_phrase(404), "Unknown error");
        assert_eq!(reason_phrase(699), "Unknown error");
    }

    #[test]
    fn phrases_fit_the_reason_slot() {
        for code in 300..700u16 {
            assert!(reason_phrase(code).len() <= 31);
        }
    }

    #[test]
    fn wire_values() {
        assert_eq!(u16::from(StunErrorCode::UnknownAttribute), 420);
        assert_eq!(u16::from(StunErrorCode::RoleConflict), 487);
    }
}

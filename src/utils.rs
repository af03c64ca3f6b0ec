use crate::definitions::StunTransactionId;
use rand::Rng;

/// Generates a random Transaction Id to be used in a STUN message
///
/// The [Transaction Id is a randomly selected 96-bit number](https://tools.ietf.org/html/rfc5389#section-3) represented here by StunTransactionId.
/// `thread_rng` is a CSPRNG, so ids issued for concurrent in-flight requests
/// are both unique and unpredictable without any process-wide shared state.
pub fn generate_transaction_id() -> StunTransactionId {
    let mut rng = rand::thread_rng();
    let buf: StunTransactionId = rng.gen();

    buf
}

use thiserror::Error;

/// Address construction errors.
#[derive(Error, Debug)]
pub enum AddressError {
    /// The provided string is not a dotted-quad IPv4 address.
    #[error("Not a valid dotted-quad IPv4 address: {value}.")]
    InvalidIpv4String {
        /// The string that failed to parse
        value: String,
    },
}

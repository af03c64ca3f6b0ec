mod builder;
mod error_code;
mod errors;
mod integrity;
mod raw;
mod reader;

pub use builder::{Credentials, MessageBuilder};
pub use error_code::{reason_phrase, StunErrorCode};
pub use errors::{BuilderError, MessageRefError};
pub use reader::{AttributeIter, MessageRef};

//! Educational implementation of the Sharemind three-party additive
//! secret-sharing scheme (Bogdanov, Laur, Willemson 2008) and the secure
//! computation protocols built on it: secure multiplication, binary-to-
//! arithmetic share conversion, shared random bit generation, carry
//! look-ahead bitwise addition, bit extraction and greater-than-equals.
//!
//! The three parties are simulated in a single address space; all share
//! arithmetic happens in the ring Z/2^n.

pub mod protocols;
pub mod sharing;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharemindError {
    #[error("value is out of bounds for the share ring")]
    OutOfRange,
    #[error("share triple is malformed")]
    BadShare,
    #[error("operand share sizes do not match")]
    SizeMismatch,
    #[error("share size must be a power of two")]
    SizeNotPowerOfTwo,
}

pub type Result<T> = std::result::Result<T, SharemindError>;

use num_bigint::BigInt;
use num_traits::One;
use rand::Rng;

use crate::protocols::bit_extract::extract_bits;
use crate::sharing::secret::Secret;
use crate::{Result, SharemindError};

/// Secure greater-than-equals: a sharing of 1 if x >= y, else of 0.
///
/// The ring is read as two's complement: x - y wraps into the top half of
/// the ring exactly when x < y, so the result is one minus the top bit of
/// the difference. Meaningful for inputs below 2^(size - 1).
pub fn gte<R: Rng>(x: &Secret, y: &Secret, rng: &mut R) -> Result<Secret> {
    if x.size() != y.size() {
        return Err(SharemindError::SizeMismatch);
    }

    let d = x.sub(y, rng)?;
    let d_bits = extract_bits(&d, rng)?;

    let one = Secret::from_value(&BigInt::one(), x.size(), rng)?;
    one.sub(&d_bits[x.size() - 1], rng)
}

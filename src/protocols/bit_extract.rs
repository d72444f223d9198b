use log::debug;
use nalgebra::DVector;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use rand::Rng;

use crate::protocols::binary::from_binary_shares;
use crate::protocols::bit_add::bitwise_add;
use crate::protocols::random_bits::random_number_and_bits;
use crate::sharing::secret::Secret;
use crate::{Result, SharemindError};

/// Extracts arithmetic sharings of the bits of x, little-endian.
///
/// x is masked with a shared random r before the difference is opened, so
/// the opened value is uniform and reveals nothing to any single party.
/// The bits of x are then recovered as x = (x - r) + r via bitwise
/// addition of the opened difference's bits with r's bit shares.
pub fn extract_bits<R: Rng>(x: &Secret, rng: &mut R) -> Result<Vec<Secret>> {
    let size = x.size();
    if !x.params().is_pow2() {
        return Err(SharemindError::SizeNotPowerOfTwo);
    }

    let (r, r_bits) = random_number_and_bits(size, rng)?;

    let a = x.sub(&r, rng)?;
    let a_value = a.reconstruct();
    debug!("opened masked difference {a_value}");

    let mut a_bits = Vec::with_capacity(size);
    for i in 0..size {
        let bit = (&a_value >> i) & BigInt::one();
        let triple = DVector::from_vec(vec![bit, BigInt::zero(), BigInt::zero()]);
        a_bits.push(from_binary_shares(triple, size, rng)?);
    }

    bitwise_add(&a_bits, &r_bits, rng)
}

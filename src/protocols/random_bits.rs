use nalgebra::DVector;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use rand::Rng;

use crate::protocols::binary::from_binary_shares;
use crate::sharing::random::random_bit;
use crate::sharing::secret::{Secret, PARTIES};
use crate::Result;

/// Generates a shared random number together with arithmetic sharings of
/// its bits, little-endian. Each bit comes from a fresh uniformly random
/// binary triple, so no single party's view reveals r or any r_i.
pub fn random_number_and_bits<R: Rng>(size: usize, rng: &mut R) -> Result<(Secret, Vec<Secret>)> {
    // Round 1
    let mut r_bits = Vec::with_capacity(size);
    for _ in 0..size {
        let triple = DVector::from_fn(PARTIES, |_, _| random_bit(rng));
        r_bits.push(from_binary_shares(triple, size, rng)?);
    }

    // Round 2: r = sum_i r_i * 2^i
    let mut r = Secret::from_value(&BigInt::zero(), size, rng)?;
    for (i, bit) in r_bits.iter().enumerate() {
        let weight = BigInt::one() << i;
        r = r.add(&bit.mul_scalar(&weight, rng), rng)?;
    }

    Ok((r, r_bits))
}

use num_bigint::{BigInt, UniformBigInt};
use num_traits::Zero;
use rand::distributions::uniform::UniformSampler;
use rand::Rng;

/// Uniform ring element in [0, q).
pub fn uniform_ring<R: Rng>(rng: &mut R, q: &BigInt) -> BigInt {
    UniformBigInt::new(&BigInt::zero(), q).sample(rng)
}

/// Uniform bit in {0, 1}, as a ring element.
pub fn random_bit<R: Rng>(rng: &mut R) -> BigInt {
    BigInt::from(rng.gen_range(0..=1u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_ring_bounds() {
        let mut rng = StdRng::seed_from_u64(0);
        let q = BigInt::from(256);

        for _ in 0..1000 {
            let x = uniform_ring(&mut rng, &q);
            assert!(x >= BigInt::zero() && x < q);
        }
    }

    #[test]
    fn test_random_bit_values() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen_zero = false;
        let mut seen_one = false;

        for _ in 0..1000 {
            let b = random_bit(&mut rng);
            assert!(b.is_zero() || b.is_one());
            seen_zero |= b.is_zero();
            seen_one |= b.is_one();
        }
        assert!(seen_zero && seen_one);
    }
}

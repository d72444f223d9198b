use nalgebra::DVector;
use num_integer::Integer;
use rand::Rng;

use crate::sharing::random::uniform_ring;
use crate::sharing::secret::Secret;
use crate::{Result, SharemindError};

/// Three-party secure multiplication.
///
/// Three rounds with twelve fresh ring elements: round 1 samples the masks,
/// round 2 forms the masked shares exchanged between party pairs, round 3
/// combines each party's masked view into one output share. The output
/// triple sums to x * y mod 2^size and is reshared before being returned.
pub fn mul<R: Rng>(x: &Secret, y: &Secret, rng: &mut R) -> Result<Secret> {
    if x.size() != y.size() {
        return Err(SharemindError::SizeMismatch);
    }
    let size = x.size();
    let q = &x.params().q;

    let (u1, u2, u3) = (&x.shares()[0], &x.shares()[1], &x.shares()[2]);
    let (v1, v2, v3) = (&y.shares()[0], &y.shares()[1], &y.shares()[2]);

    // Round 1
    let (r12, r13, s12, s13) = (
        uniform_ring(rng, q),
        uniform_ring(rng, q),
        uniform_ring(rng, q),
        uniform_ring(rng, q),
    );
    let (r23, r21, s23, s21) = (
        uniform_ring(rng, q),
        uniform_ring(rng, q),
        uniform_ring(rng, q),
        uniform_ring(rng, q),
    );
    let (r31, r32, s31, s32) = (
        uniform_ring(rng, q),
        uniform_ring(rng, q),
        uniform_ring(rng, q),
        uniform_ring(rng, q),
    );

    // Round 2
    let a12 = u1 + &r31;
    let b12 = v1 + &s31;
    let a13 = u1 + &r21;
    let b13 = v1 + &s21;
    let a23 = u2 + &r12;
    let b23 = v2 + &s12;
    let a21 = u2 + &r32;
    let b21 = v2 + &s32;
    let a31 = u3 + &r23;
    let b31 = v3 + &s23;
    let a32 = u3 + &r13;
    let b32 = v3 + &s13;

    // Round 3
    let c1 = u1 * &b21 + u1 * &b31 + v1 * &a21 + v1 * &a31 - &a12 * &b21 - &b12 * &a21
        + &r12 * &s13
        + &s12 * &r13;
    let w1 = (c1 + u1 * v1).mod_floor(q);

    let c2 = u2 * &b32 + u2 * &b12 + v2 * &a32 + v2 * &a12 - &a23 * &b32 - &b23 * &a32
        + &r23 * &s21
        + &s23 * &r21;
    let w2 = (c2 + u2 * v2).mod_floor(q);

    let c3 = u3 * &b13 + u3 * &b23 + v3 * &a13 + v3 * &a23 - &a31 * &b13 - &b31 * &a13
        + &r31 * &s32
        + &s31 * &r32;
    let w3 = (c3 + u3 * v3).mod_floor(q);

    let mut w = Secret::from_shares(DVector::from_vec(vec![w1, w2, w3]), size)?;
    w.reshare(rng);
    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mul_known_values() {
        let mut rng = StdRng::seed_from_u64(0);

        // 40000 * 30000 = 1200000000 = 35840 (mod 2^16)
        let x = Secret::from_value(&BigInt::from(40000), 16, &mut rng).unwrap();
        let y = Secret::from_value(&BigInt::from(30000), 16, &mut rng).unwrap();
        let product = mul(&x, &y, &mut rng).unwrap();
        assert_eq!(product.reconstruct(), BigInt::from(35840));

        // 200 * 150 = 30000 = 48 (mod 2^8)
        let x = Secret::from_value(&BigInt::from(200), 8, &mut rng).unwrap();
        let y = Secret::from_value(&BigInt::from(150), 8, &mut rng).unwrap();
        let product = mul(&x, &y, &mut rng).unwrap();
        assert_eq!(product.reconstruct(), BigInt::from(48));
    }

    #[test]
    fn test_mul_random_values() {
        let mut rng = StdRng::seed_from_u64(0);

        for size in [2usize, 4, 8, 16, 32, 64] {
            let q = BigInt::from(2u32).pow(size as u32);
            for _ in 0..50 {
                let a = uniform_ring(&mut rng, &q);
                let b = uniform_ring(&mut rng, &q);

                let x = Secret::from_value(&a, size, &mut rng).unwrap();
                let y = Secret::from_value(&b, size, &mut rng).unwrap();

                let product = mul(&x, &y, &mut rng).unwrap();
                assert_eq!(product.reconstruct(), (&a * &b).mod_floor(&q));
            }
        }
    }

    #[test]
    fn test_mul_size_mismatch() {
        let mut rng = StdRng::seed_from_u64(0);

        let x = Secret::from_value(&BigInt::from(3), 8, &mut rng).unwrap();
        let y = Secret::from_value(&BigInt::from(3), 16, &mut rng).unwrap();
        assert_eq!(
            mul(&x, &y, &mut rng).unwrap_err(),
            SharemindError::SizeMismatch
        );
    }
}

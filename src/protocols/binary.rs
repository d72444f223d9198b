use nalgebra::DVector;
use num_bigint::BigInt;
use num_integer::Integer;
use rand::Rng;

use crate::protocols::multiplication::mul;
use crate::sharing::random::uniform_ring;
use crate::sharing::secret::Secret;
use crate::Result;

/// Converts a binary share triple into an arithmetic sharing over Z/2^size.
///
/// The triple (u1, u2, u3) represents the bit b = u1 XOR u2 XOR u3. The
/// result is a sharing of the same b as an n-bit ring element, recovered
/// through the polynomial identity
/// b = u1 + u2 + u3 - 2*u1*u2 - 2*u1*u3 - 2*u2*u3 + 4*u1*u2*u3.
/// The pairwise products are assembled from masked bits; the triple product
/// costs one secure multiplication.
pub fn from_binary_shares<R: Rng>(
    shares: DVector<BigInt>,
    size: usize,
    rng: &mut R,
) -> Result<Secret> {
    let u = Secret::from_shares(shares, size)?;
    let q = u.params().q.clone();

    // Round 1
    let (r12, r13, s12, s13) = (
        uniform_ring(rng, &q),
        uniform_ring(rng, &q),
        uniform_ring(rng, &q),
        uniform_ring(rng, &q),
    );
    let s1 = &r12 * &r13 - &s12 - &s13;
    let (r23, r21, s23, s21) = (
        uniform_ring(rng, &q),
        uniform_ring(rng, &q),
        uniform_ring(rng, &q),
        uniform_ring(rng, &q),
    );
    let s2 = &r23 * &r21 - &s23 - &s21;
    let (r31, r32, s31, s32) = (
        uniform_ring(rng, &q),
        uniform_ring(rng, &q),
        uniform_ring(rng, &q),
        uniform_ring(rng, &q),
    );
    let s3 = &r31 * &r32 - &s31 - &s32;

    // Round 2
    let (u1, u2, u3) = (&u.shares()[0], &u.shares()[1], &u.shares()[2]);
    let b12 = &r31 + u1;
    let b13 = &r21 + u1;
    let b23 = &r12 + u2;
    let b21 = &r32 + u2;
    let b31 = &r23 + u3;
    let b32 = &r13 + u3;

    // Party 3's bit re-shared as a full arithmetic value
    let c = Secret::from_value(u3, size, rng)?;

    // Round 3
    let ab = Secret::from_shares(
        DVector::from_vec(vec![
            (&s31 - &r31 * &b21).mod_floor(&q),
            (&b12 * &b21 + &s32 - &b12 * &r32).mod_floor(&q),
            s3.mod_floor(&q),
        ]),
        size,
    )?;

    let ac = Secret::from_shares(
        DVector::from_vec(vec![
            (&b31 * &b13 + &s21 - &b31 * &r21).mod_floor(&q),
            s2.mod_floor(&q),
            (&s23 - &r23 * &b13).mod_floor(&q),
        ]),
        size,
    )?;

    let bc = Secret::from_shares(
        DVector::from_vec(vec![
            s1.mod_floor(&q),
            (&s12 - &r12 * &b32).mod_floor(&q),
            (&b23 * &b32 + &s13 - &b23 * &r13).mod_floor(&q),
        ]),
        size,
    )?;

    let abc = mul(&ab, &c, rng)?;

    // Round 4
    let two = BigInt::from(2);
    let four = BigInt::from(4);
    let mut w = u
        .sub(&ab.mul_scalar(&two, rng), rng)?
        .sub(&ac.mul_scalar(&two, rng), rng)?
        .sub(&bc.mul_scalar(&two, rng), rng)?
        .add(&abc.mul_scalar(&four, rng), rng)?;
    w.reshare(rng);
    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_all_binary_triples() {
        let mut rng = StdRng::seed_from_u64(0);

        for size in [2usize, 8, 16, 32] {
            for bits in 0u8..8 {
                let triple = DVector::from_vec(vec![
                    BigInt::from(bits & 1),
                    BigInt::from((bits >> 1) & 1),
                    BigInt::from((bits >> 2) & 1),
                ]);
                let parity = BigInt::from(bits.count_ones() % 2);

                let s = from_binary_shares(triple, size, &mut rng).unwrap();
                assert_eq!(s.reconstruct(), parity);
            }
        }
    }

    #[test]
    fn test_repeated_conversions_are_rerandomized() {
        let mut rng = StdRng::seed_from_u64(0);

        let triple = DVector::from_vec(vec![BigInt::from(1), BigInt::from(1), BigInt::from(1)]);
        let a = from_binary_shares(triple.clone(), 32, &mut rng).unwrap();
        let b = from_binary_shares(triple, 32, &mut rng).unwrap();

        assert_eq!(a.reconstruct(), b.reconstruct());
        assert_ne!(a.shares(), b.shares());
    }
}

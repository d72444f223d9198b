use num_bigint::BigInt;
use rand::Rng;

use crate::protocols::multiplication::mul;
use crate::sharing::secret::Secret;
use crate::{Result, SharemindError};

/// Bitwise addition of two little-endian bit-share vectors by parallel
/// carry look-ahead (Kogge-Stone). Both vectors must hold exactly n bit
/// shares of size n, with n = 2^k for some k >= 1. The carry out of the
/// top position is discarded, consistent with arithmetic mod 2^n.
pub fn bitwise_add<R: Rng>(
    u_bits: &[Secret],
    v_bits: &[Secret],
    rng: &mut R,
) -> Result<Vec<Secret>> {
    let size = match u_bits.first() {
        Some(u) => u.size(),
        None => return Err(SharemindError::SizeMismatch),
    };
    if u_bits.len() != size || v_bits.len() != size {
        return Err(SharemindError::SizeMismatch);
    }
    if u_bits.iter().chain(v_bits).any(|b| b.size() != size) {
        return Err(SharemindError::SizeMismatch);
    }
    if !u_bits[0].params().is_pow2() {
        return Err(SharemindError::SizeNotPowerOfTwo);
    }

    let two = BigInt::from(2);

    // Round 1: generate flags s_i = u_i AND v_i, propagate flags
    // p_i = u_i XOR v_i, arithmetized over bits as u*v and u + v - 2*u*v.
    let mut s = Vec::with_capacity(size);
    for (u, v) in u_bits.iter().zip(v_bits) {
        s.push(mul(u, v, rng)?);
    }
    let mut p = Vec::with_capacity(size);
    for ((u, v), s_i) in u_bits.iter().zip(v_bits).zip(&s) {
        p.push(u.add(v, rng)?.sub(&s_i.mul_scalar(&two, rng), rng)?);
    }

    // Rounds 2 .. log2(n) + 1: merge carry spans of width 2^k. The stride
    // of the inner loop is 2^(k+1).
    let rounds = size.trailing_zeros() as usize;
    for k in 0..rounds {
        for l in 0..(1usize << k) {
            for m in 0..(size >> (k + 1)) {
                let i1 = (1 << k) + l + (1 << (k + 1)) * m;
                let i2 = (1 << k) + (1 << (k + 1)) * m - 1;

                let carried = mul(&p[i1], &s[i2], rng)?;
                s[i1] = s[i1].add(&carried, rng)?;
                p[i1] = mul(&p[i1], &p[i2], rng)?;
            }
        }
    }

    // Sum bits
    let mut w = Vec::with_capacity(size);
    w.push(
        u_bits[0]
            .add(&v_bits[0], rng)?
            .sub(&s[0].mul_scalar(&two, rng), rng)?,
    );
    for i in 1..size {
        let w_i = u_bits[i]
            .add(&v_bits[i], rng)?
            .add(&s[i - 1], rng)?
            .sub(&s[i].mul_scalar(&two, rng), rng)?;
        w.push(w_i);
    }

    Ok(w)
}

use nalgebra::DVector;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sharing::params::RingParams;
use crate::sharing::random::uniform_ring;
use crate::{Result, SharemindError};

/// Number of simulated parties holding shares
pub const PARTIES: usize = 3;

/// An additively shared ring element: a triple (u1, u2, u3) with
/// u1 + u2 + u3 = value (mod 2^size). No single share reveals anything
/// about the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    params: RingParams,
    shares: DVector<BigInt>,
}

impl Secret {
    /// Shares a plaintext value: two shares are uniform, the third closes
    /// the sum.
    pub fn from_value<R: Rng>(value: &BigInt, size: usize, rng: &mut R) -> Result<Secret> {
        let params = RingParams::init(size);
        if value < &BigInt::zero() || value >= &params.q {
            return Err(SharemindError::OutOfRange);
        }

        let u1 = uniform_ring(rng, &params.q);
        let u2 = uniform_ring(rng, &params.q);
        let u3 = (value - &u1 - &u2).mod_floor(&params.q);

        Ok(Secret {
            params,
            shares: DVector::from_vec(vec![u1, u2, u3]),
        })
    }

    /// Wraps an explicit share triple.
    pub fn from_shares(shares: DVector<BigInt>, size: usize) -> Result<Secret> {
        let params = RingParams::init(size);
        if shares.len() != PARTIES {
            return Err(SharemindError::BadShare);
        }
        let zero = BigInt::zero();
        if shares.iter().any(|u| u < &zero || u >= &params.q) {
            return Err(SharemindError::BadShare);
        }

        Ok(Secret { params, shares })
    }

    /// Sums the triple mod 2^size.
    pub fn reconstruct(&self) -> BigInt {
        self.shares.sum().mod_floor(&self.params.q)
    }

    /// Truth value of the reconstruction (nonzero means true).
    pub fn reconstruct_to_bool(&self) -> bool {
        !self.reconstruct().is_zero()
    }

    pub fn shares(&self) -> &DVector<BigInt> {
        &self.shares
    }

    pub fn size(&self) -> usize {
        self.params.size
    }

    pub fn params(&self) -> &RingParams {
        &self.params
    }

    /// Rerandomizes the triple without changing its sum. Applied after every
    /// non-composable operation to scrub the output share distribution.
    pub fn reshare<R: Rng>(&mut self, rng: &mut R) {
        let q = &self.params.q;

        let r1 = uniform_ring(rng, q);
        let r2 = uniform_ring(rng, q);
        let r3 = uniform_ring(rng, q);

        let w1 = (&self.shares[0] + &r3 - &r1).mod_floor(q);
        let w2 = (&self.shares[1] + &r1 - &r2).mod_floor(q);
        let w3 = (&self.shares[2] + &r2 - &r3).mod_floor(q);

        self.shares = DVector::from_vec(vec![w1, w2, w3]);
    }

    /// Share-wise addition.
    pub fn add<R: Rng>(&self, other: &Secret, rng: &mut R) -> Result<Secret> {
        self.check_size(other)?;
        let q = &self.params.q;

        let shares = DVector::from_fn(PARTIES, |i, _| {
            (&self.shares[i] + &other.shares[i]).mod_floor(q)
        });

        let mut w = Secret {
            params: self.params.clone(),
            shares,
        };
        w.reshare(rng);
        Ok(w)
    }

    /// Share-wise subtraction.
    pub fn sub<R: Rng>(&self, other: &Secret, rng: &mut R) -> Result<Secret> {
        self.check_size(other)?;
        let q = &self.params.q;

        let shares = DVector::from_fn(PARTIES, |i, _| {
            (&self.shares[i] - &other.shares[i]).mod_floor(q)
        });

        let mut w = Secret {
            params: self.params.clone(),
            shares,
        };
        w.reshare(rng);
        Ok(w)
    }

    /// Share-wise multiplication by a plaintext constant, taken mod 2^size.
    pub fn mul_scalar<R: Rng>(&self, k: &BigInt, rng: &mut R) -> Secret {
        let q = &self.params.q;

        let shares = DVector::from_fn(PARTIES, |i, _| (&self.shares[i] * k).mod_floor(q));

        let mut w = Secret {
            params: self.params.clone(),
            shares,
        };
        w.reshare(rng);
        w
    }

    fn check_size(&self, other: &Secret) -> Result<()> {
        if self.params.size != other.params.size {
            return Err(SharemindError::SizeMismatch);
        }
        Ok(())
    }
}

use std::fmt;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Default share bit length
pub const DEFAULT_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingParams {
    /// Share bit length
    pub size: usize,

    /// Ring modulus q = 2^size
    pub q: BigInt,
}

impl RingParams {
    pub fn init(size: usize) -> RingParams {
        let q = BigInt::from(2u32).pow(size as u32);

        RingParams { size, q }
    }

    /// The bitwise protocols require size = 2^k for some k >= 1.
    pub fn is_pow2(&self) -> bool {
        self.size >= 2 && self.size.is_power_of_two()
    }
}

impl Default for RingParams {
    fn default() -> RingParams {
        RingParams::init(DEFAULT_SIZE)
    }
}

impl fmt::Display for RingParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RingParams {{ size: {}\t Share bit length, q: {}\t Ring modulus = 2^size }}",
            self.size, self.q
        )
    }
}

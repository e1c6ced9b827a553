//! Randomization of the base reference price
//!
//! Every quote multiplies the base price by a factor drawn from
//! [`JITTER_MIN`, `JITTER_MAX`]. The source of that factor is injected so
//! runs can be made reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CalcError, CalcResult};

/// Smallest factor applied to the base price (-3 %)
pub const JITTER_MIN: f64 = 0.97;

/// Largest factor applied to the base price (+3 %)
pub const JITTER_MAX: f64 = 1.03;

/// Supplies the factor applied to the base reference price
pub trait JitterSource {
    /// Draw the next factor
    fn factor(&mut self) -> f64;
}

/// Uniform draw from `[JITTER_MIN, JITTER_MAX]`
#[derive(Debug, Clone)]
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed explicitly; the same seed yields the same sequence of factors
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl JitterSource for RandomJitter {
    fn factor(&mut self) -> f64 {
        self.rng.gen_range(JITTER_MIN..=JITTER_MAX)
    }
}

/// Always returns the same factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl FixedJitter {
    /// A factor of exactly 1.0, leaving the base price untouched
    pub const fn neutral() -> Self {
        Self(1.0)
    }

    /// Pin a factor, rejecting values outside [`JITTER_MIN`, `JITTER_MAX`]
    pub fn try_new(factor: f64) -> CalcResult<Self> {
        if factor.is_finite() && (JITTER_MIN..=JITTER_MAX).contains(&factor) {
            Ok(Self(factor))
        } else {
            Err(CalcError::Validation(format!(
                "jitter factor must be between {} and {}, got {}",
                JITTER_MIN, JITTER_MAX, factor
            )))
        }
    }
}

impl JitterSource for FixedJitter {
    fn factor(&mut self) -> f64 {
        self.0
    }
}

impl<J: JitterSource + ?Sized> JitterSource for Box<J> {
    fn factor(&mut self) -> f64 {
        (**self).factor()
    }
}

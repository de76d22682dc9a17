//! Where secret numbers come from.
//!
//! The service only knows the [`NumberSource`] trait. Production code uses
//! [`RandomNumberSource`]; tests pin the secret with [`FixedNumberSource`].

use std::ops::RangeInclusive;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::errors::ConfigError;

/// Range secret numbers are drawn from unless configured otherwise
pub const DEFAULT_RANGE: RangeInclusive<i32> = 1..=100;

/// Produces integers within a fixed inclusive range
pub trait NumberSource {
    /// Draw the next number. Always inside `range()`
    fn generate(&mut self) -> i32;

    fn range(&self) -> RangeInclusive<i32>;
}

fn check_range(range: &RangeInclusive<i32>) -> Result<(), ConfigError> {
    if range.is_empty() {
        return Err(ConfigError::EmptyRange {
            low: *range.start(),
            high: *range.end(),
        });
    }
    Ok(())
}

/// Uniformly random numbers from a range
#[derive(Debug, Clone)]
pub struct RandomNumberSource {
    range: RangeInclusive<i32>,
    rng: StdRng,
}

impl RandomNumberSource {
    /// Create a source seeded from the operating system
    /// ### Errors
    /// Returns `ConfigError::EmptyRange` if the range holds no numbers
    pub fn new(range: RangeInclusive<i32>) -> Result<Self, ConfigError> {
        check_range(&range)?;
        Ok(RandomNumberSource {
            range,
            rng: StdRng::from_entropy(),
        })
    }

    /// Create a source whose sequence is fully determined by `seed`
    pub fn seeded(range: RangeInclusive<i32>, seed: u64) -> Result<Self, ConfigError> {
        check_range(&range)?;
        Ok(RandomNumberSource {
            range,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl Default for RandomNumberSource {
    fn default() -> Self {
        RandomNumberSource {
            range: DEFAULT_RANGE,
            rng: StdRng::from_entropy(),
        }
    }
}

impl NumberSource for RandomNumberSource {
    fn generate(&mut self) -> i32 {
        self.rng.gen_range(self.range.clone())
    }

    fn range(&self) -> RangeInclusive<i32> {
        self.range.clone()
    }
}

/// Always hands out the same number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedNumberSource {
    value: i32,
}

impl FixedNumberSource {
    pub fn new(value: i32) -> Self {
        FixedNumberSource { value }
    }
}

impl NumberSource for FixedNumberSource {
    fn generate(&mut self) -> i32 {
        self.value
    }

    fn range(&self) -> RangeInclusive<i32> {
        self.value..=self.value
    }
}

impl<S: NumberSource + ?Sized> NumberSource for Box<S> {
    fn generate(&mut self) -> i32 {
        (**self).generate()
    }

    fn range(&self) -> RangeInclusive<i32> {
        (**self).range()
    }
}

//! Reproducible seeds for the simulation's random generator.

use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for the simulation's random number generator.
///
/// A 128-bit seed for the `Pcg32` generator that drives sampling, breeding and
/// mutation. Two runs with the same seed and configuration produce identical
/// histories. Seeds are written as 32 hex digits.
///
/// # Example
///
/// ```
/// use rand::Rng as _;
/// use ratbreed_sim::SimulationSeed;
///
/// let seed: SimulationSeed = rand::rng().random();
/// let parsed: SimulationSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimulationSeed([u8; 16]);

impl SimulationSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for SimulationSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid seed '{input}': expected 32 hex digits")]
pub struct ParseSeedError {
    input: String,
}

impl FromStr for SimulationSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(error());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| error())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SimulationSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SimulationSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<SimulationSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulationSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SimulationSeed(seed)
    }
}

use rand::rngs::OsRng;
use rand::{SeedableRng, TryRngCore};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::{CubeState, Timestamp, Twist};

/// Largest multiple of the twist count that fits in a `u32`. Random values at
/// or above this are rejected so that every twist is equally likely.
const UNBIASED_LIMIT: u32 = u32::MAX - u32::MAX % Twist::ALL.len() as u32;

/// Number of consecutive rejected values after which the source is considered
/// broken. A working source hits this with probability below 2^-1800.
const MAX_REJECTIONS: usize = 64;

/// Error generating a scramble.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// The source of randomness failed.
    #[error("randomness source unavailable: {0}")]
    RandomnessUnavailable(String),
}

/// Parameters to deterministically generate a scramble.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambleParams {
    /// Number of twists.
    pub length: u32,
    /// Timestamp when the scramble was requested.
    pub time: Timestamp,
    /// Random seed, usually derived from the operating system's entropy
    /// source.
    pub seed: String,
}
impl ScrambleParams {
    /// Generates new scramble parameters based on the current time and a
    /// random number from the operating system.
    pub fn new(length: u32) -> Result<Self, ScrambleError> {
        Self::from_entropy_source(length, &mut OsRng)
    }

    /// Generates new scramble parameters based on the current time and a
    /// random number from `source`.
    pub fn from_entropy_source<R: TryRngCore + ?Sized>(
        length: u32,
        source: &mut R,
    ) -> Result<Self, ScrambleError> {
        let random_u64 = source
            .try_next_u64()
            .map_err(|e| ScrambleError::RandomnessUnavailable(e.to_string()))?;
        let time = Timestamp::now();
        Ok(Self {
            length,
            time,
            seed: format!("{time}_{random_u64}"),
        })
    }

    /// Constructs scramble parameters with a known seed, for reproducing an
    /// earlier scramble.
    pub fn with_seed(length: u32, time: Timestamp, seed: impl Into<String>) -> Self {
        Self {
            length,
            time,
            seed: seed.into(),
        }
    }

    /// Returns the deterministic random number generator for this scramble.
    pub fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update(self.time.to_string().as_bytes());
        sha256.update(self.seed.len().to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let mut seed = [0_u8; 32];
        seed.copy_from_slice(&sha256.finalize());
        rand_chacha::ChaCha12Rng::from_seed(seed)
    }

    /// Scrambles a solved cube using these parameters.
    pub fn generate(self) -> Result<ScrambledCube, ScrambleError> {
        let mut state = CubeState::new();
        let twists = state.scramble(self.length, &mut self.rng())?;
        Ok(ScrambledCube {
            params: self,
            twists,
            state,
        })
    }
}

/// Output of scrambling a cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledCube {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Twists applied.
    pub twists: Vec<Twist>,
    /// State of the cube after scrambling.
    pub state: CubeState,
}

/// Draws one twist uniformly at random.
pub(crate) fn random_twist<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Twist, ScrambleError> {
    for _ in 0..MAX_REJECTIONS {
        let x = rng
            .try_next_u32()
            .map_err(|e| ScrambleError::RandomnessUnavailable(e.to_string()))?;
        if x < UNBIASED_LIMIT {
            return Ok(Twist::ALL[x as usize % Twist::ALL.len()]);
        }
    }
    Err(ScrambleError::RandomnessUnavailable(format!(
        "{MAX_REJECTIONS} consecutive values out of range"
    )))
}

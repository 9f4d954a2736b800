use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{scan, CodePeg, Error, Response, Shield};

/// Board dimensions. Both fields must be positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub shield_size: usize,
    /// Guess rows available to the code breaker. Carried for callers; scoring
    /// does not enforce it.
    pub total_rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            shield_size: 4,
            total_rows: 10,
        }
    }
}

impl BoardConfig {
    pub fn new(shield_size: usize, total_rows: usize) -> Self {
        BoardConfig {
            shield_size,
            total_rows,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.shield_size == 0 {
            return Err(Error::InvalidShieldSize);
        }
        if self.total_rows == 0 {
            return Err(Error::InvalidTotalRows);
        }
        Ok(())
    }
}

/// A decoding board: configured at construction, active once the code maker
/// registers a shield.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    shield: Option<Shield>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Result<Self, Error> {
        config.validate()?;
        debug!(
            shield_size = config.shield_size,
            total_rows = config.total_rows,
            "board configured"
        );
        Ok(Board {
            config,
            shield: None,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn shield(&self) -> Option<&Shield> {
        self.shield.as_ref()
    }

    /// Whether a shield has been registered.
    pub fn is_active(&self) -> bool {
        self.shield.is_some()
    }

    /// Registers the code maker's shield. A board accepts exactly one shield;
    /// later calls fail and keep the first.
    pub fn register_shield(&mut self, shield: Shield) -> Result<(), Error> {
        if self.shield.is_some() {
            return Err(Error::ShieldAlreadyRegistered);
        }
        if shield.len() != self.config.shield_size {
            return Err(Error::ShieldLengthMismatch {
                expected: self.config.shield_size,
                actual: shield.len(),
            });
        }
        debug!(len = shield.len(), "shield registered");
        self.shield = Some(shield);
        Ok(())
    }

    /// Scores the code breaker's guess against the registered shield.
    pub fn score_guess(&self, code: &[CodePeg]) -> Result<Response, Error> {
        let shield = self.registered()?;
        if code.len() != shield.len() {
            return Err(Error::CodeLengthMismatch {
                expected: shield.len(),
                actual: code.len(),
            });
        }
        let response = scan::score(code, shield.colors());
        trace!(%response, "guess scored");
        Ok(response)
    }

    /// True iff every position matched exactly. White pegs never solve.
    pub fn is_solved(&self, response: Response) -> Result<bool, Error> {
        let len = self.registered()?.len();
        if response.total() > len {
            return Err(Error::KeyPegsOutOfRange {
                total: response.total(),
                max: len,
            });
        }
        Ok(response.black_key_pegs == len)
    }

    fn registered(&self) -> Result<&Shield, Error> {
        self.shield.as_ref().ok_or(Error::ShieldNotRegistered)
    }
}

//! Player weights and mark symbols.

use super::types::Player;
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Integer weight per player, summed along each line.
///
/// A player wins a line when its sum reaches `3 * weight`. The pair must be
/// chosen so that no mixed line can reach either winning sum; see
/// [`Weights::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    first: u32,
    second: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            first: 1,
            second: 4,
        }
    }
}

impl Weights {
    /// Creates a validated weight pair.
    #[track_caller]
    #[instrument]
    pub fn new(first: u32, second: u32) -> Result<Self, ConfigError> {
        let weights = Self { first, second };
        weights.validate()?;
        Ok(weights)
    }

    /// Weight for `player`.
    pub fn weight(&self, player: Player) -> u32 {
        match player {
            Player::First => self.first,
            Player::Second => self.second,
        }
    }

    /// Sum of a line fully held by `player`.
    pub fn winning_sum(&self, player: Player) -> u32 {
        self.weight(player).saturating_mul(3)
    }

    /// Checks that line sums can never report a false win.
    ///
    /// Every line content of up to three marks that is not all one player
    /// must sum to something other than either winning sum.
    #[track_caller]
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first == 0 || self.second == 0 {
            return Err(ConfigError::new(format!(
                "Player weights must be positive (got {} and {})",
                self.first, self.second
            )));
        }
        if self.first == self.second {
            return Err(ConfigError::new(format!(
                "Player weights must differ (both are {})",
                self.first
            )));
        }
        let (Some(first_win), Some(second_win)) =
            (self.first.checked_mul(3), self.second.checked_mul(3))
        else {
            return Err(ConfigError::new(format!(
                "Winning sum overflows for weights {} and {}",
                self.first, self.second
            )));
        };

        for (firsts, seconds) in mixed_line_contents() {
            let sum = firsts * self.first + seconds * self.second;
            if sum == first_win || sum == second_win {
                return Err(ConfigError::new(format!(
                    "Weights {} and {} collide: {} first and {} second marks sum to {}",
                    self.first, self.second, firsts, seconds, sum
                )));
            }
        }

        debug!(first_win, second_win, "Weights validated");
        Ok(())
    }
}

/// Counts `(first, second)` of at most three marks in one line, excluding
/// the two single-player full lines.
fn mixed_line_contents() -> impl Iterator<Item = (u32, u32)> {
    (0..=3u32)
        .flat_map(|firsts| (0..=3 - firsts).map(move |seconds| (firsts, seconds)))
        .filter(|&pair| pair != (3, 0) && pair != (0, 3))
}

/// Mark symbol drawn for each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Marks {
    first: char,
    second: char,
}

impl Default for Marks {
    fn default() -> Self {
        Self {
            first: 'X',
            second: 'O',
        }
    }
}

impl Marks {
    /// Creates a validated mark pair.
    #[track_caller]
    #[instrument]
    pub fn new(first: char, second: char) -> Result<Self, ConfigError> {
        let marks = Self { first, second };
        marks.validate()?;
        Ok(marks)
    }

    /// Mark for `player`.
    pub fn mark(&self, player: Player) -> char {
        match player {
            Player::First => self.first,
            Player::Second => self.second,
        }
    }

    /// Marks must be visible and distinct.
    #[track_caller]
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first.is_whitespace() || self.second.is_whitespace() {
            return Err(ConfigError::new("Marks must not be whitespace".to_string()));
        }
        if self.first == self.second {
            return Err(ConfigError::new(format!(
                "Marks must differ (both are {:?})",
                self.first
            )));
        }
        Ok(())
    }
}

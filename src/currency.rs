//! Non-negative money accumulator

use crate::errors::{RaffleError, RaffleResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-unit monetary amount that only ever grows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Currency {
    amount: u64,
}

impl Currency {
    /// Create an amount, rejecting negative input
    pub fn new(amount: i64) -> RaffleResult<Self> {
        let amount = u64::try_from(amount).map_err(|_| RaffleError::negative_amount("currency amount", amount))?;
        Ok(Self { amount })
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Add to the running total. Saturates at `u64::MAX`.
    pub fn add(&mut self, delta: u64) {
        self.amount = self.amount.saturating_add(delta);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)
    }
}

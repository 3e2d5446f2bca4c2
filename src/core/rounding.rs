use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest scale accepted from configuration
pub const MAX_SCALE: u32 = 8;

/// Currency-display rounding applied once to final invoice figures.
///
/// Amounts are rounded half-up (midpoint away from zero) to `scale` decimal
/// places. Every intermediate sum stays at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingPolicy {
    scale: u32,
}

impl RoundingPolicy {
    /// Two decimal places, the display precision for invoice totals
    pub const CURRENCY: RoundingPolicy = RoundingPolicy { scale: 2 };

    pub fn new(scale: u32) -> Result<Self, String> {
        if scale > MAX_SCALE {
            return Err(format!(
                "Rounding scale must be at most {}, got {}",
                MAX_SCALE, scale
            ));
        }
        Ok(Self { scale })
    }

    /// Returns the number of decimal places kept
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Rounds a full-precision amount for display or persistence
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.scale, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self::CURRENCY
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "half-up to {} dp", self.scale)
    }
}

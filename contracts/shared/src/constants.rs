use crate::types::Amount;

/// Fixed-point scale of the dividend accumulator
pub const DIVIDEND_SCALE: i128 = 1_000_000_000_000;

/// Minimum distance between a round's start and end (1 day)
pub const MIN_ROUND_LENGTH: u64 = 24 * 60 * 60;

/// Minimum notice between round creation and its start (1 hour)
pub const MIN_ROUND_LEAD_TIME: u64 = 60 * 60;

/// Organizer fee is `raised / ORGANIZER_FEE_DIVISOR` (5%)
pub const ORGANIZER_FEE_DIVISOR: Amount = 20;

/// Highest fee price a contributor may attach to a contribution
pub const MAX_FEE_PRICE: u64 = 1_000;

/// Default cap on the amount accepted by a single contribution
pub const MAX_CONTRIBUTION_PER_CALL: Amount = 1_000_000_000_000_000;

// Ownership unit metadata
pub const UNIT_DECIMALS: u32 = 7;
pub const UNIT_NAME: &str = "Round Ownership Unit";
pub const UNIT_SYMBOL: &str = "ROU";

use soroban_sdk::contracttype;

use crate::constants::{
    MAX_CONTRIBUTION_PER_CALL, MAX_FEE_PRICE, MIN_ROUND_LEAD_TIME, MIN_ROUND_LENGTH,
    ORGANIZER_FEE_DIVISOR,
};

pub type Amount = i128;
pub type Timestamp = u64;

/// Deployment-time parameters of the auction
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    pub min_round_length: u64,
    pub min_round_lead_time: u64,
    pub organizer_fee_divisor: i128,
    pub max_fee_price: u64,
    /// The only field the organizer may change after initialization
    pub max_contribution_per_call: i128,
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            min_round_length: MIN_ROUND_LENGTH,
            min_round_lead_time: MIN_ROUND_LEAD_TIME,
            organizer_fee_divisor: ORGANIZER_FEE_DIVISOR,
            max_fee_price: MAX_FEE_PRICE,
            max_contribution_per_call: MAX_CONTRIBUTION_PER_CALL,
        }
    }
}

impl AuctionConfig {
    pub fn is_valid(&self) -> bool {
        self.organizer_fee_divisor > 0
            && self.max_contribution_per_call > 0
            && self.min_round_length > 0
    }
}

/// A single time-boxed funding round
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Round {
    pub index: u32,
    pub min_target: i128,
    pub max_target: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub raised_amount: i128,
    pub finished: bool,
    /// Only meaningful once `finished` is set
    pub success: bool,
    pub proceeds_withdrawn: bool,
}

impl Round {
    pub fn headroom(&self) -> Amount {
        self.max_target - self.raised_amount
    }
}

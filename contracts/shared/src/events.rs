use soroban_sdk::{symbol_short, Symbol};

// Round events
pub const ROUND_CREATED: Symbol = symbol_short!("rnd_new");
pub const ROUND_FINISHED: Symbol = symbol_short!("rnd_fin");
pub const CONTRIBUTION_RECORDED: Symbol = symbol_short!("contrib");
pub const CONTRIBUTION_REFUNDED: Symbol = symbol_short!("refund");
pub const PROCEEDS_RELEASED: Symbol = symbol_short!("proceeds");

// Dividend events
pub const PAYMENT_RECEIVED: Symbol = symbol_short!("payment");
pub const DIVIDEND_PAID: Symbol = symbol_short!("payout");

// Admin events
pub const CONTRACT_INITIALIZED: Symbol = symbol_short!("init");
pub const MAX_CONTRIBUTION_UPDATED: Symbol = symbol_short!("max_cont");

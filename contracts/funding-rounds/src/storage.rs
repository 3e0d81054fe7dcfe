use shared::errors::Error;
use shared::types::{Amount, AuctionConfig, Round};
use soroban_sdk::{token::TokenClient, Address, Env};

use crate::types::{DataKey, Holder};

/// Store the organizer (also the original creator of the contract)
pub fn set_organizer(env: &Env, organizer: &Address) {
    env.storage().instance().set(&DataKey::Organizer, organizer);
}

/// Retrieve the organizer
pub fn get_organizer(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Organizer)
        .ok_or(Error::NotInit)
}

/// Check if the contract has been initialized
pub fn has_organizer(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Organizer)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_payment_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(Error::NotInit)
}

/// Client for the token contributions, payments and refunds are made in
pub fn payment_token_client(env: &Env) -> Result<TokenClient<'_>, Error> {
    let token = get_payment_token(env)?;
    Ok(TokenClient::new(env, &token))
}

pub fn set_config(env: &Env, config: &AuctionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<AuctionConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInit)
}

// ==================== Rounds ====================

pub fn set_round_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::RoundCount, &count);
}

/// Number of rounds created so far, defaults to 0
pub fn get_round_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::RoundCount)
        .unwrap_or(0)
}

pub fn set_round(env: &Env, index: u32, round: &Round) {
    env.storage().persistent().set(&DataKey::Round(index), round);
}

/// Rounds are append-only, so a missing entry means the index is out of range
pub fn get_round(env: &Env, index: u32) -> Result<Round, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Round(index))
        .ok_or(Error::InvalidRoundIndex)
}

/// Amount recorded for a contributor in a round, defaults to 0
pub fn get_contribution(env: &Env, index: u32, contributor: &Address) -> Amount {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(index, contributor.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, index: u32, contributor: &Address, amount: Amount) {
    let key = DataKey::Contribution(index, contributor.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}

// ==================== Ledger ====================

pub fn get_total_supply(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: Amount) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_acc_per_share(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get(&DataKey::AccPerShare)
        .unwrap_or(0)
}

pub fn set_acc_per_share(env: &Env, acc: Amount) {
    env.storage().instance().set(&DataKey::AccPerShare, &acc);
}

pub fn get_balance(env: &Env, holder: &Holder) -> Amount {
    env.storage()
        .persistent()
        .get(&holder.balance_key())
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, holder: &Holder, balance: Amount) {
    env.storage().persistent().set(&holder.balance_key(), &balance);
}

/// Dividend correction of a holder, stored pre-multiplied by the scale
pub fn get_correction(env: &Env, holder: &Holder) -> i128 {
    env.storage()
        .persistent()
        .get(&holder.correction_key())
        .unwrap_or(0)
}

pub fn set_correction(env: &Env, holder: &Holder, correction: i128) {
    env.storage()
        .persistent()
        .set(&holder.correction_key(), &correction);
}

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> Amount {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(owner.clone(), spender.clone()))
        .unwrap_or(0)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: Amount) {
    env.storage()
        .persistent()
        .set(&DataKey::Allowance(owner.clone(), spender.clone()), &amount);
}

//! Ownership-unit ledger with a scaled dividend accumulator.
//!
//! Every incoming payment raises `acc_per_share` by `amount * SCALE / supply`.
//! A holder is owed `(acc_per_share * balance + correction) / SCALE`, and each
//! balance change shifts the correction by `acc_per_share * delta` in the
//! opposite direction so entitlements accrued before the change are untouched.
//!
//! The reserve is an ordinary holder. Dividends it accrues while a round's
//! units wait to be settled are never paid to anyone and stay locked in the
//! contract.

use shared::errors::Error;
use shared::types::Amount;
use shared::DIVIDEND_SCALE;
use soroban_sdk::Env;

use crate::storage::*;
use crate::types::Holder;

fn increase_balance(env: &Env, holder: &Holder, amount: Amount) -> Result<(), Error> {
    let balance = get_balance(env, holder)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let shift = get_acc_per_share(env)
        .checked_mul(amount)
        .ok_or(Error::Overflow)?;
    let correction = get_correction(env, holder)
        .checked_sub(shift)
        .ok_or(Error::Overflow)?;

    set_balance(env, holder, balance);
    set_correction(env, holder, correction);
    Ok(())
}

fn decrease_balance(env: &Env, holder: &Holder, amount: Amount) -> Result<(), Error> {
    let balance = get_balance(env, holder);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    let shift = get_acc_per_share(env)
        .checked_mul(amount)
        .ok_or(Error::Overflow)?;
    let correction = get_correction(env, holder)
        .checked_add(shift)
        .ok_or(Error::Overflow)?;

    set_balance(env, holder, balance - amount);
    set_correction(env, holder, correction);
    Ok(())
}

/// Create `amount` new units for `holder`
pub fn mint(env: &Env, holder: &Holder, amount: Amount) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    increase_balance(env, holder, amount)?;
    set_total_supply(env, supply);
    Ok(())
}

/// Move units between two holders; the supply is unchanged
pub fn move_units(env: &Env, from: &Holder, to: &Holder, amount: Amount) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    decrease_balance(env, from, amount)?;
    increase_balance(env, to, amount)
}

/// Spread `amount` over the current supply.
///
/// Returns `false` when there is no supply yet; the funds then stay in the
/// contract without being attributed to anyone.
pub fn distribute(env: &Env, amount: Amount) -> Result<bool, Error> {
    let supply = get_total_supply(env);
    if supply == 0 {
        return Ok(false);
    }
    let increment = amount
        .checked_mul(DIVIDEND_SCALE)
        .ok_or(Error::Overflow)?
        / supply;
    let acc = get_acc_per_share(env)
        .checked_add(increment)
        .ok_or(Error::Overflow)?;

    set_acc_per_share(env, acc);
    Ok(true)
}

fn scaled_entitlement(env: &Env, holder: &Holder) -> Result<i128, Error> {
    get_acc_per_share(env)
        .checked_mul(get_balance(env, holder))
        .and_then(|accrued| accrued.checked_add(get_correction(env, holder)))
        .ok_or(Error::Overflow)
}

/// Amount of payment token currently withdrawable by `holder`
pub fn owed(env: &Env, holder: &Holder) -> Result<Amount, Error> {
    let scaled = scaled_entitlement(env, holder)?;
    Ok((scaled / DIVIDEND_SCALE).max(0))
}

/// Zero out what `holder` is owed and return it.
///
/// The sub-unit remainder stays in the correction so it keeps counting
/// towards later payouts.
pub fn take_owed(env: &Env, holder: &Holder) -> Result<Amount, Error> {
    let amount = owed(env, holder)?;
    if amount == 0 {
        return Ok(0);
    }
    let correction = get_correction(env, holder)
        .checked_sub(amount * DIVIDEND_SCALE)
        .ok_or(Error::Overflow)?;

    set_correction(env, holder, correction);
    Ok(amount)
}

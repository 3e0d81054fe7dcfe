#![no_std]

use shared::{
    errors::Error,
    events::*,
    types::{AuctionConfig, Round},
    UNIT_DECIMALS, UNIT_NAME, UNIT_SYMBOL,
};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

mod ledger;
mod storage;
mod types;
mod validation;


use storage::*;
use types::Holder;

contractmeta!(key = "name", val = "Funding Rounds Contract");

#[contract]
pub struct FundingRoundsContract;

#[contractimpl]
impl FundingRoundsContract {
    /// Initialize the contract
    ///
    /// # Arguments
    /// * `organizer` - Address allowed to create rounds and collect the organizer fee
    /// * `payment_token` - Token contributions, payments and refunds are made in
    /// * `config` - Round constraints and contribution caps
    /// * `initial_supply` - Units minted to the organizer up front (may be 0)
    pub fn initialize(
        env: Env,
        organizer: Address,
        payment_token: Address,
        config: AuctionConfig,
        initial_supply: i128,
    ) -> Result<(), Error> {
        if has_organizer(&env) {
            return Err(Error::AlreadyInit);
        }
        organizer.require_auth();

        if !config.is_valid() {
            return Err(Error::InvalidConfig);
        }
        if initial_supply < 0 {
            return Err(Error::InvalidAmount);
        }

        set_organizer(&env, &organizer);
        set_payment_token(&env, &payment_token);
        set_config(&env, &config);
        set_round_count(&env, 0);

        let utils = TokenUtils::new(&env);
        utils.metadata().set_metadata(&TokenMetadata {
            decimal: UNIT_DECIMALS,
            name: String::from_str(&env, UNIT_NAME),
            symbol: String::from_str(&env, UNIT_SYMBOL),
        });

        if initial_supply > 0 {
            ledger::mint(&env, &Holder::Account(organizer.clone()), initial_supply)?;
            utils
                .events()
                .mint(env.current_contract_address(), organizer.clone(), initial_supply);
        }

        env.events()
            .publish((CONTRACT_INITIALIZED,), (organizer, payment_token));

        Ok(())
    }

    /// Change the cap on the amount a single contribution may add (organizer only)
    pub fn set_max_contribution(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        let organizer = get_organizer(&env)?;
        if caller != organizer {
            return Err(Error::NotOrganizer);
        }
        caller.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut config = get_config(&env)?;
        config.max_contribution_per_call = amount;
        set_config(&env, &config);

        env.events().publish((MAX_CONTRIBUTION_UPDATED,), amount);

        Ok(())
    }

    // ==================== Rounds ====================

    /// Create a new funding round (organizer only)
    ///
    /// # Arguments
    /// * `caller` - Must be the organizer
    /// * `min_target` - Amount the round must raise to succeed
    /// * `max_target` - Amount at which the round stops accepting contributions
    /// * `start_time` - First timestamp at which contributions are accepted
    /// * `end_time` - Timestamp from which the round no longer accepts contributions
    ///
    /// Returns the index of the new round.
    pub fn create_round(
        env: Env,
        caller: Address,
        min_target: i128,
        max_target: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<u32, Error> {
        let organizer = get_organizer(&env)?;
        if caller != organizer {
            return Err(Error::NotOrganizer);
        }
        caller.require_auth();

        let config = get_config(&env)?;
        let index = get_round_count(&env);
        let latest = match index {
            0 => None,
            _ => Some(get_round(&env, index - 1)?),
        };

        validation::validate_new_round(
            &config,
            env.ledger().timestamp(),
            min_target,
            max_target,
            start_time,
            end_time,
            latest.as_ref(),
        )?;

        let round = Round {
            index,
            min_target,
            max_target,
            start_time,
            end_time,
            raised_amount: 0,
            finished: false,
            success: false,
            proceeds_withdrawn: false,
        };

        set_round(&env, index, &round);
        set_round_count(&env, index.checked_add(1).ok_or(Error::Overflow)?);

        env.events().publish(
            (ROUND_CREATED, index),
            (min_target, max_target, start_time, end_time),
        );

        Ok(index)
    }

    /// Contribute to an active round
    ///
    /// The full `amount` is pulled from the contributor. Whatever exceeds the
    /// per-call cap or the round's remaining headroom is sent straight back,
    /// so a full round accepts 0 and refunds everything.
    ///
    /// # Arguments
    /// * `contributor` - Address paying in
    /// * `round_index` - Round to contribute to
    /// * `amount` - Amount of payment token offered
    /// * `fee_price` - Fee price attached to the call, capped by the config
    ///
    /// Returns the accepted amount.
    pub fn contribute(
        env: Env,
        contributor: Address,
        round_index: u32,
        amount: i128,
        fee_price: u64,
    ) -> Result<i128, Error> {
        contributor.require_auth();

        let config = get_config(&env)?;
        if fee_price > config.max_fee_price {
            return Err(Error::PriceTooHigh);
        }

        let mut round = get_round(&env, round_index)?;
        let now = env.ledger().timestamp();
        if now < round.start_time {
            return Err(Error::RoundNotStarted);
        }
        if now >= round.end_time {
            return Err(Error::RoundEnded);
        }

        if amount == 0 {
            return Err(Error::ZeroContribution);
        }
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let accepted = amount
            .min(config.max_contribution_per_call)
            .min(round.headroom());
        let excess = amount - accepted;

        let token_client = payment_token_client(&env)?;
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        round.raised_amount = round
            .raised_amount
            .checked_add(accepted)
            .ok_or(Error::Overflow)?;
        set_round(&env, round_index, &round);

        let recorded = get_contribution(&env, round_index, &contributor)
            .checked_add(accepted)
            .ok_or(Error::Overflow)?;
        set_contribution(&env, round_index, &contributor, recorded);

        if excess > 0 {
            token_client.transfer(&env.current_contract_address(), &contributor, &excess);
        }

        env.events().publish(
            (CONTRIBUTION_RECORDED, round_index, contributor),
            accepted,
        );

        Ok(accepted)
    }

    /// Close a round once its end time has passed. Anyone may call this.
    ///
    /// A round that reached its minimum target mints its raised amount into
    /// the reserve plus the organizer fee to the organizer.
    ///
    /// Returns whether the round succeeded.
    pub fn finish_round(env: Env, round_index: u32) -> Result<bool, Error> {
        require_initialized(&env)?;
        let mut round = get_round(&env, round_index)?;

        if round.finished {
            return Err(Error::RoundAlreadyFinished);
        }
        if env.ledger().timestamp() < round.end_time {
            return Err(Error::RoundNotFinished);
        }

        round.finished = true;
        round.success = round.raised_amount >= round.min_target;

        if round.success {
            let config = get_config(&env)?;
            let organizer = get_organizer(&env)?;
            let fee = round.raised_amount / config.organizer_fee_divisor;

            ledger::mint(&env, &Holder::Reserve, round.raised_amount)?;
            ledger::mint(&env, &Holder::Account(organizer.clone()), fee)?;

            let events = TokenUtils::new(&env).events();
            events.mint(
                env.current_contract_address(),
                env.current_contract_address(),
                round.raised_amount,
            );
            events.mint(env.current_contract_address(), organizer, fee);
        }

        set_round(&env, round_index, &round);

        env.events()
            .publish((ROUND_FINISHED, round_index), round.success);

        Ok(round.success)
    }

    /// Settle a contributor's share of a finished round. Anyone may call this
    /// on behalf of any account.
    ///
    /// Successful rounds credit the recorded amount as ownership units,
    /// failed rounds refund it in the payment token. Unfinished rounds and
    /// accounts with nothing recorded are left untouched.
    ///
    /// Returns the settled amount (0 when nothing happened).
    pub fn settle(env: Env, round_index: u32, account: Address) -> Result<i128, Error> {
        require_initialized(&env)?;
        let round = get_round(&env, round_index)?;
        if !round.finished {
            return Ok(0);
        }

        let amount = get_contribution(&env, round_index, &account);
        if amount == 0 {
            return Ok(0);
        }

        set_contribution(&env, round_index, &account, 0);

        if round.success {
            ledger::move_units(&env, &Holder::Reserve, &Holder::Account(account.clone()), amount)?;
            TokenUtils::new(&env)
                .events()
                .transfer(env.current_contract_address(), account, amount);
        } else {
            let token_client = payment_token_client(&env)?;
            token_client.transfer(&env.current_contract_address(), &account, &amount);
            env.events()
                .publish((CONTRIBUTION_REFUNDED, round_index, account), amount);
        }

        Ok(amount)
    }

    /// Settle the caller's own share of a finished round
    pub fn settle_own(env: Env, caller: Address, round_index: u32) -> Result<i128, Error> {
        caller.require_auth();
        Self::settle(env, round_index, caller)
    }

    /// Release the raised amount of a successful round to the organizer
    pub fn withdraw_proceeds(env: Env, caller: Address, round_index: u32) -> Result<i128, Error> {
        let organizer = get_organizer(&env)?;
        if caller != organizer {
            return Err(Error::NotOrganizer);
        }
        caller.require_auth();

        let mut round = get_round(&env, round_index)?;
        if !round.finished {
            return Err(Error::RoundNotFinished);
        }
        if !round.success {
            return Err(Error::RoundFailed);
        }
        if round.proceeds_withdrawn {
            return Err(Error::ProceedsWithdrawn);
        }

        round.proceeds_withdrawn = true;
        set_round(&env, round_index, &round);

        let token_client = payment_token_client(&env)?;
        token_client.transfer(
            &env.current_contract_address(),
            &organizer,
            &round.raised_amount,
        );

        env.events().publish(
            (PROCEEDS_RELEASED, round_index),
            (organizer, round.raised_amount),
        );

        Ok(round.raised_amount)
    }

    pub fn get_round(env: Env, round_index: u32) -> Result<Round, Error> {
        require_initialized(&env)?;
        get_round(&env, round_index)
    }

    /// The most recently created round
    pub fn latest_round(env: Env) -> Result<Round, Error> {
        require_initialized(&env)?;
        match get_round_count(&env) {
            0 => Err(Error::InvalidRoundIndex),
            count => get_round(&env, count - 1),
        }
    }

    pub fn round_count(env: Env) -> u32 {
        get_round_count(&env)
    }

    /// Amount recorded for `account` in a round and not yet settled
    pub fn contribution_of(env: Env, round_index: u32, account: Address) -> i128 {
        get_contribution(&env, round_index, &account)
    }

    // ==================== Ownership Ledger ====================

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        require_initialized(&env)?;
        from.require_auth();

        ledger::move_units(
            &env,
            &Holder::Account(from.clone()),
            &Holder::Account(to.clone()),
            amount,
        )?;

        TokenUtils::new(&env).events().transfer(from, to, amount);

        Ok(())
    }

    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), Error> {
        require_initialized(&env)?;
        owner.require_auth();

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        set_allowance(&env, &owner, &spender, amount);

        // Allowances never expire
        TokenUtils::new(&env)
            .events()
            .approve(owner, spender, amount, u32::MAX);

        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        spender.require_auth();

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let allowance = get_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(Error::InsufficientApproval);
        }

        set_allowance(&env, &from, &spender, allowance - amount);
        ledger::move_units(
            &env,
            &Holder::Account(from.clone()),
            &Holder::Account(to.clone()),
            amount,
        )?;

        TokenUtils::new(&env).events().transfer(from, to, amount);

        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &Holder::Account(id))
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        get_allowance(&env, &owner, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    /// Units minted for successful rounds and not yet settled to contributors
    ///
    /// These units earn dividends like any other holding, but nothing ever
    /// pays them out. Payment token accrued to them stays in the contract.
    pub fn unclaimed_units(env: Env) -> i128 {
        get_balance(&env, &Holder::Reserve)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        require_initialized(&env)?;
        Ok(TokenUtils::new(&env).metadata().get_metadata().name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        require_initialized(&env)?;
        Ok(TokenUtils::new(&env).metadata().get_metadata().symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        require_initialized(&env)?;
        Ok(TokenUtils::new(&env).metadata().get_metadata().decimal)
    }

    // ==================== Dividends ====================

    /// Pay `amount` of the payment token into the contract, split pro rata
    /// across everyone holding units at this moment.
    pub fn receive_payment(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        require_initialized(&env)?;
        from.require_auth();

        if amount == 0 {
            return Err(Error::ZeroAmount);
        }
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let token_client = payment_token_client(&env)?;
        token_client.transfer(&from, &env.current_contract_address(), &amount);

        let distributed = ledger::distribute(&env, amount)?;

        env.events()
            .publish((PAYMENT_RECEIVED, from), (amount, distributed));

        Ok(())
    }

    /// Dividends `account` can currently be paid
    pub fn owed(env: Env, account: Address) -> Result<i128, Error> {
        require_initialized(&env)?;
        ledger::owed(&env, &Holder::Account(account))
    }

    /// Pay out everything `account` is owed. Anyone may trigger this for any
    /// holder; calling it again before new payments arrive pays nothing.
    pub fn payout(env: Env, account: Address) -> Result<i128, Error> {
        require_initialized(&env)?;
        let amount = ledger::take_owed(&env, &Holder::Account(account.clone()))?;
        if amount == 0 {
            return Ok(0);
        }

        let token_client = payment_token_client(&env)?;
        token_client.transfer(&env.current_contract_address(), &account, &amount);

        env.events().publish((DIVIDEND_PAID, account), amount);

        Ok(amount)
    }

    /// Pay out the caller's own dividends
    pub fn payout_own(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        Self::payout(env, caller)
    }

    // ==================== Configuration ====================

    pub fn original_creator(env: Env) -> Result<Address, Error> {
        get_organizer(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        get_payment_token(&env)
    }

    pub fn config(env: Env) -> Result<AuctionConfig, Error> {
        get_config(&env)
    }

    pub fn max_fee_price(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.max_fee_price)
    }

    pub fn max_contribution(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.max_contribution_per_call)
    }

    /// Total payment token held by the contract
    ///
    /// Includes unsettled refunds, unwithdrawn proceeds, undistributed
    /// payments and dividends accrued to unclaimed units, so it is not all
    /// withdrawable.
    pub fn total_balance(env: Env) -> Result<i128, Error> {
        let token_client = payment_token_client(&env)?;
        Ok(token_client.balance(&env.current_contract_address()))
    }
}

fn require_initialized(env: &Env) -> Result<(), Error> {
    if !has_organizer(env) {
        return Err(Error::NotInit);
    }
    Ok(())
}

use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Organizer,
    PaymentToken,
    Config,
    RoundCount,
    Round(u32),                 // round index -> Round
    Contribution(u32, Address), // round index, contributor -> recorded amount
    TotalSupply,
    AccPerShare,
    Balance(Address),
    Correction(Address),
    Allowance(Address, Address), // owner, spender -> amount
    ReserveBalance,
    ReserveCorrection,
}

/// A position in the ownership ledger.
///
/// `Reserve` holds the units minted for a successful round until each
/// contributor settles their share out of it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Holder {
    Account(Address),
    Reserve,
}

impl Holder {
    pub fn balance_key(&self) -> DataKey {
        match self {
            Holder::Account(id) => DataKey::Balance(id.clone()),
            Holder::Reserve => DataKey::ReserveBalance,
        }
    }

    pub fn correction_key(&self) -> DataKey {
        match self {
            Holder::Account(id) => DataKey::Correction(id.clone()),
            Holder::Reserve => DataKey::ReserveCorrection,
        }
    }
}

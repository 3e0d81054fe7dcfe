use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    NotInit = 1,
    AlreadyInit = 2,
    NotOrganizer = 3,
    InvalidConfig = 4,
    InvalidAmount = 5,
    Overflow = 6,

    // Round creation errors
    InvalidTiming = 10,
    RoundTooShort = 11,
    StartInPast = 12,
    LeadTimeTooShort = 13,
    InvalidTargets = 14,
    InvalidMinimum = 15,
    OverlappingRound = 16,

    // Contribution errors
    PriceTooHigh = 20,
    InvalidRoundIndex = 21,
    RoundNotStarted = 22,
    RoundEnded = 23,
    ZeroContribution = 24,

    // Settlement errors
    RoundAlreadyFinished = 30,
    RoundNotFinished = 31,
    RoundFailed = 32,
    ProceedsWithdrawn = 33,

    // Ledger errors
    InsufficientBalance = 40,
    InsufficientApproval = 41,
    ZeroAmount = 42,
}

//! Contract error types for the Prize Pool Lottery.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Config not set - call initialize first
    NotInitialized = 2,
    /// Pool creation requires a non-zero initial funding
    InitialFundingRequired = 3,
    /// Pool name is empty or too long
    InvalidName = 4,
    /// Minimum participation must be greater than zero
    InvalidMinParticipation = 5,
    /// Win probability must be in (0, denominator]
    InvalidProbability = 6,
    /// Platform fee exceeds the allowed maximum
    PlatformFeeTooHigh = 7,
    /// Pool duration exceeds the allowed maximum
    InvalidDuration = 8,
    /// No pool exists with the given id
    PoolNotFound = 9,
    /// Pool is ended or its duration has elapsed
    PoolNotActive = 10,
    /// Wager is below the pool's minimum participation
    InsufficientParticipation = 11,
    /// Pool must be ended before withdrawing
    PoolStillActive = 12,
    /// No platform fees accrued
    NoFeesToWithdraw = 13,
    /// Prize balance is empty
    NoPrizeToWithdraw = 14,
    /// Randomness requests for this pool are still outstanding
    RandomnessPending = 15,
    /// No randomness request exists with the given id
    RequestNotFound = 16,
    /// Randomness request was already fulfilled
    RequestAlreadyFulfilled = 17,
    /// No participation exists at the given index
    ParticipationNotFound = 18,
    /// Arithmetic overflow occurred
    Overflow = 19,
}

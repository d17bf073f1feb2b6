//! Type definitions for the Prize Pool Lottery.

use soroban_sdk::{contracttype, Address, String};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // instance
    Config,
    PoolCount,
    RequestCount,
    // persistent
    Pool(u64),
    Participation(u64, u32),
    UserParticipationCount(u64, Address),
    UserParticipation(u64, Address, u32),
    CreatorPools(Address),
    Request(u64),
    UserStats(Address),
}

/// Contract-wide configuration written once by `initialize`
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Account allowed to deliver randomness
    pub oracle: Address,
    /// Asset wagered and paid out by every pool
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Pool {
    pub id: u64,
    pub name: String,
    pub owner: Address,
    pub min_participation: i128,
    pub win_probability: u32,
    pub win_probability_denominator: u32,
    pub platform_fee_percent: u32,
    pub created_at: u64,
    pub end_time: u64,           // 0 means no time limit
    pub is_active: bool,
    pub prize_balance: i128,     // Funds available for rewards
    pub accrued_fees: i128,      // Fees not yet withdrawn by the owner
    pub total_participants: u32,
    pub total_wagered: i128,
    pub total_winnings: i128,
    pub total_fees: i128,        // Lifetime fees, withdrawn or not
    pub winners_count: u32,
    pub pending_requests: u32,
}

/// One wager placed into a pool.
///
/// `resolved`, `has_won` and `reward` are written once by the randomness
/// callback.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Participation {
    pub participant: Address,
    pub amount: i128,
    pub fee: i128,
    pub timestamp: u64,
    pub request_id: u64,
    pub resolved: bool,
    pub has_won: bool,
    pub reward: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RandomnessRequest {
    pub pool_id: u64,
    pub participation_index: u32,
    pub requested_at: u32,       // Ledger sequence of the request
    pub fulfilled: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UserStats {
    pub total_participations: u32,
    pub total_wagered: i128,
    pub total_won: i128,
    pub wins: u32,
    pub losses: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl UserStats {
    pub fn empty() -> Self {
        UserStats {
            total_participations: 0,
            total_wagered: 0,
            total_won: 0,
            wins: 0,
            losses: 0,
            current_streak: 0,
            best_streak: 0,
        }
    }
}

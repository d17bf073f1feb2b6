#![no_std]
#![allow(clippy::too_many_arguments)]
//! # Prize Pool Lottery
//!
//! Soroban contract hosting a registry of funded prize pools.
//! Players wager into a pool; each wager requests a random word from an
//! external oracle whose callback decides win/loss against the pool's odds.
//!
//! ## Key Features
//! - Pool registry with per-creator index
//! - Platform fee retained by the pool owner on every wager
//! - Fair-odds rewards capped by the pool's prize balance
//! - Owner-only pool termination and withdrawals
//! - Checked arithmetic prevents overflow

mod contract;
mod errors;
mod events;
mod math;
mod randomness;
mod storage;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use contract::{PrizePoolContract, PrizePoolContractClient};
pub use errors::ContractError;
pub use types::{Config, DataKey, Participation, Pool, RandomnessRequest, UserStats};

//! Typed access to contract storage.
//!
//! Config and counters live in instance storage. Pools, participations,
//! requests and indexes are independent persistent entries whose TTL is
//! extended on every write.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::ContractError;
use crate::types::{Config, DataKey, Participation, Pool, RandomnessRequest, UserStats};

/// ~1 day at 5s per ledger
pub const BUMP_THRESHOLD: u32 = 17_280;
/// ~30 days at 5s per ledger
pub const BUMP_AMOUNT: u32 = 518_400;
/// Upper bound on items returned by one paginated read
pub const MAX_PAGE_SIZE: u32 = 100;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn pool_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::PoolCount)
        .unwrap_or(0)
}

/// Reserves the next pool id
pub fn next_pool_id(env: &Env) -> Result<u64, ContractError> {
    let id = pool_count(env);
    let next = id.checked_add(1).ok_or(ContractError::Overflow)?;
    env.storage().instance().set(&DataKey::PoolCount, &next);
    Ok(id)
}

/// Reserves the next randomness request id
pub fn next_request_id(env: &Env) -> Result<u64, ContractError> {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::RequestCount)
        .unwrap_or(0);
    let next = id.checked_add(1).ok_or(ContractError::Overflow)?;
    env.storage().instance().set(&DataKey::RequestCount, &next);
    Ok(id)
}

pub fn get_pool(env: &Env, pool_id: u64) -> Result<Pool, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Pool(pool_id))
        .ok_or(ContractError::PoolNotFound)
}

pub fn set_pool(env: &Env, pool: &Pool) {
    let key = DataKey::Pool(pool.id);
    env.storage().persistent().set(&key, pool);
    extend_persistent(env, &key);
}

pub fn get_participation(
    env: &Env,
    pool_id: u64,
    index: u32,
) -> Result<Participation, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Participation(pool_id, index))
        .ok_or(ContractError::ParticipationNotFound)
}

pub fn set_participation(env: &Env, pool_id: u64, index: u32, participation: &Participation) {
    let key = DataKey::Participation(pool_id, index);
    env.storage().persistent().set(&key, participation);
    extend_persistent(env, &key);
}

pub fn user_participation_count(env: &Env, pool_id: u64, user: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::UserParticipationCount(pool_id, user.clone()))
        .unwrap_or(0)
}

/// Maps the user's `nth` wager in a pool to its participation index
pub fn user_participation_index(env: &Env, pool_id: u64, user: &Address, nth: u32) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::UserParticipation(pool_id, user.clone(), nth))
}

/// Appends to the user's history as one entry per wager, so the index never
/// outgrows a single ledger entry
pub fn push_user_participation(
    env: &Env,
    pool_id: u64,
    user: &Address,
    index: u32,
) -> Result<(), ContractError> {
    let nth = user_participation_count(env, pool_id, user);

    let entry_key = DataKey::UserParticipation(pool_id, user.clone(), nth);
    env.storage().persistent().set(&entry_key, &index);
    extend_persistent(env, &entry_key);

    let next = nth.checked_add(1).ok_or(ContractError::Overflow)?;
    let count_key = DataKey::UserParticipationCount(pool_id, user.clone());
    env.storage().persistent().set(&count_key, &next);
    extend_persistent(env, &count_key);

    Ok(())
}

pub fn creator_pools(env: &Env, creator: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::CreatorPools(creator.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn push_creator_pool(env: &Env, creator: &Address, pool_id: u64) {
    let mut pools = creator_pools(env, creator);
    pools.push_back(pool_id);
    let key = DataKey::CreatorPools(creator.clone());
    env.storage().persistent().set(&key, &pools);
    extend_persistent(env, &key);
}

pub fn get_request(env: &Env, request_id: u64) -> Option<RandomnessRequest> {
    env.storage().persistent().get(&DataKey::Request(request_id))
}

pub fn set_request(env: &Env, request_id: u64, request: &RandomnessRequest) {
    let key = DataKey::Request(request_id);
    env.storage().persistent().set(&key, request);
    extend_persistent(env, &key);
}

pub fn get_user_stats(env: &Env, user: &Address) -> UserStats {
    env.storage()
        .persistent()
        .get(&DataKey::UserStats(user.clone()))
        .unwrap_or(UserStats::empty())
}

pub fn set_user_stats(env: &Env, user: &Address, stats: &UserStats) {
    let key = DataKey::UserStats(user.clone());
    env.storage().persistent().set(&key, stats);
    extend_persistent(env, &key);
}

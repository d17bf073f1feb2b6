//! Core contract implementation for the Prize Pool Lottery.

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, String, Vec};

use crate::errors::ContractError;
use crate::events::{
    FeesWithdrawnEvent, OracleUpdatedEvent, ParticipationEvent, ParticipationResolvedEvent,
    PoolCreatedEvent, PoolEndedEvent, PrizeWithdrawnEvent, RandomnessRequestedEvent,
    WinnerSelectedEvent,
};
use crate::math::{split_fee, winning_reward};
use crate::randomness::is_winning_roll;
use crate::storage::{self, MAX_PAGE_SIZE};
use crate::types::{Config, Participation, Pool, RandomnessRequest, UserStats};
use crate::validation::{validate_pool_params, PoolParams};

#[contract]
pub struct PrizePoolContract;

#[contractimpl]
impl PrizePoolContract {
    /// Initializes the contract with admin, randomness oracle and wager token (one-time only)
    pub fn initialize(
        env: Env,
        admin: Address,
        oracle: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        admin.require_auth();

        if storage::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        storage::set_config(&env, &Config { admin, oracle, token });

        Ok(())
    }

    /// Replaces the randomness oracle (admin only)
    pub fn set_oracle(env: Env, oracle: Address) -> Result<(), ContractError> {
        let mut config = storage::get_config(&env)?;
        config.admin.require_auth();

        config.oracle = oracle.clone();
        storage::set_config(&env, &config);

        OracleUpdatedEvent {
            admin: config.admin,
            oracle,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_config(env: Env) -> Option<Config> {
        storage::get_config(&env).ok()
    }

    /// Creates and funds a new pool, returning its id
    pub fn create_pool(
        env: Env,
        creator: Address,
        name: String,
        min_participation: i128,
        win_probability: u32,
        win_probability_denominator: u32,
        platform_fee_percent: u32,
        duration: u64,
        initial_funding: i128,
    ) -> Result<u64, ContractError> {
        creator.require_auth();

        let config = storage::get_config(&env)?;

        validate_pool_params(&PoolParams {
            name: &name,
            min_participation,
            win_probability,
            win_probability_denominator,
            platform_fee_percent,
            duration,
            initial_funding,
        })?;

        let now = env.ledger().timestamp();
        let end_time = if duration > 0 {
            now.checked_add(duration).ok_or(ContractError::Overflow)?
        } else {
            0
        };

        let pool_id = storage::next_pool_id(&env)?;

        token::Client::new(&env, &config.token).transfer(
            &creator,
            &env.current_contract_address(),
            &initial_funding,
        );

        let pool = Pool {
            id: pool_id,
            name: name.clone(),
            owner: creator.clone(),
            min_participation,
            win_probability,
            win_probability_denominator,
            platform_fee_percent,
            created_at: now,
            end_time,
            is_active: true,
            prize_balance: initial_funding,
            accrued_fees: 0,
            total_participants: 0,
            total_wagered: 0,
            total_winnings: 0,
            total_fees: 0,
            winners_count: 0,
            pending_requests: 0,
        };

        storage::set_pool(&env, &pool);
        storage::push_creator_pool(&env, &creator, pool_id);
        storage::extend_instance(&env);

        log!(&env, "pool created", pool_id, initial_funding);

        PoolCreatedEvent {
            pool_id,
            creator,
            name,
            initial_funding,
            end_time,
        }
        .publish(&env);

        Ok(pool_id)
    }

    pub fn get_pool_count(env: Env) -> u64 {
        storage::pool_count(&env)
    }

    /// Returns up to `limit` pool ids in creation order, starting at `start`.
    /// `limit` is clamped to `MAX_PAGE_SIZE`.
    pub fn get_all_pools(env: Env, start: u64, limit: u32) -> Vec<u64> {
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE) as u64)
            .min(storage::pool_count(&env));

        let mut pools = Vec::new(&env);
        for id in start..end {
            pools.push_back(id);
        }
        pools
    }

    /// Returns the ids of pools created by `creator`
    pub fn get_user_pools(env: Env, creator: Address) -> Vec<u64> {
        storage::creator_pools(&env, &creator)
    }

    pub fn is_pool(env: Env, pool_id: u64) -> bool {
        pool_id < storage::pool_count(&env)
    }

    pub fn get_pool(env: Env, pool_id: u64) -> Result<Pool, ContractError> {
        storage::get_pool(&env, pool_id)
    }

    /// True while the pool accepts participations
    pub fn is_pool_open(env: Env, pool_id: u64) -> bool {
        match storage::get_pool(&env, pool_id) {
            Ok(pool) => Self::_is_open(&env, &pool),
            Err(_) => false,
        }
    }

    pub fn total_participants(env: Env, pool_id: u64) -> u32 {
        storage::get_pool(&env, pool_id)
            .map(|pool| pool.total_participants)
            .unwrap_or(0)
    }

    /// Wagers `amount` into an open pool and requests randomness for it.
    /// Returns the participation index within the pool.
    pub fn participate(
        env: Env,
        pool_id: u64,
        participant: Address,
        amount: i128,
    ) -> Result<u32, ContractError> {
        participant.require_auth();

        let config = storage::get_config(&env)?;
        let mut pool = storage::get_pool(&env, pool_id)?;

        if !Self::_is_open(&env, &pool) {
            return Err(ContractError::PoolNotActive);
        }

        if amount < pool.min_participation {
            return Err(ContractError::InsufficientParticipation);
        }

        token::Client::new(&env, &config.token).transfer(
            &participant,
            &env.current_contract_address(),
            &amount,
        );

        let (fee, net) = split_fee(amount, pool.platform_fee_percent)?;

        pool.accrued_fees = pool.accrued_fees
            .checked_add(fee)
            .ok_or(ContractError::Overflow)?;
        pool.total_fees = pool.total_fees
            .checked_add(fee)
            .ok_or(ContractError::Overflow)?;
        pool.prize_balance = pool.prize_balance
            .checked_add(net)
            .ok_or(ContractError::Overflow)?;
        pool.total_wagered = pool.total_wagered
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;

        let index = pool.total_participants;
        pool.total_participants = index
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        pool.pending_requests = pool.pending_requests
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;

        let request_id = storage::next_request_id(&env)?;

        let participation = Participation {
            participant: participant.clone(),
            amount,
            fee,
            timestamp: env.ledger().timestamp(),
            request_id,
            resolved: false,
            has_won: false,
            reward: 0,
        };

        storage::set_participation(&env, pool_id, index, &participation);
        storage::push_user_participation(&env, pool_id, &participant, index)?;
        storage::set_request(
            &env,
            request_id,
            &RandomnessRequest {
                pool_id,
                participation_index: index,
                requested_at: env.ledger().sequence(),
                fulfilled: false,
            },
        );
        storage::set_pool(&env, &pool);
        Self::_record_wager(&env, &participant, amount)?;
        storage::extend_instance(&env);

        ParticipationEvent {
            pool_id,
            participant: participant.clone(),
            index,
            amount,
            fee,
        }
        .publish(&env);

        RandomnessRequestedEvent {
            pool_id,
            request_id,
            participant,
        }
        .publish(&env);

        Ok(index)
    }

    /// Randomness callback (oracle only).
    /// Decides win/loss for the request's participation and pays out winners.
    /// Returns whether the participation won.
    pub fn fulfill_randomness(
        env: Env,
        request_id: u64,
        random_word: BytesN<32>,
    ) -> Result<bool, ContractError> {
        let config = storage::get_config(&env)?;
        config.oracle.require_auth();

        let mut request =
            storage::get_request(&env, request_id).ok_or(ContractError::RequestNotFound)?;

        if request.fulfilled {
            return Err(ContractError::RequestAlreadyFulfilled);
        }

        let mut pool = storage::get_pool(&env, request.pool_id)?;
        let mut participation =
            storage::get_participation(&env, request.pool_id, request.participation_index)?;

        let has_won = is_winning_roll(
            &random_word,
            pool.win_probability,
            pool.win_probability_denominator,
        );

        let mut reward: i128 = 0;
        if has_won {
            let net = participation.amount
                .checked_sub(participation.fee)
                .ok_or(ContractError::Overflow)?;
            reward = winning_reward(
                net,
                pool.win_probability,
                pool.win_probability_denominator,
                pool.prize_balance,
            )?;

            pool.prize_balance = pool.prize_balance
                .checked_sub(reward)
                .ok_or(ContractError::Overflow)?;
            pool.total_winnings = pool.total_winnings
                .checked_add(reward)
                .ok_or(ContractError::Overflow)?;
            pool.winners_count = pool.winners_count
                .checked_add(1)
                .ok_or(ContractError::Overflow)?;
        }

        pool.pending_requests = pool.pending_requests.saturating_sub(1);

        participation.resolved = true;
        participation.has_won = has_won;
        participation.reward = reward;

        request.fulfilled = true;

        storage::set_request(&env, request_id, &request);
        storage::set_participation(
            &env,
            request.pool_id,
            request.participation_index,
            &participation,
        );
        storage::set_pool(&env, &pool);

        if has_won {
            Self::_update_stats_win(&env, &participation.participant, reward)?;
        } else {
            Self::_update_stats_loss(&env, &participation.participant);
        }

        if reward > 0 {
            token::Client::new(&env, &config.token).transfer(
                &env.current_contract_address(),
                &participation.participant,
                &reward,
            );
        }

        log!(&env, "randomness fulfilled", request_id, has_won, reward);

        ParticipationResolvedEvent {
            pool_id: request.pool_id,
            request_id,
            participant: participation.participant.clone(),
            has_won,
        }
        .publish(&env);

        if has_won {
            WinnerSelectedEvent {
                pool_id: request.pool_id,
                winner: participation.participant,
                index: request.participation_index,
                reward,
            }
            .publish(&env);
        }

        Ok(has_won)
    }

    pub fn get_request(env: Env, request_id: u64) -> Option<RandomnessRequest> {
        storage::get_request(&env, request_id)
    }

    /// Ends the pool (owner only). No further participation is accepted.
    pub fn end_pool(env: Env, pool_id: u64) -> Result<(), ContractError> {
        let mut pool = storage::get_pool(&env, pool_id)?;
        pool.owner.require_auth();

        if !pool.is_active {
            return Err(ContractError::PoolNotActive);
        }

        pool.is_active = false;
        storage::set_pool(&env, &pool);

        log!(&env, "pool ended", pool_id);

        PoolEndedEvent {
            pool_id,
            owner: pool.owner,
            total_participants: pool.total_participants,
        }
        .publish(&env);

        Ok(())
    }

    /// Sends accrued platform fees to the owner once the pool has ended
    pub fn withdraw_platform_fees(env: Env, pool_id: u64) -> Result<i128, ContractError> {
        let config = storage::get_config(&env)?;
        let mut pool = storage::get_pool(&env, pool_id)?;
        pool.owner.require_auth();

        if Self::_is_open(&env, &pool) {
            return Err(ContractError::PoolStillActive);
        }

        let amount = pool.accrued_fees;
        if amount <= 0 {
            return Err(ContractError::NoFeesToWithdraw);
        }

        pool.accrued_fees = 0;
        storage::set_pool(&env, &pool);

        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &pool.owner,
            &amount,
        );

        FeesWithdrawnEvent {
            pool_id,
            owner: pool.owner,
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    /// Returns the unclaimed prize balance to the owner once the pool has
    /// ended and every randomness request has been fulfilled
    pub fn withdraw_remaining_prize(env: Env, pool_id: u64) -> Result<i128, ContractError> {
        let config = storage::get_config(&env)?;
        let mut pool = storage::get_pool(&env, pool_id)?;
        pool.owner.require_auth();

        if Self::_is_open(&env, &pool) {
            return Err(ContractError::PoolStillActive);
        }

        if pool.pending_requests > 0 {
            return Err(ContractError::RandomnessPending);
        }

        let amount = pool.prize_balance;
        if amount <= 0 {
            return Err(ContractError::NoPrizeToWithdraw);
        }

        pool.prize_balance = 0;
        storage::set_pool(&env, &pool);

        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &pool.owner,
            &amount,
        );

        PrizeWithdrawnEvent {
            pool_id,
            owner: pool.owner,
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    pub fn get_participant(
        env: Env,
        pool_id: u64,
        index: u32,
    ) -> Result<Participation, ContractError> {
        storage::get_participation(&env, pool_id, index)
    }

    pub fn get_user_participation_count(env: Env, pool_id: u64, user: Address) -> u32 {
        storage::user_participation_count(&env, pool_id, &user)
    }

    /// Returns one page of the user's participation history in a pool,
    /// oldest first. `limit` is clamped to `MAX_PAGE_SIZE`.
    pub fn get_user_participations(
        env: Env,
        pool_id: u64,
        user: Address,
        start: u32,
        limit: u32,
    ) -> Vec<Participation> {
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE))
            .min(storage::user_participation_count(&env, pool_id, &user));
        let mut history = Vec::new(&env);

        for nth in start..end {
            let participation = storage::user_participation_index(&env, pool_id, &user, nth)
                .and_then(|index| storage::get_participation(&env, pool_id, index).ok());
            if let Some(participation) = participation {
                history.push_back(participation);
            }
        }

        history
    }

    /// Returns user statistics across all pools
    pub fn get_user_stats(env: Env, user: Address) -> UserStats {
        storage::get_user_stats(&env, &user)
    }

    fn _is_open(env: &Env, pool: &Pool) -> bool {
        pool.is_active && (pool.end_time == 0 || env.ledger().timestamp() < pool.end_time)
    }

    fn _record_wager(env: &Env, user: &Address, amount: i128) -> Result<(), ContractError> {
        let mut stats = storage::get_user_stats(env, user);

        stats.total_participations = stats.total_participations
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        stats.total_wagered = stats.total_wagered
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;

        storage::set_user_stats(env, user, &stats);
        Ok(())
    }

    pub(crate) fn _update_stats_win(
        env: &Env,
        user: &Address,
        reward: i128,
    ) -> Result<(), ContractError> {
        let mut stats = storage::get_user_stats(env, user);

        stats.wins += 1;
        stats.current_streak += 1;
        stats.total_won = stats.total_won
            .checked_add(reward)
            .ok_or(ContractError::Overflow)?;

        if stats.current_streak > stats.best_streak {
            stats.best_streak = stats.current_streak;
        }

        storage::set_user_stats(env, user, &stats);
        Ok(())
    }

    pub(crate) fn _update_stats_loss(env: &Env, user: &Address) {
        let mut stats = storage::get_user_stats(env, user);

        stats.losses += 1;
        stats.current_streak = 0;

        storage::set_user_stats(env, user, &stats);
    }
}

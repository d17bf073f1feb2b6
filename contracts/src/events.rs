//! Events published by the Prize Pool Lottery.

use soroban_sdk::{contractevent, Address, String};

#[contractevent(topics = ["pool_created"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreatedEvent {
    pub pool_id: u64,
    pub creator: Address,
    pub name: String,
    pub initial_funding: i128,
    pub end_time: u64,
}

#[contractevent(topics = ["participation"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipationEvent {
    pub pool_id: u64,
    pub participant: Address,
    pub index: u32,
    pub amount: i128,
    pub fee: i128,
}

#[contractevent(topics = ["randomness_requested"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomnessRequestedEvent {
    pub pool_id: u64,
    pub request_id: u64,
    pub participant: Address,
}

#[contractevent(topics = ["participation_resolved"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipationResolvedEvent {
    pub pool_id: u64,
    pub request_id: u64,
    pub participant: Address,
    pub has_won: bool,
}

#[contractevent(topics = ["winner_selected"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinnerSelectedEvent {
    pub pool_id: u64,
    pub winner: Address,
    pub index: u32,
    pub reward: i128,
}

#[contractevent(topics = ["pool_ended"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolEndedEvent {
    pub pool_id: u64,
    pub owner: Address,
    pub total_participants: u32,
}

#[contractevent(topics = ["fees_withdrawn"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawnEvent {
    pub pool_id: u64,
    pub owner: Address,
    pub amount: i128,
}

#[contractevent(topics = ["prize_withdrawn"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrizeWithdrawnEvent {
    pub pool_id: u64,
    pub owner: Address,
    pub amount: i128,
}

#[contractevent(topics = ["oracle_updated"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleUpdatedEvent {
    pub admin: Address,
    pub oracle: Address,
}

//! Tests for contract initialization and configuration.

use crate::contract::{PrizePoolContract, PrizePoolContractClient};
use crate::errors::ContractError;
use crate::tests::{losing_word, TestContext, FUNDING, MIN_PARTICIPATION};
use soroban_sdk::{
    testutils::{Address as _, MockAuth, MockAuthInvoke},
    Address, Env, IntoVal, String, Val, Vec,
};

#[test]
fn test_initialize() {
    let env = Env::default();
    let contract_id = env.register(PrizePoolContract, ());
    let client = PrizePoolContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let oracle = Address::generate(&env);
    let token = Address::generate(&env);

    env.mock_all_auths();

    client.initialize(&admin, &oracle, &token);

    let config = client.get_config().expect("Config should be set");
    assert_eq!(config.admin, admin);
    assert_eq!(config.oracle, oracle);
    assert_eq!(config.token, token);
}

#[test]
fn test_initialize_twice_fails() {
    let env = Env::default();
    let contract_id = env.register(PrizePoolContract, ());
    let client = PrizePoolContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let oracle = Address::generate(&env);
    let token = Address::generate(&env);

    env.mock_all_auths();

    client.initialize(&admin, &oracle, &token);

    let result = client.try_initialize(&admin, &oracle, &token);
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
}

#[test]
fn test_get_config_before_initialize() {
    let env = Env::default();
    let contract_id = env.register(PrizePoolContract, ());
    let client = PrizePoolContractClient::new(&env, &contract_id);

    assert_eq!(client.get_config(), None);
}

#[test]
fn test_create_pool_without_init_fails() {
    let env = Env::default();
    let contract_id = env.register(PrizePoolContract, ());
    let client = PrizePoolContractClient::new(&env, &contract_id);
    let creator = Address::generate(&env);

    env.mock_all_auths();

    let result = client.try_create_pool(
        &creator,
        &String::from_str(&env, "Test Pool"),
        &MIN_PARTICIPATION,
        &1,
        &10,
        &20,
        &0,
        &FUNDING,
    );
    assert_eq!(result, Err(Ok(ContractError::NotInitialized)));
}

#[test]
fn test_set_oracle() {
    let ctx = TestContext::new();
    let new_oracle = Address::generate(&ctx.env);

    ctx.client.set_oracle(&new_oracle);

    // Only the admin had to authorize the change
    let auths = ctx.env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, ctx.admin);

    let config = ctx.client.get_config().unwrap();
    assert_eq!(config.oracle, new_oracle);
    assert_ne!(config.oracle, ctx.oracle);
}

#[test]
fn test_rotated_oracle_replaces_previous() {
    let ctx = TestContext::new();
    let creator = ctx.funded_user();
    let player = ctx.funded_user();
    let pool_id = ctx.create_default_pool(&creator);
    ctx.client.participate(&pool_id, &player, &MIN_PARTICIPATION);

    let new_oracle = Address::generate(&ctx.env);
    ctx.client.set_oracle(&new_oracle);

    let word = losing_word(&ctx.env);
    let args: Vec<Val> = (0u64, word.clone()).into_val(&ctx.env);

    // Previous oracle's signature is no longer accepted
    let result = ctx
        .client
        .mock_auths(&[MockAuth {
            address: &ctx.oracle,
            invoke: &MockAuthInvoke {
                contract: &ctx.client.address,
                fn_name: "fulfill_randomness",
                args: args.clone(),
                sub_invokes: &[],
            },
        }])
        .try_fulfill_randomness(&0, &word);
    assert!(result.is_err());
    assert!(!ctx.client.get_participant(&pool_id, &0).resolved);

    // The new oracle's is
    let won = ctx
        .client
        .mock_auths(&[MockAuth {
            address: &new_oracle,
            invoke: &MockAuthInvoke {
                contract: &ctx.client.address,
                fn_name: "fulfill_randomness",
                args,
                sub_invokes: &[],
            },
        }])
        .fulfill_randomness(&0, &word);
    assert!(!won);
    assert!(ctx.client.get_participant(&pool_id, &0).resolved);
}

//! Test modules for the Prize Pool Lottery contract.

mod initialization;

use crate::contract::{PrizePoolContract, PrizePoolContractClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env, String,
};

/// Default initial funding for test pools (100 tokens)
pub(crate) const FUNDING: i128 = 100_0000000;
/// Default minimum participation (1 token)
pub(crate) const MIN_PARTICIPATION: i128 = 1_0000000;
/// Starting balance minted to generated users
pub(crate) const USER_BALANCE: i128 = 1000_0000000;

/// Initialized contract plus a Stellar asset used as the wager token
pub(crate) struct TestContext<'a> {
    pub env: Env,
    pub client: PrizePoolContractClient<'a>,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
    pub admin: Address,
    pub oracle: Address,
}

impl<'a> TestContext<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(PrizePoolContract, ());
        let client = PrizePoolContractClient::new(&env, &contract_id);

        let issuer = Address::generate(&env);
        let sac = env.register_stellar_asset_contract_v2(issuer);
        let token = TokenClient::new(&env, &sac.address());
        let token_admin = StellarAssetClient::new(&env, &sac.address());

        let admin = Address::generate(&env);
        let oracle = Address::generate(&env);
        client.initialize(&admin, &oracle, &sac.address());

        TestContext {
            env,
            client,
            token,
            token_admin,
            admin,
            oracle,
        }
    }

    /// Generates an address holding `USER_BALANCE` tokens
    pub fn funded_user(&self) -> Address {
        let user = Address::generate(&self.env);
        self.token_admin.mint(&user, &USER_BALANCE);
        user
    }

    /// Creates "Test Pool": 1 in 10 odds, 20% fee, no time limit
    pub fn create_default_pool(&self, creator: &Address) -> u64 {
        self.client.create_pool(
            creator,
            &String::from_str(&self.env, "Test Pool"),
            &MIN_PARTICIPATION,
            &1,
            &10,
            &20,
            &0,
            &FUNDING,
        )
    }

    pub fn contract_balance(&self) -> i128 {
        self.token.balance(&self.client.address)
    }
}

/// Builds an oracle word whose leading 8 bytes encode `head`
pub(crate) fn random_word(env: &Env, head: u64) -> BytesN<32> {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&head.to_be_bytes());
    BytesN::from_array(env, &bytes)
}

/// Rolls 0: wins any pool
pub(crate) fn winning_word(env: &Env) -> BytesN<32> {
    random_word(env, 0)
}

/// Rolls 9 on a 1 in 10 pool: loses
pub(crate) fn losing_word(env: &Env) -> BytesN<32> {
    random_word(env, 9)
}

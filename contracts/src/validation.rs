//! Parameter checks applied when a pool is created.

use soroban_sdk::String;

use crate::errors::ContractError;

pub const MAX_NAME_LEN: u32 = 50;
pub const MAX_PLATFORM_FEE_PERCENT: u32 = 50;
/// One year, in seconds
pub const MAX_DURATION: u64 = 365 * 24 * 60 * 60;

/// Pool parameters as supplied to `create_pool`
pub struct PoolParams<'a> {
    pub name: &'a String,
    pub min_participation: i128,
    pub win_probability: u32,
    pub win_probability_denominator: u32,
    pub platform_fee_percent: u32,
    pub duration: u64,
    pub initial_funding: i128,
}

pub fn validate_pool_params(params: &PoolParams) -> Result<(), ContractError> {
    if params.initial_funding <= 0 {
        return Err(ContractError::InitialFundingRequired);
    }

    let name_len = params.name.len();
    if name_len == 0 || name_len > MAX_NAME_LEN {
        return Err(ContractError::InvalidName);
    }

    if params.min_participation <= 0 {
        return Err(ContractError::InvalidMinParticipation);
    }

    if params.win_probability_denominator == 0
        || params.win_probability == 0
        || params.win_probability > params.win_probability_denominator
    {
        return Err(ContractError::InvalidProbability);
    }

    if params.platform_fee_percent > MAX_PLATFORM_FEE_PERCENT {
        return Err(ContractError::PlatformFeeTooHigh);
    }

    if params.duration > MAX_DURATION {
        return Err(ContractError::InvalidDuration);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    fn params(name: &String) -> PoolParams<'_> {
        PoolParams {
            name,
            min_participation: 100,
            win_probability: 1,
            win_probability_denominator: 10,
            platform_fee_percent: 20,
            duration: 0,
            initial_funding: 1_000,
        }
    }

    #[test]
    fn test_valid_params() {
        let env = Env::default();
        let name = String::from_str(&env, "Test Pool");
        assert_eq!(validate_pool_params(&params(&name)), Ok(()));
    }

    #[test]
    fn test_probability_bounds() {
        let env = Env::default();
        let name = String::from_str(&env, "Test Pool");

        let mut p = params(&name);
        p.win_probability = 10;
        assert_eq!(validate_pool_params(&p), Ok(()));

        p.win_probability = 11;
        assert_eq!(validate_pool_params(&p), Err(ContractError::InvalidProbability));

        p.win_probability = 0;
        assert_eq!(validate_pool_params(&p), Err(ContractError::InvalidProbability));

        p.win_probability = 1;
        p.win_probability_denominator = 0;
        assert_eq!(validate_pool_params(&p), Err(ContractError::InvalidProbability));
    }

    #[test]
    fn test_fee_and_duration_limits() {
        let env = Env::default();
        let name = String::from_str(&env, "Test Pool");

        let mut p = params(&name);
        p.platform_fee_percent = MAX_PLATFORM_FEE_PERCENT;
        assert_eq!(validate_pool_params(&p), Ok(()));
        p.platform_fee_percent = 60;
        assert_eq!(validate_pool_params(&p), Err(ContractError::PlatformFeeTooHigh));

        p.platform_fee_percent = 5;
        p.duration = MAX_DURATION;
        assert_eq!(validate_pool_params(&p), Ok(()));
        p.duration = MAX_DURATION + 1;
        assert_eq!(validate_pool_params(&p), Err(ContractError::InvalidDuration));
    }

    #[test]
    fn test_name_length() {
        let env = Env::default();

        let empty = String::from_str(&env, "");
        assert_eq!(validate_pool_params(&params(&empty)), Err(ContractError::InvalidName));

        let long = String::from_str(&env, "This pool name is definitely longer than fifty bytes");
        assert_eq!(validate_pool_params(&params(&long)), Err(ContractError::InvalidName));
    }
}

//! Checked arithmetic for fee splitting and reward sizing.

use crate::errors::ContractError;

/// Splits a wager into `(fee, net)`. The fee rounds down.
pub fn split_fee(amount: i128, platform_fee_percent: u32) -> Result<(i128, i128), ContractError> {
    let fee = amount
        .checked_mul(platform_fee_percent as i128)
        .ok_or(ContractError::Overflow)?
        / 100;
    let net = amount.checked_sub(fee).ok_or(ContractError::Overflow)?;
    Ok((fee, net))
}

/// Fair-odds reward for a winning wager, capped at what the pool holds.
/// Formula: min(net * denominator / numerator, prize_balance)
///
/// A win against a drained pool yields 0. The participation is still
/// recorded as won and `WinnerSelectedEvent` still fires with `reward: 0`;
/// consumers must read `reward`, not `has_won`, to know whether anything
/// was paid.
pub fn winning_reward(
    net: i128,
    win_probability: u32,
    win_probability_denominator: u32,
    prize_balance: i128,
) -> Result<i128, ContractError> {
    if win_probability == 0 {
        return Err(ContractError::InvalidProbability);
    }
    let gross = net
        .checked_mul(win_probability_denominator as i128)
        .ok_or(ContractError::Overflow)?
        / win_probability as i128;
    Ok(gross.min(prize_balance).max(0))
}

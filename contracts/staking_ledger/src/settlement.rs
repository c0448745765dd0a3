use common::reentrancy::ReentrancyGuard;
use soroban_sdk::{log, token, Address, Env};

use crate::{events, ledger, rewards, ContractError};

/// Pay out `participant`'s matured stake plus reward.
///
/// The caller must already hold the reentrancy lock; the `_lock` borrow makes
/// that a type-level requirement. Every check runs before the record is
/// cleared, and the record is cleared before the transfer, so a nested
/// `withdraw` reached through the asset contract finds either the lock or an
/// empty ledger.
///
/// Returns the amount transferred (`principal + reward`).
pub fn settle(
    env: &Env,
    _lock: &ReentrancyGuard,
    asset: &Address,
    participant: &Address,
    now: u64,
) -> Result<i128, ContractError> {
    // 1. Validate against the current record without mutating anything.
    let record = ledger::peek(env, participant);
    if !record.active {
        return Err(ContractError::NoActiveStake);
    }
    if !rewards::has_matured(&record, now) {
        return Err(ContractError::MinimumPeriodNotMet);
    }

    let reward = rewards::reward(&record, now);
    let payout = record
        .amount
        .checked_add(reward)
        .ok_or(ContractError::ArithmeticOverflow)?;

    let client = token::Client::new(env, asset);
    let contract = env.current_contract_address();
    let pool = client.balance(&contract);
    if pool < payout {
        log!(env, "pool cannot cover payout", pool, payout);
        return Err(ContractError::InsufficientPool);
    }

    // 2. Effects: drop the stake before any value leaves the contract.
    let cleared = ledger::clear(env, participant)?;
    let total = ledger::total_staked(env);

    // 3. Interaction.
    client.transfer(&contract, participant, &payout);

    events::publish_withdrawn(env, participant.clone(), cleared.amount, reward, total);

    Ok(payout)
}

/// Move the contract's entire asset balance to `owner`.
///
/// Stake records are left as they are; honouring them afterwards depends on
/// the owner refunding the pool.
pub fn sweep(
    env: &Env,
    _lock: &ReentrancyGuard,
    asset: &Address,
    owner: &Address,
) -> i128 {
    let client = token::Client::new(env, asset);
    let contract = env.current_contract_address();
    let balance = client.balance(&contract);

    if balance > 0 {
        client.transfer(&contract, owner, &balance);
    }

    events::publish_emergency_withdrawn(env, owner.clone(), balance);

    balance
}

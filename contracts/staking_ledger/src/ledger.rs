use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::ContractError;

// ── Storage key constants ───────────────────────────────────────────────────

/// Aggregate of every active stake's `amount`.
const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");

/// Per-participant persistent key prefix: `(STAKE, participant)`.
const STAKE: Symbol = symbol_short!("STAKE");

const STAKE_TTL_THRESHOLD: u32 = 518_400; // ~30 days
const STAKE_TTL_EXTEND_TO: u32 = 1_036_800; // ~60 days

// ── Types ───────────────────────────────────────────────────────────────────

/// A participant's position in the ledger.
///
/// At most one record per participant is active at a time. A participant with
/// no stake reads back as the zero record.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakeRecord {
    /// Principal in the asset's smallest denomination.
    pub amount: i128,
    /// Ledger timestamp at which the stake was opened.
    pub start_time: u64,
    pub active: bool,
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn stake_key(participant: &Address) -> (Symbol, Address) {
    (STAKE, participant.clone())
}

fn extend_stake_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, STAKE_TTL_THRESHOLD, STAKE_TTL_EXTEND_TO);
}

fn set_total_staked(env: &Env, total: i128) {
    env.storage().instance().set(&TOTAL_STAKED, &total);
}

// ── Ledger operations ───────────────────────────────────────────────────────

/// Current record for `participant`, or the zero record if none is active.
///
/// Reading an open stake extends its TTL, so a position that is looked at
/// stays live for as long as it is held.
pub fn peek(env: &Env, participant: &Address) -> StakeRecord {
    let key = stake_key(participant);
    match env.storage().persistent().get::<_, StakeRecord>(&key) {
        Some(record) => {
            extend_stake_ttl(env, &key);
            record
        }
        None => StakeRecord::default(),
    }
}

/// Sum of every active stake.
pub fn total_staked(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
}

/// Open a stake of `amount` for `participant` at ledger time `now`.
///
/// Returns the new aggregate total.
pub fn open(
    env: &Env,
    participant: &Address,
    amount: i128,
    now: u64,
) -> Result<i128, ContractError> {
    if amount <= 0 {
        return Err(ContractError::ZeroAmount);
    }
    if peek(env, participant).active {
        return Err(ContractError::AlreadyStaking);
    }

    let new_total = total_staked(env)
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    let record = StakeRecord {
        amount,
        start_time: now,
        active: true,
    };
    let key = stake_key(participant);
    env.storage().persistent().set(&key, &record);
    extend_stake_ttl(env, &key);
    set_total_staked(env, new_total);

    Ok(new_total)
}

/// Remove `participant`'s active stake and return it as it stood before removal.
///
/// Must run before any payout so a nested call observes no stake.
pub fn clear(env: &Env, participant: &Address) -> Result<StakeRecord, ContractError> {
    let record = peek(env, participant);
    if !record.active {
        return Err(ContractError::NoActiveStake);
    }

    let new_total = total_staked(env)
        .checked_sub(record.amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    env.storage().persistent().remove(&stake_key(participant));
    set_total_staked(env, new_total);

    Ok(record)
}

use crate::ledger::StakeRecord;

/// Seconds a stake must age before it earns a reward and may be withdrawn.
///
/// Seven days: a stake withdrawn after five days earns nothing, one withdrawn
/// after ten days earns the full flat rate.
pub const MIN_STAKING_PERIOD: u64 = 7 * 24 * 60 * 60;

/// Flat reward paid once the minimum period has elapsed, as a fraction of
/// principal: `REWARD_RATE_NUMERATOR / REWARD_RATE_DENOMINATOR` (1%).
pub const REWARD_RATE_NUMERATOR: i128 = 10;
pub const REWARD_RATE_DENOMINATOR: i128 = 1_000;

// ── Core reward engine ──────────────────────────────────────────────────────

/// Seconds between `record.start_time` and `now`.
///
/// Saturates at zero when the ledger clock reads earlier than the stake.
pub fn stake_age(record: &StakeRecord, now: u64) -> u64 {
    now.saturating_sub(record.start_time)
}

/// Whether the stake has been held for at least `MIN_STAKING_PERIOD`.
pub fn has_matured(record: &StakeRecord, now: u64) -> bool {
    stake_age(record, now) >= MIN_STAKING_PERIOD
}

/// `floor(amount × NUMERATOR / DENOMINATOR)` without an intermediate product
/// that can overflow.
///
/// Splitting `amount = q × DENOMINATOR + r` gives
///
/// ```text
/// floor(amount × N / D) = q × N + floor(r × N / D)
/// ```
///
/// where `q × N ≤ amount` and `r × N < D × N`, so every step fits in `i128`
/// for any non-negative principal. Non-positive amounts earn nothing.
#[allow(clippy::arithmetic_side_effects)]
pub fn flat_reward(amount: i128) -> i128 {
    if amount <= 0 {
        return 0;
    }

    let whole = amount / REWARD_RATE_DENOMINATOR;
    let remainder = amount % REWARD_RATE_DENOMINATOR;

    whole * REWARD_RATE_NUMERATOR + remainder * REWARD_RATE_NUMERATOR / REWARD_RATE_DENOMINATOR
}

/// Reward owed on `record` at ledger time `now`.
///
/// A step function: zero until the stake matures, then the flat rate on
/// principal regardless of how much longer it has been held.
pub fn reward(record: &StakeRecord, now: u64) -> i128 {
    if !record.active || !has_matured(record, now) {
        return 0;
    }
    flat_reward(record.amount)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure arithmetic, no Soroban environment.

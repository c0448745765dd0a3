#![no_std]

pub mod events;
pub mod ledger;
pub mod rewards;
pub mod settlement;

use common::{ownership, reentrancy};
use soroban_sdk::{contract, contractimpl, log, symbol_short, token, Address, Env, Symbol};

pub use ledger::StakeRecord;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const ASSET: Symbol = symbol_short!("ASSET");

const INSTANCE_TTL_THRESHOLD: u32 = 518_400; // ~30 days
const INSTANCE_TTL_EXTEND_TO: u32 = 1_036_800; // ~60 days

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    ZeroAmount = 3,
    AlreadyStaking = 4,
    NoActiveStake = 5,
    MinimumPeriodNotMet = 6,
    Reentrant = 7,
    NotOwner = 8,
    InsufficientPool = 9,
    NoPendingOwner = 10,
    ArithmeticOverflow = 11,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingLedgerContract;

#[contractimpl]
impl StakingLedgerContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger.
    ///
    /// * `owner` – the single principal allowed to call `emergency_withdraw`.
    /// * `asset` – SAC address of the staked asset (the native XLM SAC on
    ///   mainnet). Principal and rewards are both paid in this asset.
    pub fn initialize(env: Env, owner: Address, asset: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        ownership::set_owner(&env, &owner);
        env.storage().instance().set(&ASSET, &asset);
        env.storage().instance().set(&INITIALIZED, &true);
        Self::extend_instance_ttl(&env);

        events::publish_initialized(&env, owner, asset);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Open a stake of `amount` for `participant`.
    ///
    /// Fails with `ZeroAmount` for a non-positive amount and `AlreadyStaking`
    /// while the participant still has an active stake. The record is written
    /// before the asset is pulled; a failed pull rolls the whole call back.
    pub fn stake(env: Env, participant: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        if reentrancy::is_locked(&env) {
            return Err(ContractError::Reentrant);
        }
        participant.require_auth();

        let now = env.ledger().timestamp();
        let total = ledger::open(&env, &participant, amount, now)?;

        let asset = Self::asset(&env)?;
        token::Client::new(&env, &asset).transfer(
            &participant,
            &env.current_contract_address(),
            &amount,
        );
        Self::extend_instance_ttl(&env);

        log!(&env, "stake opened", participant, amount, now);
        events::publish_staked(&env, participant, amount, total);

        Ok(())
    }

    /// Close `participant`'s stake and pay out principal plus reward.
    ///
    /// The reentrancy lock is taken before anything else, so a nested call
    /// made while the payout is in flight fails with `Reentrant`.
    pub fn withdraw(env: Env, participant: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        let lock = reentrancy::enter(&env).ok_or(ContractError::Reentrant)?;
        participant.require_auth();

        let asset = Self::asset(&env)?;
        let now = env.ledger().timestamp();
        let payout = settlement::settle(&env, &lock, &asset, &participant, now)?;
        Self::extend_instance_ttl(&env);

        log!(&env, "stake settled", participant, payout);

        Ok(payout)
    }

    /// Owner-only: move the contract's whole asset balance to the owner.
    ///
    /// Outstanding stake records are not touched. Returns the amount moved.
    pub fn emergency_withdraw(env: Env, caller: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;
        let lock = reentrancy::enter(&env).ok_or(ContractError::Reentrant)?;

        let asset = Self::asset(&env)?;
        let swept = settlement::sweep(&env, &lock, &asset, &caller);
        Self::extend_instance_ttl(&env);

        log!(&env, "emergency sweep", caller, swept);

        Ok(swept)
    }

    // ── Reward pool ─────────────────────────────────────────────────────────

    /// Transfer `amount` of the asset from `funder` into the reward pool.
    ///
    /// The ledger never mints rewards; every reward paid must have been
    /// funded here or by a direct transfer to the contract.
    pub fn fund_pool(env: Env, funder: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        funder.require_auth();

        let asset = Self::asset(&env)?;
        token::Client::new(&env, &asset).transfer(
            &funder,
            &env.current_contract_address(),
            &amount,
        );

        Self::extend_instance_ttl(&env);

        events::publish_pool_funded(&env, funder, amount);

        Ok(())
    }

    /// The contract's current balance of the staked asset.
    pub fn get_pool_balance(env: Env) -> Result<i128, ContractError> {
        let asset = Self::asset(&env)?;
        Ok(token::Client::new(&env, &asset).balance(&env.current_contract_address()))
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Reward `participant` would receive if they withdrew now.
    pub fn calculate_reward(env: Env, participant: Address) -> i128 {
        let record = ledger::peek(&env, &participant);
        rewards::reward(&record, env.ledger().timestamp())
    }

    /// `(amount, start_time, active)` for `participant`; the zero record if
    /// they have no stake.
    pub fn get_stake_info(env: Env, participant: Address) -> StakeRecord {
        let record = ledger::peek(&env, &participant);
        Self::extend_instance_ttl(&env);
        record
    }

    pub fn get_total_staked(env: Env) -> i128 {
        ledger::total_staked(&env)
    }

    /// Seconds a stake must age before it can be withdrawn.
    pub fn get_min_staking_period() -> u64 {
        rewards::MIN_STAKING_PERIOD
    }

    /// Reward rate as `(numerator, denominator)`.
    pub fn get_reward_rate() -> (i128, i128) {
        (
            rewards::REWARD_RATE_NUMERATOR,
            rewards::REWARD_RATE_DENOMINATOR,
        )
    }

    pub fn get_asset(env: Env) -> Result<Address, ContractError> {
        Self::asset(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn version() -> u32 {
        1
    }

    // ── Ownership (two-step) ─────────────────────────────────────────────────

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        ownership::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        ownership::get_pending_owner(&env)
    }

    /// Propose `candidate` as the next owner. Takes effect once the candidate
    /// calls `accept_owner`.
    pub fn propose_owner(
        env: Env,
        current_owner: Address,
        candidate: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();
        Self::require_owner(&env, &current_owner)?;

        ownership::set_pending_owner(&env, &candidate);

        events::publish_ownership_proposed(&env, current_owner, candidate);

        Ok(())
    }

    pub fn accept_owner(env: Env, candidate: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        candidate.require_auth();

        if ownership::get_pending_owner(&env).is_none() {
            return Err(ContractError::NoPendingOwner);
        }
        let previous =
            ownership::accept_pending_owner(&env, &candidate).ok_or(ContractError::NotOwner)?;

        events::publish_ownership_accepted(&env, previous, candidate);

        Ok(())
    }

    pub fn cancel_owner_transfer(env: Env, current_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();
        Self::require_owner(&env, &current_owner)?;

        let candidate =
            ownership::get_pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        ownership::clear_pending_owner(&env);

        events::publish_ownership_cancelled(&env, current_owner, candidate);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !ownership::is_owner(env, caller) {
            return Err(ContractError::NotOwner);
        }
        Ok(())
    }

    fn asset(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ASSET)
            .ok_or(ContractError::NotInitialized)
    }

    fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
    }
}

use soroban_sdk::{symbol_short, Address, Env, Symbol};

const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");

/// Installs `owner` as the single privileged principal.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

/// Returns the current owner, or `None` before one has been installed.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Returns whether `caller` is the current owner.
///
/// An uninitialized contract has no owner, so every caller is rejected.
pub fn is_owner(env: &Env, caller: &Address) -> bool {
    match get_owner(env) {
        Some(owner) => owner == *caller,
        None => false,
    }
}

/// Records `candidate` as the owner-in-waiting for a two-step transfer.
pub fn set_pending_owner(env: &Env, candidate: &Address) {
    env.storage().instance().set(&PENDING_OWNER, candidate);
}

/// Returns the owner-in-waiting, if a transfer is in progress.
pub fn get_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

/// Drops any in-progress transfer.
pub fn clear_pending_owner(env: &Env) {
    env.storage().instance().remove(&PENDING_OWNER);
}

/// Completes a two-step transfer when `candidate` is the recorded
/// owner-in-waiting. Returns the previous owner on success.
pub fn accept_pending_owner(env: &Env, candidate: &Address) -> Option<Address> {
    let pending = get_pending_owner(env)?;
    if pending != *candidate {
        return None;
    }
    let previous = get_owner(env)?;
    set_owner(env, candidate);
    clear_pending_owner(env);
    Some(previous)
}

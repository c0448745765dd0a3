use soroban_sdk::{symbol_short, Env, Symbol};

const LOCKED: Symbol = symbol_short!("LOCKED");

/// Scoped hold on the contract-wide reentrancy lock.
///
/// The lock is released when the guard is dropped, on the success path and on
/// every early `?` return alike. A second `enter` while a guard is alive fails.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ReentrancyGuard {
    env: Env,
}

/// Returns whether a guarded operation is currently in flight.
pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().get(&LOCKED).unwrap_or(false)
}

/// Takes the lock, or returns `None` if it is already held.
pub fn enter(env: &Env) -> Option<ReentrancyGuard> {
    if is_locked(env) {
        return None;
    }
    env.storage().instance().set(&LOCKED, &true);
    Some(ReentrancyGuard { env: env.clone() })
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&LOCKED);
    }
}

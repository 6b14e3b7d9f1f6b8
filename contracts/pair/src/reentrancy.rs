use soroban_sdk::Env;

use crate::{
    errors::PairError,
    storage::{get_reentrancy_guard, set_reentrancy_guard, ReentrancyGuard},
};

/// Acquires the pair lock. Reverts with `Locked` if already held.
///
/// Taken at the start of every reserve-mutating entry point. Because Soroban
/// rolls back all state on a failed invocation, the lock is cleared
/// automatically when the outer call reverts.
pub fn acquire(env: &Env) -> Result<(), PairError> {
    let guard = get_reentrancy_guard(env);
    if guard.locked {
        return Err(PairError::Locked);
    }
    set_reentrancy_guard(env, &ReentrancyGuard { locked: true });
    Ok(())
}

/// Releases the pair lock on the happy path.
pub fn release(env: &Env) {
    set_reentrancy_guard(env, &ReentrancyGuard { locked: false });
}

// Non-reentrant wrapper for state-changing entry points

use soroban_sdk::{log, Env};

use crate::error::ExchangeError;
use crate::storage::{is_locked, set_locked};

/// Run `body` with the re-entrancy flag held.
///
/// A call that arrives while the flag is set fails with `Reentrant` before
/// reading any state. The flag is cleared on both the success and the error
/// path.
pub fn non_reentrant<T, F>(env: &Env, body: F) -> Result<T, ExchangeError>
where
    F: FnOnce() -> Result<T, ExchangeError>,
{
    if is_locked(env) {
        log!(env, "re-entrant call rejected");
        return Err(ExchangeError::Reentrant);
    }

    set_locked(env, true);
    let result = body();
    set_locked(env, false);

    result
}

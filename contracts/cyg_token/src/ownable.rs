use soroban_sdk::{Address, Env};

use crate::{errors::CygError, storage};

/// Loads the owner and requires its authorization for the current call.
pub fn require_owner(env: &Env) -> Result<Address, CygError> {
    let owner = storage::get_owner(env).ok_or(CygError::NotInitialized)?;
    owner.require_auth();
    storage::extend_instance_ttl(env);
    Ok(owner)
}

/// Hands ownership to `new_owner`; returns the previous owner.
pub fn transfer_ownership(env: &Env, new_owner: &Address) -> Result<Address, CygError> {
    let previous = require_owner(env)?;
    storage::set_owner(env, new_owner);
    Ok(previous)
}

//! Bounded mint ledger.
//!
//! Tracks cumulative issuance on this chain against [`CAP`] and holds the
//! single address allowed to mint through it. `total_minted` only ever grows:
//! burns and outbound bridge transfers shrink the circulating supply but never
//! give back room under the cap.

use soroban_sdk::{log, Address, Env};

use crate::{constants::CAP, errors::CygError, storage};

/// Computes the issuance total after minting `amount` on top of
/// `total_minted`.
///
/// # Errors
/// | Error         | Condition                                  |
/// |---------------|--------------------------------------------|
/// | `Overflow`    | `total_minted + amount` does not fit i128  |
/// | `CapExceeded` | the projected total is strictly above CAP  |
pub fn projected_total(total_minted: i128, amount: i128) -> Result<i128, CygError> {
    let projected = total_minted.checked_add(amount).ok_or(CygError::Overflow)?;
    if projected > CAP {
        return Err(CygError::CapExceeded);
    }
    Ok(projected)
}

/// Records `amount` of new issuance and returns the updated total.
///
/// Every path that creates supply out of nothing goes through here,
/// including the pre-mint performed by `initialize`. Nothing is written when
/// the cap check fails.
pub fn record_mint(env: &Env, amount: i128) -> Result<i128, CygError> {
    let total_minted = storage::get_total_minted(env);
    let projected = projected_total(total_minted, amount).map_err(|err| {
        log!(env, "mint rejected", total_minted, amount, CAP);
        err
    })?;
    storage::set_total_minted(env, projected);
    Ok(projected)
}

/// Fails with `OnlyAuthority` unless `caller` is the stored minter.
/// An unset authority rejects every caller.
pub fn require_authority(env: &Env, caller: &Address) -> Result<(), CygError> {
    match storage::get_authority(env) {
        Some(authority) if authority == *caller => Ok(()),
        _ => Err(CygError::OnlyAuthority),
    }
}

/// Fails with `AuthorityAlreadySet` once a minter is stored, whoever asks.
pub fn require_authority_unset(env: &Env) -> Result<(), CygError> {
    if let Some(current) = storage::get_authority(env) {
        log!(env, "authority already set", current);
        return Err(CygError::AuthorityAlreadySet);
    }
    Ok(())
}

/// Stores `candidate` as the minter if none is stored yet.
///
/// Returns the previous value (always `None` on success) so callers can
/// publish the change. The check is made against the stored value, not the
/// candidate: once an authority is present it can never be replaced.
pub fn set_authority_once(env: &Env, candidate: &Address) -> Result<Option<Address>, CygError> {
    require_authority_unset(env)?;
    let previous = storage::get_authority(env);
    storage::set_authority(env, candidate);
    Ok(previous)
}

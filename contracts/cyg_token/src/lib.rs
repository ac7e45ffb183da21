#![no_std]

mod allowance;
mod balance;
mod constants;
mod errors;
mod events;
mod ledger;
mod oft;
mod ownable;
mod storage;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

pub use constants::{CAP, DECIMALS, INITIAL_MINT};
pub use errors::CygError;
use events::CygEvents;

fn check_nonnegative_amount(amount: i128) -> Result<(), CygError> {
    if amount < 0 {
        return Err(CygError::NegativeAmount);
    }
    Ok(())
}

/// Records `amount` in the mint ledger and credits it to `to`.
fn issue(env: &Env, minter: &Address, to: &Address, amount: i128) -> Result<(), CygError> {
    ledger::record_mint(env, amount)?;
    balance::receive_balance(env, to, amount)?;
    storage::increase_total_supply(env, amount)?;
    TokenUtils::new(env).events().mint(minter.clone(), to.clone(), amount);
    Ok(())
}

#[contract]
pub struct CygToken;

#[contractimpl]
impl CygToken {
    /// One-time setup. Stores metadata and bridge configuration, then
    /// pre-mints [`INITIAL_MINT`] to `owner` through the capped ledger.
    pub fn initialize(
        env: Env,
        owner: Address,
        endpoint: Address,
        name: String,
        symbol: String,
        shared_decimals: u32,
    ) -> Result<(), CygError> {
        if storage::is_initialized(&env) {
            return Err(CygError::AlreadyInitialized);
        }
        owner.require_auth();

        if shared_decimals > DECIMALS {
            return Err(CygError::InvalidSharedDecimals);
        }

        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: DECIMALS,
            name,
            symbol,
        });
        storage::set_owner(&env, &owner);
        storage::set_endpoint(&env, &endpoint);
        storage::set_shared_decimals(&env, shared_decimals);
        storage::extend_instance_ttl(&env);

        issue(&env, &owner, &owner, INITIAL_MINT)
    }

    // -----------------------------------------------------------------------
    // Mint ledger
    // -----------------------------------------------------------------------

    /// Assigns the minting authority. Owner only, and only once: a second
    /// call fails with `AuthorityAlreadySet` whoever makes it.
    pub fn set_pillars_of_creation(env: Env, candidate: Address) -> Result<(), CygError> {
        ledger::require_authority_unset(&env)?;
        ownable::require_owner(&env)?;
        let previous = ledger::set_authority_once(&env, &candidate)?;
        CygEvents::pillars_set(&env, &previous, &candidate);
        Ok(())
    }

    /// Mints `amount` to `to`. `minter` must be the stored authority and must
    /// authorize the call; the mint fails with `CapExceeded` if it would push
    /// `total_minted` above the cap.
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), CygError> {
        storage::require_initialized(&env)?;
        ledger::require_authority(&env, &minter)?;
        check_nonnegative_amount(amount)?;
        minter.require_auth();

        issue(&env, &minter, &to, amount)
    }

    pub fn cap(_env: Env) -> i128 {
        CAP
    }

    pub fn total_minted(env: Env) -> i128 {
        storage::get_total_minted(&env)
    }

    pub fn pillars_of_creation(env: Env) -> Option<Address> {
        storage::get_authority(&env)
    }

    // -----------------------------------------------------------------------
    // Ownership
    // -----------------------------------------------------------------------

    pub fn owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), CygError> {
        let previous = ownable::transfer_ownership(&env, &new_owner)?;
        CygEvents::ownership_transferred(&env, &previous, &new_owner);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Token
    // -----------------------------------------------------------------------

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        allowance::read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), CygError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        storage::require_initialized(&env)?;

        allowance::write_allowance(&env, &from, &spender, amount, expiration_ledger)?;
        TokenUtils::new(&env).events().approve(from, spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        balance::read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), CygError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        storage::require_initialized(&env)?;

        balance::spend_balance(&env, &from, amount)?;
        balance::receive_balance(&env, &to, amount)?;
        TokenUtils::new(&env).events().transfer(from, to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), CygError> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        storage::require_initialized(&env)?;

        allowance::spend_allowance(&env, &from, &spender, amount)?;
        balance::spend_balance(&env, &from, amount)?;
        balance::receive_balance(&env, &to, amount)?;
        TokenUtils::new(&env).events().transfer(from, to, amount);
        Ok(())
    }

    /// Destroys `amount` held by `from`. Circulating supply drops;
    /// `total_minted` does not.
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), CygError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        storage::require_initialized(&env)?;

        balance::spend_balance(&env, &from, amount)?;
        storage::decrease_total_supply(&env, amount)?;
        TokenUtils::new(&env).events().burn(from, amount);
        Ok(())
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), CygError> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        storage::require_initialized(&env)?;

        allowance::spend_allowance(&env, &from, &spender, amount)?;
        balance::spend_balance(&env, &from, amount)?;
        storage::decrease_total_supply(&env, amount)?;
        TokenUtils::new(&env).events().burn(from, amount);
        Ok(())
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn name(env: Env) -> String {
        if !storage::is_initialized(&env) {
            return String::from_str(&env, "");
        }
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    pub fn symbol(env: Env) -> String {
        if !storage::is_initialized(&env) {
            return String::from_str(&env, "");
        }
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    // -----------------------------------------------------------------------
    // Bridge
    // -----------------------------------------------------------------------

    /// Trusts `peer` as the token contract on `chain_id`. Owner only.
    pub fn set_peer(env: Env, chain_id: u32, peer: BytesN<32>) -> Result<(), CygError> {
        ownable::require_owner(&env)?;
        storage::set_peer(&env, chain_id, &peer);
        CygEvents::peer_set(&env, chain_id, &peer);
        Ok(())
    }

    pub fn peer(env: Env, chain_id: u32) -> Option<BytesN<32>> {
        storage::get_peer(&env, chain_id)
    }

    pub fn endpoint(env: Env) -> Option<Address> {
        storage::get_endpoint(&env)
    }

    pub fn shared_decimals(env: Env) -> Option<u32> {
        storage::get_shared_decimals(&env)
    }

    /// Burns `amount` (minus dust) from `from` and ships it to `to` on
    /// `dst_chain_id`. Returns the amount burned.
    pub fn send(
        env: Env,
        from: Address,
        dst_chain_id: u32,
        to: BytesN<32>,
        amount: i128,
    ) -> Result<i128, CygError> {
        from.require_auth();
        storage::require_initialized(&env)?;

        oft::send(&env, &from, dst_chain_id, &to, amount)
    }

    /// Allowance-gated variant of [`CygToken::send`]. Only the dust-free part
    /// of `amount` needs to be approved, and only that part is spent.
    pub fn send_from(
        env: Env,
        spender: Address,
        from: Address,
        dst_chain_id: u32,
        to: BytesN<32>,
        amount: i128,
    ) -> Result<i128, CygError> {
        spender.require_auth();
        storage::require_initialized(&env)?;
        check_nonnegative_amount(amount)?;

        let amount_ld = oft::dust_free(&env, amount)?;
        allowance::spend_allowance(&env, &from, &spender, amount_ld)?;
        oft::send(&env, &from, dst_chain_id, &to, amount_ld)
    }

    /// Inbound bridge transfer. Callable by the endpoint only.
    pub fn credit(
        env: Env,
        src_chain_id: u32,
        src_peer: BytesN<32>,
        to: Address,
        amount_sd: u64,
    ) -> Result<i128, CygError> {
        storage::require_initialized(&env)?;
        oft::credit(&env, src_chain_id, &src_peer, &to, amount_sd)
    }
}

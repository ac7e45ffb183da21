//! Bridge hooks.
//!
//! Outbound transfers burn the local amount and hand it to the endpoint in
//! shared decimals; inbound credits re-issue it here. Neither direction goes
//! through the mint ledger: bridged supply was already counted against the
//! cap of the chain it was minted on.

use cygnus_endpoint_interface::BridgeEndpointClient;
use soroban_sdk::{Address, BytesN, Env};
use soroban_token_sdk::TokenUtils;

use crate::{
    balance,
    constants::DECIMALS,
    errors::CygError,
    events::CygEvents,
    storage,
};

/// Local units per shared unit: `10^(DECIMALS - shared_decimals)`.
pub fn ld2sd_rate(shared_decimals: u32) -> Result<i128, CygError> {
    if shared_decimals > DECIMALS {
        return Err(CygError::InvalidSharedDecimals);
    }
    Ok(10_i128.pow(DECIMALS - shared_decimals))
}

/// Drops the part of `amount` that shared decimals cannot carry.
pub fn remove_dust(amount: i128, rate: i128) -> i128 {
    amount - amount % rate
}

pub fn to_shared(amount_ld: i128, rate: i128) -> Result<u64, CygError> {
    u64::try_from(amount_ld / rate).map_err(|_| CygError::SharedAmountOverflow)
}

pub fn to_local(amount_sd: u64, rate: i128) -> Result<i128, CygError> {
    i128::from(amount_sd).checked_mul(rate).ok_or(CygError::Overflow)
}

fn current_rate(env: &Env) -> Result<i128, CygError> {
    let shared_decimals = storage::get_shared_decimals(env).ok_or(CygError::NotInitialized)?;
    ld2sd_rate(shared_decimals)
}

/// `amount` with the dust removed at the configured shared decimals.
pub fn dust_free(env: &Env, amount: i128) -> Result<i128, CygError> {
    if amount < 0 {
        return Err(CygError::NegativeAmount);
    }
    Ok(remove_dust(amount, current_rate(env)?))
}

/// Burns the dust-free part of `amount` from `from` and dispatches it to the
/// trusted peer on `dst_chain_id`. Returns the amount burned, in local
/// decimals. Authorization of `from` (or of a spender) is the caller's job.
pub fn send(
    env: &Env,
    from: &Address,
    dst_chain_id: u32,
    to: &BytesN<32>,
    amount: i128,
) -> Result<i128, CygError> {
    if amount < 0 {
        return Err(CygError::NegativeAmount);
    }
    let peer = storage::get_peer(env, dst_chain_id).ok_or(CygError::NoPeer)?;
    let endpoint = storage::get_endpoint(env).ok_or(CygError::NotInitialized)?;

    let rate = current_rate(env)?;
    let amount_ld = remove_dust(amount, rate);
    if amount_ld == 0 {
        return Err(CygError::AmountTooSmall);
    }
    let amount_sd = to_shared(amount_ld, rate)?;

    balance::spend_balance(env, from, amount_ld)?;
    storage::decrease_total_supply(env, amount_ld)?;
    TokenUtils::new(env).events().burn(from.clone(), amount_ld);

    BridgeEndpointClient::new(env, &endpoint).send(
        &env.current_contract_address(),
        &dst_chain_id,
        &peer,
        to,
        &amount_sd,
    );

    CygEvents::oft_send(env, from, dst_chain_id, to, amount_ld);
    Ok(amount_ld)
}

/// Credits a verified inbound transfer. Only the stored endpoint may call
/// this, and only for packets coming from the trusted peer of `src_chain_id`.
pub fn credit(
    env: &Env,
    src_chain_id: u32,
    src_peer: &BytesN<32>,
    to: &Address,
    amount_sd: u64,
) -> Result<i128, CygError> {
    let endpoint = storage::get_endpoint(env).ok_or(CygError::NotInitialized)?;
    endpoint.require_auth();

    match storage::get_peer(env, src_chain_id) {
        Some(peer) if peer == *src_peer => {}
        _ => return Err(CygError::UntrustedPeer),
    }

    let amount_ld = to_local(amount_sd, current_rate(env)?)?;

    balance::receive_balance(env, to, amount_ld)?;
    storage::increase_total_supply(env, amount_ld)?;
    TokenUtils::new(env).events().mint(endpoint, to.clone(), amount_ld);

    CygEvents::oft_receive(env, to, src_chain_id, amount_ld);
    Ok(amount_ld)
}

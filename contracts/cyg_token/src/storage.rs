use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::{
    constants::{
        INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PEER_BUMP_AMOUNT,
        PEER_LIFETIME_THRESHOLD,
    },
    errors::CygError,
};

#[contracttype]
#[derive(Clone, Debug)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AllowanceEntry {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Owner,
    Endpoint,
    SharedDecimals,
    PillarsOfCreation,
    TotalMinted,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceKey),
    Peer(u32),
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn require_initialized(env: &Env) -> Result<(), CygError> {
    if !is_initialized(env) {
        return Err(CygError::NotInitialized);
    }
    extend_instance_ttl(env);
    Ok(())
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_endpoint(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Endpoint)
}

pub fn set_endpoint(env: &Env, endpoint: &Address) {
    env.storage().instance().set(&DataKey::Endpoint, endpoint);
}

pub fn get_shared_decimals(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::SharedDecimals)
}

pub fn set_shared_decimals(env: &Env, shared_decimals: u32) {
    env.storage().instance().set(&DataKey::SharedDecimals, &shared_decimals);
}

pub fn get_peer(env: &Env, chain_id: u32) -> Option<BytesN<32>> {
    let key = DataKey::Peer(chain_id);
    let peer = env.storage().persistent().get(&key);
    if peer.is_some() {
        env.storage().persistent().extend_ttl(&key, PEER_LIFETIME_THRESHOLD, PEER_BUMP_AMOUNT);
    }
    peer
}

pub fn set_peer(env: &Env, chain_id: u32, peer: &BytesN<32>) {
    let key = DataKey::Peer(chain_id);
    env.storage().persistent().set(&key, peer);
    env.storage().persistent().extend_ttl(&key, PEER_LIFETIME_THRESHOLD, PEER_BUMP_AMOUNT);
}

// ---------------------------------------------------------------------------
// Mint ledger
// ---------------------------------------------------------------------------

pub fn get_authority(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PillarsOfCreation)
}

pub fn set_authority(env: &Env, authority: &Address) {
    env.storage().instance().set(&DataKey::PillarsOfCreation, authority);
}

pub fn get_total_minted(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalMinted).unwrap_or(0)
}

pub fn set_total_minted(env: &Env, total_minted: i128) {
    env.storage().instance().set(&DataKey::TotalMinted, &total_minted);
}

// ---------------------------------------------------------------------------
// Circulating supply
// ---------------------------------------------------------------------------

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn increase_total_supply(env: &Env, amount: i128) -> Result<(), CygError> {
    let supply = get_total_supply(env).checked_add(amount).ok_or(CygError::Overflow)?;
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    Ok(())
}

pub fn decrease_total_supply(env: &Env, amount: i128) -> Result<(), CygError> {
    let supply = get_total_supply(env).checked_sub(amount).ok_or(CygError::Overflow)?;
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    Ok(())
}

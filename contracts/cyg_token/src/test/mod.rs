#![cfg(test)]

// ---------------------------------------------------------------------------
// CYG test suite
//
// 1. ledger    — pure cap arithmetic (no Env needed)
// 2. authority — one-time assignment of the minter
// 3. mint      — capped issuance through the contract client
// 4. token     — balances, allowances, burns, ownership
// 5. bridge    — shared-decimal conversion and send / credit round trips
// 6. events    — published topics and payloads
// ---------------------------------------------------------------------------

mod token;

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{constants::UNIT, CygToken, CygTokenClient};

pub(crate) const SHARED_DECIMALS: u32 = 8;

pub(crate) fn units(whole: i128) -> i128 {
    whole * UNIT
}

/// Registers an uninitialized token.
pub(crate) fn register_token<'a>(env: &Env) -> CygTokenClient<'a> {
    let token_id = env.register_contract(None, CygToken);
    CygTokenClient::new(env, &token_id)
}

/// Registers and initializes a token owned by a fresh address. The endpoint
/// is a plain generated address; bridge tests register the mock instead.
pub(crate) fn setup<'a>() -> (Env, CygTokenClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let client = register_token(&env);
    let owner = Address::generate(&env);
    let endpoint = Address::generate(&env);

    client.initialize(
        &owner,
        &endpoint,
        &String::from_str(&env, "CygnusDAO"),
        &String::from_str(&env, "CYG"),
        &SHARED_DECIMALS,
    );

    (env, client, owner)
}

/// Like [`setup`], with the minting authority already assigned.
pub(crate) fn setup_with_authority<'a>() -> (Env, CygTokenClient<'a>, Address, Address) {
    let (env, client, owner) = setup();
    let authority = Address::generate(&env);
    client.set_pillars_of_creation(&authority);
    (env, client, owner, authority)
}

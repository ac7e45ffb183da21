use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use crate::{constants::DECIMALS, errors::CygError};

use super::{register_token, setup, units, SHARED_DECIMALS};

// ---------- Initialization ----------

#[test]
fn initialize_stores_metadata_and_configuration() {
    let (env, client, owner) = setup();

    assert_eq!(client.name(), String::from_str(&env, "CygnusDAO"));
    assert_eq!(client.symbol(), String::from_str(&env, "CYG"));
    assert_eq!(client.decimals(), DECIMALS);
    assert_eq!(client.shared_decimals(), Some(SHARED_DECIMALS));
    assert_eq!(client.owner(), Some(owner));
    assert!(client.endpoint().is_some());
}

#[test]
fn double_initialize_fails() {
    let (env, client, _owner) = setup();
    let other = Address::generate(&env);

    let result = client.try_initialize(
        &other,
        &other,
        &String::from_str(&env, "Other"),
        &String::from_str(&env, "OTH"),
        &SHARED_DECIMALS,
    );

    assert_eq!(result, Err(Ok(CygError::AlreadyInitialized)));
    assert_eq!(client.balance(&other), 0);
}

#[test]
fn shared_decimals_above_local_decimals_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let client = register_token(&env);
    let owner = Address::generate(&env);

    let result = client.try_initialize(
        &owner,
        &Address::generate(&env),
        &String::from_str(&env, "CygnusDAO"),
        &String::from_str(&env, "CYG"),
        &(DECIMALS + 1),
    );

    assert_eq!(result, Err(Ok(CygError::InvalidSharedDecimals)));
    assert_eq!(client.owner(), None);
    assert_eq!(client.total_minted(), 0);
}

#[test]
fn views_before_initialize_are_empty() {
    let env = Env::default();
    let client = register_token(&env);

    assert_eq!(client.name(), String::from_str(&env, ""));
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.total_minted(), 0);
    assert_eq!(client.pillars_of_creation(), None);
}

#[test]
fn transfer_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let client = register_token(&env);

    let result =
        client.try_transfer(&Address::generate(&env), &Address::generate(&env), &0);
    assert_eq!(result, Err(Ok(CygError::NotInitialized)));
}

// ---------- Transfers ----------

#[test]
fn transfer_moves_balance() {
    let (env, client, owner) = setup();
    let user = Address::generate(&env);

    client.transfer(&owner, &user, &units(100));

    assert_eq!(client.balance(&owner), units(249_900));
    assert_eq!(client.balance(&user), units(100));
}

#[test]
fn transfer_more_than_balance_fails() {
    let (env, client, _owner) = setup();
    let user = Address::generate(&env);
    let other = Address::generate(&env);

    let result = client.try_transfer(&user, &other, &1);
    assert_eq!(result, Err(Ok(CygError::InsufficientBalance)));
}

#[test]
fn negative_transfer_rejected() {
    let (env, client, owner) = setup();
    let user = Address::generate(&env);

    let result = client.try_transfer(&owner, &user, &-5);
    assert_eq!(result, Err(Ok(CygError::NegativeAmount)));
}

// ---------- Allowances ----------

#[test]
fn approve_then_transfer_from_spends_allowance() {
    let (env, client, owner) = setup();
    let spender = Address::generate(&env);
    let user = Address::generate(&env);

    client.approve(&owner, &spender, &units(50), &200);
    assert_eq!(client.allowance(&owner, &spender), units(50));

    client.transfer_from(&spender, &owner, &user, &units(20));

    assert_eq!(client.allowance(&owner, &spender), units(30));
    assert_eq!(client.balance(&user), units(20));
    assert_eq!(client.balance(&owner), units(249_980));
}

#[test]
fn transfer_from_beyond_allowance_fails() {
    let (env, client, owner) = setup();
    let spender = Address::generate(&env);
    let user = Address::generate(&env);

    client.approve(&owner, &spender, &10, &200);
    let result = client.try_transfer_from(&spender, &owner, &user, &11);

    assert_eq!(result, Err(Ok(CygError::InsufficientAllowance)));
    assert_eq!(client.allowance(&owner, &spender), 10);
}

#[test]
fn approve_with_past_expiration_fails() {
    let (env, client, owner) = setup();
    let spender = Address::generate(&env);
    env.ledger().with_mut(|li| li.sequence_number = 100);

    let result = client.try_approve(&owner, &spender, &10, &99);
    assert_eq!(result, Err(Ok(CygError::InvalidExpiration)));
}

#[test]
fn zero_approval_with_past_expiration_is_allowed() {
    let (env, client, owner) = setup();
    let spender = Address::generate(&env);
    env.ledger().with_mut(|li| li.sequence_number = 100);

    client.approve(&owner, &spender, &0, &0);
    assert_eq!(client.allowance(&owner, &spender), 0);
}

// ---------- Burns ----------

#[test]
fn burn_reduces_supply_but_not_total_minted() {
    let (_env, client, owner) = setup();

    client.burn(&owner, &units(1_000));

    assert_eq!(client.balance(&owner), units(249_000));
    assert_eq!(client.total_supply(), units(249_000));
    assert_eq!(client.total_minted(), units(250_000));
}

#[test]
fn burn_from_requires_allowance() {
    let (env, client, owner) = setup();
    let spender = Address::generate(&env);

    assert_eq!(
        client.try_burn_from(&spender, &owner, &1),
        Err(Ok(CygError::InsufficientAllowance))
    );

    client.approve(&owner, &spender, &units(5), &500);
    client.burn_from(&spender, &owner, &units(5));

    assert_eq!(client.allowance(&owner, &spender), 0);
    assert_eq!(client.total_supply(), units(249_995));
}

// ---------- Ownership ----------

#[test]
fn transfer_ownership_hands_over_owner_only_calls() {
    let (env, client, owner) = setup();
    let new_owner = Address::generate(&env);

    client.transfer_ownership(&new_owner);

    assert_eq!(client.owner(), Some(new_owner.clone()));
    assert_ne!(client.owner(), Some(owner));
}

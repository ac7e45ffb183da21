use soroban_sdk::{Address, Env};

use crate::{
    constants::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD},
    errors::CygError,
    storage::DataKey,
};

pub fn read_balance(env: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: &Address, amount: i128) -> Result<(), CygError> {
    let balance = read_balance(env, addr)
        .checked_add(amount)
        .ok_or(CygError::Overflow)?;
    write_balance(env, addr, balance);
    Ok(())
}

pub fn spend_balance(env: &Env, addr: &Address, amount: i128) -> Result<(), CygError> {
    let balance = read_balance(env, addr);
    if balance < amount {
        return Err(CygError::InsufficientBalance);
    }
    write_balance(env, addr, balance - amount);
    Ok(())
}

use soroban_sdk::{Address, Env};

use crate::{
    errors::CygError,
    storage::{AllowanceEntry, AllowanceKey, DataKey},
};

fn allowance_key(from: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceKey { from: from.clone(), spender: spender.clone() })
}

/// Reads the allowance granted by `from` to `spender`.
///
/// An entry whose `expiration_ledger` lies behind the current ledger reads
/// as a zero amount.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceEntry {
    let key = allowance_key(from, spender);
    match env.storage().temporary().get::<DataKey, AllowanceEntry>(&key) {
        Some(entry) if entry.expiration_ledger < env.ledger().sequence() => {
            AllowanceEntry { amount: 0, expiration_ledger: entry.expiration_ledger }
        }
        Some(entry) => entry,
        None => AllowanceEntry { amount: 0, expiration_ledger: 0 },
    }
}

/// Stores an allowance in temporary storage, living until `expiration_ledger`.
pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), CygError> {
    let sequence = env.ledger().sequence();
    if amount > 0 && expiration_ledger < sequence {
        return Err(CygError::InvalidExpiration);
    }

    let key = allowance_key(from, spender);
    env.storage()
        .temporary()
        .set(&key, &AllowanceEntry { amount, expiration_ledger });

    if amount > 0 {
        let live_for = expiration_ledger - sequence;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), CygError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(CygError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}

/// Token precision. Every amount held by the contract is scaled by `10^DECIMALS`.
pub const DECIMALS: u32 = 18;

pub(crate) const UNIT: i128 = 10_i128.pow(DECIMALS);

/// Ceiling on cumulative issuance through the mint ledger on this chain.
pub const CAP: i128 = 2_500_000 * UNIT;

/// Credited to the owner when the contract is initialized.
pub const INITIAL_MINT: i128 = 250_000 * UNIT;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280; // ~1 day in 5s ledgers

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const PEER_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const PEER_LIFETIME_THRESHOLD: u32 = PEER_BUMP_AMOUNT - DAY_IN_LEDGERS;

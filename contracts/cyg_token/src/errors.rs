use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CygError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    OnlyAuthority = 3,
    CapExceeded = 4,
    AuthorityAlreadySet = 5,
    NegativeAmount = 6,
    InsufficientBalance = 7,
    InsufficientAllowance = 8,
    InvalidExpiration = 9,
    Overflow = 10,
    InvalidSharedDecimals = 11,
    NoPeer = 12,
    UntrustedPeer = 13,
    SharedAmountOverflow = 14,
    AmountTooSmall = 15,
}

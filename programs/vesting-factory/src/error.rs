use anchor_lang::prelude::*;

/// Custom error codes for the vesting factory program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: beneficiary signature required")]
    UnauthorizedBeneficiary,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Beneficiary must be a non-default public key")]
    InvalidBeneficiary,

    #[msg("Beneficiary must be distinct from the schedule admin")]
    BeneficiaryIsAdmin,

    #[msg("Accrual interval must be longer than the one-day floor")]
    IntervalTooShort,

    #[msg("Start time must lie between now and one year from now")]
    StartTimeOutOfRange,

    #[msg("Interval count must be greater than zero (and at most 365 at creation)")]
    InvalidIntervalCount,

    #[msg("Grant is below one whole token of the vested mint")]
    GrantTooSmall,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Withdrawal destination must be a non-default token account")]
    InvalidDestination,

    #[msg("Nothing releasable yet for this schedule")]
    InsufficientReleasable,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Vault holds nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Vault balance does not exceed the amount still owed to the beneficiary")]
    NoExcessBalance,

    #[msg("Schedule is not present in the registry")]
    ScheduleNotRegistered,

    #[msg("Registry is full")]
    RegistryFull,

    #[msg("Beneficiary index is full")]
    BeneficiaryIndexFull,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}

// Exchange error module for FixSwap

use fixswap_reserve::ReserveError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExchangeError {
    // Initialization errors (100-199)
    AlreadyInitialized = 100,
    NotInitialized = 101,
    /// Both sides of the pair point at the same token
    SameToken = 102,

    // Authorization errors (200-299)
    /// Caller is not the exchange owner
    NotOwner = 200,
    /// Nested call into a guarded entry point
    Reentrant = 201,

    // Caller funds errors (300-399)
    NotEnoughTokenA = 300,
    NotEnoughTokenB = 301,
    InsufficientAllowance = 302,

    // Reserve errors (400-499)
    /// Reserve A cannot cover the swap output
    InsufficientLiquidityA = 400,
    /// Reserve B cannot cover the swap output
    InsufficientLiquidityB = 401,
    /// Withdrawal exceeds what the exchange holds
    InsufficientReserve = 402,

    // Math errors (500-599)
    /// Division by a zero exchange rate
    InvalidRate = 500,
    Overflow = 501,

    // External errors (600-699)
    /// A token contract rejected a transfer
    TransferFailed = 600,
}

impl From<ReserveError> for ExchangeError {
    fn from(err: ReserveError) -> Self {
        match err {
            ReserveError::InsufficientReserve => ExchangeError::InsufficientReserve,
            ReserveError::Overflow => ExchangeError::Overflow,
            ReserveError::InvalidRate => ExchangeError::InvalidRate,
        }
    }
}

use soroban_sdk::contracttype;

/// Side of the pair a reserve operation applies to
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    A,
    B,
}

/// Reserve counters and the B-per-A exchange rate
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReserveLedger {
    /// Units of asset A held by the exchange
    pub reserve_a: u128,
    /// Units of asset B held by the exchange
    pub reserve_b: u128,
    /// Units of B paid per unit of A
    pub exchange_rate: u128,
}

/// Arithmetic failures raised by the ledger
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReserveError {
    /// Debit larger than the reserve it is taken from
    InsufficientReserve,
    /// Checked addition or multiplication overflowed
    Overflow,
    /// Division by a zero exchange rate
    InvalidRate,
}

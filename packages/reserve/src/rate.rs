// Fixed-rate conversion between the two assets

use crate::types::ReserveError;

/// B paid out for `amount_a` of A: `amount_a * rate`
#[inline]
pub fn quote_a_for_b(amount_a: u128, rate: u128) -> Result<u128, ReserveError> {
    amount_a.checked_mul(rate).ok_or(ReserveError::Overflow)
}

/// A paid out for `amount_b` of B: `floor(amount_b / rate)`
///
/// Rounds toward zero, so any `amount_b < rate` quotes to 0.
#[inline]
pub fn quote_b_for_a(amount_b: u128, rate: u128) -> Result<u128, ReserveError> {
    if rate == 0 {
        return Err(ReserveError::InvalidRate);
    }
    Ok(amount_b / rate)
}

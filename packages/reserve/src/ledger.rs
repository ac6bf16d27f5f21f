// Reserve Ledger Mutation Logic

use crate::types::{Asset, ReserveError, ReserveLedger};

impl ReserveLedger {
    /// Empty reserves at the given rate
    pub fn new(exchange_rate: u128) -> Self {
        Self {
            reserve_a: 0,
            reserve_b: 0,
            exchange_rate,
        }
    }

    pub fn reserve(&self, asset: Asset) -> u128 {
        match asset {
            Asset::A => self.reserve_a,
            Asset::B => self.reserve_b,
        }
    }

    /// Current `(reserve_a, reserve_b)`
    pub fn snapshot(&self) -> (u128, u128) {
        (self.reserve_a, self.reserve_b)
    }

    /// Increase one reserve. Overflow is an error, never a wrap.
    pub fn credit(&mut self, asset: Asset, amount: u128) -> Result<(), ReserveError> {
        let slot = self.slot_mut(asset);
        *slot = slot.checked_add(amount).ok_or(ReserveError::Overflow)?;
        Ok(())
    }

    /// Decrease one reserve, rejecting any debit larger than what is held
    pub fn debit(&mut self, asset: Asset, amount: u128) -> Result<(), ReserveError> {
        let slot = self.slot_mut(asset);
        *slot = slot
            .checked_sub(amount)
            .ok_or(ReserveError::InsufficientReserve)?;
        Ok(())
    }

    /// Replace the exchange rate. Any value is accepted, zero included.
    pub fn set_rate(&mut self, new_rate: u128) {
        self.exchange_rate = new_rate;
    }

    // ========================================================
    // COMPOSITE COMMITS
    // ========================================================
    //
    // Each commit runs against a copy and only replaces `self` when every
    // step succeeded, so a caller never sees one side updated without the
    // other.

    /// `reserve_a += amount_a; reserve_b -= amount_b`
    pub fn apply_swap_a_for_b(&mut self, amount_a: u128, amount_b: u128) -> Result<(), ReserveError> {
        self.commit(|next| {
            next.credit(Asset::A, amount_a)?;
            next.debit(Asset::B, amount_b)
        })
    }

    /// `reserve_b += amount_b; reserve_a -= amount_a`
    pub fn apply_swap_b_for_a(&mut self, amount_b: u128, amount_a: u128) -> Result<(), ReserveError> {
        self.commit(|next| {
            next.credit(Asset::B, amount_b)?;
            next.debit(Asset::A, amount_a)
        })
    }

    /// Liquidity added on both sides
    pub fn apply_deposit(&mut self, amount_a: u128, amount_b: u128) -> Result<(), ReserveError> {
        self.commit(|next| {
            next.credit(Asset::A, amount_a)?;
            next.credit(Asset::B, amount_b)
        })
    }

    /// Liquidity removed from both sides
    pub fn apply_withdrawal(&mut self, amount_a: u128, amount_b: u128) -> Result<(), ReserveError> {
        self.commit(|next| {
            next.debit(Asset::A, amount_a)?;
            next.debit(Asset::B, amount_b)
        })
    }

    fn commit<F>(&mut self, apply: F) -> Result<(), ReserveError>
    where
        F: FnOnce(&mut ReserveLedger) -> Result<(), ReserveError>,
    {
        let mut next = self.clone();
        apply(&mut next)?;
        *self = next;
        Ok(())
    }

    fn slot_mut(&mut self, asset: Asset) -> &mut u128 {
        match asset {
            Asset::A => &mut self.reserve_a,
            Asset::B => &mut self.reserve_b,
        }
    }
}

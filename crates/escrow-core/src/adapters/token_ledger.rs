//! Token Ledger Adapter
//!
//! In-memory fungible-token ledger implementing the `TokenLedger` port.
//!
//! In production the port fronts a real ledger's transfer interface; this
//! adapter reproduces the allowance semantics the core relies on: a pull
//! requires a prior `approve` to the escrow account, and both pull and
//! payout fail cleanly rather than partially apply.

use crate::ports::outbound::{TokenLedger, TokenLedgerError};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Address, Amount};
use std::collections::HashMap;
use tracing::debug;

/// In-memory multi-token ledger for testing.
pub struct InMemoryTokenLedger {
    /// The escrow account funds are pulled into and paid out of.
    escrow: Address,
    /// Balances: (token, holder) -> amount.
    balances: RwLock<HashMap<(Address, Address), Amount>>,
    /// Allowances granted to the escrow: (token, owner) -> amount.
    allowances: RwLock<HashMap<(Address, Address), Amount>>,
}

impl InMemoryTokenLedger {
    /// Create a ledger with the given escrow account.
    pub fn new(escrow: Address) -> Self {
        Self {
            escrow,
            balances: RwLock::new(HashMap::new()),
            allowances: RwLock::new(HashMap::new()),
        }
    }

    /// Credit `amount` of `token` to `to`.
    pub fn mint(&self, token: Address, to: Address, amount: Amount) {
        let mut balances = self.balances.write();
        *balances.entry((token, to)).or_insert(0) += amount;
    }

    /// Approve the escrow to pull up to `amount` of `token` from `owner`.
    ///
    /// Overwrites any previous approval, as allowance-based tokens do.
    pub fn approve(&self, token: Address, owner: Address, amount: Amount) {
        self.allowances.write().insert((token, owner), amount);
    }

    /// Current balance of `holder` in `token`.
    pub fn balance_of(&self, token: Address, holder: Address) -> Amount {
        *self.balances.read().get(&(token, holder)).unwrap_or(&0)
    }

    /// Remaining allowance `owner` has granted the escrow in `token`.
    pub fn allowance(&self, token: Address, owner: Address) -> Amount {
        *self.allowances.read().get(&(token, owner)).unwrap_or(&0)
    }

    fn move_balance(
        &self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenLedgerError> {
        let mut balances = self.balances.write();
        let have = *balances.get(&(token, from)).unwrap_or(&0);
        if have < amount {
            return Err(TokenLedgerError::InsufficientBalance { have, need: amount });
        }
        *balances.entry((token, from)).or_insert(0) -= amount;
        *balances.entry((token, to)).or_insert(0) += amount;
        Ok(())
    }
}

#[async_trait]
impl TokenLedger for InMemoryTokenLedger {
    async fn transfer_from(
        &self,
        token: Address,
        owner: Address,
        amount: Amount,
    ) -> Result<(), TokenLedgerError> {
        // Allowance gate first, then balance; the allowance is only burned
        // once the balance move is known to succeed.
        let approved = self.allowance(token, owner);
        if approved < amount {
            return Err(TokenLedgerError::InsufficientAllowance {
                approved,
                need: amount,
            });
        }

        self.move_balance(token, owner, self.escrow, amount)?;
        self.allowances.write().insert((token, owner), approved - amount);

        debug!(amount, "Pulled tokens into escrow");
        Ok(())
    }

    async fn transfer(
        &self,
        token: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenLedgerError> {
        self.move_balance(token, self.escrow, to, amount)?;
        debug!(amount, "Paid tokens out of escrow");
        Ok(())
    }
}

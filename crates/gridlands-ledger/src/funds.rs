//! Funds ledger — native-currency balance accounting.
//!
//! One balance per account. All mutations are atomic: either the full
//! operation succeeds or the ledger is unchanged. Escrow is modeled by
//! transferring into the escrowing component's own account, so refunds
//! are plain transfers back and exact amounts are observable in tests.

use std::collections::HashMap;

use gridlands_types::{AccountId, GridlandsError, Result};
use rust_decimal::Decimal;

/// The source of truth for all native-currency balances.
#[derive(Debug, Clone, Default)]
pub struct FundsLedger {
    balances: HashMap<AccountId, Decimal>,
}

impl FundsLedger {
    /// Create a new empty funds ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
        }
    }

    /// Deposit funds into an account (increases total supply).
    pub fn deposit(&mut self, account: AccountId, amount: Decimal) {
        *self.balances.entry(account).or_default() += amount;
    }

    /// Move `amount` from one account to another.
    ///
    /// A zero-amount transfer is a successful no-op; `bid`/`claim` flows
    /// rely on that when no standing bid exists.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` if `from` holds less than `amount`.
    pub fn transfer(&mut self, from: AccountId, to: AccountId, amount: Decimal) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let available = self.balance(from);
        if available < amount {
            return Err(GridlandsError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        *self.balances.entry(from).or_default() -= amount;
        *self.balances.entry(to).or_default() += amount;
        Ok(())
    }

    /// Current balance of an account (zero if never seen).
    #[must_use]
    pub fn balance(&self, account: AccountId) -> Decimal {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    /// Total currency in existence (sum over all accounts).
    ///
    /// Constant across transfers — only `deposit` changes it. Tests use
    /// this as a conservation check over escrow flows.
    #[must_use]
    pub fn total_supply(&self) -> Decimal {
        self.balances.values().copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_increases_balance() {
        let mut funds = FundsLedger::new();
        let alice = AccountId::new();
        funds.deposit(alice, Decimal::new(1000, 0));
        assert_eq!(funds.balance(alice), Decimal::new(1000, 0));
    }

    #[test]
    fn transfer_moves_funds() {
        let mut funds = FundsLedger::new();
        let alice = AccountId::new();
        let bob = AccountId::new();
        funds.deposit(alice, Decimal::new(1000, 0));

        funds.transfer(alice, bob, Decimal::new(400, 0)).unwrap();

        assert_eq!(funds.balance(alice), Decimal::new(600, 0));
        assert_eq!(funds.balance(bob), Decimal::new(400, 0));
    }

    #[test]
    fn transfer_insufficient_fails_without_side_effects() {
        let mut funds = FundsLedger::new();
        let alice = AccountId::new();
        let bob = AccountId::new();
        funds.deposit(alice, Decimal::new(100, 0));

        let err = funds
            .transfer(alice, bob, Decimal::new(200, 0))
            .unwrap_err();
        assert!(matches!(err, GridlandsError::InsufficientBalance { .. }));
        assert_eq!(funds.balance(alice), Decimal::new(100, 0));
        assert_eq!(funds.balance(bob), Decimal::ZERO);
    }

    #[test]
    fn zero_transfer_is_noop() {
        let mut funds = FundsLedger::new();
        let alice = AccountId::new();
        let bob = AccountId::new();
        // No deposits at all — still fine
        funds.transfer(alice, bob, Decimal::ZERO).unwrap();
        assert_eq!(funds.total_supply(), Decimal::ZERO);
    }

    #[test]
    fn transfers_conserve_supply() {
        let mut funds = FundsLedger::new();
        let alice = AccountId::new();
        let bob = AccountId::new();
        funds.deposit(alice, Decimal::new(1500, 0));
        funds.deposit(bob, Decimal::new(500, 0));

        funds.transfer(alice, bob, Decimal::new(700, 0)).unwrap();
        funds.transfer(bob, alice, Decimal::new(100, 0)).unwrap();

        assert_eq!(funds.total_supply(), Decimal::new(2000, 0));
    }

    #[test]
    fn unknown_account_balance_is_zero() {
        let funds = FundsLedger::new();
        assert_eq!(funds.balance(AccountId::new()), Decimal::ZERO);
    }
}

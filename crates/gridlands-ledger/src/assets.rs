//! Asset ledger — generic token ownership with approvals.
//!
//! Each `AssetLedger` instance tracks the owner of every minted token and
//! at most one approved delegate per token. An asset may only be moved by
//! its owner or that delegate, and every transfer clears the approval.

use std::collections::HashMap;

use gridlands_types::{AccountId, GridlandsError, LedgerId, Result, TokenId};

/// An independent token ledger (one per asset type).
///
/// The registry mints parcels into one of these; the marketplace holds and
/// releases escrowed tokens through the same surface without knowing what
/// the tokens represent.
#[derive(Debug, Clone)]
pub struct AssetLedger {
    /// Identity of this ledger instance (the asset-contract analog).
    id: LedgerId,
    name: String,
    symbol: String,
    /// Current owner of every minted token.
    owners: HashMap<TokenId, AccountId>,
    /// At most one approved delegate per token; cleared on transfer.
    approvals: HashMap<TokenId, AccountId>,
}

impl AssetLedger {
    /// Create a new empty ledger with a fresh [`LedgerId`].
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: LedgerId::new(),
            name: name.into(),
            symbol: symbol.into(),
            owners: HashMap::new(),
            approvals: HashMap::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> LedgerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Mint a token to `to`.
    ///
    /// Token id discipline (sequencing, uniqueness of what the ids mean)
    /// belongs to the minting component; the ledger only refuses the
    /// reserved id and double-mints.
    ///
    /// # Errors
    /// Returns `Internal` if the token already exists or is the reserved id.
    pub fn mint(&mut self, to: AccountId, token: TokenId) -> Result<()> {
        if token.is_reserved() {
            return Err(GridlandsError::Internal(format!(
                "attempted to mint reserved {token}"
            )));
        }
        if self.owners.contains_key(&token) {
            return Err(GridlandsError::Internal(format!(
                "attempted to re-mint existing {token}"
            )));
        }
        self.owners.insert(token, to);
        Ok(())
    }

    /// Current owner of a token.
    ///
    /// # Errors
    /// Returns `TokenNotFound` if the token was never minted.
    pub fn owner_of(&self, token: TokenId) -> Result<AccountId> {
        self.owners
            .get(&token)
            .copied()
            .ok_or(GridlandsError::TokenNotFound(token))
    }

    /// Approve `delegate` to move `token` on the owner's behalf.
    ///
    /// # Errors
    /// - `TokenNotFound` if the token was never minted
    /// - `NotAuthorized` unless `caller` is the owner
    pub fn approve(&mut self, caller: AccountId, delegate: AccountId, token: TokenId) -> Result<()> {
        let owner = self.owner_of(token)?;
        if caller != owner {
            return Err(GridlandsError::NotAuthorized { token });
        }
        self.approvals.insert(token, delegate);
        Ok(())
    }

    /// The approved delegate for a token, if any.
    #[must_use]
    pub fn approved(&self, token: TokenId) -> Option<AccountId> {
        self.approvals.get(&token).copied()
    }

    /// Whether `caller` may move `token` (owner or approved delegate).
    ///
    /// # Errors
    /// Returns `TokenNotFound` if the token was never minted.
    pub fn is_authorized(&self, caller: AccountId, token: TokenId) -> Result<bool> {
        let owner = self.owner_of(token)?;
        Ok(caller == owner || self.approved(token) == Some(caller))
    }

    /// Capability check: fail unless `caller` may move `token`.
    ///
    /// # Errors
    /// - `TokenNotFound` if the token was never minted
    /// - `NotAuthorized` if the caller is neither owner nor delegate
    pub fn require_authorized(&self, caller: AccountId, token: TokenId) -> Result<()> {
        if self.is_authorized(caller, token)? {
            Ok(())
        } else {
            Err(GridlandsError::NotAuthorized { token })
        }
    }

    /// Transfer `token` to `to` with the caller's authority.
    ///
    /// The approval on the token is cleared: the delegate's capability does
    /// not survive an ownership change.
    ///
    /// # Errors
    /// - `TokenNotFound` if the token was never minted
    /// - `NotAuthorized` if the caller is neither owner nor delegate
    pub fn transfer(&mut self, caller: AccountId, to: AccountId, token: TokenId) -> Result<()> {
        self.require_authorized(caller, token)?;
        self.approvals.remove(&token);
        self.owners.insert(token, to);
        Ok(())
    }

    /// Number of minted tokens.
    #[must_use]
    pub fn total_supply(&self) -> u64 {
        self.owners.len() as u64
    }

    /// All tokens currently owned by `owner` (unordered).
    #[must_use]
    pub fn tokens_of(&self, owner: AccountId) -> Vec<TokenId> {
        self.owners
            .iter()
            .filter(|(_, o)| **o == owner)
            .map(|(t, _)| *t)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (AssetLedger, AccountId, AccountId) {
        (AssetLedger::new("LandPlot", "CHUNK"), AccountId::new(), AccountId::new())
    }

    #[test]
    fn mint_assigns_owner() {
        let (mut ledger, alice, _) = setup();
        ledger.mint(alice, TokenId(1)).unwrap();
        assert_eq!(ledger.owner_of(TokenId(1)).unwrap(), alice);
        assert_eq!(ledger.total_supply(), 1);
    }

    #[test]
    fn reserved_id_cannot_be_minted() {
        let (mut ledger, alice, _) = setup();
        let err = ledger.mint(alice, TokenId(0)).unwrap_err();
        assert!(matches!(err, GridlandsError::Internal(_)));
    }

    #[test]
    fn double_mint_fails() {
        let (mut ledger, alice, bob) = setup();
        ledger.mint(alice, TokenId(1)).unwrap();
        let err = ledger.mint(bob, TokenId(1)).unwrap_err();
        assert!(matches!(err, GridlandsError::Internal(_)));
        // Ownership unchanged
        assert_eq!(ledger.owner_of(TokenId(1)).unwrap(), alice);
    }

    #[test]
    fn unminted_token_not_found() {
        let (ledger, alice, _) = setup();
        let err = ledger.owner_of(TokenId(9)).unwrap_err();
        assert!(matches!(err, GridlandsError::TokenNotFound(TokenId(9))));
        let err = ledger.is_authorized(alice, TokenId(9)).unwrap_err();
        assert!(matches!(err, GridlandsError::TokenNotFound(_)));
    }

    #[test]
    fn owner_can_transfer() {
        let (mut ledger, alice, bob) = setup();
        ledger.mint(alice, TokenId(1)).unwrap();
        ledger.transfer(alice, bob, TokenId(1)).unwrap();
        assert_eq!(ledger.owner_of(TokenId(1)).unwrap(), bob);
    }

    #[test]
    fn stranger_cannot_transfer() {
        let (mut ledger, alice, bob) = setup();
        ledger.mint(alice, TokenId(1)).unwrap();
        let carol = AccountId::new();
        let err = ledger.transfer(carol, bob, TokenId(1)).unwrap_err();
        assert!(matches!(err, GridlandsError::NotAuthorized { .. }));
        assert_eq!(ledger.owner_of(TokenId(1)).unwrap(), alice);
    }

    #[test]
    fn delegate_can_transfer_after_approval() {
        let (mut ledger, alice, bob) = setup();
        ledger.mint(alice, TokenId(1)).unwrap();
        let market = AccountId::new();

        ledger.approve(alice, market, TokenId(1)).unwrap();
        assert_eq!(ledger.approved(TokenId(1)), Some(market));
        assert!(ledger.is_authorized(market, TokenId(1)).unwrap());

        ledger.transfer(market, bob, TokenId(1)).unwrap();
        assert_eq!(ledger.owner_of(TokenId(1)).unwrap(), bob);
    }

    #[test]
    fn transfer_clears_approval() {
        let (mut ledger, alice, bob) = setup();
        ledger.mint(alice, TokenId(1)).unwrap();
        let market = AccountId::new();

        ledger.approve(alice, market, TokenId(1)).unwrap();
        ledger.transfer(alice, bob, TokenId(1)).unwrap();

        assert_eq!(ledger.approved(TokenId(1)), None);
        let err = ledger.transfer(market, alice, TokenId(1)).unwrap_err();
        assert!(matches!(err, GridlandsError::NotAuthorized { .. }));
    }

    #[test]
    fn only_owner_can_approve() {
        let (mut ledger, alice, bob) = setup();
        ledger.mint(alice, TokenId(1)).unwrap();
        let err = ledger.approve(bob, bob, TokenId(1)).unwrap_err();
        assert!(matches!(err, GridlandsError::NotAuthorized { .. }));
    }

    #[test]
    fn tokens_of_lists_holdings() {
        let (mut ledger, alice, bob) = setup();
        ledger.mint(alice, TokenId(1)).unwrap();
        ledger.mint(alice, TokenId(2)).unwrap();
        ledger.mint(bob, TokenId(3)).unwrap();

        let mut held = ledger.tokens_of(alice);
        held.sort();
        assert_eq!(held, vec![TokenId(1), TokenId(2)]);
    }

    #[test]
    fn ledger_ids_are_unique() {
        let a = AssetLedger::new("A", "A");
        let b = AssetLedger::new("B", "B");
        assert_ne!(a.id(), b.id());
    }
}

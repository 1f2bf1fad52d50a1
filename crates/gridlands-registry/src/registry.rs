//! The land registry — coordinate-addressed parcel minting.
//!
//! Owns the coordinate↔token bijection, the world bound, the claim gate,
//! and the price table, and mints parcels into its own [`AssetLedger`].
//! A single admin account gates minting and the setters; claiming is the
//! public, payable path.
//!
//! Batch operations validate every coordinate before touching any state,
//! so a single bad coordinate aborts the whole batch with no side effects.

use std::collections::HashMap;

use gridlands_ledger::{AssetLedger, FundsLedger};
use gridlands_types::{
    AccountId, ChunkCoord, GridlandsError, Result, TokenId, constants,
};
use rust_decimal::Decimal;

use crate::pricing::PriceTable;

/// The spatial land registry.
pub struct LandRegistry {
    /// Administrative identity gating mints and setters.
    admin: AccountId,
    /// Receives claim payments; source of claim refunds.
    treasury: AccountId,
    /// Gate for public self-service claiming.
    claimable: bool,
    /// Inclusive world bound: valid iff `max(|x|,|z|) <= world_size`.
    world_size: u64,
    price_table: PriceTable,
    coord_to_token: HashMap<ChunkCoord, TokenId>,
    token_to_coord: HashMap<TokenId, ChunkCoord>,
    /// Next id to assign. 1-based; id 0 is reserved.
    next_token: TokenId,
    /// The parcel token ledger this registry mints into.
    ledger: AssetLedger,
}

impl LandRegistry {
    /// Create a registry with an empty world and claiming disabled.
    #[must_use]
    pub fn new(admin: AccountId, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            admin,
            treasury: AccountId::new(),
            claimable: false,
            world_size: constants::DEFAULT_WORLD_SIZE,
            price_table: PriceTable::empty(),
            coord_to_token: HashMap::new(),
            token_to_coord: HashMap::new(),
            next_token: TokenId::first(),
            ledger: AssetLedger::new(name, symbol),
        }
    }

    fn require_admin(&self, caller: AccountId) -> Result<()> {
        if caller == self.admin {
            Ok(())
        } else {
            Err(GridlandsError::NotAdmin)
        }
    }

    /// Validate one coordinate against the world bound and uniqueness,
    /// treating `staged` (earlier coordinates of the same batch) as minted.
    fn validate_coord(&self, coord: ChunkCoord, staged: &[ChunkCoord]) -> Result<()> {
        if !coord.in_world(self.world_size) {
            return Err(GridlandsError::OutOfBounds {
                coord,
                world_size: self.world_size,
            });
        }
        if self.coord_to_token.contains_key(&coord) || staged.contains(&coord) {
            return Err(GridlandsError::AlreadyMinted(coord));
        }
        Ok(())
    }

    /// Assign the next sequential token to `coord` and mint it to `owner`.
    /// Callers must have validated the coordinate.
    fn mint_validated(&mut self, owner: AccountId, coord: ChunkCoord) -> Result<TokenId> {
        let token = self.next_token;
        self.ledger.mint(owner, token)?;
        self.coord_to_token.insert(coord, token);
        self.token_to_coord.insert(token, coord);
        self.next_token = token.next();
        Ok(token)
    }

    /// Pair up and validate a whole batch of coordinates.
    fn stage_batch(&self, xs: &[i64], zs: &[i64]) -> Result<Vec<ChunkCoord>> {
        if xs.len() != zs.len() {
            return Err(GridlandsError::LengthMismatch {
                left: xs.len(),
                right: zs.len(),
            });
        }
        let mut staged = Vec::with_capacity(xs.len());
        for (&x, &z) in xs.iter().zip(zs) {
            let coord = ChunkCoord::new(x, z);
            self.validate_coord(coord, &staged)?;
            staged.push(coord);
        }
        Ok(staged)
    }

    // =====================================================================
    // Privileged operations
    // =====================================================================

    /// Mint a single parcel to `owner`. Admin only.
    ///
    /// # Errors
    /// `NotAdmin`, `OutOfBounds`, `AlreadyMinted`.
    pub fn mint_one(
        &mut self,
        caller: AccountId,
        owner: AccountId,
        x: i64,
        z: i64,
    ) -> Result<TokenId> {
        self.require_admin(caller)?;
        let coord = ChunkCoord::new(x, z);
        self.validate_coord(coord, &[])?;
        self.mint_validated(owner, coord)
    }

    /// Mint a batch of parcels to `owner`, all-or-nothing. Admin only.
    ///
    /// # Errors
    /// `NotAdmin`, `LengthMismatch`, and the per-coordinate errors of
    /// [`Self::mint_one`]; any single failure mints nothing.
    pub fn mint_many(
        &mut self,
        caller: AccountId,
        owner: AccountId,
        xs: &[i64],
        zs: &[i64],
    ) -> Result<Vec<TokenId>> {
        self.require_admin(caller)?;
        let staged = self.stage_batch(xs, zs)?;
        let mut minted = Vec::with_capacity(staged.len());
        for coord in staged {
            minted.push(self.mint_validated(owner, coord)?);
        }
        tracing::debug!(count = minted.len(), "minted parcel batch");
        Ok(minted)
    }

    /// Toggle public claiming. Admin only.
    pub fn set_claimable(&mut self, caller: AccountId, claimable: bool) -> Result<()> {
        self.require_admin(caller)?;
        self.claimable = claimable;
        Ok(())
    }

    /// Replace the price table from parallel arrays. Admin only.
    ///
    /// The table is stored as supplied; thresholds are expected ascending
    /// and are not re-sorted.
    ///
    /// # Errors
    /// `NotAdmin`, `LengthMismatch`.
    pub fn set_plot_prices(
        &mut self,
        caller: AccountId,
        prices: &[Decimal],
        distances: &[u64],
    ) -> Result<()> {
        self.require_admin(caller)?;
        self.price_table = PriceTable::from_parallel(prices, distances)?;
        Ok(())
    }

    /// Set the inclusive world bound. Admin only. Takes effect for all
    /// subsequent operations; already-minted parcels are untouched.
    pub fn set_world_size(&mut self, caller: AccountId, world_size: u64) -> Result<()> {
        self.require_admin(caller)?;
        self.world_size = world_size;
        Ok(())
    }

    // =====================================================================
    // Public operations
    // =====================================================================

    /// Claim a batch of parcels by paying their tiered cost. Public.
    ///
    /// `sent` is pulled from the caller's funds; `sent - cost` flows
    /// straight back, so exactly `cost` remains with the treasury.
    ///
    /// # Errors
    /// In check order: `ClaimingDisabled`, `TooManyChunks`,
    /// `LengthMismatch`, per-coordinate `OutOfBounds`/`AlreadyMinted`,
    /// `NoPriceTier`, `InsufficientPayment`, `InsufficientBalance` (caller
    /// cannot cover `sent`). Nothing is minted on any failure.
    pub fn claim_lands(
        &mut self,
        caller: AccountId,
        xs: &[i64],
        zs: &[i64],
        sent: Decimal,
        funds: &mut FundsLedger,
    ) -> Result<Vec<TokenId>> {
        if !self.claimable {
            return Err(GridlandsError::ClaimingDisabled);
        }
        if xs.len() > constants::MAX_CHUNKS_PER_CLAIM {
            return Err(GridlandsError::TooManyChunks {
                requested: xs.len(),
                max: constants::MAX_CHUNKS_PER_CLAIM,
            });
        }
        let staged = self.stage_batch(xs, zs)?;

        let mut cost = Decimal::ZERO;
        for coord in &staged {
            let distance = coord.chebyshev();
            cost += self
                .price_table
                .price_for(distance)
                .ok_or(GridlandsError::NoPriceTier { distance })?;
        }
        if sent < cost {
            return Err(GridlandsError::InsufficientPayment {
                sent,
                required: cost,
            });
        }

        // Funds first: pull the full payment, then refund the excess.
        funds.transfer(caller, self.treasury, sent)?;
        funds.transfer(self.treasury, caller, sent - cost)?;

        let mut minted = Vec::with_capacity(staged.len());
        for coord in staged {
            minted.push(self.mint_validated(caller, coord)?);
        }
        tracing::info!(
            count = minted.len(),
            %cost,
            "claimed parcels"
        );
        Ok(minted)
    }

    /// Transfer a batch of tokens to `to` with the caller's authority,
    /// all-or-nothing.
    ///
    /// # Errors
    /// `TokenNotFound` / `NotAuthorized` for any token; authorization is
    /// checked for the whole batch before any token moves. A duplicate
    /// entry fails the batch: the repeat would no longer be authorized
    /// once the first occurrence has transferred.
    pub fn multi_transfer(
        &mut self,
        caller: AccountId,
        to: AccountId,
        tokens: &[TokenId],
    ) -> Result<()> {
        for (i, &token) in tokens.iter().enumerate() {
            if tokens[..i].contains(&token) {
                return Err(GridlandsError::NotAuthorized { token });
            }
            self.ledger.require_authorized(caller, token)?;
        }
        for &token in tokens {
            self.ledger.transfer(caller, to, token)?;
        }
        Ok(())
    }

    // =====================================================================
    // Lookups
    // =====================================================================

    /// Token minted at (x, z).
    ///
    /// # Errors
    /// `ChunkNotFound` if the coordinate has never been minted.
    pub fn token_id_of(&self, x: i64, z: i64) -> Result<TokenId> {
        let coord = ChunkCoord::new(x, z);
        self.coord_to_token
            .get(&coord)
            .copied()
            .ok_or(GridlandsError::ChunkNotFound(coord))
    }

    /// Coordinate of a minted token. The reserved id 0 is never minted.
    ///
    /// # Errors
    /// `TokenNotFound` for unminted ids.
    pub fn chunk_of(&self, token: TokenId) -> Result<ChunkCoord> {
        self.token_to_coord
            .get(&token)
            .copied()
            .ok_or(GridlandsError::TokenNotFound(token))
    }

    /// Tier-table cost of the parcel at (x, z).
    ///
    /// # Errors
    /// `NoPriceTier` if no tier covers the distance.
    pub fn calculate_land_cost(&self, x: i64, z: i64) -> Result<Decimal> {
        let distance = ChunkCoord::new(x, z).chebyshev();
        self.price_table
            .price_for(distance)
            .ok_or(GridlandsError::NoPriceTier { distance })
    }

    #[must_use]
    pub fn claimable(&self) -> bool {
        self.claimable
    }

    #[must_use]
    pub fn world_size(&self) -> u64 {
        self.world_size
    }

    #[must_use]
    pub fn price_table(&self) -> &PriceTable {
        &self.price_table
    }

    /// Number of parcels minted so far (monotone).
    #[must_use]
    pub fn total_supply(&self) -> u64 {
        self.token_to_coord.len() as u64
    }

    #[must_use]
    pub fn admin(&self) -> AccountId {
        self.admin
    }

    /// The account claim payments accrue to.
    #[must_use]
    pub fn treasury(&self) -> AccountId {
        self.treasury
    }

    #[must_use]
    pub fn ledger(&self) -> &AssetLedger {
        &self.ledger
    }

    /// Mutable access to the parcel ledger, for approvals and transfers
    /// performed directly against the token surface.
    ///
    /// Minting through this handle is the registry's job alone: a token id
    /// minted here out of band collides with the sequential id the
    /// registry will assign next, poisoning later `mint_*`/`claim_lands`
    /// calls for that id.
    pub fn ledger_mut(&mut self) -> &mut AssetLedger {
        &mut self.ledger
    }
}

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Genesis Phase — derived lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum GenesisPhase {
    /// Genesis window open. Purchases and commits accepted.
    Active,
    /// Genesis window elapsed without a launch. Emergency exit
    /// becomes available once the exit window also elapses.
    ExpiredUnlaunched,
    /// Settlement complete. Terminal state; only redemption remains.
    Launched,
}

// ============================================================
// Genesis Settlement — fixed redemption record
// ============================================================

/// Written exactly once, by `launch`. The snapshots are the fixed
/// denominators for every redemption — never the live, shrinking totals.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct GenesisSettlement<M: ManagedTypeApi> {
    /// Stable-token balance received from the bonding curve at launch.
    pub settled_stable: BigUint<M>,
    /// Governance tokens earmarked directly for the genesis pool,
    /// claimable pro-rata by uncommitted shares.
    pub base_allocation: BigUint<M>,
    /// Governance tokens received from the IDO deploy, claimable
    /// pro-rata by committed shares at the preferential rate.
    pub preferential_allocation: BigUint<M>,
    pub supply_snapshot: BigUint<M>,
    pub committed_snapshot: BigUint<M>,
}

#![no_std]

multiversx_sc::imports!();

pub mod bonding_curve_proxy;
pub mod genesis_group_proxy;
pub mod ido_proxy;
pub mod oracle_proxy;
pub mod types;

use types::{GenesisPhase, GenesisSettlement};

// ============================================================
// Constants
// ============================================================

/// Fixed-point scale for exchange rates and the committed fraction
const RATIO_PRECISION: u64 = 1_000_000_000_000_000_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait GenesisGroup {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        bonding_curve_address: ManagedAddress,
        ido_address: ManagedAddress,
        oracle_address: ManagedAddress,
        liquidity_pool_address: ManagedAddress,
        stable_token_id: TokenIdentifier,
        governance_token_id: TokenIdentifier,
        genesis_duration: u64,
        exit_window_duration: u64,
        max_genesis_price: BigUint,
    ) {
        self.bonding_curve_address().set(&bonding_curve_address);
        self.ido_address().set(&ido_address);
        self.oracle_address().set(&oracle_address);
        self.liquidity_pool_address().set(&liquidity_pool_address);
        self.stable_token_id().set(&stable_token_id);
        self.governance_token_id().set(&governance_token_id);
        self.start_time().set(self.blockchain().get_block_timestamp());
        self.genesis_duration().set(genesis_duration);
        self.exit_window_duration().set(exit_window_duration);
        self.max_genesis_price().set(&max_genesis_price);
        self.total_supply().set(BigUint::zero());
        self.total_committed().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: purchase
    // 1 base-currency unit = 1 genesis share, strictly.
    // ========================================================

    #[endpoint(purchase)]
    #[payable("EGLD")]
    fn purchase(&self, to: ManagedAddress, value: BigUint) {
        require!(self.phase() == GenesisPhase::Active, "not in genesis period");

        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, "no value sent");
        // declared amount must match the attached payment exactly
        require!(payment == value, "value mismatch");

        self.genesis_shares(&to).update(|s| *s += &payment);
        self.total_supply().update(|ts| *ts += &payment);

        self.purchase_event(&to, &payment);
    }

    // ========================================================
    // ENDPOINT: approve
    // Delegated-spend allowance over genesis shares, consumed by
    // commit / redeem / emergencyExit when caller != owner.
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowance(&caller, &spender).set(&amount);
        self.approve_event(&caller, &spender, &amount);
    }

    // ========================================================
    // ENDPOINT: commit
    // Burn uncommitted shares of `owner`, mint committed shares
    // to `to`. Committed capital forgoes its stable-asset claim
    // for the preferential governance rate at launch.
    // ========================================================

    #[endpoint(commit)]
    fn commit(&self, owner: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        require!(self.phase() == GenesisPhase::Active, "not in genesis period");

        let caller = self.blockchain().get_caller();
        if caller != owner {
            self.use_allowance(&owner, &caller, &amount);
        }

        require!(
            self.genesis_shares(&owner).get() >= amount,
            "insufficient balance"
        );

        self.genesis_shares(&owner).update(|s| *s -= &amount);
        self.committed_shares(&to).update(|c| *c += &amount);
        self.total_committed().update(|tc| *tc += &amount);

        self.commit_event(&owner, &to, &amount);
    }

    // ========================================================
    // ENDPOINT: allocateGovernance
    // Deposits the base governance allocation earmarked for the
    // genesis pool. Must arrive before launch snapshots it.
    // ========================================================

    #[endpoint(allocateGovernance)]
    #[payable("*")]
    fn allocate_governance(&self) {
        require!(!self.launched().get(), "already launched");
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.governance_token_id().get(),
            "invalid token"
        );
    }

    // ========================================================
    // ENDPOINT: launch
    // One-shot settlement. The terminal flag is set before any
    // external call so no reentrant call can observe a
    // pre-launch state mid-settlement.
    // ========================================================

    #[endpoint(launch)]
    fn launch(&self) {
        require!(!self.launched().get(), "already launched");

        let total_supply = self.total_supply().get();
        require!(total_supply > 0u64, "no balance");

        if !self.is_time_ended() {
            // early launch is only allowed once the curve hits the peg
            require!(self.query_at_max_price(), "still in genesis period");
        }

        self.launched().set(true);
        let total_committed = self.total_committed().get();

        // held base currency == total_supply by the pre-launch invariant
        let base_in = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);

        let bonding_curve = self.bonding_curve_address().get();
        self.tx()
            .to(&bonding_curve)
            .typed(bonding_curve_proxy::BondingCurveProxy)
            .purchase()
            .egld(&base_in)
            .sync_call();

        let own_address = self.blockchain().get_sc_address();
        let stable_token = self.stable_token_id().get();
        let governance_token = self.governance_token_id().get();

        let settled_stable = self
            .blockchain()
            .get_esdt_balance(&own_address, &stable_token, 0);
        let base_allocation = self
            .blockchain()
            .get_esdt_balance(&own_address, &governance_token, 0);

        let precision = BigUint::from(RATIO_PRECISION);
        let committed_fraction = (&total_committed * &precision) / &total_supply;
        let ido = self.ido_address().get();
        self.tx()
            .to(&ido)
            .typed(ido_proxy::IdoProxy)
            .deploy(&committed_fraction)
            .sync_call();

        let preferential_allocation = self
            .blockchain()
            .get_esdt_balance(&own_address, &governance_token, 0)
            - &base_allocation;

        // realized exchange rate: stable received per base-currency unit sent
        let realized_price = (&settled_stable * &precision) / &base_in;
        let oracle = self.oracle_address().get();
        self.tx()
            .to(&oracle)
            .typed(oracle_proxy::OracleProxy)
            .init_oracle(&realized_price)
            .sync_call();

        self.settlement().set(&GenesisSettlement {
            settled_stable,
            base_allocation,
            preferential_allocation,
            supply_snapshot: total_supply,
            committed_snapshot: total_committed,
        });

        self.launch_event(self.blockchain().get_block_timestamp());
    }

    // ========================================================
    // ENDPOINT: redeem
    // Burns the account's shares for a pro-rata slice of the
    // settled pools, against the launch snapshots only.
    // ========================================================

    #[endpoint(redeem)]
    fn redeem(&self, to: ManagedAddress) {
        require!(self.launched().get(), "not launched");

        let uncommitted = self.genesis_shares(&to).get();
        let committed = self.committed_shares(&to).get();
        require!(
            uncommitted > 0u64 || committed > 0u64,
            "no redeemable balance"
        );

        let caller = self.blockchain().get_caller();
        if caller != to && uncommitted > 0u64 {
            self.use_allowance(&to, &caller, &uncommitted);
        }

        let settlement = self.settlement().get();
        let stable_amount =
            (&settlement.settled_stable * &uncommitted) / &settlement.supply_snapshot;
        let mut governance_amount =
            (&settlement.base_allocation * &uncommitted) / &settlement.supply_snapshot;
        if settlement.committed_snapshot > 0u64 {
            governance_amount += (&settlement.preferential_allocation * &committed)
                / &settlement.committed_snapshot;
        }

        self.genesis_shares(&to).clear();
        self.committed_shares(&to).clear();
        self.total_supply()
            .update(|ts| *ts -= &(&uncommitted + &committed));
        self.total_committed().update(|tc| *tc -= &committed);

        if stable_amount > 0u64 {
            self.send()
                .direct_esdt(&to, &self.stable_token_id().get(), 0, &stable_amount);
        }
        if governance_amount > 0u64 {
            self.send()
                .direct_esdt(&to, &self.governance_token_id().get(), 0, &governance_amount);
        }

        self.redeem_event(&to, &stable_amount, &governance_amount);
    }

    // ========================================================
    // ENDPOINT: emergencyExit
    // Unwind path if launch never happens: refund the original
    // deposit once the exit window has elapsed.
    // ========================================================

    #[endpoint(emergencyExit)]
    fn emergency_exit(&self, owner: ManagedAddress, to: ManagedAddress) {
        require!(!self.launched().get(), "already launched");
        let now = self.blockchain().get_block_timestamp();
        let exit_open = self.start_time().get()
            + self.genesis_duration().get()
            + self.exit_window_duration().get();
        require!(now >= exit_open, "not in exit window");

        let uncommitted = self.genesis_shares(&owner).get();
        let committed = self.committed_shares(&owner).get();
        let total = &uncommitted + &committed;
        require!(total > 0u64, "no balance to exit");

        let caller = self.blockchain().get_caller();
        if caller != owner {
            self.use_allowance(&owner, &caller, &total);
        }

        let held = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        // the held balance covering every live share is an invariant;
        // a shortfall here must surface, never be clamped
        require!(held >= total, "insufficient refund balance");

        self.genesis_shares(&owner).clear();
        self.committed_shares(&owner).clear();
        self.total_supply().update(|ts| *ts -= &total);
        self.total_committed().update(|tc| *tc -= &committed);

        self.send().direct_egld(&to, &total);
        self.emergency_exit_event(&owner, &to, &total);
    }

    // ========================================================
    // INTERNAL: phase + allowance helpers
    // ========================================================

    /// Phase is derived from (now, launched), never stored, so
    /// the two can never diverge.
    fn phase(&self) -> GenesisPhase {
        if self.launched().get() {
            return GenesisPhase::Launched;
        }
        if self.is_time_ended() {
            GenesisPhase::ExpiredUnlaunched
        } else {
            GenesisPhase::Active
        }
    }

    fn use_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        self.allowance(owner, spender).update(|allowed| {
            require!(*allowed >= *amount, "insufficient allowance");
            *allowed -= amount;
        });
    }

    fn query_at_max_price(&self) -> bool {
        let bonding_curve = self.bonding_curve_address().get();
        self.tx()
            .to(&bonding_curve)
            .typed(bonding_curve_proxy::BondingCurveProxy)
            .is_at_max_price(self.max_genesis_price().get())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(isTimeEnded)]
    fn is_time_ended(&self) -> bool {
        self.blockchain().get_block_timestamp()
            >= self.start_time().get() + self.genesis_duration().get()
    }

    #[view(getPhase)]
    fn get_phase(&self) -> GenesisPhase {
        self.phase()
    }

    #[view(isAtMaxPrice)]
    fn is_at_max_price(&self) -> bool {
        require!(self.total_supply().get() > 0u64, "no balance");
        self.query_at_max_price()
    }

    #[view(getAmountOut)]
    fn get_amount_out(&self, amount_in: BigUint, inclusive: bool) -> MultiValue2<BigUint, BigUint> {
        let mut total_in = self.total_supply().get();
        if !inclusive {
            total_in += &amount_in;
        }
        require!(amount_in <= total_in && total_in > 0u64, "not enough supply");

        let bonding_curve = self.bonding_curve_address().get();
        let total_stable: BigUint = self
            .tx()
            .to(&bonding_curve)
            .typed(bonding_curve_proxy::BondingCurveProxy)
            .get_amount_out(&total_in)
            .returns(ReturnsResult)
            .sync_call_readonly();

        let own_address = self.blockchain().get_sc_address();
        let governance_pot = self.blockchain().get_esdt_balance(
            &own_address,
            &self.governance_token_id().get(),
            0,
        );

        let stable_quote = (&total_stable * &amount_in) / &total_in;
        let governance_quote = (&governance_pot * &amount_in) / &total_in;
        (stable_quote, governance_quote).into()
    }

    #[view(getAmountsToRedeem)]
    fn get_amounts_to_redeem(
        &self,
        to: ManagedAddress,
    ) -> MultiValue3<BigUint, BigUint, BigUint> {
        require!(self.launched().get(), "not launched");

        let settlement = self.settlement().get();
        let uncommitted = self.genesis_shares(&to).get();
        let committed = self.committed_shares(&to).get();

        let stable_amount =
            (&settlement.settled_stable * &uncommitted) / &settlement.supply_snapshot;
        let base_governance =
            (&settlement.base_allocation * &uncommitted) / &settlement.supply_snapshot;
        let preferential_governance = if settlement.committed_snapshot > 0u64 {
            (&settlement.preferential_allocation * &committed) / &settlement.committed_snapshot
        } else {
            BigUint::zero()
        };

        (stable_amount, base_governance, preferential_governance).into()
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        self.genesis_shares(account).get()
    }

    #[view(committedFGEN)]
    fn committed_fgen(&self, account: &ManagedAddress) -> BigUint {
        self.committed_shares(account).get()
    }

    #[view(getAllowance)]
    fn get_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> BigUint {
        self.allowance(owner, spender).get()
    }

    #[view(getGenesisConfig)]
    fn get_genesis_config(&self) -> MultiValue4<u64, u64, u64, BigUint> {
        (
            self.start_time().get(),
            self.genesis_duration().get(),
            self.exit_window_duration().get(),
            self.max_genesis_price().get(),
        )
            .into()
    }

    #[view(getCollaborators)]
    fn get_collaborators(
        &self,
    ) -> MultiValue4<ManagedAddress, ManagedAddress, ManagedAddress, ManagedAddress> {
        (
            self.bonding_curve_address().get(),
            self.ido_address().get(),
            self.oracle_address().get(),
            self.liquidity_pool_address().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("purchase")]
    fn purchase_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("commit")]
    fn commit_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approve")]
    fn approve_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("launch")]
    fn launch_event(&self, #[indexed] timestamp: u64);

    #[event("redeem")]
    fn redeem_event(
        &self,
        #[indexed] to: &ManagedAddress,
        #[indexed] stable_amount: &BigUint,
        governance_amount: &BigUint,
    );

    #[event("emergencyExit")]
    fn emergency_exit_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("bondingCurveAddress")]
    fn bonding_curve_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("idoAddress")]
    fn ido_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("oracleAddress")]
    fn oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("liquidityPoolAddress")]
    fn liquidity_pool_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("stableTokenId")]
    fn stable_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("governanceTokenId")]
    fn governance_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("startTime")]
    fn start_time(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("genesisDuration")]
    fn genesis_duration(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("exitWindowDuration")]
    fn exit_window_duration(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("maxGenesisPrice")]
    fn max_genesis_price(&self) -> SingleValueMapper<BigUint>;

    // ── Share ledger ──

    #[storage_mapper("genesisShares")]
    fn genesis_shares(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("committedShares")]
    fn committed_shares(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(totalCommittedFGEN)]
    #[storage_mapper("totalCommitted")]
    fn total_committed(&self) -> SingleValueMapper<BigUint>;

    // ── Settlement ──

    #[view(getLaunched)]
    #[storage_mapper("launched")]
    fn launched(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("settlement")]
    fn settlement(&self) -> SingleValueMapper<GenesisSettlement<Self::Api>>;
}

#![no_std]

multiversx_sc::imports!();

pub mod proxy;

/// Test stand-in for the token listing venue. On `deploy` it records
/// the committed fraction it was handed and releases its entire
/// governance holdings to the caller as the preferential allocation.
#[multiversx_sc::contract]
pub trait IdoMock {
    #[init]
    fn init(&self, governance_token_id: TokenIdentifier) {
        self.governance_token_id().set(&governance_token_id);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Accepts the governance tokens released at deployment time.
    #[endpoint(fund)]
    #[payable("*")]
    fn fund(&self) {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.governance_token_id().get(),
            "invalid token"
        );
    }

    #[endpoint(deploy)]
    fn deploy(&self, committed_fraction: BigUint) {
        self.ratio().set(&committed_fraction);

        let governance_token = self.governance_token_id().get();
        let held = self.blockchain().get_esdt_balance(
            &self.blockchain().get_sc_address(),
            &governance_token,
            0,
        );
        if held > 0u64 {
            let caller = self.blockchain().get_caller();
            self.send().direct_esdt(&caller, &governance_token, 0, &held);
        }
    }

    #[view(ratio)]
    #[storage_mapper("ratio")]
    fn ratio(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("governanceTokenId")]
    fn governance_token_id(&self) -> SingleValueMapper<TokenIdentifier>;
}

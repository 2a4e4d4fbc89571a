#![no_std]

multiversx_sc::imports!();

pub mod proxy;

/// Test stand-in for the stable-asset bonding curve. Quotes a flat
/// `rate` stable units per base-currency unit and pays purchases out
/// of whatever stable balance it was funded with.
#[multiversx_sc::contract]
pub trait BondingCurveMock {
    #[init]
    fn init(&self, stable_token_id: TokenIdentifier, rate: BigUint, current_price: BigUint) {
        self.stable_token_id().set(&stable_token_id);
        self.rate().set(&rate);
        self.current_price().set(&current_price);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Accepts stable tokens to pay future purchases from.
    #[endpoint(fund)]
    #[payable("*")]
    fn fund(&self) {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.stable_token_id().get(),
            "invalid token"
        );
    }

    #[endpoint(purchase)]
    #[payable("EGLD")]
    fn purchase(&self) -> BigUint {
        let payment = self.call_value().egld_value().clone_value();
        let amount_out = &payment * &self.rate().get();
        if amount_out > 0u64 {
            let caller = self.blockchain().get_caller();
            self.send()
                .direct_esdt(&caller, &self.stable_token_id().get(), 0, &amount_out);
        }
        amount_out
    }

    #[endpoint(setCurrentPrice)]
    fn set_current_price(&self, price: BigUint) {
        self.current_price().set(&price);
    }

    #[view(getAmountOut)]
    fn get_amount_out(&self, amount_in: BigUint) -> BigUint {
        amount_in * self.rate().get()
    }

    #[view(isAtMaxPrice)]
    fn is_at_max_price(&self, peg: BigUint) -> bool {
        self.current_price().get() >= peg
    }

    #[view(currentPrice)]
    #[storage_mapper("currentPrice")]
    fn current_price(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("stableTokenId")]
    fn stable_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("rate")]
    fn rate(&self) -> SingleValueMapper<BigUint>;
}

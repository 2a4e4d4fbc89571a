#![no_std]

multiversx_sc::imports!();

pub mod proxy;

/// Test stand-in for the price oracle. Records the scaled exchange
/// rate it is seeded with at launch.
#[multiversx_sc::contract]
pub trait OracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(initOracle)]
    fn init_oracle(&self, price: BigUint) {
        self.init_price().set(&price);
    }

    #[view(initPrice)]
    #[storage_mapper("initPrice")]
    fn init_price(&self) -> SingleValueMapper<BigUint>;
}

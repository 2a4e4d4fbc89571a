use multiversx_sc::proxy_imports::*;

pub struct OracleProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for OracleProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = OracleProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        OracleProxyMethods { wrapped_tx: tx }
    }
}

pub struct OracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> OracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Seeds the oracle with the realized launch exchange rate
    /// (stable received per base-currency unit sent, 1e18 fixed-point).
    pub fn init_oracle<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        price: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("initOracle")
            .argument(&price)
            .original_result()
    }
}

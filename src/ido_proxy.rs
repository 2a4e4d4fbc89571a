use multiversx_sc::proxy_imports::*;

pub struct IdoProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for IdoProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = IdoProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        IdoProxyMethods { wrapped_tx: tx }
    }
}

pub struct IdoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> IdoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Kicks off the governance-token distribution, parameterized by the
    /// committed fraction of genesis supply (1e18 fixed-point). The
    /// preferential governance pot is pushed back to the caller.
    pub fn deploy<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        committed_fraction: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("deploy")
            .argument(&committed_fraction)
            .original_result()
    }

    pub fn ratio(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("ratio")
            .original_result()
    }
}

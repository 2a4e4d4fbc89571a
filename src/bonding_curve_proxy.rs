use multiversx_sc::proxy_imports::*;

pub struct BondingCurveProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for BondingCurveProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = BondingCurveProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        BondingCurveProxyMethods { wrapped_tx: tx }
    }
}

pub struct BondingCurveProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> BondingCurveProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Payable in the base currency; the stable tokens bought are pushed
    /// back to the caller during the call.
    pub fn purchase(self) -> TxTypedCall<Env, From, To, (), Gas, BigUint<Env::Api>> {
        self.wrapped_tx.raw_call("purchase").original_result()
    }

    pub fn current_price(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("currentPrice")
            .original_result()
    }

    pub fn get_amount_out<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount_in: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAmountOut")
            .argument(&amount_in)
            .original_result()
    }

    pub fn is_at_max_price<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        peg: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAtMaxPrice")
            .argument(&peg)
            .original_result()
    }
}

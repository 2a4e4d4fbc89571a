use multiversx_sc::proxy_imports::*;

use crate::types::GenesisPhase;

pub struct GenesisGroupProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for GenesisGroupProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = GenesisGroupProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        GenesisGroupProxyMethods { wrapped_tx: tx }
    }
}

pub struct GenesisGroupProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> GenesisGroupProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    #[allow(clippy::too_many_arguments)]
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
        Arg4: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg5: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg6: ProxyArg<u64>,
        Arg7: ProxyArg<u64>,
        Arg8: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        bonding_curve_address: Arg0,
        ido_address: Arg1,
        oracle_address: Arg2,
        liquidity_pool_address: Arg3,
        stable_token_id: Arg4,
        governance_token_id: Arg5,
        genesis_duration: Arg6,
        exit_window_duration: Arg7,
        max_genesis_price: Arg8,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&bonding_curve_address)
            .argument(&ido_address)
            .argument(&oracle_address)
            .argument(&liquidity_pool_address)
            .argument(&stable_token_id)
            .argument(&governance_token_id)
            .argument(&genesis_duration)
            .argument(&exit_window_duration)
            .argument(&max_genesis_price)
            .original_result()
    }
}

impl<Env, From, To, Gas> GenesisGroupProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }

    pub fn purchase<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        to: Arg0,
        value: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("purchase")
            .argument(&to)
            .argument(&value)
            .original_result()
    }

    pub fn approve<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        spender: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("approve")
            .argument(&spender)
            .argument(&amount)
            .original_result()
    }

    pub fn commit<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        owner: Arg0,
        to: Arg1,
        amount: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("commit")
            .argument(&owner)
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    pub fn allocate_governance(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("allocateGovernance")
            .original_result()
    }

    pub fn launch(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("launch")
            .original_result()
    }

    pub fn redeem<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        to: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("redeem")
            .argument(&to)
            .original_result()
    }

    pub fn emergency_exit<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        owner: Arg0,
        to: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("emergencyExit")
            .argument(&owner)
            .argument(&to)
            .original_result()
    }

    pub fn is_time_ended(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isTimeEnded")
            .original_result()
    }

    pub fn get_phase(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, GenesisPhase> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPhase")
            .original_result()
    }

    pub fn is_at_max_price(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAtMaxPrice")
            .original_result()
    }

    pub fn get_amount_out<Arg0: ProxyArg<BigUint<Env::Api>>, Arg1: ProxyArg<bool>>(
        self,
        amount_in: Arg0,
        inclusive: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAmountOut")
            .argument(&amount_in)
            .argument(&inclusive)
            .original_result()
    }

    pub fn get_amounts_to_redeem<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        to: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue3<BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAmountsToRedeem")
            .argument(&to)
            .original_result()
    }

    pub fn balance_of<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("balanceOf")
            .argument(&account)
            .original_result()
    }

    pub fn committed_fgen<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("committedFGEN")
            .argument(&account)
            .original_result()
    }

    pub fn get_allowance<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        owner: Arg0,
        spender: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAllowance")
            .argument(&owner)
            .argument(&spender)
            .original_result()
    }

    pub fn total_supply(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalSupply")
            .original_result()
    }

    pub fn total_committed(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalCommittedFGEN")
            .original_result()
    }

    pub fn launched(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLaunched")
            .original_result()
    }

    pub fn get_genesis_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue4<u64, u64, u64, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGenesisConfig")
            .original_result()
    }

    pub fn get_collaborators(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue4<
            ManagedAddress<Env::Api>,
            ManagedAddress<Env::Api>,
            ManagedAddress<Env::Api>,
            ManagedAddress<Env::Api>,
        >,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCollaborators")
            .original_result()
    }
}

#![allow(dead_code)]

use circle_trust::circle_trust_proxy::{CircleTrustProxy, Pool, PoolStatus};
use multiversx_sc_scenario::imports::*;

pub const CODE_PATH: MxscPath = MxscPath::new("output/circle-trust.mxsc.json");
pub const CIRCLE_TRUST_ADDRESS: TestSCAddress = TestSCAddress::new("circle-trust");

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const CAROL: TestAddress = TestAddress::new("carol");
pub const DAVE: TestAddress = TestAddress::new("dave");
pub const ERIN: TestAddress = TestAddress::new("erin");

pub const PARTICIPANTS: [TestAddress; 5] = [ALICE, BOB, CAROL, DAVE, ERIN];

/// 0.1 EGLD
pub const CONTRIBUTION: u64 = 100_000_000_000_000_000;
pub const DEPOSIT: u64 = 2 * CONTRIBUTION;
/// 0.1 - 3%
pub const ROUND_PAYOUT: u64 = 97_000_000_000_000_000;
/// 3% of 0.1 x 3 members
pub const CREATOR_FEE_THREE_MEMBERS: u64 = 9_000_000_000_000_000;

/// 5 EGLD, kept under i64::MAX so the scenario balance setter accepts it
pub const INITIAL_BALANCE: u64 = 5_000_000_000_000_000_000;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, circle_trust::ContractBuilder);
    blockchain
}

pub struct CircleTrustTestState {
    pub world: ScenarioWorld,
}

impl CircleTrustTestState {
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1).balance(INITIAL_BALANCE);
        for participant in PARTICIPANTS {
            world.account(participant).nonce(1).balance(INITIAL_BALANCE);
        }

        world
            .tx()
            .from(OWNER)
            .typed(CircleTrustProxy)
            .init()
            .code(CODE_PATH)
            .new_address(CIRCLE_TRUST_ADDRESS)
            .run();

        Self { world }
    }

    // ── Endpoints ──

    pub fn create_pool(
        &mut self,
        creator: TestAddress,
        contribution: u64,
        max_members: u64,
        minimum_reputation: i64,
    ) -> u64 {
        self.world
            .tx()
            .from(creator)
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .create_pool(
                contribution,
                max_members,
                minimum_reputation,
                OptionalValue::<u64>::None,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_timed_pool(
        &mut self,
        creator: TestAddress,
        contribution: u64,
        max_members: u64,
        round_duration: u64,
    ) -> u64 {
        self.world
            .tx()
            .from(creator)
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .create_pool(
                contribution,
                max_members,
                0i64,
                OptionalValue::Some(round_duration),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_pool_expect_err(
        &mut self,
        contribution: u64,
        max_members: u64,
        message: &str,
    ) {
        self.world
            .tx()
            .from(ALICE)
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .create_pool(contribution, max_members, 0i64, OptionalValue::<u64>::None)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn join(&mut self, member: TestAddress, pool_id: u64, value: u64) {
        self.world
            .tx()
            .from(member)
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .join_pool(pool_id)
            .egld(value)
            .run();
    }

    pub fn join_expect_err(&mut self, member: TestAddress, pool_id: u64, value: u64, message: &str) {
        self.world
            .tx()
            .from(member)
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .join_pool(pool_id)
            .egld(value)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn fill_pool(&mut self, pool_id: u64, members: &[TestAddress], contribution: u64) {
        for member in members {
            self.join(*member, pool_id, 2 * contribution);
        }
    }

    pub fn distribute(&mut self, caller: TestAddress, pool_id: u64) {
        self.world
            .tx()
            .from(caller)
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .distribute(pool_id)
            .run();
    }

    pub fn distribute_expect_err(&mut self, pool_id: u64, message: &str) {
        self.world
            .tx()
            .from(OWNER)
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .distribute(pool_id)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn handle_default(&mut self, reporter: TestAddress, pool_id: u64, member: TestAddress) {
        self.world
            .tx()
            .from(reporter)
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .handle_default(pool_id, member)
            .run();
    }

    pub fn handle_default_expect_err(&mut self, pool_id: u64, member: TestAddress, message: &str) {
        self.world
            .tx()
            .from(OWNER)
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .handle_default(pool_id, member)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn set_block_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // ── Views ──

    pub fn pool(&mut self, pool_id: u64) -> Pool<StaticApi> {
        self.world
            .query()
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .get_pool(pool_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_status(&mut self, pool_id: u64) -> PoolStatus {
        self.world
            .query()
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .get_pool_status(pool_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_count(&mut self) -> u64 {
        self.world
            .query()
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .pool_count()
            .returns(ReturnsResult)
            .run()
    }

    pub fn members(&mut self, pool_id: u64) -> Vec<Address> {
        self.world
            .query()
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .get_members(pool_id)
            .returns(ReturnsResultUnmanaged)
            .run()
            .into_vec()
    }

    pub fn collateral(&mut self, pool_id: u64, member: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .get_collateral(pool_id, member)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_active_member(&mut self, pool_id: u64, member: TestAddress) -> bool {
        self.world
            .query()
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .is_active_member(pool_id, member)
            .returns(ReturnsResult)
            .run()
    }

    pub fn has_joined(&mut self, pool_id: u64, member: TestAddress) -> bool {
        self.world
            .query()
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .has_joined(pool_id, member)
            .returns(ReturnsResult)
            .run()
    }

    pub fn reputation(&mut self, address: TestAddress) -> i64 {
        self.world
            .query()
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .reputation(address)
            .returns(ReturnsResult)
            .run()
    }

    pub fn contract_balance(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(CIRCLE_TRUST_ADDRESS)
            .typed(CircleTrustProxy)
            .get_contract_balance()
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_balance(&mut self, address: TestAddress, expected: u64) {
        self.world.check_account(address).balance(expected);
    }
}

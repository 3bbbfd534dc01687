#![no_std]

multiversx_sc::imports!();

pub mod circle_trust_proxy;
pub mod types;

use types::{Payout, Pool, PoolStatus};

// ============================================================
// Constants
// ============================================================

/// Share of each contribution kept back for the pool creator, in percent
pub const CREATOR_FEE_PERCENT: u64 = 3;

pub const PERCENT_DENOMINATOR: u64 = 100;

/// A circle needs at least two members to rotate anything
pub const MIN_POOL_MEMBERS: u64 = 2;

/// Reputation earned by a member when their round is paid out
pub const DISTRIBUTION_REPUTATION_REWARD: i64 = 1;

/// Reputation lost by a member reported as defaulted
pub const DEFAULT_REPUTATION_PENALTY: i64 = 2;

// ============================================================
// Error messages
// ============================================================

pub const ERR_INVALID_AMOUNT: &str = "Invalid amount";
pub const ERR_INVALID_MEMBER_COUNT: &str = "Invalid member count";
pub const ERR_POOL_NOT_FOUND: &str = "Pool does not exist";
pub const ERR_POOL_COMPLETED: &str = "Pool already completed";
pub const ERR_POOL_FULL: &str = "Pool is full";
pub const ERR_ALREADY_JOINED: &str = "Already joined";
pub const ERR_REPUTATION_TOO_LOW: &str = "Reputation too low";
pub const ERR_WRONG_DEPOSIT: &str = "Must send exactly 2x contribution";
pub const ERR_POOL_NOT_FULL: &str = "Pool not full";
pub const ERR_ROUND_NOT_READY: &str = "Round not ready";
pub const ERR_NOT_ACTIVE_MEMBER: &str = "Not an active member";
pub const ERR_POOL_LOCKED: &str = "Pool operation in progress";

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CircleTrust {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        self.pool_count().set_if_empty(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createPool
    // Anyone can open a circle. Terms are fixed for its lifetime.
    // ========================================================

    #[endpoint(createPool)]
    fn create_pool(
        &self,
        contribution_amount: BigUint,
        max_members: u64,
        minimum_reputation: i64,
        opt_round_duration: OptionalValue<u64>,
    ) -> u64 {
        require!(contribution_amount > 0u64, ERR_INVALID_AMOUNT);
        require!(max_members >= MIN_POOL_MEMBERS, ERR_INVALID_MEMBER_COUNT);

        let caller = self.blockchain().get_caller();
        let round_duration = opt_round_duration.into_option().unwrap_or_default();
        let pool_id = self.pool_count().get();

        let pool = Pool {
            id: pool_id,
            creator: caller.clone(),
            contribution_amount,
            max_members,
            minimum_reputation,
            creator_fee_percent: CREATOR_FEE_PERCENT,
            round_duration,
            round_deadline: 0u64,
            member_count: 0u64,
            current_round: 0u64,
            completed: false,
            exists: true,
        };

        self.pools(pool_id).set(&pool);
        self.pool_count().set(pool_id + 1);

        self.pool_created_event(pool_id, &caller, &pool.contribution_amount);

        pool_id
    }

    // ========================================================
    // ENDPOINT: joinPool
    // Exactly 2x contribution: one half is the pot, the other
    // half is held as collateral until completion or default.
    // ========================================================

    #[endpoint(joinPool)]
    #[payable("EGLD")]
    fn join_pool(&self, pool_id: u64) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        let mut pool = self.require_pool(pool_id);
        self.require_unlocked(pool_id);
        require!(!pool.completed, ERR_POOL_COMPLETED);
        require!(pool.member_count < pool.max_members, ERR_POOL_FULL);
        // hasJoined is sticky, so this also bars defaulted members from re-entering
        require!(!self.joined(pool_id, &caller).get(), ERR_ALREADY_JOINED);
        require!(
            self.reputation_score(&caller).get() >= pool.minimum_reputation,
            ERR_REPUTATION_TOO_LOW
        );
        require!(payment_amount == pool.join_deposit(), ERR_WRONG_DEPOSIT);

        self.collateral(pool_id, &caller)
            .set(&pool.contribution_amount);
        self.pool_members(pool_id).push(&caller);
        self.joined(pool_id, &caller).set(true);
        self.active_member(pool_id, &caller).set(true);
        self.member_pools(&caller).push(&pool_id);

        pool.member_count += 1;
        if pool.is_full() && pool.is_round_gated() {
            // First round becomes payable one full round after the circle fills
            pool.round_deadline = self.blockchain().get_block_timestamp() + pool.round_duration;
        }
        self.pools(pool_id).set(&pool);

        self.joined_event(pool_id, &caller);
    }

    // ========================================================
    // ENDPOINT: distribute
    // Anyone can push a full pool forward by one round.
    // The final round also pays the creator fee and refunds
    // every member's remaining collateral.
    // ========================================================

    #[endpoint(distribute)]
    fn distribute(&self, pool_id: u64) {
        let mut pool = self.require_pool(pool_id);
        self.require_unlocked(pool_id);
        require!(pool.is_full(), ERR_POOL_NOT_FULL);
        require!(!pool.completed, ERR_POOL_COMPLETED);

        let now = self.blockchain().get_block_timestamp();
        if pool.is_round_gated() {
            require!(now >= pool.round_deadline, ERR_ROUND_NOT_READY);
        }

        let round = pool.current_round;
        // VecMapper is 1-indexed
        let receiver = self.pool_members(pool_id).get(round as usize + 1);
        let payout = pool.round_payout();

        // ── Bookkeeping first: nothing below may leave the pool half-updated ──
        self.reputation_score(&receiver)
            .update(|score| *score += DISTRIBUTION_REPUTATION_REWARD);
        pool.current_round += 1;

        let mut payouts = ManagedVec::new();
        self.push_payout(&mut payouts, &receiver, &payout);

        let is_final_round = pool.current_round == pool.max_members;
        let mut creator_fee = BigUint::zero();
        if is_final_round {
            pool.completed = true;
            creator_fee = pool.total_creator_fee();
            self.push_payout(&mut payouts, &pool.creator, &creator_fee);

            for member in self.pool_members(pool_id).iter() {
                let refund = self.collateral(pool_id, &member).take();
                self.push_payout(&mut payouts, &member, &refund);
            }
        } else if pool.is_round_gated() {
            pool.round_deadline = now + pool.round_duration;
        }
        self.pools(pool_id).set(&pool);

        self.distributed_event(pool_id, &receiver, round, &payout);
        if is_final_round {
            self.pool_completed_event(pool_id, &creator_fee);
        }

        // ── Value out ──
        self.send_payouts(pool_id, &payouts);
    }

    // ========================================================
    // ENDPOINT: handleDefault
    // Anyone can report an active member. Their collateral is
    // split evenly between the members still active.
    // ========================================================

    #[endpoint(handleDefault)]
    fn handle_default(&self, pool_id: u64, member: ManagedAddress) {
        self.require_pool(pool_id);
        self.require_unlocked(pool_id);
        require!(
            self.active_member(pool_id, &member).get(),
            ERR_NOT_ACTIVE_MEMBER
        );

        self.reputation_score(&member)
            .update(|score| *score -= DEFAULT_REPUTATION_PENALTY);
        self.active_member(pool_id, &member).set(false);
        let slashed = self.collateral(pool_id, &member).take();

        let remaining_active = self
            .pool_members(pool_id)
            .iter()
            .filter(|address| self.active_member(pool_id, address).get())
            .count() as u64;

        // Division remainder stays in the contract. With nobody left to
        // share it, so does the whole slashed amount.
        let mut payouts = ManagedVec::new();
        if remaining_active > 0 {
            let share = &slashed / remaining_active;
            for address in self.pool_members(pool_id).iter() {
                if self.active_member(pool_id, &address).get() {
                    self.push_payout(&mut payouts, &address, &share);
                }
            }
        }

        self.collateral_slashed_event(pool_id, &member, &slashed);

        self.send_payouts(pool_id, &payouts);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_pool(&self, pool_id: u64) -> Pool<Self::Api> {
        require!(pool_id < self.pool_count().get(), ERR_POOL_NOT_FOUND);
        let pool = self.pools(pool_id).get();
        require!(pool.exists, ERR_POOL_NOT_FOUND);
        pool
    }

    fn require_unlocked(&self, pool_id: u64) {
        require!(!self.pool_locked(pool_id).get(), ERR_POOL_LOCKED);
    }

    fn push_payout(
        &self,
        payouts: &mut ManagedVec<Payout<Self::Api>>,
        to: &ManagedAddress,
        amount: &BigUint,
    ) {
        if *amount > 0u64 {
            payouts.push(Payout {
                to: to.clone(),
                amount: amount.clone(),
            });
        }
    }

    /// Sends every queued payout while the pool is locked against re-entry.
    /// A single failed transfer aborts the whole call.
    fn send_payouts(&self, pool_id: u64, payouts: &ManagedVec<Payout<Self::Api>>) {
        self.pool_locked(pool_id).set(true);
        for payout in payouts.iter() {
            self.send().direct_egld(&payout.to, &payout.amount);
        }
        self.pool_locked(pool_id).clear();
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getPool)]
    fn get_pool(&self, pool_id: u64) -> Pool<Self::Api> {
        self.require_pool(pool_id)
    }

    #[view(getPools)]
    fn get_pools(&self, from: u64, count: u64) -> MultiValueEncoded<Pool<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.pool_count().get();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for pool_id in from..end {
            result.push(self.pools(pool_id).get());
        }
        result
    }

    #[view(getPoolStatus)]
    fn get_pool_status(&self, pool_id: u64) -> PoolStatus {
        self.require_pool(pool_id).status()
    }

    #[view(getMembers)]
    fn get_members(&self, pool_id: u64) -> MultiValueEncoded<ManagedAddress> {
        self.require_pool(pool_id);
        let mut result = MultiValueEncoded::new();
        for member in self.pool_members(pool_id).iter() {
            result.push(member);
        }
        result
    }

    #[view(getCollateral)]
    fn get_collateral(&self, pool_id: u64, member: ManagedAddress) -> BigUint {
        self.require_pool(pool_id);
        self.collateral(pool_id, &member).get()
    }

    #[view(isActiveMember)]
    fn is_active_member(&self, pool_id: u64, member: ManagedAddress) -> bool {
        self.require_pool(pool_id);
        self.active_member(pool_id, &member).get()
    }

    #[view(hasJoined)]
    fn has_joined(&self, pool_id: u64, member: ManagedAddress) -> bool {
        self.require_pool(pool_id);
        self.joined(pool_id, &member).get()
    }

    #[view(poolCount)]
    fn get_pool_count(&self) -> u64 {
        self.pool_count().get()
    }

    #[view(getContractBalance)]
    fn get_contract_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    #[view(reputation)]
    fn reputation(&self, address: ManagedAddress) -> i64 {
        self.reputation_score(&address).get()
    }

    #[view(getMemberPools)]
    fn get_member_pools(&self, address: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for pool_id in self.member_pools(&address).iter() {
            result.push(pool_id);
        }
        result
    }

    /// Who the next `distribute` call pays, how much, and the earliest
    /// timestamp it is accepted at (0 when the pool is not round-gated).
    #[view(getNextReceiver)]
    fn get_next_receiver(&self, pool_id: u64) -> MultiValue3<ManagedAddress, BigUint, u64> {
        let pool = self.require_pool(pool_id);
        require!(pool.is_full(), ERR_POOL_NOT_FULL);
        require!(!pool.completed, ERR_POOL_COMPLETED);

        let receiver = self
            .pool_members(pool_id)
            .get(pool.current_round as usize + 1);
        let deadline = if pool.is_round_gated() {
            pool.round_deadline
        } else {
            0u64
        };
        (receiver, pool.round_payout(), deadline).into()
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue4<u64, i64, i64, u64> {
        (
            CREATOR_FEE_PERCENT,
            DISTRIBUTION_REPUTATION_REWARD,
            DEFAULT_REPUTATION_PENALTY,
            MIN_POOL_MEMBERS,
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("poolCreated")]
    fn pool_created_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] creator: &ManagedAddress,
        contribution_amount: &BigUint,
    );

    #[event("joined")]
    fn joined_event(&self, #[indexed] pool_id: u64, #[indexed] member: &ManagedAddress);

    #[event("distributed")]
    fn distributed_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] round: u64,
        payout: &BigUint,
    );

    #[event("collateralSlashed")]
    fn collateral_slashed_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] defaulter: &ManagedAddress,
        slashed_amount: &BigUint,
    );

    #[event("poolCompleted")]
    fn pool_completed_event(&self, #[indexed] pool_id: u64, creator_fee: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Pool registry ──

    #[storage_mapper("poolCount")]
    fn pool_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("pools")]
    fn pools(&self, pool_id: u64) -> SingleValueMapper<Pool<Self::Api>>;

    /// Join order, which is also payout order
    #[storage_mapper("poolMembers")]
    fn pool_members(&self, pool_id: u64) -> VecMapper<ManagedAddress>;

    /// Set while payouts are in flight. `direct_egld` runs no receiver code,
    /// so this is defense in depth for future call paths.
    #[storage_mapper("poolLocked")]
    fn pool_locked(&self, pool_id: u64) -> SingleValueMapper<bool>;

    // ── Membership & collateral ──

    #[storage_mapper("collateral")]
    fn collateral(&self, pool_id: u64, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("hasJoined")]
    fn joined(&self, pool_id: u64, member: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("activeMember")]
    fn active_member(&self, pool_id: u64, member: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("memberPools")]
    fn member_pools(&self, member: &ManagedAddress) -> VecMapper<u64>;

    // ── Reputation (global, not scoped to any pool) ──

    #[storage_mapper("reputation")]
    fn reputation_score(&self, address: &ManagedAddress) -> SingleValueMapper<i64>;
}

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Pool Status — derived lifecycle stage
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum PoolStatus {
    /// Accepting members.
    Open,
    /// Full. Rounds are being distributed.
    Active,
    /// Every round paid, fee and collateral settled. Terminal state.
    Completed,
}

// ============================================================
// Pool — one rotating savings circle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Pool<M: ManagedTypeApi> {
    pub id: u64,
    pub creator: ManagedAddress<M>,
    pub contribution_amount: BigUint<M>,
    pub max_members: u64,
    pub minimum_reputation: i64,
    pub creator_fee_percent: u64,
    /// Seconds between rounds. 0 disables round gating.
    pub round_duration: u64,
    /// Block timestamp before which `distribute` is rejected (0 until armed)
    pub round_deadline: u64,
    pub member_count: u64,
    pub current_round: u64,
    pub completed: bool,
    pub exists: bool,
}

impl<M: ManagedTypeApi> Pool<M> {
    pub fn is_full(&self) -> bool {
        self.member_count == self.max_members
    }

    pub fn is_round_gated(&self) -> bool {
        self.round_duration > 0
    }

    pub fn status(&self) -> PoolStatus {
        if self.completed {
            PoolStatus::Completed
        } else if self.is_full() {
            PoolStatus::Active
        } else {
            PoolStatus::Open
        }
    }

    /// Amount every member must attach when joining: contribution plus equal collateral.
    pub fn join_deposit(&self) -> BigUint<M> {
        &self.contribution_amount * 2u64
    }

    /// Fee withheld from a single round's payout, truncated.
    pub fn fee_per_round(&self) -> BigUint<M> {
        (&self.contribution_amount * self.creator_fee_percent) / crate::PERCENT_DENOMINATOR
    }

    pub fn round_payout(&self) -> BigUint<M> {
        &self.contribution_amount - &self.fee_per_round()
    }

    /// Fee paid to the creator on completion: exactly what the rounds withheld,
    /// so a pool never pays out more than its members put in.
    pub fn total_creator_fee(&self) -> BigUint<M> {
        self.fee_per_round() * self.max_members
    }
}

// ============================================================
// Payout — an outbound transfer queued until bookkeeping is done
// ============================================================

#[derive(ManagedVecItem)]
pub struct Payout<M: ManagedTypeApi> {
    pub to: ManagedAddress<M>,
    pub amount: BigUint<M>,
}

use crate::config::EngineConfig;
use crate::instructions::{
    self, CreateDaoArgs, CreateProposalArgs, DaoAddresses, ExecutionOutcome, VoteArgs, VoteReceipt,
};
use crate::ledger::TokenLedger;
use crate::state::{
    Admin, Dao, FeeAccount, Membership, Proposal, ProposalStatus, UserProposalVotes,
};
use crate::utils::RecordKey;
use anchor_lang::prelude::*;
use std::collections::HashMap;

/// Signer identity and clock for one instruction, supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub signer: Pubkey,
    pub unix_timestamp: i64,
}

impl Invocation {
    pub const fn new(signer: Pubkey, unix_timestamp: i64) -> Self {
        Self {
            signer,
            unix_timestamp,
        }
    }
}

/// Every governance record plus the token ledger they settle against.
///
/// # Exclusive Access
///
/// Handlers take `&mut GovernanceContext`, so one instruction owns all records
/// and the ledger for its whole run. Hosts sharing a context across threads
/// wrap it in a `Mutex`; instructions then execute one at a time exactly like
/// a serialized ledger would run them.
///
/// # Storage
///
/// Records live in maps keyed by their derived address. A record exists iff
/// its address is present; nothing is ever removed.
#[derive(Debug)]
pub struct GovernanceContext<L: TokenLedger> {
    pub(crate) config: EngineConfig,
    pub(crate) fee_account: Option<FeeAccount>,
    pub(crate) daos: HashMap<Pubkey, Dao>,
    pub(crate) admins: HashMap<Pubkey, Admin>,
    pub(crate) memberships: HashMap<Pubkey, Membership>,
    pub(crate) proposals: HashMap<Pubkey, Proposal>,
    pub(crate) vote_records: HashMap<Pubkey, UserProposalVotes>,
    pub(crate) ledger: L,
}

impl<L: TokenLedger> GovernanceContext<L> {
    pub fn new(config: EngineConfig, ledger: L) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            fee_account: None,
            daos: HashMap::new(),
            admins: HashMap::new(),
            memberships: HashMap::new(),
            proposals: HashMap::new(),
            vote_records: HashMap::new(),
            ledger,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline(always)]
    pub fn program_id(&self) -> &Pubkey {
        &self.config.program_id
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Direct ledger access for hosts funding wallets or minting outside any
    /// governance instruction.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn into_ledger(self) -> L {
        self.ledger
    }


    pub fn initialize_fee_account(&mut self, invocation: &Invocation) -> Result<Pubkey> {
        instructions::initialize_fee_account(self, invocation)
    }

    pub fn create_dao(&mut self, invocation: &Invocation, args: CreateDaoArgs) -> Result<DaoAddresses> {
        instructions::create_dao(self, invocation, args)
    }

    pub fn join_dao(&mut self, invocation: &Invocation, dao: &Pubkey) -> Result<Pubkey> {
        instructions::join_dao(self, invocation, dao)
    }

    pub fn create_proposal(
        &mut self,
        invocation: &Invocation,
        dao: &Pubkey,
        args: CreateProposalArgs,
    ) -> Result<Pubkey> {
        instructions::create_proposal(self, invocation, dao, args)
    }

    pub fn vote_on_proposal(
        &mut self,
        invocation: &Invocation,
        dao: &Pubkey,
        proposal: &Pubkey,
        args: VoteArgs,
    ) -> Result<VoteReceipt> {
        instructions::vote_on_proposal(self, invocation, dao, proposal, args)
    }

    pub fn execute_proposal(
        &mut self,
        invocation: &Invocation,
        dao: &Pubkey,
        proposal: &Pubkey,
    ) -> Result<ExecutionOutcome> {
        instructions::execute_proposal(self, invocation, dao, proposal)
    }


    #[inline(always)]
    fn derive(&self, key: RecordKey) -> Pubkey {
        key.address(&self.config.program_id)
    }

    pub fn fee_account_address(&self) -> Pubkey {
        self.derive(RecordKey::FeeAccount)
    }

    pub fn dao_address(&self, creator: &Pubkey) -> Pubkey {
        self.derive(RecordKey::Dao { creator: *creator })
    }

    pub fn admin_address(&self, dao: &Pubkey, admin: &Pubkey) -> Pubkey {
        self.derive(RecordKey::Admin {
            dao: *dao,
            admin: *admin,
        })
    }

    pub fn treasury_vault_address(&self, dao: &Pubkey) -> Pubkey {
        self.derive(RecordKey::TreasuryVault { dao: *dao })
    }

    pub fn burn_vault_address(&self, dao: &Pubkey) -> Pubkey {
        self.derive(RecordKey::BurnVault { dao: *dao })
    }

    pub fn membership_address(&self, dao: &Pubkey, user: &Pubkey) -> Pubkey {
        self.derive(RecordKey::Membership {
            dao: *dao,
            user: *user,
        })
    }

    pub fn proposal_address(&self, dao: &Pubkey, sequence: u64) -> Pubkey {
        self.derive(RecordKey::Proposal {
            dao: *dao,
            sequence,
        })
    }

    pub fn user_proposal_votes_address(&self, user: &Pubkey, proposal: &Pubkey) -> Pubkey {
        self.derive(RecordKey::UserProposalVotes {
            user: *user,
            proposal: *proposal,
        })
    }


    pub fn fee_account(&self) -> Option<&FeeAccount> {
        self.fee_account.as_ref()
    }

    pub fn dao(&self, address: &Pubkey) -> Option<&Dao> {
        self.daos.get(address)
    }

    pub fn admin(&self, address: &Pubkey) -> Option<&Admin> {
        self.admins.get(address)
    }

    pub fn membership(&self, address: &Pubkey) -> Option<&Membership> {
        self.memberships.get(address)
    }

    pub fn proposal(&self, address: &Pubkey) -> Option<&Proposal> {
        self.proposals.get(address)
    }

    pub fn user_proposal_votes(&self, address: &Pubkey) -> Option<&UserProposalVotes> {
        self.vote_records.get(address)
    }

    /// Live status at `now`, resolving the clock-driven `Closed` state.
    pub fn proposal_status(&self, address: &Pubkey, now: i64) -> Option<ProposalStatus> {
        self.proposals.get(address).map(|proposal| proposal.status_at(now))
    }

    /// Proposals of `dao` in sequence order.
    pub fn proposals_of(&self, dao: &Pubkey) -> Vec<(Pubkey, &Proposal)> {
        let mut proposals: Vec<(Pubkey, &Proposal)> = self
            .proposals
            .iter()
            .filter(|(_, proposal)| proposal.dao == *dao)
            .map(|(address, proposal)| (*address, proposal))
            .collect();
        proposals.sort_by_key(|(_, proposal)| proposal.sequence);
        proposals
    }

    pub fn admin_count(&self, dao: &Pubkey) -> usize {
        self.admins.values().filter(|admin| admin.dao == *dao).count()
    }

    pub fn membership_count(&self, dao: &Pubkey) -> usize {
        self.memberships
            .values()
            .filter(|membership| membership.dao == *dao)
            .count()
    }

    /// True when any record or token account already occupies `address`.
    pub(crate) fn address_in_use(&self, address: &Pubkey) -> bool {
        self.daos.contains_key(address)
            || self.admins.contains_key(address)
            || self.memberships.contains_key(address)
            || self.proposals.contains_key(address)
            || self.vote_records.contains_key(address)
            || self.ledger.account_exists(address)
    }
}

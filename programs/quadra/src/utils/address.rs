use crate::utils::constants::{
    ADMIN_SEED, BURN_SEED, DAO_SEED, FEE_SEED, MEMBERSHIP_SEED, PROPOSAL_SEED,
    TREASURY_VAULT_SEED, USER_PROPOSAL_VOTES_SEED,
};
use anchor_lang::prelude::*;

/// Composite key of every governance record.
///
/// Each variant names the namespace tag and the parent identifiers the record
/// hangs off. The program-derived address computed from those seeds is the
/// record's only identity, so an existence check is a lookup miss on the
/// derived address and no separate index is ever maintained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKey {
    FeeAccount,
    Dao { creator: Pubkey },
    Admin { dao: Pubkey, admin: Pubkey },
    TreasuryVault { dao: Pubkey },
    BurnVault { dao: Pubkey },
    Membership { dao: Pubkey, user: Pubkey },
    Proposal { dao: Pubkey, sequence: u64 },
    UserProposalVotes { user: Pubkey, proposal: Pubkey },
}

impl RecordKey {
    /// Seed list in the exact order existing clients feed to
    /// `findProgramAddressSync`. Proposal sequences are 8-byte little endian.
    pub fn seeds(&self) -> Vec<Vec<u8>> {
        match self {
            RecordKey::FeeAccount => vec![FEE_SEED.to_vec()],
            RecordKey::Dao { creator } => vec![DAO_SEED.to_vec(), creator.to_bytes().to_vec()],
            RecordKey::Admin { dao, admin } => vec![
                ADMIN_SEED.to_vec(),
                dao.to_bytes().to_vec(),
                admin.to_bytes().to_vec(),
            ],
            RecordKey::TreasuryVault { dao } => {
                vec![TREASURY_VAULT_SEED.to_vec(), dao.to_bytes().to_vec()]
            }
            RecordKey::BurnVault { dao } => vec![BURN_SEED.to_vec(), dao.to_bytes().to_vec()],
            RecordKey::Membership { dao, user } => vec![
                MEMBERSHIP_SEED.to_vec(),
                dao.to_bytes().to_vec(),
                user.to_bytes().to_vec(),
            ],
            RecordKey::Proposal { dao, sequence } => vec![
                PROPOSAL_SEED.to_vec(),
                dao.to_bytes().to_vec(),
                sequence.to_le_bytes().to_vec(),
            ],
            RecordKey::UserProposalVotes { user, proposal } => vec![
                USER_PROPOSAL_VOTES_SEED.to_vec(),
                user.to_bytes().to_vec(),
                proposal.to_bytes().to_vec(),
            ],
        }
    }

    /// Derives the canonical address and bump for this key.
    pub fn find_address(&self, program_id: &Pubkey) -> (Pubkey, u8) {
        let seeds = self.seeds();
        let seed_refs: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();
        Pubkey::find_program_address(&seed_refs, program_id)
    }

    #[inline(always)]
    pub fn address(&self, program_id: &Pubkey) -> Pubkey {
        self.find_address(program_id).0
    }
}

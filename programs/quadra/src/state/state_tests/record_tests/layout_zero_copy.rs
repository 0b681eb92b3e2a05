use crate::state::admin::Admin;
use crate::state::fee_account::FeeAccount;
use crate::state::membership::{Membership, MembershipFlags};
use crate::state::state_tests::helpers::deterministic_pubkey;
use crate::state::user_proposal_votes::UserProposalVotes;
use bytemuck::{bytes_of, from_bytes, Pod, Zeroable};
use std::mem::{align_of, size_of};

fn assert_pod<T: Pod + Zeroable>() {}

#[test]
fn record_layout_contract() {
    assert_eq!(size_of::<FeeAccount>(), 64, "FeeAccount size drifted");
    assert_eq!(size_of::<Admin>(), 72, "Admin size drifted");
    assert_eq!(size_of::<Membership>(), 88, "Membership size drifted");
    assert_eq!(size_of::<UserProposalVotes>(), 88, "UserProposalVotes size drifted");

    assert_eq!(align_of::<FeeAccount>(), 8);
    assert_eq!(align_of::<Admin>(), 1);
    assert_eq!(align_of::<Membership>(), 8);
    assert_eq!(align_of::<UserProposalVotes>(), 8);

    assert_eq!(FeeAccount::LEN, size_of::<FeeAccount>());
    assert_eq!(Admin::LEN, size_of::<Admin>());
    assert_eq!(Membership::LEN, size_of::<Membership>());
    assert_eq!(UserProposalVotes::LEN, size_of::<UserProposalVotes>());

    assert_eq!(size_of::<MembershipFlags>(), 1);
}

#[test]
fn records_satisfy_pod() {
    assert_pod::<FeeAccount>();
    assert_pod::<Admin>();
    assert_pod::<Membership>();
    assert_pod::<UserProposalVotes>();
    assert_pod::<MembershipFlags>();
}

#[test]
fn zeroed_records_are_inert() {
    let membership = Membership::zeroed();
    assert!(!membership.is_active());

    let votes = UserProposalVotes::zeroed();
    assert_eq!(votes.amount, 0);
}

#[test]
fn membership_bytes_round_trip() {
    let membership = Membership::new(deterministic_pubkey(1), deterministic_pubkey(2), 77, 1_234, 200);
    let bytes = bytes_of(&membership).to_vec();

    // Vec<u8> gives no alignment guarantee, so copy out with read_unaligned semantics.
    let decoded: Membership = bytemuck::pod_read_unaligned(&bytes);
    assert_eq!(decoded, membership);
    assert!(bytes[64 + 16 + 2..].iter().all(|b| *b == 0), "padding must stay zeroed");
}

#[test]
fn vote_ledger_bytes_round_trip() {
    let mut record = UserProposalVotes::new(deterministic_pubkey(3), deterministic_pubkey(4), 199);
    record.amount = 12;
    record.tokens_paid = 144;

    let decoded: &UserProposalVotes = from_bytes(bytes_of(&record));
    assert_eq!(*decoded, record);
    assert_eq!(decoded.side, UserProposalVotes::NO_SIDE);
}

#[test]
fn fee_and_admin_bytes_round_trip() {
    let fee_account = FeeAccount::new(deterministic_pubkey(5), 100_000_000, 198);
    let admin = Admin::new(deterministic_pubkey(6), deterministic_pubkey(7), 197);

    assert_eq!(*from_bytes::<FeeAccount>(bytes_of(&fee_account)), fee_account);
    assert_eq!(*from_bytes::<Admin>(bytes_of(&admin)), admin);
}

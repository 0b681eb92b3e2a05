use super::helpers::{proposal_fixture, transfer_fixture};
use crate::error::GovernanceError;
use crate::state::proposal::{Proposal, ProposalAction, ProposalStatus};
use crate::state::state_tests::helpers::{
    ascii_of_len, assert_governance_error, deterministic_pubkey,
};
use crate::utils::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use anchor_lang::prelude::Pubkey;
use anchor_lang::{AccountDeserialize, AccountSerialize, Discriminator, Space};

#[test]
fn action_decoding_pairs_discriminant_with_beneficiary() {
    let beneficiary = deterministic_pubkey(40);

    assert_eq!(
        ProposalAction::from_wire(ProposalAction::TRANSFER, beneficiary).unwrap(),
        ProposalAction::Transfer { beneficiary }
    );
    // A burn ignores whatever account rode along with it.
    assert_eq!(
        ProposalAction::from_wire(ProposalAction::BURN, beneficiary).unwrap(),
        ProposalAction::Burn
    );
    assert_eq!(
        ProposalAction::from_wire(ProposalAction::BURN, Pubkey::default()).unwrap(),
        ProposalAction::Burn
    );
}

#[test]
fn transfer_without_beneficiary_is_rejected() {
    assert_governance_error(
        ProposalAction::from_wire(ProposalAction::TRANSFER, Pubkey::default()),
        GovernanceError::InvalidBeneficiary,
    );
}

#[test]
fn unknown_action_is_rejected() {
    for action in [2u8, 7, u8::MAX] {
        assert_governance_error(
            ProposalAction::from_wire(action, deterministic_pubkey(41)),
            GovernanceError::InvalidProposalAction,
        );
    }
}

#[test]
fn action_accessors() {
    let beneficiary = deterministic_pubkey(42);
    let transfer = ProposalAction::Transfer { beneficiary };

    assert_eq!(transfer.as_u8(), ProposalAction::TRANSFER);
    assert_eq!(transfer.beneficiary(), Some(beneficiary));
    assert_eq!(ProposalAction::Burn.as_u8(), ProposalAction::BURN);
    assert_eq!(ProposalAction::Burn.beneficiary(), None);
}

#[test]
fn proposal_round_trips_for_both_actions() {
    for proposal in [transfer_fixture(), proposal_fixture(ProposalAction::Burn)] {
        let mut data = Vec::new();
        proposal.try_serialize(&mut data).unwrap();

        let decoded = Proposal::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded, proposal);
    }
}

#[test]
fn widest_proposal_fills_init_space_exactly() {
    let mut proposal = transfer_fixture();
    proposal.title = ascii_of_len(MAX_TITLE_LENGTH);
    proposal.description = ascii_of_len(MAX_DESCRIPTION_LENGTH);
    proposal.status = ProposalStatus::Executed { passed: false };

    let mut data = Vec::new();
    proposal.try_serialize(&mut data).unwrap();

    assert_eq!(data.len(), Proposal::DISCRIMINATOR.len() + Proposal::INIT_SPACE);
}

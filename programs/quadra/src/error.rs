use anchor_lang::prelude::*;

#[error_code]
pub enum GovernanceError {
    #[msg("Fee account is already initialized")]
    AlreadyInitialized,
    #[msg("Record already exists at the derived address")]
    AlreadyExists,
    #[msg("Caller is not a member of this DAO")]
    NotAMember,
    #[msg("Caller is already a member of this DAO")]
    AlreadyMember,
    #[msg("Insufficient token balance")]
    InsufficientBalance,
    #[msg("Insufficient treasury vault balance")]
    InsufficientVaultBalance,
    #[msg("Invalid parameters")]
    InvalidParameters,
    #[msg("End date must be in the future")]
    InvalidEndDate,
    #[msg("Vote side must be 0 (no) or 1 (yes)")]
    InvalidSide,
    #[msg("The voting period has ended")]
    VotingClosed,
    #[msg("The voting period has not ended")]
    NotReady,
    #[msg("Proposal already executed")]
    AlreadyExecuted,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Caller is not authorized to perform this operation")]
    Unauthorized,
    #[msg("Fee account has not been initialized")]
    FeeAccountNotInitialized,
    #[msg("DAO does not exist")]
    UnknownDao,
    #[msg("Proposal does not exist")]
    UnknownProposal,
    #[msg("DAO and proposal mismatch")]
    InvalidProposal,
    #[msg("Proposal action must be 0 (burn) or 1 (transfer)")]
    InvalidProposalAction,
    #[msg("Invalid beneficiary")]
    InvalidBeneficiary,
    #[msg("Invalid token mint")]
    InvalidTokenMint,
    #[msg("Voter already committed weight to the other side")]
    ConflictingVoteSide,
    #[msg("Vote pricing curve is out of range")]
    InvalidPricingCurve,
    #[msg("Name is too short")]
    NameTooShort,
    #[msg("Name is too long")]
    NameTooLong,
    #[msg("Image is too long")]
    ImageTooLong,
    #[msg("Title is too short")]
    TitleTooShort,
    #[msg("Title is too long")]
    TitleTooLong,
    #[msg("Description is too long")]
    DescriptionTooLong,
}

#[error_code(offset = 7000)]
pub enum LedgerError {
    #[msg("Token ledger: unknown mint")]
    UnknownMint,
    #[msg("Token ledger: account not found")]
    AccountNotFound,
    #[msg("Token ledger: account already exists")]
    AccountAlreadyExists,
    #[msg("Token ledger: account holds a different mint")]
    MintMismatch,
    #[msg("Token ledger: insufficient funds")]
    InsufficientFunds,
    #[msg("Token ledger: supply overflow")]
    SupplyOverflow,
}

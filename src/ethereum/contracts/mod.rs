//! Smart contract bindings.

pub mod ballot_token;
pub mod tokenized_ballot;

pub use ballot_token::IBallotToken;
pub use tokenized_ballot::ITokenizedBallot;

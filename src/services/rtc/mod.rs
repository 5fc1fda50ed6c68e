pub mod signer;
pub mod token_service;

//! Address derivation for clients.
//!
//! Every function mirrors the seeds checked by the account constraints in
//! [`crate::context`], so an address derived here is the one the program
//! will accept for the same inputs.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::util::constants::*;
use crate::util::seed_slice;
use crate::ID;

/// Mint PDA used by `initialize`, scoped to the user and (name, symbol)
pub fn find_nft_mint_address(user: &Pubkey, name: &str, symbol: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            NFT_MINT_SEED,
            user.as_ref(),
            seed_slice(name),
            seed_slice(symbol),
        ],
        &ID,
    )
}

/// Token account PDA used by `initialize`
pub fn find_nft_token_account_address(user: &Pubkey, name: &str, symbol: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            NFT_TOKEN_ACCOUNT_SEED,
            user.as_ref(),
            seed_slice(name),
            seed_slice(symbol),
        ],
        &ID,
    )
}

/// Mint PDA used by `hero_mint`, independent of the caller
pub fn find_hero_mint_address(name: &str, symbol: &str, uri: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            HERO_MINT_SEED,
            ID.as_ref(),
            seed_slice(name),
            seed_slice(symbol),
            seed_slice(uri),
        ],
        &ID,
    )
}

/// Token account PDA used by `hero_mint`
pub fn find_hero_token_account_address(name: &str, symbol: &str, uri: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            HERO_MINT_TOKEN_ACCOUNT_SEED,
            ID.as_ref(),
            seed_slice(name),
            seed_slice(symbol),
            seed_slice(uri),
        ],
        &ID,
    )
}

/// The program-wide mint used by `mint_with_tokenaccount`
pub fn find_single_mint_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NFT_MINT_SEED], &ID)
}

/// Metaplex metadata PDA for a given mint
pub fn find_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}

pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

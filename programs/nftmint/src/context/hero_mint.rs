use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::util::constants::*;
use crate::util::seed_slice;
use crate::ID;

/// Hero addresses are scoped to the program, not the caller: one hero per
/// (name, symbol, uri) across all users.
#[derive(Accounts)]
#[instruction(name: String, symbol: String, uri: String)]
pub struct HeroMint<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init,
        payer = user,
        seeds = [
            HERO_MINT_SEED,
            ID.as_ref(),
            seed_slice(&name),
            seed_slice(&symbol),
            seed_slice(&uri),
        ],
        bump,
        mint::decimals = NFT_DECIMALS,
        mint::authority = user,
    )]
    pub hero_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = user,
        seeds = [
            HERO_MINT_TOKEN_ACCOUNT_SEED,
            ID.as_ref(),
            seed_slice(&name),
            seed_slice(&symbol),
            seed_slice(&uri),
        ],
        bump,
        token::mint = hero_mint,
        token::authority = user,
    )]
    pub hero_token_account: Account<'info, TokenAccount>,

    /// CHECK: Derived from the mint and validated by the Metaplex program
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            hero_mint.key().as_ref(),
        ],
        bump,
        seeds::program = TOKEN_METADATA_PROGRAM_ID
    )]
    pub hero_metadata_account: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub token_program: Program<'info, Token>,

    /// CHECK: Metaplex Token Metadata program, checked by address
    #[account(
        constraint = mpl_program.key() == TOKEN_METADATA_PROGRAM_ID @ crate::error::NftMintError::InvalidProgram
    )]
    pub mpl_program: UncheckedAccount<'info>,
}

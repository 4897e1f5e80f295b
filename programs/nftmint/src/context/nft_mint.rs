use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::util::constants::*;
use crate::util::seed_slice;

#[derive(Accounts)]
#[instruction(name: String, symbol: String)]
pub struct NftMint<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init,
        payer = user,
        seeds = [
            NFT_MINT_SEED,
            user.key().as_ref(),
            seed_slice(&name),
            seed_slice(&symbol),
        ],
        bump,
        mint::decimals = NFT_DECIMALS,
        mint::authority = user,
    )]
    pub nft_mint_account: Account<'info, Mint>,

    #[account(
        init,
        payer = user,
        seeds = [
            NFT_TOKEN_ACCOUNT_SEED,
            user.key().as_ref(),
            seed_slice(&name),
            seed_slice(&symbol),
        ],
        bump,
        token::mint = nft_mint_account,
        token::authority = user,
    )]
    pub nft_token_account: Account<'info, TokenAccount>,

    // Only valid while the mint has no metadata yet; Metaplex rejects an
    // already-initialized metadata account.
    /// CHECK: Derived from the mint and validated by the Metaplex program
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            nft_mint_account.key().as_ref(),
        ],
        bump,
        seeds::program = TOKEN_METADATA_PROGRAM_ID
    )]
    pub nft_meta_data_account: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub token_program: Program<'info, Token>,

    /// CHECK: Metaplex Token Metadata program, checked by address
    #[account(
        constraint = mpl_program.key() == TOKEN_METADATA_PROGRAM_ID @ crate::error::NftMintError::InvalidProgram
    )]
    pub mpl_program: UncheckedAccount<'info>,
}

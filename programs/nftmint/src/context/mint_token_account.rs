use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::util::constants::{NFT_DECIMALS, NFT_MINT_SEED};

#[derive(Accounts)]
pub struct MintTokenAccount<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    // A single mint for the whole program; a second call fails on `init`.
    #[account(
        init,
        payer = user,
        seeds = [NFT_MINT_SEED],
        bump,
        mint::decimals = NFT_DECIMALS,
        mint::authority = user,
    )]
    pub hero_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = hero_mint,
        associated_token::authority = user,
    )]
    pub hero_token_account: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

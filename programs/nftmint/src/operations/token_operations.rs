use anchor_lang::prelude::*;
use anchor_spl::token::{
    self, spl_token::instruction::AuthorityType, Mint, MintTo, SetAuthority, Token, TokenAccount,
};

use crate::util::constants::NFT_SUPPLY;

/// Mint the single NFT unit into the holder's token account.
/// `authority` must be the current mint authority and a transaction signer.
pub fn mint_single_token<'info>(
    mint_account: &Account<'info, Mint>,
    token_account: &Account<'info, TokenAccount>,
    authority: &AccountInfo<'info>,
    token_program: &Program<'info, Token>,
) -> Result<()> {
    let mint_to_ctx = CpiContext::new(
        token_program.to_account_info(),
        MintTo {
            mint: mint_account.to_account_info(),
            to: token_account.to_account_info(),
            authority: authority.clone(),
        },
    );

    token::mint_to(mint_to_ctx, NFT_SUPPLY)
}

/// Drop the mint authority so no further units can ever be minted
pub fn revoke_mint_authority<'info>(
    mint_account: &Account<'info, Mint>,
    current_authority: &AccountInfo<'info>,
    token_program: &Program<'info, Token>,
) -> Result<()> {
    let set_authority_ctx = CpiContext::new(
        token_program.to_account_info(),
        SetAuthority {
            current_authority: current_authority.clone(),
            account_or_mint: mint_account.to_account_info(),
        },
    );

    token::set_authority(set_authority_ctx, AuthorityType::MintTokens, None)
}

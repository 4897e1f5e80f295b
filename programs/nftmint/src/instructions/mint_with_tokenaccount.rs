use anchor_lang::prelude::*;

use crate::context::MintTokenAccount;
use crate::event::TokenAccountMinted;
use crate::operations::mint_single_token;

/// Mint one unit of the program-wide mint into the user's associated token
/// account. No metadata is attached; the string arguments are only logged.
pub fn handler(
    ctx: Context<MintTokenAccount>,
    name: String,
    symbol: String,
    uri: String,
) -> Result<()> {
    let accounts = ctx.accounts;
    msg!("create mint account: {}", accounts.hero_mint.key());
    msg!("create spl token account: {}", accounts.hero_token_account.key());

    mint_single_token(
        &accounts.hero_mint,
        &accounts.hero_token_account,
        &accounts.user.to_account_info(),
        &accounts.token_program,
    )?;
    msg!("minted {} ({}) {}", name, symbol, uri);

    emit!(TokenAccountMinted {
        mint: accounts.hero_mint.key(),
        token_account: accounts.hero_token_account.key(),
        owner: accounts.user.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

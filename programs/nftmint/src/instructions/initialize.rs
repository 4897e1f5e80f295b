use anchor_lang::prelude::*;

use crate::context::NftMint;
use crate::event::NftMinted;
use crate::operations::{create_metadata_account, mint_single_token};
use crate::util::{constants::DEFAULT_IS_MUTABLE, validate_metadata_inputs};

pub fn handler(ctx: Context<NftMint>, name: String, symbol: String, uri: String) -> Result<()> {
    validate_metadata_inputs(&name, &symbol, &uri)?;

    let accounts = ctx.accounts;
    msg!("create mint account: {}", accounts.nft_mint_account.key());
    msg!("create spl token account: {}", accounts.nft_token_account.key());

    mint_single_token(
        &accounts.nft_mint_account,
        &accounts.nft_token_account,
        &accounts.user.to_account_info(),
        &accounts.token_program,
    )?;

    create_metadata_account(
        &accounts.nft_meta_data_account.to_account_info(),
        &accounts.nft_mint_account.to_account_info(),
        &accounts.user.to_account_info(),
        &accounts.system_program.to_account_info(),
        &accounts.rent.to_account_info(),
        &accounts.mpl_program.to_account_info(),
        name.clone(),
        symbol.clone(),
        uri.clone(),
        true,
        DEFAULT_IS_MUTABLE,
    )?;
    msg!("create metadata account: {}", accounts.nft_meta_data_account.key());

    emit!(NftMinted {
        mint: accounts.nft_mint_account.key(),
        token_account: accounts.nft_token_account.key(),
        metadata: accounts.nft_meta_data_account.key(),
        owner: accounts.user.key(),
        name,
        symbol,
        uri,
        fixed_supply: false,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

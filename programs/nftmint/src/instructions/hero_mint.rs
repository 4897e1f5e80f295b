use anchor_lang::prelude::*;

use crate::context::HeroMint;
use crate::error::NftMintError;
use crate::event::NftMinted;
use crate::operations::{create_metadata_account, mint_single_token, revoke_mint_authority};
use crate::util::{
    constants::{HERO_IS_MUTABLE, NFT_SUPPLY},
    validate_metadata_inputs,
};

/// Mint a hero NFT and lock its supply at one.
///
/// Metadata is created while the user still holds the mint authority, which
/// is revoked afterwards. The user signs as update authority and the metadata
/// is immutable.
pub fn handler(ctx: Context<HeroMint>, name: String, symbol: String, uri: String) -> Result<()> {
    validate_metadata_inputs(&name, &symbol, &uri)?;

    let accounts = ctx.accounts;
    msg!("create mint account: {}", accounts.hero_mint.key());
    msg!("create spl token account: {}", accounts.hero_token_account.key());

    mint_single_token(
        &accounts.hero_mint,
        &accounts.hero_token_account,
        &accounts.user.to_account_info(),
        &accounts.token_program,
    )?;

    create_metadata_account(
        &accounts.hero_metadata_account.to_account_info(),
        &accounts.hero_mint.to_account_info(),
        &accounts.user.to_account_info(),
        &accounts.system_program.to_account_info(),
        &accounts.rent.to_account_info(),
        &accounts.mpl_program.to_account_info(),
        name.clone(),
        symbol.clone(),
        uri.clone(),
        true,
        HERO_IS_MUTABLE,
    )?;
    msg!("create metadata account: {}", accounts.hero_metadata_account.key());

    revoke_mint_authority(
        &accounts.hero_mint,
        &accounts.user.to_account_info(),
        &accounts.token_program,
    )?;

    accounts.hero_mint.reload()?;
    require!(
        accounts.hero_mint.supply == NFT_SUPPLY && accounts.hero_mint.mint_authority.is_none(),
        NftMintError::InvalidTokenSupply
    );
    msg!("mint authority revoked, supply fixed at {}", NFT_SUPPLY);

    emit!(NftMinted {
        mint: accounts.hero_mint.key(),
        token_account: accounts.hero_token_account.key(),
        metadata: accounts.hero_metadata_account.key(),
        owner: accounts.user.key(),
        name,
        symbol,
        uri,
        fixed_supply: true,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

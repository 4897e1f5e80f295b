use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use mpl_token_metadata::instructions::CreateMetadataAccountV3Builder;
use mpl_token_metadata::types::DataV2;

use crate::error::NftMintError;
use crate::util::constants::DEFAULT_SELLER_FEE_BASIS_POINTS;

/// Create the Metaplex metadata account for `mint`.
///
/// `authority` acts as mint authority, payer and update authority, so it must
/// still hold the mint authority when this runs. Immutable metadata can never
/// be updated afterwards, even by the update authority.
#[allow(clippy::too_many_arguments)]
pub fn create_metadata_account<'info>(
    metadata: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    rent: &AccountInfo<'info>,
    metadata_program: &AccountInfo<'info>,
    name: String,
    symbol: String,
    uri: String,
    update_authority_is_signer: bool,
    is_mutable: bool,
) -> Result<()> {
    let data = DataV2 {
        name,
        symbol,
        uri,
        seller_fee_basis_points: DEFAULT_SELLER_FEE_BASIS_POINTS,
        creators: None,
        collection: None,
        uses: None,
    };

    let ix = CreateMetadataAccountV3Builder::new()
        .metadata(*metadata.key)
        .mint(*mint.key)
        .mint_authority(*authority.key)
        .payer(*authority.key)
        .update_authority(*authority.key, update_authority_is_signer)
        .system_program(*system_program.key)
        .rent(Some(*rent.key))
        .data(data)
        .is_mutable(is_mutable)
        .instruction();

    // [metadata, mint, mint_authority, payer, update_authority, system_program, rent]
    invoke(
        &ix,
        &[
            metadata.clone(),
            mint.clone(),
            authority.clone(),
            authority.clone(),
            authority.clone(),
            system_program.clone(),
            rent.clone(),
            metadata_program.clone(),
        ],
    )
    .map_err(|e| {
        msg!("Failed to create metadata account: {:?}", e);
        NftMintError::MetadataCreationFailed
    })?;

    Ok(())
}

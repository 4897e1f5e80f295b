use anchor_lang::prelude::*;

use crate::error::NftMintError;
use crate::util::constants::{MAX_NAME_LENGTH, MAX_SEED_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH};

/// Bytes of `value` used as a PDA seed, cut to `MAX_SEED_LENGTH`.
///
/// The cut is on bytes, so a multi-byte character straddling the limit is
/// split. Clients must derive addresses from the same byte prefix.
pub fn seed_slice(value: &str) -> &[u8] {
    let bytes = value.as_bytes();
    if bytes.len() > MAX_SEED_LENGTH {
        &bytes[..MAX_SEED_LENGTH]
    } else {
        bytes
    }
}

/// Validate metadata inputs against Metaplex limits before any CPI runs
pub fn validate_metadata_inputs(name: &str, symbol: &str, uri: &str) -> Result<()> {
    require!(!name.is_empty(), NftMintError::EmptyName);
    require!(name.len() <= MAX_NAME_LENGTH, NftMintError::NameTooLong);

    require!(!symbol.is_empty(), NftMintError::EmptySymbol);
    require!(symbol.len() <= MAX_SYMBOL_LENGTH, NftMintError::SymbolTooLong);

    require!(!uri.is_empty(), NftMintError::EmptyUri);
    require!(uri.len() <= MAX_URI_LENGTH, NftMintError::UriTooLong);

    Ok(())
}

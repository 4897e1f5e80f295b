use anchor_lang::prelude::*;

#[error_code]
pub enum NftMintError {
    // ========== INPUT VALIDATION ERRORS ==========
    #[msg("Name must not be empty")]
    EmptyName,

    #[msg("Symbol must not be empty")]
    EmptySymbol,

    #[msg("URI must not be empty")]
    EmptyUri,

    #[msg("Name too long")]
    NameTooLong,

    #[msg("Symbol too long")]
    SymbolTooLong,

    #[msg("URI too long")]
    UriTooLong,

    // ========== METAPLEX ERRORS ==========
    #[msg("Metadata creation failed")]
    MetadataCreationFailed,

    #[msg("Invalid program provided")]
    InvalidProgram,

    // ========== TOKEN ERRORS ==========
    #[msg("Invalid token supply for NFT")]
    InvalidTokenSupply,
}

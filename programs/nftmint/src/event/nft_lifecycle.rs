use anchor_lang::prelude::*;

/// NFT lifecycle events
#[event]
pub struct NftMinted {
    /// The mint account of the newly created NFT
    pub mint: Pubkey,
    /// Token account holding the single unit
    pub token_account: Pubkey,
    /// Metaplex metadata account
    pub metadata: Pubkey,
    /// NFT owner, payer and update authority
    pub owner: Pubkey,
    pub name: String,
    pub symbol: String,
    /// Metadata URI
    pub uri: String,
    /// Whether the mint authority was revoked after minting
    pub fixed_supply: bool,
    /// Timestamp when minted
    pub timestamp: i64,
}

#[event]
pub struct TokenAccountMinted {
    pub mint: Pubkey,
    /// Owner's associated token account
    pub token_account: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}

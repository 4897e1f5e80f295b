use anchor_lang::prelude::*;

pub mod client;
pub mod context;
pub mod error;
pub mod event;
pub mod instructions;
pub mod operations;
pub mod pda;
pub mod util;

pub use context::*;
pub use error::NftMintError;

declare_id!("EzskZvcwqeiNMnTjzyAReFgnH53QRxrztVfSJbmC5r3");

#[program]
pub mod nftmint {
    use super::*;

    /// Mint a single token into user-scoped PDAs and attach Metaplex metadata.
    pub fn initialize(
        ctx: Context<NftMint>,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, name, symbol, uri)
    }

    /// Mint a fixed-supply token into program-scoped PDAs with Metaplex metadata.
    pub fn hero_mint(
        ctx: Context<HeroMint>,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        instructions::hero_mint::handler(ctx, name, symbol, uri)
    }

    /// Mint a single token from the program-wide mint into the user's ATA.
    pub fn mint_with_tokenaccount(
        ctx: Context<MintTokenAccount>,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        instructions::mint_with_tokenaccount::handler(ctx, name, symbol, uri)
    }
}

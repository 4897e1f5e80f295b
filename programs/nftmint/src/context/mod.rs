pub mod hero_mint;
pub mod mint_token_account;
pub mod nft_mint;

pub use hero_mint::*;
pub use mint_token_account::*;
pub use nft_mint::*;

pub mod hero_mint;
pub mod initialize;
pub mod mint_with_tokenaccount;

pub mod nft_lifecycle;

pub use nft_lifecycle::*;

// ========== PDA SEEDS ==========
/// Seed for the user-scoped mint PDA, also the sole seed of the program-wide mint
pub const NFT_MINT_SEED: &[u8] = b"nft-mint-seed";

/// Seed for the user-scoped token account PDA
pub const NFT_TOKEN_ACCOUNT_SEED: &[u8] = b"nft-token-account-seed";

/// Seed for the program-scoped hero mint PDA
pub const HERO_MINT_SEED: &[u8] = b"hero_mint_seed";

/// Seed for the program-scoped hero token account PDA
pub const HERO_MINT_TOKEN_ACCOUNT_SEED: &[u8] = b"hero_mint_token_account_seed";

/// Seed for Metaplex metadata accounts
pub const METADATA_SEED: &[u8] = b"metadata";

/// Longest slice of a user string that goes into a seed
pub const MAX_SEED_LENGTH: usize = 32;

// ========== METADATA LIMITS ==========
/// Maximum length for NFT name
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum length for NFT symbol
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Maximum length for NFT metadata URI
pub const MAX_URI_LENGTH: usize = 200;

// ========== TOKEN CONFIGURATION ==========
/// NFTs are indivisible
pub const NFT_DECIMALS: u8 = 0;

/// Every instruction mints exactly one unit
pub const NFT_SUPPLY: u64 = 1;

// ========== METAPLEX INTEGRATION ==========
use anchor_lang::prelude::Pubkey;

/// Metaplex Token Metadata Program ID
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey = mpl_token_metadata::ID;

/// Seller fee basis points (0 = no royalties)
pub const DEFAULT_SELLER_FEE_BASIS_POINTS: u16 = 0;

/// Is mutable flag for metadata
pub const DEFAULT_IS_MUTABLE: bool = true;

/// Hero metadata is frozen along with its supply
pub const HERO_IS_MUTABLE: bool = false;

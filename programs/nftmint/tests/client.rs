// Instruction wiring for the three minting entry points.
// These mirror the account lists a client submits, without a validator.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{hash::hash, instruction::Instruction, system_program, sysvar};
use solana_sdk::{signature::Keypair, signer::Signer};

use nftmint::util::constants::TOKEN_METADATA_PROGRAM_ID;
use nftmint::{client, pda};

const NAME: &str = "testName";
const SYMBOL: &str = "testSymbol";
const URI: &str = "https://ipfs.io/ipfs/Qmb2ZL1Csp8Kdtdvcx8mKXmr9rLeko5KT1FS8BYKEYcadw";

fn sighash(name: &str) -> [u8; 8] {
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(format!("global:{}", name).as_bytes()).to_bytes()[..8]);
    discriminator
}

fn signers(ix: &Instruction) -> Vec<Pubkey> {
    ix.accounts.iter().filter(|m| m.is_signer).map(|m| m.pubkey).collect()
}

fn writable(ix: &Instruction) -> Vec<Pubkey> {
    ix.accounts.iter().filter(|m| m.is_writable).map(|m| m.pubkey).collect()
}

#[test]
fn test_initialize_accounts() {
    let user = Keypair::new();
    let ix = client::initialize(&user.pubkey(), NAME, SYMBOL, URI);

    let (mint, _) = pda::find_nft_mint_address(&user.pubkey(), NAME, SYMBOL);
    let (token_account, _) = pda::find_nft_token_account_address(&user.pubkey(), NAME, SYMBOL);
    let (metadata, _) = pda::find_metadata_address(&mint);

    assert_eq!(ix.program_id, nftmint::ID);
    let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
    assert_eq!(
        keys,
        vec![
            user.pubkey(),
            mint,
            token_account,
            metadata,
            system_program::ID,
            sysvar::rent::ID,
            anchor_spl::token::ID,
            TOKEN_METADATA_PROGRAM_ID,
        ]
    );
    assert_eq!(signers(&ix), vec![user.pubkey()]);
    assert_eq!(writable(&ix), vec![user.pubkey(), mint, token_account, metadata]);
}

#[test]
fn test_initialize_data() {
    let user = Keypair::new();
    let ix = client::initialize(&user.pubkey(), NAME, SYMBOL, URI);

    assert_eq!(ix.data[..8], sighash("initialize"));
    let args = nftmint::instruction::Initialize::try_from_slice(&ix.data[8..]).unwrap();
    assert_eq!(args.name, NAME);
    assert_eq!(args.symbol, SYMBOL);
    assert_eq!(args.uri, URI);
}

#[test]
fn test_hero_mint_accounts_do_not_depend_on_user() {
    let alice = Keypair::new();
    let bob = Keypair::new();
    let a = client::hero_mint(&alice.pubkey(), "test", "SYM", "hero://body");
    let b = client::hero_mint(&bob.pubkey(), "test", "SYM", "hero://body");

    // Everything but the payer is shared
    assert_eq!(a.accounts[0].pubkey, alice.pubkey());
    assert_eq!(b.accounts[0].pubkey, bob.pubkey());
    assert_eq!(a.accounts[1..], b.accounts[1..]);

    let (mint, _) = pda::find_hero_mint_address("test", "SYM", "hero://body");
    let (metadata, _) = pda::find_metadata_address(&mint);
    assert_eq!(a.accounts[1].pubkey, mint);
    assert_eq!(a.accounts[3].pubkey, metadata);
    assert_eq!(a.accounts[7].pubkey, TOKEN_METADATA_PROGRAM_ID);
    assert_eq!(signers(&a), vec![alice.pubkey()]);
}

#[test]
fn test_hero_mint_data() {
    let user = Keypair::new();
    let ix = client::hero_mint(&user.pubkey(), "test", "SYM", "hero://body");

    assert_eq!(ix.data[..8], sighash("hero_mint"));
    let args = nftmint::instruction::HeroMint::try_from_slice(&ix.data[8..]).unwrap();
    assert_eq!(args.name, "test");
    assert_eq!(args.symbol, "SYM");
    assert_eq!(args.uri, "hero://body");
}

#[test]
fn test_mint_with_tokenaccount_uses_single_mint_and_ata() {
    let user = Keypair::new();
    let ix = client::mint_with_tokenaccount(&user.pubkey(), NAME, SYMBOL, URI);

    let (mint, _) = pda::find_single_mint_address();
    let ata = anchor_spl::associated_token::get_associated_token_address(&user.pubkey(), &mint);

    let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
    assert_eq!(
        keys,
        vec![
            user.pubkey(),
            mint,
            ata,
            system_program::ID,
            sysvar::rent::ID,
            anchor_spl::token::ID,
            anchor_spl::associated_token::ID,
        ]
    );
    assert_eq!(signers(&ix), vec![user.pubkey()]);
    assert_eq!(writable(&ix), vec![user.pubkey(), mint, ata]);

    assert_eq!(ix.data[..8], sighash("mint_with_tokenaccount"));
    let args = nftmint::instruction::MintWithTokenaccount::try_from_slice(&ix.data[8..]).unwrap();
    assert_eq!(args.uri, URI);
}

#[test]
fn test_distinct_names_get_distinct_mints() {
    let user = Keypair::new();
    let first = client::initialize(&user.pubkey(), "first", SYMBOL, URI);
    let second = client::initialize(&user.pubkey(), "second", SYMBOL, URI);
    assert_ne!(first.accounts[1].pubkey, second.accounts[1].pubkey);
    assert_ne!(first.accounts[3].pubkey, second.accounts[3].pubkey);
}

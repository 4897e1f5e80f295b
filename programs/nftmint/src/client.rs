//! Instruction builders for off-chain callers.
//!
//! Each builder derives every address the instruction needs, so the caller
//! only supplies the paying user and the metadata strings. The user is the
//! sole signer.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, system_program, sysvar};
use anchor_lang::{InstructionData, ToAccountMetas};

use crate::pda;
use crate::util::constants::TOKEN_METADATA_PROGRAM_ID;

pub fn initialize(user: &Pubkey, name: &str, symbol: &str, uri: &str) -> Instruction {
    let (nft_mint_account, _) = pda::find_nft_mint_address(user, name, symbol);
    let (nft_token_account, _) = pda::find_nft_token_account_address(user, name, symbol);
    let (nft_meta_data_account, _) = pda::find_metadata_address(&nft_mint_account);

    let accounts = crate::accounts::NftMint {
        user: *user,
        nft_mint_account,
        nft_token_account,
        nft_meta_data_account,
        system_program: system_program::ID,
        rent: sysvar::rent::ID,
        token_program: anchor_spl::token::ID,
        mpl_program: TOKEN_METADATA_PROGRAM_ID,
    };

    Instruction {
        program_id: crate::ID,
        accounts: accounts.to_account_metas(None),
        data: crate::instruction::Initialize {
            name: name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
        }
        .data(),
    }
}

pub fn hero_mint(user: &Pubkey, name: &str, symbol: &str, uri: &str) -> Instruction {
    let (hero_mint, _) = pda::find_hero_mint_address(name, symbol, uri);
    let (hero_token_account, _) = pda::find_hero_token_account_address(name, symbol, uri);
    let (hero_metadata_account, _) = pda::find_metadata_address(&hero_mint);

    let accounts = crate::accounts::HeroMint {
        user: *user,
        hero_mint,
        hero_token_account,
        hero_metadata_account,
        system_program: system_program::ID,
        rent: sysvar::rent::ID,
        token_program: anchor_spl::token::ID,
        mpl_program: TOKEN_METADATA_PROGRAM_ID,
    };

    Instruction {
        program_id: crate::ID,
        accounts: accounts.to_account_metas(None),
        data: crate::instruction::HeroMint {
            name: name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
        }
        .data(),
    }
}

pub fn mint_with_tokenaccount(user: &Pubkey, name: &str, symbol: &str, uri: &str) -> Instruction {
    let (hero_mint, _) = pda::find_single_mint_address();
    let hero_token_account = pda::associated_token_address(user, &hero_mint);

    let accounts = crate::accounts::MintTokenAccount {
        user: *user,
        hero_mint,
        hero_token_account,
        system_program: system_program::ID,
        rent: sysvar::rent::ID,
        token_program: anchor_spl::token::ID,
        associated_token_program: anchor_spl::associated_token::ID,
    };

    Instruction {
        program_id: crate::ID,
        accounts: accounts.to_account_metas(None),
        data: crate::instruction::MintWithTokenaccount {
            name: name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
        }
        .data(),
    }
}

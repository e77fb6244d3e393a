//! Host-side builders for account infos and the instructions sysvar.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions as sys_ix;

/// Serializes `ixs` in the instructions sysvar layout: instruction count,
/// offset table, each instruction (account metas, program id, data), and the
/// current index in the trailing two bytes.
pub fn instructions_sysvar_data(ixs: &[Instruction], current: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&(ixs.len() as u16).to_le_bytes());
    let offsets = data.len();
    data.resize(offsets + 2 * ixs.len(), 0);

    for (i, ix) in ixs.iter().enumerate() {
        let start = (data.len() as u16).to_le_bytes();
        data[offsets + 2 * i..offsets + 2 * i + 2].copy_from_slice(&start);

        data.extend_from_slice(&(ix.accounts.len() as u16).to_le_bytes());
        for meta in &ix.accounts {
            let mut flags = 0u8;
            if meta.is_signer {
                flags |= 1;
            }
            if meta.is_writable {
                flags |= 1 << 1;
            }
            data.push(flags);
            data.extend_from_slice(meta.pubkey.as_ref());
        }
        data.extend_from_slice(ix.program_id.as_ref());
        data.extend_from_slice(&(ix.data.len() as u16).to_le_bytes());
        data.extend_from_slice(&ix.data);
    }

    data.extend_from_slice(&current.to_le_bytes());
    data
}

/// Leaks an account so it can back `'info` wrappers for the rest of the test.
pub fn leak_account(
    key: Pubkey,
    owner: Pubkey,
    is_signer: bool,
    data: Vec<u8>,
) -> &'static AccountInfo<'static> {
    let key = Box::leak(Box::new(key));
    let owner = Box::leak(Box::new(owner));
    let lamports = Box::leak(Box::new(1_000_000_000u64));
    let data = Box::leak(data.into_boxed_slice());
    Box::leak(Box::new(AccountInfo::new(
        key, is_signer, true, lamports, data, owner, false, 0,
    )))
}

pub fn instructions_sysvar(ixs: &[Instruction], current: u16) -> &'static AccountInfo<'static> {
    leak_account(
        sys_ix::ID,
        Pubkey::default(),
        false,
        instructions_sysvar_data(ixs, current),
    )
}

/// An instruction addressed to this program; contents are never inspected.
pub fn marketplace_ix() -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![],
        data: vec![],
    }
}

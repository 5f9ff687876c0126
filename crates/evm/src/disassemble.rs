use std::fmt;

use crate::opcodes::{is_push, opcode_name, push_size};
use tracing::debug;
use zklint_common::utils::strings::encode_hex;

/// A single decoded EVM instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The byte position of the opcode within the bytecode stream.
    pub offset: usize,
    /// The raw opcode byte.
    pub opcode: u8,
    /// The opcode mnemonic, e.g. `CALL`. `"unknown"` for unassigned bytes.
    pub name: &'static str,
    /// Immediate bytes consumed by PUSH1..PUSH32 operations. Empty otherwise.
    pub push_data: Vec<u8>,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.push_data.is_empty() {
            write!(f, "{:06x} {}", self.offset, self.name)
        } else {
            write!(f, "{:06x} {} {}", self.offset, self.name, encode_hex(&self.push_data))
        }
    }
}

/// Disassembles EVM bytecode into an ordered instruction stream.
///
/// This performs a linear sweep over the bytecode, decoding one instruction
/// per opcode byte. PUSH1..PUSH32 operations consume the following N bytes as
/// immediate data, which is attached to the instruction and skipped. A PUSH
/// whose immediate bytes run past the end of the bytecode terminates the
/// sweep.
///
/// The recorded offset of each instruction is the byte position of the opcode
/// itself, so offsets are strictly increasing in stream order.
pub fn disassemble(contract_bytecode: &[u8]) -> Vec<Instruction> {
    let mut program_counter = 0;
    let mut instructions = Vec::new();

    while program_counter < contract_bytecode.len() {
        let opcode = contract_bytecode[program_counter];
        let offset = program_counter;
        let mut push_data = Vec::new();

        // handle PUSH1 -> PUSH32, which consume the next N bytes as
        // immediate data
        if is_push(opcode) {
            let byte_count_to_push = push_size(opcode);
            push_data = match contract_bytecode
                .get(program_counter + 1..program_counter + 1 + byte_count_to_push)
            {
                Some(bytes) => bytes.to_vec(),
                None => break,
            };
            program_counter += byte_count_to_push;
        }

        instructions.push(Instruction {
            offset,
            opcode,
            name: opcode_name(opcode),
            push_data,
        });
        program_counter += 1;
    }

    debug!("disassembled {} bytes into {} instructions", program_counter, instructions.len());
    instructions
}

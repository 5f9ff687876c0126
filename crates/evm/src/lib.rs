//! EVM instruction decoding for zklint.
//!
//! This crate provides the opcode name table and a linear-sweep disassembler
//! that converts raw bytecode into an ordered instruction stream with byte
//! offsets, ready for classification.

/// The linear-sweep disassembler.
pub mod disassemble;

/// EVM opcodes and related utilities.
pub mod opcodes;

pub use disassemble::{disassemble, Instruction};
pub use opcodes::opcode_name;

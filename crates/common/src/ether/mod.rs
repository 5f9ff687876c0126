/// Bytecode resolution for contract addresses, raw bytecode, and file paths.
pub mod bytecode;

/// A transport-agnostic JSON-RPC provider.
pub mod provider;

/// RPC operations against an Ethereum-compatible node.
pub mod rpc;

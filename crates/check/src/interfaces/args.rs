use clap::Parser;
use derive_builder::Builder;
use eyre::Result;
use zklint_common::ether::bytecode::get_bytecode_from_target;
use zklint_config::parse_url_arg;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Scan EVM bytecode for opcodes unsupported by a zkEVM target",
    override_usage = "zklint check <TARGET> [OPTIONS]"
)]
/// Arguments for the check operation
///
/// This struct contains all the configuration parameters needed to scan a
/// target's bytecode against a zkEVM opcode rule set.
pub struct CheckArgs {
    /// The target to scan, either a file, bytecode, or contract address.
    #[clap(required = true)]
    pub target: String,

    /// The RPC provider to use for fetching target bytecode.
    /// This can be an explicit URL or a reference to a MESC endpoint.
    #[clap(long, short, value_parser = parse_url_arg, default_value = "", hide_default_value = true)]
    pub rpc_url: String,

    /// Path to a TOML rule file overriding the built-in zkEVM rule set.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub rules: String,

    /// The output directory to write the report to, or 'print' to print to the console
    #[clap(long = "output", short = 'o', default_value = "print", hide_default_value = true)]
    pub output: String,

    /// The name for the output file
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub name: String,
}

impl CheckArgs {
    /// Retrieves the bytecode for the specified target
    ///
    /// This method fetches the bytecode from a file, address, or directly
    /// from a hex string, depending on the target type provided in the
    /// arguments.
    pub async fn get_bytecode(&self) -> Result<Vec<u8>> {
        Ok(get_bytecode_from_target(&self.target, &self.rpc_url).await?)
    }
}

impl CheckArgsBuilder {
    /// Creates a builder with empty defaults, printing to the console.
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            rpc_url: Some(String::new()),
            rules: Some(String::new()),
            output: Some(String::from("print")),
            name: Some(String::new()),
        }
    }
}

//! CLI entry point for zklint, a zkEVM bytecode compatibility linter.

pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use error::Error;
use log_args::LogArgs;
use output::build_output_path;
use tracing::info;

use clap::{Parser, Subcommand};

use zklint_check::{check, CheckArgs};
use zklint_common::utils::io::file::{short_path, write_file};
use zklint_config::{config, ConfigArgs, Configuration};

#[derive(Debug, Parser)]
#[clap(name = "zklint", version)]
pub(crate) struct Arguments {
    #[clap(subcommand)]
    pub(crate) sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(
    about = "zklint scans deployed EVM bytecode for opcodes that a zkEVM target disallows or supports only after recompilation."
)]
#[allow(clippy::large_enum_variant)]
pub(crate) enum Subcommands {
    #[clap(name = "check", about = "Scan EVM bytecode for opcodes unsupported by a zkEVM target")]
    Check(CheckArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    let _ = args.logs.init_tracing();

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;
    match args.sub {
        Subcommands::Check(mut cmd) => {
            // if the user has not specified a rpc url, use the default
            if cmd.rpc_url.as_str() == "" {
                cmd.rpc_url = configuration.rpc_url;
            }

            // if the user has passed an output filename, override the default filename
            let mut filename: String = "zkevm-report.txt".to_string();
            let given_name = cmd.name.as_str();

            if !given_name.is_empty() {
                filename = format!("{}-{}", given_name, filename);
            }

            let result = check(cmd.clone()).await?;

            if cmd.output == "print" {
                result.display();
            } else {
                let output_path =
                    build_output_path(&cmd.output, &cmd.target, &cmd.rpc_url, &filename)
                        .await
                        .map_err(|e| {
                            Error::Generic(format!("failed to build output path: {}", e))
                        })?;

                write_file(&output_path, &result.render())
                    .map_err(|e| Error::Generic(format!("failed to write report: {}", e)))?;
                info!("wrote report to '{}'", short_path(&output_path));
            }
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {}", e)))?;
        }
    }

    Ok(())
}

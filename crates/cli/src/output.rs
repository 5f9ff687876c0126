use std::env;

use eyre::{eyre, Result};
use zklint_common::{constants::ADDRESS_REGEX, ether::rpc};

/// build a standardized output path for the given parameters. follows the following cases:
/// - if `output` is `print`, return `None`
/// - if `output` is the default value (`output`)
///   - if `target` is a contract_address, return `/output/{chain_id}/{target}/{filename}`
///   - if `target` is a file or raw bytes, return `/output/local/{filename}`
/// - if `output` is specified, return `/{output}/{filename}`
pub(crate) async fn build_output_path(
    output: &str,
    target: &str,
    rpc_url: &str,
    filename: &str,
) -> Result<String> {
    // if output is the default value, build a path based on the target
    if output == "output" {
        // get the current working directory
        let cwd = env::current_dir()?
            .into_os_string()
            .into_string()
            .map_err(|_| eyre!("Unable to get current working directory"))?;

        if ADDRESS_REGEX.is_match(target).unwrap_or(false) {
            let chain_id =
                rpc::chain_id(rpc_url).await.map_err(|_| eyre!("Unable to get chain id"))?;
            return Ok(format!("{}/output/{}/{}/{}", cwd, chain_id, target, filename));
        } else {
            return Ok(format!("{}/output/local/{}", cwd, filename));
        }
    }

    // output is specified, return the path
    Ok(format!("{}/{}", output, filename))
}

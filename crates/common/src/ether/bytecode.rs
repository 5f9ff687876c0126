use super::rpc::get_code;
use crate::{
    constants::{ADDRESS_REGEX, BYTECODE_REGEX},
    utils::strings::decode_hex,
    Error,
};
use std::fs;
use tracing::error;

/// Given a target, determines whether it is a contract address, bytecode, or file path, and returns
/// the bytecode for the target.
pub async fn get_bytecode_from_target(target: &str, rpc_url: &str) -> Result<Vec<u8>, Error> {
    if ADDRESS_REGEX.is_match(target).unwrap_or(false) {
        // Target is a contract address, so we need to fetch the bytecode from the RPC provider.
        get_code(target, rpc_url).await.map_err(|e| {
            Error::Generic(format!("failed to fetch bytecode from RPC provider: {}", e))
        })
    } else if BYTECODE_REGEX.is_match(target).unwrap_or(false) && target.len() % 2 == 0 {
        Ok(decode_hex(target).map_err(|e| Error::ParseError(e.to_string()))?)
    } else {
        // Target is a file path, so we need to read the bytecode from the file.
        let contents = fs::read_to_string(target).map_err(|e| {
            error!("failed to open file '{}' .", &target);
            Error::FilesystemError(e)
        })?;

        let contents = contents.replace('\n', "");
        if BYTECODE_REGEX.is_match(&contents).unwrap_or(false) && contents.len() % 2 == 0 {
            Ok(decode_hex(&contents).map_err(|e| Error::ParseError(e.to_string()))?)
        } else {
            error!("file '{}' doesn't contain valid bytecode.", &target);
            Err(Error::ParseError(format!("file '{}' doesn't contain valid bytecode.", &target)))
        }
    }
}

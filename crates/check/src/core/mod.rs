use std::time::Instant;

use crate::{
    error::Error,
    interfaces::{CheckArgs, CheckResult, RuleSet},
};
use eyre::eyre;
use tracing::{debug, info};
use zklint_evm::disassemble;

mod classify;
pub use classify::classify;

/// Scans the target's bytecode for opcodes unsupported by the zkEVM target
///
/// This function resolves the target to its bytecode, disassembles it into an
/// ordered instruction stream, and classifies every instruction against the
/// rule set. The rule set is resolved eagerly, before any network access, so
/// a misconfigured rule file fails fast.
///
/// # Arguments
///
/// * `args` - Arguments specifying the target, rule set, and output options
///
/// # Returns
///
/// A [`CheckResult`] holding the classification report for the target
pub async fn check(args: CheckArgs) -> Result<CheckResult, Error> {
    let start_time = Instant::now();

    // resolve the rule set first; a non-disjoint or unparseable rule file is
    // a configuration defect, not a scan result
    let rules = if args.rules.is_empty() {
        RuleSet::zkevm()
    } else {
        RuleSet::from_file(&args.rules)?
    };

    // get the bytecode from the target
    let start_fetch_time = Instant::now();
    let contract_bytecode = args
        .get_bytecode()
        .await
        .map_err(|e| eyre!("fetching target bytecode failed: {}", e))?;
    debug!("fetching target bytecode took {:?}", start_fetch_time.elapsed());

    if contract_bytecode.is_empty() {
        return Err(Error::NoBytecode(args.target.clone()));
    }

    // disassemble the bytecode and classify the instruction stream
    let start_scan_time = Instant::now();
    let instructions = disassemble(&contract_bytecode);
    let report = classify(&instructions, &rules);
    debug!("scanning took {:?}", start_scan_time.elapsed());

    info!(
        "scanned {} instructions successfully, {} disallowed and {} incompatible opcodes found",
        instructions.len(),
        report.disallowed().len(),
        report.incompatible().len()
    );
    debug!("check took {:?}", start_time.elapsed());

    Ok(CheckResult {
        target: args.target,
        bytecode_size: contract_bytecode.len(),
        report,
    })
}

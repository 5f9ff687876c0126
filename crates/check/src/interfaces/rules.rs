use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use zklint_common::utils::io::file::read_file;

use crate::error::Error;

/// Opcodes fully disallowed under the zkEVM target. Their presence makes the
/// contract unsupported.
const DISALLOWED_OPCODES: &[&str] = &["SELFDESTRUCT", "CALLCODE", "PC", "EXTCODECOPY"];

/// Opcodes that are supported, but only after recompilation with a
/// zkEVM-aware compiler. Includes zksolc assembly pseudo-instructions
/// (DATASIZE, DATAOFFSET, DATACOPY, SETIMMUTABLE, LOADIMMUTABLE) so the table
/// also covers assembly-level instruction streams.
const INCOMPATIBLE_OPCODES: &[&str] = &[
    "CREATE",
    "CREATE2",
    "CODESIZE",
    "CODECOPY",
    "DATASIZE",
    "DATAOFFSET",
    "DATACOPY",
    "CALL",
    "STATICCALL",
    "DELEGATECALL",
    "CALLDATALOAD",
    "CALLDATACOPY",
    "RETURNDATACOPY",
    "MSTORE",
    "MLOAD",
    "EXTCODEHASH",
    "COINBASE",
    "DIFFICULTY",
    "PREVRANDAO",
    "BASEFEE",
    "TIMESTAMP",
    "NUMBER",
    "SETIMMUTABLE",
    "LOADIMMUTABLE",
];

/// The severity class assigned to a matched opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The opcode is fully disallowed under the target.
    Disallowed,
    /// The opcode requires recompilation or adaptation for the target.
    Incompatible,
}

/// A classification rule set: two disjoint sets of opcode mnemonics, one per
/// severity class. Disjointness is validated at construction, never per
/// instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    disallowed: HashSet<String>,
    incompatible: HashSet<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::zkevm()
    }
}

impl RuleSet {
    /// Builds a rule set from the given mnemonic sets, rejecting sets that
    /// share a mnemonic.
    pub fn new(
        disallowed: HashSet<String>,
        incompatible: HashSet<String>,
    ) -> Result<Self, Error> {
        let mut overlap =
            disallowed.intersection(&incompatible).cloned().collect::<Vec<String>>();
        if !overlap.is_empty() {
            overlap.sort();
            return Err(Error::InvalidRuleSet(format!(
                "opcodes assigned to both severity classes: {}",
                overlap.join(", ")
            )));
        }

        Ok(Self { disallowed, incompatible })
    }

    /// The built-in zkEVM rule set.
    pub fn zkevm() -> Self {
        Self::new(
            DISALLOWED_OPCODES.iter().map(|s| s.to_string()).collect(),
            INCOMPATIBLE_OPCODES.iter().map(|s| s.to_string()).collect(),
        )
        .expect("built-in rule set is disjoint")
    }

    /// Loads a rule set from a TOML file mapping mnemonics to severities:
    ///
    /// ```toml
    /// SELFDESTRUCT = "disallowed"
    /// CALL = "incompatible"
    /// ```
    pub fn from_file(path: &str) -> Result<Self, Error> {
        let contents = read_file(path)
            .map_err(|e| Error::InvalidRuleSet(format!("failed to read rule file: {e}")))?;
        Self::from_toml(&contents)
    }

    /// Parses a rule set from a TOML string mapping mnemonics to severities.
    pub fn from_toml(contents: &str) -> Result<Self, Error> {
        let table: HashMap<String, Severity> = toml::from_str(contents)
            .map_err(|e| Error::InvalidRuleSet(format!("failed to parse rule file: {e}")))?;

        let mut disallowed = HashSet::new();
        let mut incompatible = HashSet::new();
        for (mnemonic, severity) in table {
            match severity {
                Severity::Disallowed => disallowed.insert(mnemonic.to_uppercase()),
                Severity::Incompatible => incompatible.insert(mnemonic.to_uppercase()),
            };
        }

        Self::new(disallowed, incompatible)
    }

    /// Whether the given mnemonic is disallowed under the target.
    pub fn is_disallowed(&self, mnemonic: &str) -> bool {
        self.disallowed.contains(mnemonic)
    }

    /// Whether the given mnemonic requires recompilation for the target.
    pub fn is_incompatible(&self, mnemonic: &str) -> bool {
        self.incompatible.contains(mnemonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zkevm_rule_set() {
        let rules = RuleSet::zkevm();

        assert!(rules.is_disallowed("SELFDESTRUCT"));
        assert!(rules.is_disallowed("PC"));
        assert!(rules.is_incompatible("CALL"));
        assert!(rules.is_incompatible("MSTORE"));
        assert!(!rules.is_disallowed("ADD"));
        assert!(!rules.is_incompatible("ADD"));
    }

    #[test]
    fn test_zkevm_rule_set_is_disjoint() {
        let rules = RuleSet::zkevm();

        for mnemonic in DISALLOWED_OPCODES {
            assert!(!rules.is_incompatible(mnemonic));
        }
        for mnemonic in INCOMPATIBLE_OPCODES {
            assert!(!rules.is_disallowed(mnemonic));
        }
    }

    #[test]
    fn test_new_rejects_overlapping_sets() {
        let disallowed: HashSet<String> =
            ["SELFDESTRUCT", "CALL"].iter().map(|s| s.to_string()).collect();
        let incompatible: HashSet<String> = ["CALL"].iter().map(|s| s.to_string()).collect();

        let result = RuleSet::new(disallowed, incompatible);
        assert!(matches!(result, Err(Error::InvalidRuleSet(_))));
    }

    #[test]
    fn test_from_toml() {
        let rules = RuleSet::from_toml(
            r#"
            SELFDESTRUCT = "disallowed"
            call = "incompatible"
            "#,
        )
        .expect("failed to parse rule set");

        assert!(rules.is_disallowed("SELFDESTRUCT"));
        assert!(rules.is_incompatible("CALL"));
        assert!(!rules.is_incompatible("MSTORE"));
    }

    #[test]
    fn test_from_toml_rejects_overlap() {
        let result = RuleSet::from_toml(
            r#"
            CALL = "incompatible"
            call = "disallowed"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_from_toml_rejects_unknown_severity() {
        let result = RuleSet::from_toml(r#"CALL = "forbidden""#);
        assert!(result.is_err());
    }
}

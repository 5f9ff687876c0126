use zklint_evm::Instruction;

use crate::interfaces::{Report, RuleSet, Severity};

/// Partitions the matched instructions of a stream into the two severity
/// classes of the given rule set.
///
/// The stream is walked once, in order. Each instruction's mnemonic is looked
/// up against the disallowed set first, then the incompatible set; matching
/// offsets are appended to the report entry for that mnemonic, creating it on
/// first occurrence. Checking disallowed first is the deterministic tie-break
/// for a mnemonic that appears in both sets, which a validated [`RuleSet`]
/// never produces. Mnemonics in neither set are ignored.
///
/// Classification is pure: it performs no I/O, cannot fail, and an empty
/// stream simply yields an empty report.
pub fn classify(instructions: &[Instruction], rules: &RuleSet) -> Report {
    let mut report = Report::default();

    for instruction in instructions {
        if rules.is_disallowed(instruction.name) {
            report.record(Severity::Disallowed, instruction.name, instruction.offset);
        } else if rules.is_incompatible(instruction.name) {
            report.record(Severity::Incompatible, instruction.name, instruction.offset);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn instruction(name: &'static str, offset: usize) -> Instruction {
        Instruction { offset, opcode: 0, name, push_data: Vec::new() }
    }

    fn rules(disallowed: &[&str], incompatible: &[&str]) -> RuleSet {
        RuleSet::new(
            disallowed.iter().map(|s| s.to_string()).collect::<HashSet<String>>(),
            incompatible.iter().map(|s| s.to_string()).collect::<HashSet<String>>(),
        )
        .expect("rule sets must be disjoint")
    }

    #[test]
    fn test_classify_scenario() {
        let stream = vec![
            instruction("CALL", 0x0),
            instruction("PUSH1", 0x2),
            instruction("SELFDESTRUCT", 0x10),
            instruction("CALL", 0x20),
        ];
        let rules = rules(&["SELFDESTRUCT"], &["CALL"]);

        let report = classify(&stream, &rules);

        assert_eq!(report.offsets(Severity::Disallowed, "SELFDESTRUCT"), Some([0x10].as_slice()));
        assert_eq!(report.offsets(Severity::Incompatible, "CALL"), Some([0x0, 0x20].as_slice()));
        assert_eq!(report.offsets(Severity::Disallowed, "PUSH1"), None);
        assert_eq!(report.offsets(Severity::Incompatible, "PUSH1"), None);
        assert_eq!(report.disallowed().len(), 1);
        assert_eq!(report.incompatible().len(), 1);
    }

    #[test]
    fn test_classify_empty_stream() {
        let report = classify(&[], &rules(&["SELFDESTRUCT"], &["CALL"]));

        assert!(report.is_empty());
        assert!(report.disallowed().is_empty());
        assert!(report.incompatible().is_empty());
    }

    #[test]
    fn test_classify_ignores_unmatched_mnemonics() {
        let stream = vec![
            instruction("ADD", 0x0),
            instruction("MUL", 0x1),
            instruction("ADD", 0x2),
        ];
        let report = classify(&stream, &rules(&["SELFDESTRUCT"], &["CALL"]));

        assert!(report.is_empty());
    }

    #[test]
    fn test_classify_preserves_encounter_order() {
        // offsets deliberately not numerically sorted; the report must keep
        // encounter order
        let stream = vec![
            instruction("CALL", 5),
            instruction("CALL", 300),
            instruction("CALL", 12),
        ];
        let report = classify(&stream, &rules(&[], &["CALL"]));

        assert_eq!(report.offsets(Severity::Incompatible, "CALL"), Some([5, 300, 12].as_slice()));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let stream = vec![
            instruction("CALL", 0x0),
            instruction("SELFDESTRUCT", 0x10),
            instruction("MSTORE", 0x11),
        ];
        let rules = rules(&["SELFDESTRUCT"], &["CALL", "MSTORE"]);

        let first = classify(&stream, &rules);
        let second = classify(&stream, &rules);

        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_every_mnemonic_in_exactly_one_class() {
        let stream = vec![
            instruction("CALL", 0x0),
            instruction("PC", 0x1),
            instruction("MSTORE", 0x2),
            instruction("SELFDESTRUCT", 0x3),
        ];
        let rules = rules(&["SELFDESTRUCT", "PC"], &["CALL", "MSTORE"]);

        let report = classify(&stream, &rules);

        for (severity, finding) in report.iter() {
            match severity {
                Severity::Disallowed => {
                    assert!(rules.is_disallowed(&finding.mnemonic));
                    assert!(report.offsets(Severity::Incompatible, &finding.mnemonic).is_none());
                }
                Severity::Incompatible => {
                    assert!(rules.is_incompatible(&finding.mnemonic));
                    assert!(report.offsets(Severity::Disallowed, &finding.mnemonic).is_none());
                }
            }
            assert!(!finding.offsets.is_empty());
        }
    }

    #[test]
    fn test_classify_with_default_rules() {
        let stream = vec![
            instruction("PUSH1", 0x0),
            instruction("MSTORE", 0x2),
            instruction("PC", 0x3),
            instruction("STATICCALL", 0x4),
        ];
        let report = classify(&stream, &RuleSet::zkevm());

        assert_eq!(report.offsets(Severity::Disallowed, "PC"), Some([0x3].as_slice()));
        assert_eq!(report.offsets(Severity::Incompatible, "MSTORE"), Some([0x2].as_slice()));
        assert_eq!(report.offsets(Severity::Incompatible, "STATICCALL"), Some([0x4].as_slice()));
        assert!(report.offsets(Severity::Incompatible, "PUSH1").is_none());
    }
}

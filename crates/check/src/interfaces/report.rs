use colored::Colorize;

use crate::interfaces::rules::Severity;

/// Notes explaining why the built-in rule set disallows an opcode. Rendered
/// only for opcodes that were actually found.
const DISALLOWED_NOTES: &[(&str, &str)] = &[
    (
        "SELFDESTRUCT",
        "fully disabled on the zkEVM target, and considered harmful per EIP-6049.",
    ),
    (
        "CALLCODE",
        "deprecated on Ethereum in favor of DELEGATECALL, and entirely disallowed on the zkEVM target.",
    ),
    (
        "PC",
        "inaccessible in newer Solidity versions (>= 0.7.0), and the zkEVM target treats it as an error in any case.",
    ),
    (
        "EXTCODECOPY",
        "directly reading another contract's bytecode is not supported on the zkEVM target.",
    ),
];

/// The occurrences of a single matched opcode: its mnemonic and the byte
/// offsets at which it appears, in stream encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The opcode mnemonic, e.g. `CALL`.
    pub mnemonic: String,
    /// The byte offsets at which the opcode occurs, in encounter order.
    pub offsets: Vec<usize>,
}

/// A classification report: one ordered mnemonic-to-offsets mapping per
/// severity class. Mnemonics appear in stream encounter order, and only if
/// they occurred at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    disallowed: Vec<Finding>,
    incompatible: Vec<Finding>,
}

impl Report {
    /// Appends an occurrence of the given mnemonic to the mapping for the
    /// given severity class, creating the entry if absent.
    pub(crate) fn record(&mut self, severity: Severity, mnemonic: &str, offset: usize) {
        let findings = match severity {
            Severity::Disallowed => &mut self.disallowed,
            Severity::Incompatible => &mut self.incompatible,
        };

        // few distinct mnemonics are ever flagged, so a linear scan keeps the
        // entries in insertion order without an index
        match findings.iter_mut().find(|finding| finding.mnemonic == mnemonic) {
            Some(finding) => finding.offsets.push(offset),
            None => {
                findings.push(Finding { mnemonic: mnemonic.to_string(), offsets: vec![offset] })
            }
        }
    }

    /// The findings for disallowed opcodes, in encounter order.
    pub fn disallowed(&self) -> &[Finding] {
        &self.disallowed
    }

    /// The findings for incompatible opcodes, in encounter order.
    pub fn incompatible(&self) -> &[Finding] {
        &self.incompatible
    }

    /// Whether no opcodes were flagged in either severity class.
    pub fn is_empty(&self) -> bool {
        self.disallowed.is_empty() && self.incompatible.is_empty()
    }

    /// Iterates over all findings as (severity, finding) pairs, disallowed
    /// first.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &Finding)> {
        self.disallowed
            .iter()
            .map(|finding| (Severity::Disallowed, finding))
            .chain(self.incompatible.iter().map(|finding| (Severity::Incompatible, finding)))
    }

    /// The offsets recorded for the given mnemonic under the given severity,
    /// if any.
    pub fn offsets(&self, severity: Severity, mnemonic: &str) -> Option<&[usize]> {
        let findings = match severity {
            Severity::Disallowed => &self.disallowed,
            Severity::Incompatible => &self.incompatible,
        };
        findings
            .iter()
            .find(|finding| finding.mnemonic == mnemonic)
            .map(|finding| finding.offsets.as_slice())
    }
}

/// Result of a successful check operation
///
/// Contains the classification report along with the scanned target, ready
/// for rendering to the console or to a file.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The target that was scanned.
    pub target: String,
    /// The size of the scanned bytecode, in bytes.
    pub bytecode_size: usize,
    /// The classification report.
    pub report: Report,
}

impl CheckResult {
    /// Prints the report to the console, with ANSI colors.
    pub fn display(&self) {
        println!("{}", self.render_internal(true));
    }

    /// Renders the report as plain text, suitable for writing to a file.
    pub fn render(&self) -> String {
        self.render_internal(false)
    }

    fn render_internal(&self, color: bool) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Scanned {} ({} bytes of bytecode)\n\n",
            self.target, self.bytecode_size
        ));

        if !self.report.disallowed().is_empty() {
            let tag =
                if color { "[DISALLOWED]".on_red().to_string() } else { "[DISALLOWED]".into() };
            out.push_str(&format!("{tag} The following disallowed opcodes were found:\n"));
            for finding in self.report.disallowed() {
                out.push_str(&format!(
                    " - {} at positions: {}\n",
                    finding.mnemonic,
                    format_offsets(&finding.offsets)
                ));
            }

            let notes = self
                .report
                .disallowed()
                .iter()
                .filter_map(|finding| {
                    DISALLOWED_NOTES
                        .iter()
                        .find(|(mnemonic, _)| *mnemonic == finding.mnemonic)
                        .map(|(mnemonic, note)| format!(" - {mnemonic}: {note}\n"))
                })
                .collect::<String>();
            if !notes.is_empty() {
                out.push_str("\nOpcodes disallowed by the zkEVM target:\n");
                out.push_str(&notes);
            }
            out.push_str(
                "\nAny attempt to include these opcodes in your code (or in libraries that rely on them) will fail to compile for the zkEVM target.\n",
            );
        } else {
            out.push_str("No disallowed opcodes were found in the contract bytecode.\n");
        }

        out.push('\n');

        if !self.report.incompatible().is_empty() {
            let tag = if color {
                "[INCOMPATIBLE]".yellow().to_string()
            } else {
                "[INCOMPATIBLE]".into()
            };
            out.push_str(&format!(
                "{tag} Recompile the contract with a zkEVM-aware compiler for the following opcodes:\n"
            ));
            for finding in self.report.incompatible() {
                out.push_str(&format!(
                    " - {} at positions: {}\n",
                    finding.mnemonic,
                    format_offsets(&finding.offsets)
                ));
            }
        } else {
            out.push_str("No incompatible opcodes were found in the contract bytecode.\n");
        }

        out
    }
}

/// Formats a list of byte offsets as comma-separated hexadecimal, in list
/// order.
fn format_offsets(offsets: &[usize]) -> String {
    offsets.iter().map(|offset| format!("{offset:#x}")).collect::<Vec<String>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> CheckResult {
        let mut report = Report::default();
        report.record(Severity::Disallowed, "SELFDESTRUCT", 0x10);
        report.record(Severity::Incompatible, "CALL", 0x0);
        report.record(Severity::Incompatible, "CALL", 0x20);

        CheckResult { target: "0xdeadbeef".to_string(), bytecode_size: 64, report }
    }

    #[test]
    fn test_record_preserves_encounter_order() {
        let mut report = Report::default();
        report.record(Severity::Incompatible, "CALL", 5);
        report.record(Severity::Incompatible, "MSTORE", 8);
        report.record(Severity::Incompatible, "CALL", 300);
        report.record(Severity::Incompatible, "CALL", 12);

        let findings = report.incompatible();
        assert_eq!(findings[0].mnemonic, "CALL");
        assert_eq!(findings[0].offsets, vec![5, 300, 12]);
        assert_eq!(findings[1].mnemonic, "MSTORE");
        assert_eq!(findings[1].offsets, vec![8]);
    }

    #[test]
    fn test_offsets_lookup() {
        let result = sample_result();

        assert_eq!(
            result.report.offsets(Severity::Incompatible, "CALL"),
            Some([0x0, 0x20].as_slice())
        );
        assert_eq!(result.report.offsets(Severity::Disallowed, "CALL"), None);
        assert_eq!(result.report.offsets(Severity::Incompatible, "PUSH1"), None);
    }

    #[test]
    fn test_iter_yields_disallowed_first() {
        let result = sample_result();
        let severities: Vec<Severity> =
            result.report.iter().map(|(severity, _)| severity).collect();

        assert_eq!(severities, vec![Severity::Disallowed, Severity::Incompatible]);
    }

    #[test]
    fn test_render_flagged() {
        let rendered = sample_result().render();

        assert!(rendered.contains("[DISALLOWED] The following disallowed opcodes were found:"));
        assert!(rendered.contains(" - SELFDESTRUCT at positions: 0x10"));
        assert!(rendered.contains("EIP-6049"));
        assert!(rendered.contains(
            "[INCOMPATIBLE] Recompile the contract with a zkEVM-aware compiler"
        ));
        assert!(rendered.contains(" - CALL at positions: 0x0, 0x20"));
    }

    #[test]
    fn test_render_clean() {
        let result = CheckResult {
            target: "0xdeadbeef".to_string(),
            bytecode_size: 4,
            report: Report::default(),
        };
        let rendered = result.render();

        assert!(rendered.contains("No disallowed opcodes were found in the contract bytecode."));
        assert!(rendered.contains("No incompatible opcodes were found in the contract bytecode."));
    }

    #[test]
    fn test_render_notes_only_for_found_opcodes() {
        let rendered = sample_result().render();

        assert!(rendered.contains("SELFDESTRUCT: fully disabled"));
        assert!(!rendered.contains("CALLCODE: deprecated"));
    }
}

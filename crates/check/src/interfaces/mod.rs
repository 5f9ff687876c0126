mod args;
mod report;
mod rules;

pub use args::{CheckArgs, CheckArgsBuilder};
pub use report::{CheckResult, Finding, Report};
pub use rules::{RuleSet, Severity};

use fancy_regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    /// The following regex is used to validate contract addresses
    pub static ref ADDRESS_REGEX: Regex =
        Regex::new(r"^(0x)?[0-9a-fA-F]{40}$").expect("failed to compile regex");

    /// The following regex is used to validate raw bytecode strings
    pub static ref BYTECODE_REGEX: Regex =
        Regex::new(r"^(0x)?[0-9a-fA-F]{0,50000}$").expect("failed to compile regex");
}

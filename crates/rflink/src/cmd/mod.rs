use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a frame and print its wire bytes.
    Encode(EncodeArgs),
    /// Decode captured wire bytes and print the frame.
    Decode(DecodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args),
        Command::Decode(args) => decode::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Destination node address (decimal or 0x-prefixed hex).
    #[arg(long, value_parser = parse_address)]
    pub dest: u8,
    /// Source node address (decimal or 0x-prefixed hex).
    #[arg(long, value_parser = parse_address)]
    pub src: u8,
    /// Payload as a UTF-8 string.
    #[arg(long, conflicts_with_all = ["hex", "file"])]
    pub data: Option<String>,
    /// Payload as hex bytes.
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub hex: Option<String>,
    /// Read payload from file.
    #[arg(long, conflicts_with_all = ["data", "hex"])]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Wire bytes as hex, including the two trailing quality bytes.
    /// Reads hex from stdin when omitted.
    pub hex: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn parse_address(input: &str) -> Result<u8, String> {
    let input = input.trim();
    let parsed = if let Some(hex) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16)
    } else {
        input.parse()
    };
    parsed.map_err(|_| format!("invalid node address: {input}"))
}

/// Parse a hex dump, tolerating whitespace between byte pairs.
///
/// Works on raw bytes so arbitrary user input (including multi-byte
/// UTF-8) surfaces as a usage error rather than a slicing panic.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let digits: Vec<u8> = input
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if digits.len() % 2 != 0 {
        return Err(CliError::new(
            USAGE,
            format!("hex input has an odd number of digits ({})", digits.len()),
        ));
    }
    digits
        .chunks(2)
        .map(|pair| Ok(hex_digit(pair[0])? << 4 | hex_digit(pair[1])?))
        .collect()
}

fn hex_digit(byte: u8) -> CliResult<u8> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(CliError::new(
            USAGE,
            format!("invalid hex digit: {}", char::from(byte).escape_default()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_address_decimal_and_hex() {
        assert_eq!(parse_address("10").unwrap(), 10);
        assert_eq!(parse_address("0x0A").unwrap(), 0x0A);
        assert_eq!(parse_address("0XFF").unwrap(), 0xFF);
        assert!(parse_address("256").is_err());
        assert!(parse_address("zz").is_err());
    }

    #[test]
    fn parse_hex_accepts_spaced_and_compact() {
        assert_eq!(parse_hex("05 0A 0B").unwrap(), vec![0x05, 0x0A, 0x0B]);
        assert_eq!(parse_hex("050a0b").unwrap(), vec![0x05, 0x0A, 0x0B]);
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        assert!(parse_hex("0").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn parse_hex_rejects_non_ascii_input() {
        // Multi-byte characters must come back as a usage error, not a
        // char-boundary panic.
        assert!(parse_hex("\u{20ac}\u{20ac}").is_err());
        assert!(parse_hex("05 0A \u{00e9}").is_err());
    }
}

mod address;
mod checksum;
mod cli_messages;

use clap::Parser;

use crate::checksum::{Verdict, check};
use crate::cli_messages::{print_error, print_success};

/// Check that an Ethereum address is EIP-55 checksummed.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ethereum address to check. 40 hex digits, usually prefixed with "0x".
    #[arg(value_name = "ADDRESS")]
    address: String,
}

fn main() {
    let args = Args::parse();

    match check(&args.address) {
        Verdict::Valid => {
            print_success("Valid EIP-55 checksummed address.", &args.address);
        }
        Verdict::InvalidFormat(e) => {
            print_error(
                &format!("Invalid Ethereum address format: {}", args.address),
                Some(&e.to_string()),
            );
            std::process::exit(1);
        }
        Verdict::ChecksumMismatch { expected } => {
            print_error(
                &format!("Not EIP-55 checksummed: {}", args.address),
                Some(&format!("Expected: {}", expected)),
            );
            std::process::exit(1);
        }
    }
}

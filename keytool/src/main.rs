//! Sawtooth Key Tool CLI

use clap::{Arg, ArgAction, ArgMatches, Command};
use sawtooth_keytool::{
    algorithms, keygen, message_bytes, pubkey, sign, verify, ALGORITHMS_CMD, KEYGEN_CMD,
    PUBKEY_CMD, SIGN_CMD, VERIFY_CMD,
};
use sawtooth_signing::{Config, Registry};
use std::process::ExitCode;
use tracing::{error, info};

/// Returns the version of the crate.
pub const fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Flag for verbose output
const VERBOSE_FLAG: &str = "verbose";

/// Flag for interpreting messages as hex
const HEX_FLAG: &str = "hex";

/// Exit code when a signature does not verify
const INVALID_SIGNATURE: u8 = 1;

/// Exit code for usage or decoding errors
const ERROR: u8 = 2;

fn algorithm_arg() -> Arg {
    Arg::new("algorithm")
        .long("algorithm")
        .short('a')
        .help("Signature algorithm (defaults to secp256k1)")
        .value_parser(clap::value_parser!(String))
}

fn message_arg() -> Arg {
    Arg::new("message")
        .long("message")
        .short('m')
        .required(true)
        .help("Message to sign or verify (UTF-8 text unless --hex is set)")
        .value_parser(clap::value_parser!(String))
}

fn hex_arg() -> Arg {
    Arg::new(HEX_FLAG)
        .long(HEX_FLAG)
        .help("Interpret the message as hex")
        .action(ArgAction::SetTrue)
}

fn required_string(matches: &ArgMatches, name: &str) -> String {
    matches
        .get_one::<String>(name)
        .cloned()
        .unwrap_or_default()
}

/// Entrypoint for the Sawtooth Key Tool CLI
fn main() -> ExitCode {
    // Define application
    let matches = Command::new("keytool")
        .version(crate_version())
        .about("Generate keys, sign messages, and verify signatures.")
        .arg(
            Arg::new(VERBOSE_FLAG)
                .short('v')
                .long(VERBOSE_FLAG)
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new(ALGORITHMS_CMD).about("List the supported signature algorithms."))
        .subcommand(
            Command::new(KEYGEN_CMD)
                .about("Generate a random private key and print it with its public key.")
                .arg(algorithm_arg()),
        )
        .subcommand(
            Command::new(PUBKEY_CMD)
                .about("Print the public key for a private key.")
                .arg(algorithm_arg())
                .arg(
                    Arg::new("private-key")
                        .long("private-key")
                        .required(true)
                        .help("Hex-encoded private key")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new(SIGN_CMD)
                .about("Sign a message and print the hex signature.")
                .arg(algorithm_arg())
                .arg(
                    Arg::new("private-key")
                        .long("private-key")
                        .required(true)
                        .help("Hex-encoded private key")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(message_arg())
                .arg(hex_arg()),
        )
        .subcommand(
            Command::new(VERIFY_CMD)
                .about("Verify a signature. Exits with 0 if valid and 1 if invalid.")
                .arg(algorithm_arg())
                .arg(
                    Arg::new("public-key")
                        .long("public-key")
                        .required(true)
                        .help("Hex-encoded public key")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    Arg::new("signature")
                        .long("signature")
                        .short('s')
                        .required(true)
                        .help("Hex-encoded signature")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(message_arg())
                .arg(hex_arg()),
        )
        .get_matches();

    // Create logger
    let level = if matches.get_flag(VERBOSE_FLAG) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Create registry
    let registry = match Registry::from_config(Config::default()) {
        Ok(registry) => registry,
        Err(e) => {
            error!(error=?e, "failed to create registry");
            return ExitCode::from(ERROR);
        }
    };

    // Parse subcommands
    match matches.subcommand() {
        Some((ALGORITHMS_CMD, _)) => {
            for name in algorithms(&registry) {
                println!("{name}");
            }
            ExitCode::SUCCESS
        }
        Some((KEYGEN_CMD, matches)) => {
            let algorithm = matches.get_one::<String>("algorithm").map(|s| s.as_str());
            match keygen(&registry, algorithm) {
                Ok(pair) => {
                    info!(algorithm = pair.algorithm, "generated key pair");
                    println!("{}", pair.private_key.as_str());
                    println!("{}", pair.public_key);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(error=?e, "failed to generate key pair");
                    ExitCode::from(ERROR)
                }
            }
        }
        Some((PUBKEY_CMD, matches)) => {
            let algorithm = matches.get_one::<String>("algorithm").map(|s| s.as_str());
            let private_key = required_string(matches, "private-key");
            match pubkey(&registry, algorithm, &private_key) {
                Ok(public_key) => {
                    println!("{public_key}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(error=?e, "failed to derive public key");
                    ExitCode::from(ERROR)
                }
            }
        }
        Some((SIGN_CMD, matches)) => {
            let algorithm = matches.get_one::<String>("algorithm").map(|s| s.as_str());
            let private_key = required_string(matches, "private-key");
            let message = match message_bytes(
                &required_string(matches, "message"),
                matches.get_flag(HEX_FLAG),
            ) {
                Ok(message) => message,
                Err(e) => {
                    error!(error=?e, "failed to decode message");
                    return ExitCode::from(ERROR);
                }
            };
            match sign(&registry, algorithm, &private_key, &message) {
                Ok(signature) => {
                    println!("{signature}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(error=?e, "failed to sign message");
                    ExitCode::from(ERROR)
                }
            }
        }
        Some((VERIFY_CMD, matches)) => {
            let algorithm = matches.get_one::<String>("algorithm").map(|s| s.as_str());
            let public_key = required_string(matches, "public-key");
            let signature = required_string(matches, "signature");
            let message = match message_bytes(
                &required_string(matches, "message"),
                matches.get_flag(HEX_FLAG),
            ) {
                Ok(message) => message,
                Err(e) => {
                    error!(error=?e, "failed to decode message");
                    return ExitCode::from(ERROR);
                }
            };
            match verify(&registry, algorithm, &public_key, &signature, &message) {
                Ok(true) => {
                    println!("valid");
                    ExitCode::SUCCESS
                }
                Ok(false) => {
                    println!("invalid");
                    ExitCode::from(INVALID_SIGNATURE)
                }
                Err(e) => {
                    error!(error=?e, "failed to verify signature");
                    ExitCode::from(ERROR)
                }
            }
        }
        Some((cmd, _)) => {
            error!(cmd, "invalid subcommand");
            ExitCode::from(ERROR)
        }
        None => {
            error!("no subcommand provided");
            ExitCode::from(ERROR)
        }
    }
}

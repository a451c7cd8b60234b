//! MaxCoin (MAX) address tool
//!
//! Demo driver: derives addresses and WIF keys, validates and decodes them.

use max_core::constants::{ADDRESS_VERSION, CHAIN_FULL_NAME, CHAIN_NAME, WIF_VERSION};
use max_core::encoding::{
    decode_address, decode_wif, derive_address, derive_wif, is_compressed_wif, Compression,
};
use max_core::wallet::{parse_public_key, KeyPair};
use std::process::ExitCode;

/// Public key used when no arguments are given
const DEMO_PUBKEY_B64: &str =
    "BNX5V3mm0Uqu4ZVTB4AQ9IReam0vdsS3va8cuz4A909fVaJC2sqZcsnUL7sOWwz9U1HJehP0UW1tcfKvmfvAJkY=";

const USAGE: &str = "usage: max-address [address <pubkey> | validate <address> \
    | wif <hex-privkey> [--uncompressed] | recover <wif> | generate [--uncompressed] [--json]]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let flag = |name: &str| args.iter().any(|a| a == name);
    let compression = Compression::from(!flag("--uncompressed"));

    match args.first().map(String::as_str) {
        None => demo(),
        Some("address") => {
            let pubkey = parse_public_key(arg(args, 1)?)?;
            println!("{}", derive_address(&pubkey));
            Ok(())
        }
        Some("validate") => {
            let address = arg(args, 1)?;
            let pubkey_hash = decode_address(address)?;
            println!("valid {} address", CHAIN_NAME);
            println!("  Version:     0x{:02x}", ADDRESS_VERSION);
            println!("  Pubkey hash: {}", pubkey_hash);
            Ok(())
        }
        Some("wif") => {
            let key = hex::decode(arg(args, 1)?)?;
            println!("{}", derive_wif(&key, compression));
            Ok(())
        }
        Some("recover") => {
            let wif = arg(args, 1)?;
            if let Err(e) = is_compressed_wif(wif) {
                eprintln!("Warning: {}", e);
            }
            let decoded = decode_wif(wif)?;
            println!("{}", hex::encode(&decoded.key));
            println!("  Compression: {:?}", decoded.compression);
            Ok(())
        }
        Some("generate") => {
            let keypair = KeyPair::generate(compression);
            if flag("--json") {
                println!("{}", serde_json::to_string_pretty(&keypair.summary())?);
            } else {
                print_keypair(&keypair);
            }
            Ok(())
        }
        Some(other) => Err(format!("unknown command '{}'\n{}", other, USAGE).into()),
    }
}

fn arg(args: &[String], index: usize) -> Result<&str, String> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| USAGE.to_string())
}

fn demo() -> Result<(), Box<dyn std::error::Error>> {
    println!("╔══════════════════════════════════════════════════════════╗");
    println!(
        "║              {} ({}) ADDRESS TOOL                   ║",
        CHAIN_FULL_NAME, CHAIN_NAME
    );
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    let pubkey = parse_public_key(DEMO_PUBKEY_B64)?;
    let address = derive_address(&pubkey);
    let pubkey_hash = decode_address(&address)?;

    println!("Known Public Key:");
    println!("  Base64:      {}", DEMO_PUBKEY_B64);
    println!("  Address:     {}", address);
    println!("  Pubkey hash: {}", pubkey_hash);
    println!();

    let keypair = KeyPair::generate(Compression::Compressed);
    print_keypair(&keypair);

    Ok(())
}

fn print_keypair(keypair: &KeyPair) {
    let summary = keypair.summary();
    println!("Generated Key Pair:");
    println!("  Address:     {}", summary.address);
    println!("  Public key:  {}", summary.public_key);
    println!("  WIF:         {} (version 0x{:02x})", summary.wif, WIF_VERSION);
    println!("  Compression: {:?}", summary.compression);
}

use std::ops::Range;

use clap::{Parser, Subcommand};
use crc_engine::{catalog, compute};
use cracker::CrcCracker;
use num_bigint::BigUint;

mod cli;

#[derive(Parser)]
#[command(name = "crcsolver", version, about = "Forge CRC checksums by recovering unknown message bits")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalogued CRC algorithms
    List {
        /// Only algorithms of this width
        #[arg(short, long)]
        width: Option<u8>,
    },
    /// Compute a CRC
    Compute {
        #[arg(short, long, default_value = "CRC-32")]
        algorithm: String,
        /// Treat DATA as hex
        #[arg(long)]
        hex: bool,
        data: String,
    },
    /// Set unknown message bits so the CRC takes a chosen value
    Solve {
        #[arg(short, long, default_value = "CRC-32")]
        algorithm: String,
        /// Message in hex; unknown bits are cleared before solving
        #[arg(short, long)]
        message: String,
        /// Unknown bit positions (bit 0 is the MSB of byte 0), e.g. 56..64,70
        #[arg(short, long, value_delimiter = ',', required = true, value_parser = cli::parse_span)]
        unknowns: Vec<Range<usize>>,
        /// Desired checksum in hex
        #[arg(short, long, value_parser = cli::parse_u128)]
        desired: u128,
        /// Probe bits on all cores
        #[arg(long)]
        parallel: bool,
    },
    /// Find inputs whose XOR equals a target (all values in hex)
    Xor {
        #[arg(short, long, value_parser = cli::parse_biguint)]
        target: BigUint,
        #[arg(required = true, value_parser = cli::parse_biguint)]
        inputs: Vec<BigUint>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::List { width } => {
            for params in catalog::CATALOG.iter().filter(|p| width.is_none_or(|w| p.width == w)) {
                println!("{}", params);
            }
        }
        Command::Compute { algorithm, hex, data } => {
            let params = catalog::find(&algorithm)?;
            let data = cli::message_bytes(&data, hex)?;
            println!("0x{:0width$x}", compute(&data, &params), width = params.hex_digits());
        }
        Command::Solve {
            algorithm,
            message,
            unknowns,
            desired,
            parallel,
        } => {
            let message = cli::message_bytes(&message, true)?;
            let unknowns: Vec<usize> = unknowns.into_iter().flatten().collect();
            let cracker = CrcCracker::named(&algorithm)?.parallel(parallel);
            log::info!("solving {} unknown bits with {}", unknowns.len(), cracker.checksum().name);

            let Some(recovered) = cracker.solve_bits(&message, &unknowns, desired)? else {
                return Err(format!("no setting of the unknown bits gives checksum 0x{:x}", desired).into());
            };
            println!("{}", hex::encode(&recovered.message));
            println!("{}", String::from_utf8_lossy(&recovered.message).escape_debug());
            log::debug!("set bits: {:?}", recovered.set_bits);
        }
        Command::Xor { target, inputs } => match gf2::solve(&inputs, &target) {
            Some(selector) => {
                let bits: Vec<String> = selector.to_bits().iter().map(u8::to_string).collect();
                println!("{}", bits.join(" "));
            }
            None => return Err(format!("0x{:x} is not in the span of the inputs", target).into()),
        },
    }
    Ok(())
}

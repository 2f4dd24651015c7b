use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crc_compose::{
    config::ComposeConfig,
    crc::{
        format::{int_to_bytes, parse_crc, to_multi_crc_string, to_single_crc_string},
        try_compose, try_get_monomial, CrcPolynomial, CRC_SIZE_BYTES,
    },
    manifest::{BlockChecksum, BlockManifest},
};

#[derive(Parser)]
#[command(name = "crc-compose")]
#[command(about = "Compose CRC32 checksums of adjacent byte ranges")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// crc32, crc32c or a reflected modulus such as 0xedb88320
    #[arg(short, long, global = true)]
    polynomial: Option<CrcPolynomial>,

    #[arg(long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Combine crc(A) and crc(B) into crc(A || B)
    Combine {
        #[arg(long, value_parser = parse_crc)]
        crc_a: u32,

        #[arg(long, value_parser = parse_crc)]
        crc_b: u32,

        /// Length of B in bytes
        #[arg(long, allow_negative_numbers = true)]
        length_b: i64,
    },

    /// Print x^(8 * length) mod the polynomial
    Monomial {
        #[arg(long, allow_negative_numbers = true)]
        length: i64,
    },

    /// Compose a sequence of <crc>:<length> blocks, in order
    Fold {
        #[arg(long)]
        stripe_length: Option<u64>,

        /// JSON manifest of blocks, used instead of positional blocks
        #[arg(long, conflicts_with = "blocks")]
        manifest: Option<PathBuf>,

        blocks: Vec<BlockChecksum>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("crc_compose={filter_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = ComposeConfig::from_env().context("Failed to load configuration")?;
    debug!("Loaded configuration: {:?}", config);

    run(args, config)
}

fn run(args: Args, config: ComposeConfig) -> anyhow::Result<()> {
    match args.command {
        Command::Combine {
            crc_a,
            crc_b,
            length_b,
        } => {
            let polynomial = args.polynomial.unwrap_or(config.polynomial);
            let crc = try_compose(crc_a, crc_b, length_b, polynomial.modulus())?;
            print_crc(args.json, polynomial, crc)
        }
        Command::Monomial { length } => {
            let polynomial = args.polynomial.unwrap_or(config.polynomial);
            let monomial = try_get_monomial(length, polynomial.modulus())?;
            print_crc(args.json, polynomial, monomial)
        }
        Command::Fold {
            stripe_length,
            manifest,
            blocks,
        } => {
            let mut manifest = match manifest {
                Some(path) => BlockManifest::load(&path)
                    .with_context(|| format!("Failed to load manifest {}", path.display()))?,
                None => BlockManifest::new(blocks),
            };
            manifest.stripe_length = stripe_length
                .or(manifest.stripe_length)
                .or(config.stripe_length);

            let polynomial = args
                .polynomial
                .or(manifest.polynomial)
                .unwrap_or(config.polynomial);
            let digest = manifest.compose(polynomial)?;
            info!(
                "Composed {} blocks into {} CRCs",
                manifest.blocks.len(),
                digest.len() / CRC_SIZE_BYTES
            );

            if args.json {
                let crcs: Vec<String> = digest
                    .chunks(CRC_SIZE_BYTES)
                    .map(to_single_crc_string)
                    .collect::<Result<_, _>>()?;
                println!(
                    "{}",
                    json!({ "polynomial": polynomial, "crcs": crcs })
                );
            } else {
                println!("{}", to_multi_crc_string(&digest)?);
            }
            Ok(())
        }
    }
}

fn print_crc(as_json: bool, polynomial: CrcPolynomial, crc: u32) -> anyhow::Result<()> {
    let rendered = to_single_crc_string(&int_to_bytes(crc))?;
    if as_json {
        println!("{}", json!({ "polynomial": polynomial, "crc": rendered }));
    } else {
        println!("{rendered}");
    }
    Ok(())
}

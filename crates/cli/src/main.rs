//! `p256coz`: multiply or add P-256 points given as SEC1 hex
//!
//! The resulting point is written to stdout as lower-case hex of its
//! uncompressed encoding (`00` for the point at infinity). Diagnostics go to
//! stderr and are filtered with `RUST_LOG`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use p256coz_algorithms::ec::p256::{Point, Scalar};
use tracing_subscriber::EnvFilter;

/// P-256 point arithmetic over SEC1-encoded points
#[derive(Debug, Parser)]
#[command(name = "p256coz", version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute k·P with the co-Z ladder
    Mul {
        /// Scalar k as big-endian hex of any length; reduced mod n
        scalar: String,
        /// Point P as SEC1 hex (00, 02/03 ∥ x, or 04 ∥ x ∥ y)
        point: String,
    },
    /// Compute P1 + P2 with the affine group law
    Add {
        /// First point as SEC1 hex
        point1: String,
        /// Second point as SEC1 hex
        point2: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn decode_hex(what: &'static str, text: &str) -> Result<Vec<u8>> {
    hex::decode(text.trim()).with_context(|| format!("{what} is not valid hex"))
}

fn decode_point(what: &'static str, text: &str) -> Result<Point> {
    let bytes = decode_hex(what, text)?;
    let point = Point::deserialize(&bytes).with_context(|| format!("{what} is not a valid point"))?;
    tracing::debug!(%what, identity = point.is_identity(), "decoded point");
    Ok(point)
}

fn run(command: Command) -> Result<Point> {
    match command {
        Command::Mul { scalar, point } => {
            let _span = tracing::info_span!("mul").entered();
            let k = Scalar::from_be_bytes_reduced(&decode_hex("scalar", &scalar)?);
            tracing::debug!(bits = k.bit_length(), "decoded scalar");
            let p = decode_point("point", &point)?;
            p.mul(&k).context("scalar multiplication failed")
        }
        Command::Add { point1, point2 } => {
            let _span = tracing::info_span!("add").entered();
            let p1 = decode_point("point1", &point1)?;
            let p2 = decode_point("point2", &point2)?;
            Ok(p1.add(&p2))
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args.command) {
        Ok(point) => {
            println!("{}", hex::encode(point.serialize_uncompressed()));
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

//! # vmf
//!
//! Encode, decode and inspect vmf vectors from the command line.
//!
//! The framework is initialised from `VMF_NAME` / `VMF_EPSILON` for the
//! duration of one command and terminated before exit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Format;
use vmf_runtime::{Framework, FrameworkConfig};

#[derive(Parser)]
#[command(name = "vmf", about = "Encode and decode vmf vectors")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode 2, 3 or 4 components
    Encode {
        /// Components in x, y, z, w order
        #[arg(required = true, num_args = 2..=4, allow_negative_numbers = true)]
        components: Vec<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Msgpack)]
        format: Format,
    },
    /// Decode a base64 MessagePack payload
    Decode {
        payload: String,

        /// Payload is a tagged record rather than a bare component array
        #[arg(short, long)]
        record: bool,
    },
    /// Parse a vector such as "1 2 3" and print its components
    Show { text: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = FrameworkConfig::from_env()?;

    let output = Framework::scoped(config, |framework| {
        let handle = framework.handle();
        match &args.command {
            Command::Encode { components, format } => {
                commands::encode(&handle, components, *format)
            }
            Command::Decode { payload, record } => commands::decode(&handle, payload, *record),
            Command::Show { text } => commands::show(text),
        }
    })?;

    println!("{output}");
    info!("done");
    Ok(())
}

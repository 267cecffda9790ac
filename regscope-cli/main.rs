use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use regscope::{layout_table, register_list, report, DecodeConfig, OutputFormat, Result};

#[derive(Parser, Debug)]
#[command(name = "regscope")]
#[command(about = "Decode raw AArch64 system register values into named fields")]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registers that can be decoded
    List,

    /// Show the field layout and value tables of a register
    Layout {
        #[arg(help = "Register name, e.g. CLIDR_EL1 (case-insensitive)")]
        register: String,
    },

    /// Decode a raw register value
    Decode {
        #[arg(help = "Register name, e.g. CLIDR_EL1 (case-insensitive)")]
        register: String,

        #[arg(help = "Raw value (0x.., 0b.. or decimal), or a byte dump with --bytes")]
        value: String,

        #[arg(
            long,
            help = "Treat VALUE as 4 or 8 captured bytes, least significant first (e.g. \"23 00 20 0a\")"
        )]
        bytes: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging based on verbose flag, RUST_LOG otherwise
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::List => print!("{}", register_list()),
        Command::Layout { register } => print!("{}", layout_table(&register)?),
        Command::Decode {
            register,
            value,
            bytes,
            format,
        } => {
            let config = DecodeConfig::new(&register, &value, bytes, format)?;
            tracing::info!("Decoding {} = 0x{:x}", config.layout.name(), config.raw);
            print!("{}", report::decode(&config)?);
        }
    }

    Ok(())
}

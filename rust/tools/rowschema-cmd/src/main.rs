use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod schema_parser;

#[derive(Parser)]
#[command(name = "rowschema-cmd")]
#[command(about = "Command-line utility for row schema messages")]
#[command(version)]
struct Cli {
    /// Generate sequential schema ids with this prefix instead of UUIDs
    #[arg(long, global = true)]
    id_prefix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a schema string into a sealed schema message
    Compile {
        /// Schema string, e.g. "(id: long, name: string?, tags: array<string>)"
        schema: String,

        /// Schema id to assign (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        /// Output file for the sealed message (defaults to hex on stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a sealed schema message and display its fields
    Inspect {
        /// Increase verbosity (-v prints the schema as JSON)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,

        /// Path to the sealed schema message
        path: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let context = commands::create_context(cli.id_prefix.as_deref())?;

    match cli.command {
        Commands::Compile { schema, id, output } => {
            commands::compile::run(&context, &schema, id, output)
        }
        Commands::Inspect { verbose, path } => commands::inspect::run(&context, verbose, &path),
    }
}

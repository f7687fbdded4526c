use anyhow::Result;
use clap::{Parser, Subcommand};
use exon_contact::ContactSubmission;

/// exon - Exon Enterprise website
#[derive(Parser)]
#[command(name = "exon")]
#[command(about = "Exon Enterprise website and contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit the contact form of a running site
    Contact {
        /// Base URL of the site
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        url: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = exon::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    exon::observability::init_observability(
        "exon",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => exon::cli::serve(config, host, port).await,
        Commands::Contact {
            url,
            name,
            email,
            message,
        } => exon::cli::contact(url, ContactSubmission::new(name, email, message)).await,
    }
}

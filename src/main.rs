use anyhow::Result;
use clap::{Parser, Subcommand};
use valaidhalam::cli::submit::SubmitInput;
use valaidhalam_contact::{Budget, Service};

/// valaidhalam - studio site and contact mail relay
#[derive(Parser)]
#[command(name = "valaidhalam")]
#[command(about = "Studio website with a contact form mail relay", long_about = None)]
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
    /// Fill in the contact form and send it to a running server
    Submit {
        /// Relay URL
        #[arg(long, default_value = "http://127.0.0.1:3000/api/send-email")]
        endpoint: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// e.g. "Web Application"
        #[arg(long)]
        service: Option<Service>,

        /// e.g. "Let's discuss"
        #[arg(long)]
        budget: Option<Budget>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = valaidhalam::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    valaidhalam::observability::init_observability(
        "valaidhalam",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => valaidhalam::cli::server::serve(config, host, port).await,
        Commands::Submit {
            endpoint,
            name,
            email,
            message,
            company,
            phone,
            service,
            budget,
        } => {
            let input = SubmitInput {
                name,
                email,
                company,
                phone,
                service,
                budget,
                message,
            };

            valaidhalam::cli::submit::submit(endpoint, input).await
        }
    }
}

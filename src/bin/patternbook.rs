use clap::Parser;
use patternbook::{config::PaymentConfig, Error, PaymentRegistry, PaymentRequest};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Registry key of the provider to pay with
    #[arg(short, long)]
    provider: String,

    #[arg(short, long)]
    amount: f64,

    /// Mechanism-specific request field, e.g. `accountNumber=123`
    #[arg(short, long = "field", value_parser = parse_key_value)]
    fields: Vec<(String, String)>,

    /// Extra provider registration, e.g. `card=stripe`
    #[arg(short, long = "register", value_parser = parse_key_value)]
    registers: Vec<(String, String)>,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", s))
}

async fn run(cli: &Cli) -> Result<bool, Error> {
    let config = PaymentConfig::load_or_default(&cli.config)?;
    info!("config loaded.");
    debug!("config: {:?}", config);

    let registry = PaymentRegistry::new();
    registry.register_providers(&config);
    for (key, kind) in cli.registers.iter() {
        registry.register_kind(key, kind)?;
    }
    debug!("registered providers: {:?}", registry.provider_names());

    let request = cli
        .fields
        .iter()
        .fold(PaymentRequest::new(&cli.provider), |request, (k, v)| {
            request.with_field(k, v.as_str())
        });

    Ok(registry.dispatch(cli.amount, &request).await?)
}

fn outcome_message(provider: &str, success: bool) -> String {
    let outcome = if success { "succeeded" } else { "declined" };
    format!("Payment via {}: {}", provider, outcome)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(&cli).await {
        Ok(success) => println!("{}", outcome_message(&cli.provider, success)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

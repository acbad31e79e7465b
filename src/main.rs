use anyhow::{bail, Context};
use clap::Parser;
use rezizer::cli::apply_all;
use rezizer::config::RezizerConfig;
use rezizer::constants::SECRET_ENV_VAR;
use rezizer::UrlBuilder;
use std::path::PathBuf;

/// Rezizer URL builder - generate (and sign) image-service URLs
#[derive(Parser, Debug)]
#[command(name = "rezizer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image service base URL (overrides the config file)
    #[arg(short, long)]
    server_url: Option<String>,

    /// Signing secret (overrides the config file and REZIZER_SECRET)
    #[arg(long)]
    secret: Option<String>,

    /// Source image path or URL
    image: String,

    /// Operations in order, e.g. `resize=300,200 fit-in blur=5`
    operations: Vec<String>,
}

fn load_config(args: &Args) -> anyhow::Result<RezizerConfig> {
    let mut config = match &args.config {
        Some(path) => RezizerConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => match &args.server_url {
            Some(url) => RezizerConfig::new(url.clone()),
            None => bail!("either --config or --server-url is required"),
        },
    };

    if let Some(url) = &args.server_url {
        config.server_url = url.clone();
    }
    if let Some(secret) = args.secret.clone().or_else(|| std::env::var(SECRET_ENV_VAR).ok()) {
        config.secret = Some(secret);
    }

    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    rezizer::logging::init_subscriber_with(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging subsystem: {}", e))?;

    tracing::debug!(
        server_url = %config.server_url,
        signed = config.secret.is_some(),
        operations = args.operations.len(),
        "Configuration loaded successfully"
    );

    let mut url = UrlBuilder::from_config(&config);
    apply_all(&mut url, &args.operations)?.with(args.image.as_str());

    println!("{}", url);
    Ok(())
}

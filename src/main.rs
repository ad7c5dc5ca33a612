use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rube_goldberg::app::sentiment::SentimentService;
use rube_goldberg::config::Config;
use rube_goldberg::infra::http_classifier::HttpSentimentClassifier;
use rube_goldberg::infra::random::ThreadRandom;
use rube_goldberg::pipeline::RubeGoldbergPipeline;
use rube_goldberg::{logging, observability, server};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rube_goldberg")]
#[command(about = "Runs text through a needlessly long chain of encodings")]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Port to listen on (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run the pipeline once and print the JSON results
    Run {
        text: String,
        /// Skip the remote classifier and use the keyword heuristic
        #[arg(long)]
        offline: bool,
    },
}

fn build_pipeline(config: &Config, offline: bool) -> Result<RubeGoldbergPipeline> {
    let sentiment = if offline || !config.classifier.enabled {
        info!("Remote sentiment classifier disabled, using keyword heuristic");
        SentimentService::offline()
    } else {
        let timeout = config.classifier.timeout();
        let classifier = HttpSentimentClassifier::new(config.classifier.url.clone(), timeout)
            .context("Failed to build sentiment classifier client")?;
        SentimentService::new(Arc::new(classifier), timeout)
    };
    Ok(RubeGoldbergPipeline::new(sentiment, Arc::new(ThreadRandom)))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    logging::init_logging(&config.logging.dir);

    match cli.command {
        Commands::Serve { port } => {
            if let Err(e) = observability::init() {
                warn!("Failed to initialize metrics: {}", e);
            }

            let pipeline = Arc::new(build_pipeline(&config, false)?);
            let port = port.unwrap_or(config.server.port);
            let addr: SocketAddr = format!("{}:{}", config.server.host, port)
                .parse()
                .with_context(|| format!("Invalid listen address {}:{}", config.server.host, port))?;

            server::start_server(pipeline, addr)
                .await
                .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
        }
        Commands::Run { text, offline } => {
            let pipeline = build_pipeline(&config, offline)?;
            let run = pipeline.run(&text).await?;
            println!("{}", serde_json::to_string_pretty(&run)?);
        }
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use stateful::binding::Message;
use stateful::config::Config;

#[derive(Parser, Debug)]
#[command(name = "stateful-demo", version, about = "Loading / failed / present content demo")]
struct Cli {
    /// Path to the config file (default: <config dir>/stateful/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated load latency in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Show empty content as-is instead of the placeholder
    #[arg(long)]
    no_placeholder: bool,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace). Needs a log file
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        self.apply(&mut config);
        Ok(config)
    }

    /// Command-line flags override the config file.
    fn apply(&self, config: &mut Config) {
        if let Some(delay_ms) = self.delay_ms {
            config.loader.delay_ms = delay_ms;
        }
        if self.no_placeholder {
            config.placeholder = Message::default();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    stateful::logging::init_tracing(&config.logging, cli.verbose)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("Failed to start tokio runtime")?;

    tracing::info!(delay_ms = config.loader.delay_ms, "Starting demo");
    stateful::ui::run(&config, runtime.handle().clone())
}

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::path::PathBuf;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DATA_ENV: &str = "USELESS_DATA";
pub const BUNDLE_ENV: &str = "USELESS_BUNDLE";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_PATH: &str = "data/learning-cards.json";
const DEFAULT_BUNDLE_PATH: &str = "web/dist/component.js";

#[derive(Parser, Debug, Default)]
#[command(name = "useless-mcp")]
#[command(about = "Cross-occupational learning card MCP server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bind host (env: HOST, default 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (env: PORT, default 3000)
    #[arg(long)]
    pub port: Option<u16>,

    /// Learning cards JSON file (env: USELESS_DATA)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Prebuilt UI component bundle (env: USELESS_BUNDLE)
    #[arg(long)]
    pub bundle: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log only warnings and errors
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the tool catalog as JSON and exit
    #[arg(long)]
    pub print_tools: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub bundle_path: PathBuf,
}

impl ServerConfig {
    /// Flags win over environment variables, which win over defaults.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        Self::resolve_with(cli, |key| std::env::var(key).ok())
    }

    pub fn resolve_with(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = cli
            .host
            .clone()
            .or_else(|| env(HOST_ENV))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match cli.port {
            Some(port) => port,
            None => match env(PORT_ENV) {
                Some(raw) => raw
                    .parse::<u16>()
                    .with_context(|| format!("Invalid {PORT_ENV} value: {raw}"))?,
                None => DEFAULT_PORT,
            },
        };

        let data_path = cli
            .data
            .clone()
            .or_else(|| env(DATA_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let bundle_path = cli
            .bundle
            .clone()
            .or_else(|| env(BUNDLE_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE_PATH));

        Ok(Self {
            host,
            port,
            data_path,
            bundle_path,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

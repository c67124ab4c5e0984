//! Command-line and environment configuration.

use std::path::PathBuf;

use catalogcheck_observability::LogFormat;
use clap::Parser;

use crate::client::DEFAULT_PRODUCTS_URL;

pub const DEFAULT_MOCK_PORT: u16 = 8080;

/// Validate the product catalog served by an HTTP API.
#[derive(Parser, Debug)]
#[command(name = "api-tester", version, about = "Product catalog API tester")]
pub struct Cli {
    /// Output JSON report to the specified file
    #[arg(long, value_name = "FILE", env = "API_TESTER_JSON")]
    pub json: Option<PathBuf>,

    /// Run against a local mock server containing defective data
    #[arg(long, env = "API_TESTER_MOCK")]
    pub mock: bool,

    /// Port for the mock server (0 picks a free port)
    #[arg(long, default_value_t = DEFAULT_MOCK_PORT, env = "API_TESTER_PORT")]
    pub port: u16,

    /// Products endpoint to test (ignored with --mock)
    #[arg(long, default_value = DEFAULT_PRODUCTS_URL, env = "API_TESTER_URL")]
    pub url: String,

    /// Exit after the report instead of keeping the mock server running
    #[arg(long, env = "API_TESTER_NO_WAIT")]
    pub no_wait: bool,

    /// Diagnostic log format on stderr: text or json
    #[arg(long, default_value = "text", env = "API_TESTER_LOG_FORMAT")]
    pub log_format: LogFormat,
}

/// Where the products come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A remote endpoint.
    Remote { url: String },
    /// A stub server started by the run itself.
    Mock { port: u16 },
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source: Source,
    pub json_output: Option<PathBuf>,
    /// Keep a mock server running after the report until Ctrl+C.
    pub wait_for_shutdown: bool,
    pub log_format: LogFormat,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        let source = if cli.mock {
            Source::Mock { port: cli.port }
        } else {
            Source::Remote { url: cli.url }
        };
        Self {
            wait_for_shutdown: cli.mock && !cli.no_wait,
            source,
            json_output: cli.json,
            log_format: cli.log_format,
        }
    }
}

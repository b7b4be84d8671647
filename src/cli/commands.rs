use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "remitlens", about = "Remittance corridor comparison dashboard backend")]
pub struct Cli {
    /// Base URL of the comparison service (overrides REMITLENS_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    /// Per-request timeout in seconds (overrides REMITLENS_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every source once and print the view model as JSON
    Snapshot {
        /// Corridor code (MX, CO, BR, AR, VE, CL, PE, BO, GT, DO, SV)
        #[arg(long, default_value = "MX")]
        corridor: String,
        /// Amount in USD; empty or unparsable means the default (1000)
        #[arg(long)]
        amount: Option<String>,
    },
    /// Probe the service liveness endpoint
    Health,
    /// List supported corridors
    Corridors,
    /// Read selection changes from stdin and print each applied view
    ///
    /// Lines: `corridor <CODE>`, `amount <USD>` (empty clears), `refresh`, `quit`.
    Watch {
        #[arg(long, default_value = "MX")]
        corridor: String,
        #[arg(long)]
        amount: Option<String>,
    },
}

/// One line of `watch` input.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchInput {
    Corridor(String),
    Amount(String),
    Refresh,
    Quit,
}

impl WatchInput {
    pub fn parse(line: &str) -> Option<WatchInput> {
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };
        match cmd.to_lowercase().as_str() {
            "corridor" | "c" if !arg.is_empty() => Some(WatchInput::Corridor(arg.to_string())),
            "amount" | "a" => Some(WatchInput::Amount(arg.to_string())),
            "refresh" | "r" => Some(WatchInput::Refresh),
            "quit" | "q" | "exit" => Some(WatchInput::Quit),
            _ => None,
        }
    }
}

use clap::{Parser, ValueEnum};
use edgar_insiders::lookup::DEFAULT_LOOKUP_FILE;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Ticker/CIK lookup file (two columns: symbol, CIK).
    #[arg(short, long, default_value = DEFAULT_LOOKUP_FILE)]
    pub lookup: String,

    /// Comma-separated tickers (e.g. "AAPL, MSFT"), or "all" for every ticker in the lookup file.
    ///
    /// Prompted for when omitted.
    #[arg(short, long)]
    pub symbols: Option<String>,

    /// First transaction date to include, as YYYY-MM-DD. Prompted for when omitted.
    #[arg(long)]
    pub start: Option<String>,

    /// Spreadsheet base name; `.xlsx` is appended. An empty name skips the export.
    ///
    /// Prompted for when omitted.
    #[arg(short, long)]
    pub output: Option<String>,

    /// User-Agent sent to EDGAR; SEC asks for a name and contact address.
    #[arg(long, env = "EDGAR_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Sets the level of tracing. Falls back to `RUST_LOG`, then warnings only.
    #[arg(short, long, global = true)]
    pub trace: Option<TraceLevel>,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}

impl TraceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            TraceLevel::DEBUG => "debug",
            TraceLevel::ERROR => "error",
            TraceLevel::INFO => "info",
            TraceLevel::TRACE => "trace",
            TraceLevel::WARN => "warn",
        }
    }
}

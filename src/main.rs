mod cli;

use clap::Parser;
use cli::Cli;
use dialoguer::Input;
use edgar_insiders::batch::{self, BatchConfig, BatchEvent, Diagnostic, SymbolSelection};
use edgar_insiders::export::{self, XlsxSink};
use edgar_insiders::{EdgarClient, LookupTable};
use tracing::{debug, trace};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

////////////////////////////////////////////////////////////////////////////

// install the fmt subscriber; `--trace` wins over RUST_LOG
fn preprocess(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match cli.trace {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

// flag value if given, otherwise ask on the console
fn prompt(given: Option<String>, question: &str) -> Result<String, Box<dyn std::error::Error>> {
    match given {
        Some(answer) => Ok(answer),
        None => Ok(Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?),
    }
}

fn report(event: &BatchEvent) {
    match event {
        BatchEvent::Progress(progress) => println!("{progress}"),
        BatchEvent::Diagnostic(diagnostic) => eprintln!("{diagnostic}"),
    }
}

////////////////////////////////////////////////////////////////////////////

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    preprocess(&cli)?;
    trace!("command line input recorded: {cli:?}");

    let table = LookupTable::from_path(&cli.lookup)?;

    // console input
    let symbols = prompt(
        cli.symbols.clone(),
        "Enter a ticker (ex: 'AAPL, MSFT') or type 'all' to search thru all the tickers in file",
    )?;
    let start = prompt(cli.start.clone(), "Enter the starting date (Ex: 2020-MM-DD)")?;
    let start = batch::parse_start_date(&start)?;
    let output = prompt(
        cli.output.clone(),
        "Would you like to extract data to excel file (Press enter for no OR enter filename)",
    )?;
    println!();

    let mut builder = EdgarClient::builder();
    if let Some(ua) = &cli.user_agent {
        builder = builder.user_agent(ua);
    }
    let client = builder.build()?;

    let config = BatchConfig::new(
        SymbolSelection::parse(&symbols).resolve(&table),
        start,
        chrono::Local::now().date_naive(),
    );
    debug!(symbols = config.symbols.len(), %start, "starting batch");

    let outcome = batch::run(&client, &table, &config, report).await;

    // export
    let output = output.trim();
    if !output.is_empty() {
        let mut sink = XlsxSink::new(output);
        match export::export(&mut sink, &outcome.summaries) {
            Ok(()) => println!("Extracted the data to {}\n", sink.path().display()),
            Err(err) => eprintln!(
                "{}",
                Diagnostic::ExportFailure {
                    message: err.to_string()
                }
            ),
        }
    }

    Ok(())
}

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use research_console::{
    backend::{BackendClient, FileUpload},
    config::{Config, LogFormat},
    console::{view, ConsoleEvent, ConsoleRuntime, ConsoleState},
    export::ExportFormat,
};

/// Interactive console for a research analysis backend
#[derive(Debug, Parser)]
#[command(name = "research-console", version, about)]
struct Cli {
    /// Backend base URL (overrides RESEARCH_BACKEND_URL)
    #[arg(long)]
    backend_url: Option<String>,

    /// Directory exported reports are written to (overrides EXPORT_DIR)
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Maximum sources requested per research query (overrides MAX_SOURCES)
    #[arg(long)]
    max_sources: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(url) = cli.backend_url {
        config.backend.base_url = url;
    }
    if let Some(dir) = cli.export_dir {
        config.export.directory = dir;
    }
    if let Some(n) = cli.max_sources {
        config.export.max_sources = n;
    }

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = %config.backend.base_url,
        "Research console starting..."
    );

    // Initialize backend client
    let client = match BackendClient::new(&config.backend, config.request.clone()) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Failed to initialize backend client");
            return Err(e.into());
        }
    };

    let state = ConsoleState::new(config.export.max_sources);
    let mut runtime = ConsoleRuntime::new(client, state, config.export.directory.clone());

    println!("{}", view::render(runtime.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Files => {
                println!("{}", view::render_files(runtime.state()));
                continue;
            }
            Command::QueryChanged(text) => {
                runtime.dispatch(ConsoleEvent::QueryChanged(text));
            }
            Command::Submit(text) => {
                runtime.dispatch(ConsoleEvent::Submitted(Some(text)));
            }
            Command::Pick(index) => {
                runtime.dispatch(ConsoleEvent::SuggestionClicked(index));
            }
            Command::Upload(paths) => {
                let files = read_files(&paths).await;
                if files.is_empty() {
                    println!("Nothing readable to upload.");
                    continue;
                }
                runtime.dispatch(ConsoleEvent::FilesSelected(files));
            }
            Command::Export(format) => {
                if runtime.state().results.is_some() {
                    runtime.dispatch(ConsoleEvent::ExportRequested(format));
                    println!(
                        "Wrote {}",
                        config.export.directory.join(format.file_name()).display()
                    );
                } else {
                    println!("No report to export yet.");
                }
                continue;
            }
            Command::Invalid(message) => {
                println!("{}", message);
                continue;
            }
        }

        runtime.run_until_idle().await;
        println!("{}", view::render(runtime.state()));

        // A blocking notice is shown once, then dismissed
        if runtime.state().notice.is_some() {
            runtime.dispatch(ConsoleEvent::NoticeDismissed);
        }
    }

    info!("Console shutdown complete");
    Ok(())
}

const HELP: &str = "\
Commands:
  <text>              submit a research query
  :q <text>           change the query text (fetches suggestions live)
  :pick <n>           use suggestion row n
  :upload <paths...>  upload documents for ingestion (.pdf .txt .docx .md .html)
  :export <format>    export the report (pdf | markdown | json)
  :files              list uploaded files
  :help               show this help
  :quit               exit";

enum Command {
    QueryChanged(String),
    Submit(String),
    Pick(usize),
    Upload(Vec<PathBuf>),
    Export(ExportFormat),
    Files,
    Help,
    Quit,
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    if !line.starts_with(':') {
        return Command::Submit(line.to_string());
    }

    let mut parts = line.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or("").trim();

    match name {
        ":q" => Command::QueryChanged(rest.to_string()),
        ":pick" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Pick(n - 1),
            _ => Command::Invalid("Usage: :pick <row number>".to_string()),
        },
        ":upload" => {
            if rest.is_empty() {
                Command::Invalid("Usage: :upload <paths...>".to_string())
            } else {
                Command::Upload(rest.split_whitespace().map(PathBuf::from).collect())
            }
        }
        ":export" => match rest.parse::<ExportFormat>() {
            Ok(format) => Command::Export(format),
            Err(e) => Command::Invalid(format!("{} (expected pdf, markdown, or json)", e)),
        },
        ":files" => Command::Files,
        ":help" => Command::Help,
        ":quit" | ":exit" => Command::Quit,
        other => Command::Invalid(format!("Unknown command '{}'; :help lists commands", other)),
    }
}

async fn read_files(paths: &[PathBuf]) -> Vec<FileUpload> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("document.txt")
                    .to_string();
                files.push(FileUpload::new(name, bytes));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable file");
            }
        }
    }
    files
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

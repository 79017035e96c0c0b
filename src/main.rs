use clap::Parser;
use gloss::headless::{self, OutputFormat};
use gloss::{config::Config, Glossary};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gloss", about = "Terminal glossary browser with live search")]
struct Cli {
    /// Write debug logs to /tmp/gloss-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Glossary data file (TOML, JSON or YAML). Overrides the config file.
    #[arg(long, value_name = "PATH")]
    glossary: Option<PathBuf>,

    /// Print the cards matching QUERY and exit instead of starting the TUI.
    #[arg(long, value_name = "QUERY", conflicts_with = "suggest")]
    query: Option<String>,

    /// Print the term suggestions for QUERY and exit.
    #[arg(long, value_name = "QUERY")]
    suggest: Option<String>,

    /// Output format for --query / --suggest.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/gloss-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("gloss debug log started — tail -f /tmp/gloss-debug.log");
    }

    // One-shot runs only read the config; the TUI writes defaults on first use.
    let headless = cli.query.is_some() || cli.suggest.is_some();
    let loaded = if headless { Config::read() } else { Config::load() };
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::defaults()
    });

    let glossary = match cli.glossary.or_else(|| config.glossary.path()) {
        Some(path) => Glossary::load(&path)?,
        None => Glossary::builtin(),
    };

    let mut stdout = std::io::stdout().lock();
    if let Some(query) = cli.query {
        return headless::print_results(&mut stdout, &glossary, &query, cli.format);
    }
    if let Some(query) = cli.suggest {
        return headless::print_suggestions(&mut stdout, &glossary, &query, cli.format);
    }
    drop(stdout);

    gloss_tui::run(glossary, config)
}

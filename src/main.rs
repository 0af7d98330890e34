use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatfmt::{Config, Error, Formatter, OutputFormat, Result};

#[derive(Parser)]
#[command(name = "chatfmt")]
#[command(about = "Format assistant chat messages as HTML, text or JSON")]
struct Cli {
    /// Input message file, or `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Config file (defaults to ./chatfmt.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat the input as a JSON array of chat messages
    #[arg(long)]
    transcript: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // An explicit --config must exist; the implicit one is optional
    let config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load(Path::new("chatfmt.toml")),
    };
    let formatter = Formatter::new(&config.format)?;

    let input = read_input(&cli.input)?;
    let rendered = if cli.transcript {
        let messages = chatfmt::parse_transcript(&input)?;
        tracing::info!(messages = messages.len(), "formatting transcript");
        chatfmt::render_transcript(&messages, &formatter, cli.format, &config)?
    } else {
        chatfmt::render_message(&input, &formatter, cli.format, &config)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            })?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

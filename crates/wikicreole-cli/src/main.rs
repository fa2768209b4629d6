use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use wikicreole_config::{Config, OutputFormat};
use wikicreole_engine::{
    Event, EventRecorder, ParseOptions, TextRenderer, XhtmlRenderer, parse_with_options,
};

/// Render Wiki Creole 1.0 markup as XHTML, plain text or a raw event dump.
#[derive(Debug, Parser)]
#[command(name = "wikicreole", version, about)]
struct Cli {
    /// Creole file to read; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Config file to use instead of ~/.config/wikicreole/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Leave bare URLs as plain text
    #[arg(long)]
    no_autolinks: bool,

    /// Leave ` -- ` as typed
    #[arg(long)]
    no_dashes: bool,

    /// Log parser decisions at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Xhtml,
    Text,
    Events,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xhtml => OutputFormat::Xhtml,
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Events => OutputFormat::Events,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = load_config(cli.config.as_deref())?;
    let mut options = config.parse_options();
    if cli.no_autolinks {
        options.autolinks = false;
    }
    if cli.no_dashes {
        options.typographic_dashes = false;
    }
    let format = cli.format.map_or(config.output.format, OutputFormat::from);

    let text = read_input(cli.input.as_deref())?;
    log::debug!("read {} bytes, rendering as {format:?}", text.len());

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    render(&text, &options, format, &config, out)
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config_path = match explicit {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
        None => Config::config_path(),
    };
    log::debug!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if explicit.is_some() => {
            anyhow::bail!("Config file not found: {}", config_path.display())
        }
        None => Ok(Config::default()),
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn render(
    text: &str,
    options: &ParseOptions,
    format: OutputFormat,
    config: &Config,
    out: Box<dyn Write>,
) -> Result<()> {
    match format {
        OutputFormat::Xhtml => {
            let mut renderer = XhtmlRenderer::new(out).with_placeholders(config.xhtml.placeholders);
            parse_with_options(text, options, &mut renderer)?;
            renderer.into_inner().flush()?;
        }
        OutputFormat::Text => {
            let mut renderer = TextRenderer::new(out);
            parse_with_options(text, options, &mut renderer)?;
            renderer.into_inner().flush()?;
        }
        OutputFormat::Events => {
            let mut recorder = EventRecorder::new();
            let Ok(()) = parse_with_options(text, options, &mut recorder);
            let mut out = out;
            write_events(&recorder.into_events(), &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// One JSON object per line.
fn write_events(events: &[Event], out: &mut impl Write) -> Result<()> {
    for event in events {
        serde_json::to_writer(&mut *out, event)?;
        writeln!(out)?;
    }
    Ok(())
}

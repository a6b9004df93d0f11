use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use sightings_lib::{
    DateLocale, DomDocument, ObservationTable, RenderConfig, build_row_for_id,
    load_observations_from_path,
};

#[derive(Parser, Debug)]
#[command(name = "sightings")]
#[command(version)]
#[command(about = "Render wildlife observations as HTML table rows")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every observation in a JSON file as a table
    Render {
        /// JSON array of observations
        file: PathBuf,

        /// Date display locale (e.g. en-US, en_GB.UTF-8, de); defaults to LC_ALL/LC_TIME/LANG
        #[arg(short, long)]
        locale: Option<DateLocale>,

        /// Table title
        #[arg(short, long)]
        title: Option<String>,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Put block elements on their own lines
        #[arg(long)]
        pretty: bool,
    },

    /// Render the row for a single observation
    Row {
        /// JSON array of observations
        file: PathBuf,

        /// Observation id
        id: String,

        #[arg(short, long)]
        locale: Option<DateLocale>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), args.verbose)?;

    match args.command {
        Command::Render {
            file,
            locale,
            title,
            output,
            pretty,
        } => render_table(&file, locale, title.as_deref(), output.as_deref(), pretty),
        Command::Row { file, id, locale } => render_row(&file, &id, locale),
    }
}

fn init_logging(log_file: Option<&Path>, verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let result = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)
        }
        None => TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };

    result.context("Failed to initialize logger")
}

fn render_config(locale: Option<DateLocale>) -> RenderConfig {
    match locale {
        Some(locale) => RenderConfig::default().with_locale(locale),
        None => RenderConfig::from_env(),
    }
}

fn render_table(
    file: &Path,
    locale: Option<DateLocale>,
    title: Option<&str>,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let mut table = ObservationTable::from_path(file, render_config(locale))
        .with_context(|| format!("Failed to render {}", file.display()))?;
    if let Some(title) = title {
        table.update_table_title(title);
    }
    log::debug!("{} rows in table", table.row_count());

    let html = if pretty {
        table.to_html_pretty(2)
    } else {
        table.to_html()
    };

    match output {
        Some(path) => std::fs::write(path, html + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{html}"),
    }

    Ok(())
}

fn render_row(file: &Path, id: &str, locale: Option<DateLocale>) -> Result<()> {
    let observations = load_observations_from_path(file)?;
    let config = render_config(locale);
    let row = build_row_for_id(&mut DomDocument::new(), &observations, id, config.locale)
        .with_context(|| format!("in {}", file.display()))?;
    println!("{}", rowdom::to_html_pretty(&row, 2));

    Ok(())
}

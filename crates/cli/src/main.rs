use clap::{Parser, Subcommand};
use imagemap_core::{ImageArea, ImageMapDocument, ParseError};
use serde::Deserialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;

use config::{Settings, DEFAULT_SETTINGS_FILE};

#[derive(Parser)]
#[command(name = "imagemap", about = "Read and write HTML image-map markup")]
struct Cli {
    /// Settings file (base path, last markup)
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    /// Directory image sources are resolved against (overrides settings)
    #[arg(long, global = true)]
    base_path: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse markup and print the image source and areas
    Parse {
        /// The HTML file to parse (use - for stdin)
        file: String,

        /// Output as JSON instead of compact format
        #[arg(long)]
        json: bool,
    },
    /// Render areas from JSON (an array of areas or a document) as markup
    Render {
        /// The JSON file to render (use - for stdin)
        file: String,
    },
    /// Parse markup and print it re-rendered
    Normalize {
        /// The HTML file to normalize (use - for stdin)
        file: String,

        /// Store the markup and image path in the settings file
        #[arg(long)]
        remember: bool,
    },
    /// Print where the markup's image is loaded from
    Image {
        /// The HTML file to read (use - for stdin)
        file: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid area JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid markup: {0}")]
    Markup(#[from] ParseError),

    #[error("markup has no <img src>")]
    NoImage,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RenderInput {
    Areas(Vec<ImageArea>),
    Document(ImageMapDocument),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut settings = Settings::load(&cli.settings)?;
    if let Some(base) = cli.base_path {
        settings.base_path = base;
    }

    match cli.command {
        Commands::Parse { file, json } => {
            let doc = imagemap_core::parse(&read_input(&file)?)?;
            print_document(&doc, json)?;
        }
        Commands::Render { file } => {
            let areas = match serde_json::from_str(&read_input(&file)?)? {
                RenderInput::Areas(areas) => areas,
                RenderInput::Document(doc) => doc.areas,
            };
            print!("{}", imagemap_core::serialize(&areas));
        }
        Commands::Normalize { file, remember } => {
            let markup = read_input(&file)?;
            let doc = imagemap_core::parse(&markup)?;
            let output = doc.to_markup();
            print!("{}", output);
            if remember {
                if doc.image_source.is_some() {
                    settings.file_path = doc.image_source.clone();
                }
                settings.last_markup = Some(output);
                settings.save(&cli.settings)?;
                tracing::debug!(path = %cli.settings.display(), "settings saved");
            }
        }
        Commands::Image { file } => {
            let doc = imagemap_core::parse(&read_input(&file)?)?;
            let path = doc.image_path(&settings.base_path).ok_or(CliError::NoImage)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn read_input(file: &str) -> Result<String, CliError> {
    if file == "-" {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: "stdin".to_string(),
                source,
            })?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file).map_err(|source| CliError::Read {
            path: file.to_string(),
            source,
        })
    }
}

fn print_document(doc: &ImageMapDocument, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(doc)?);
    } else {
        if let Some(src) = &doc.image_source {
            println!("img: {}", src);
        }
        println!("areas: {}", doc.areas.len());
        println!("---");
        for (i, area) in doc.areas.iter().enumerate() {
            println!("{}", compact_area(i, area));
        }
    }
    Ok(())
}

fn compact_area(index: usize, area: &ImageArea) -> String {
    let mut line = format!("[{}] {}", index, area.coords_string());
    for (key, value) in [
        ("title", &area.title),
        ("alt", &area.alt),
        ("content", &area.data_content),
        ("onclick", &area.on_click),
    ] {
        if !value.is_empty() {
            line.push_str(&format!(" {}={:?}", key, value));
        }
    }
    line
}

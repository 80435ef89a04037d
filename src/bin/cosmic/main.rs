use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use spdlog::{debug, warn};

use cosmic_blog::config::Config;
use cosmic_blog::filter::category::{load_categories, Category};
use cosmic_blog::logger::configure_logger;
use cosmic_blog::query_string::QueryString;
use cosmic_blog::text_utils::parse_timestamp;
use cosmic_blog::{Document, DocumentRenderer, FilterSelection};

use crate::config::open_config;
use crate::config_data::write_sample_cfg;

mod config;
mod config_data;

const CFG_FILE_NAME: &str = "cosmic.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config path
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a rich-text document
    Render(RenderArgs),
    /// Build the post list query for a set of filters
    Filter(FilterArgs),
    /// Write a sample configuration file
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON file with the editor state, or a post holding it
    file: PathBuf,

    /// Post field holding the document, when the file is a whole post
    #[arg(short, long, default_value = "content")]
    field: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// URL query string, e.g. "categories=space,physics&date=last-week"
    #[arg(short, long)]
    query: Option<String>,

    /// Comma separated category slugs
    #[arg(long)]
    categories: Option<String>,

    /// last-week, last-month, last-3-months or this-year
    #[arg(short, long)]
    date: Option<String>,

    /// under-5, 5-10 or over-10
    #[arg(short, long)]
    read_time: Option<String>,

    /// JSON list of {id, name, slug} used to resolve slugs
    #[arg(long)]
    categories_file: Option<PathBuf>,

    /// Reference time for relative dates. Defaults to the current time
    #[arg(long)]
    now: Option<String>,
}

#[derive(Args, Debug)]
struct InitConfigArgs {
    /// Where the sample configuration is written
    #[arg(short, long, default_value = CFG_FILE_NAME)]
    out: PathBuf,
}

#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    /// HTML markup
    Html,
    /// Render tree as JSON
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render_cmd(config: &Config, args: RenderArgs) -> Result<()> {
    debug!("Rendering {}", args.file.display());
    let buf = fs::read_to_string(&args.file)
        .with_context(|| format!("Error opening {}", args.file.display()))?;
    let value: Value = serde_json::from_str(&buf)
        .with_context(|| format!("Error parsing {}", args.file.display()))?;

    // A bare editor state has a root; anything else is read as a post record
    let document = match value.get("root") {
        Some(_) => Document::from_value(&value),
        None => match value.get(&args.field) {
            Some(content) => Document::from_value(content),
            None => {
                warn!("No '{}' field in {}", args.field, args.file.display());
                Document::default()
            }
        },
    };

    let renderer = DocumentRenderer::new(config.render_options());
    let tree = renderer.render(&document);

    match args.format {
        OutputFormat::Html => println!("{}", tree.to_html()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
    }

    Ok(())
}

fn split_list(buf: &str) -> Vec<String> {
    buf.split(',')
        .filter(|x| !x.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn filter_cmd(config: &Config, args: FilterArgs) -> Result<()> {
    let mut selection = match args.query {
        Some(ref query) => FilterSelection::from_query(&QueryString::from(query)),
        None => FilterSelection::default(),
    };
    if let Some(ref categories) = args.categories {
        selection.categories = split_list(categories);
    }
    if let Some(date) = args.date {
        selection.date = date;
    }
    if let Some(read_time) = args.read_time {
        selection.read_time = read_time;
    }

    let categories_file = args.categories_file.as_deref().or(config.categories_file());
    let categories: Vec<Category> = match categories_file {
        Some(path) => load_categories(path)?,
        None => {
            debug!("No category list configured, using slugs as ids");
            selection.categories.iter()
                .map(|slug| Category { id: slug.clone(), name: slug.clone(), slug: slug.clone() })
                .collect()
        }
    };

    let now: DateTime<FixedOffset> = match args.now {
        Some(ref now) => parse_timestamp(now).map_err(anyhow::Error::msg)?,
        None => Utc::now().fixed_offset(),
    };

    let predicate = selection.to_predicate(&categories, &now);
    println!("{}", serde_json::to_string_pretty(&predicate)?);

    Ok(())
}

fn init_config_cmd(args: InitConfigArgs) -> Result<()> {
    write_sample_cfg(&args.out)?;
    println!("Sample configuration written to {}", args.out.display());
    Ok(())
}

/// Reads the configuration and installs the logger it describes.
fn load_config(config_path: Option<String>) -> Result<Config> {
    let config = open_config(config_path.map(PathBuf::from))?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => render_cmd(&load_config(cli.config_path)?, args),
        Command::Filter(args) => filter_cmd(&load_config(cli.config_path)?, args),
        Command::InitConfig(args) => init_config_cmd(args),
    }
}

//! Lectern CLI
//!
//! Runs selectors against saved pages and prints the download plan of a
//! saved lecture index. Never touches the network and never writes files.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Parser, Subcommand, ValueEnum};
use lectern_common::warning::{clear_warnings, warn_once};
use lectern_course::{DownloadPlan, PlanOptions, ResourceType, Selection, plan};
use lectern_dom::DomTree;
use lectern_html::{parse_document_with_issues, render_tree};
use lectern_select::try_select;
use log::LevelFilter;
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

/// Lectern: a CSS selector engine for saved course pages
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print every lecture section of a saved index
    lectern query 'ul.item_section_list' lectures.html

    # Count download links
    lectern query --count 'div.item_resource a' lectures.html

    # Query inline HTML
    lectern query 'li.row' --html '<ul><li class="row">x</li></ul>'

    # Plan the videos of weeks 1 and 2
    lectern plan lectures.html --course nlp -p 1 2 -t movie
"#)]
struct Cli {
    /// Log progress (same as `--logging info`)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level
    #[arg(
        short = 'l',
        long = "logging",
        value_enum,
        default_value_t = LogLevel::Critical,
        global = true
    )]
    logging: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a selector against a saved page and print every match
    Query {
        /// Selector, e.g. `ul.item_section_list li`
        selector: String,

        /// Path to a saved HTML page
        #[arg(value_name = "FILE", required_unless_present = "html")]
        path: Option<PathBuf>,

        /// Query an HTML string instead of a file
        #[arg(long, value_name = "HTML", conflicts_with = "path")]
        html: Option<String>,

        /// Print only the number of matches
        #[arg(long)]
        count: bool,

        /// Fail on a malformed selector instead of printing no matches
        #[arg(long)]
        strict: bool,
    },

    /// Print the download plan of a saved lecture index page
    Plan {
        /// Path to the saved lecture index
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Course short name, e.g. `nlp`
        #[arg(long)]
        course: String,

        /// Section numbers to keep, starting at 1
        #[arg(short, long, num_args = 1..)]
        parts: Vec<usize>,

        /// Lecture numbers to keep within each section, starting at 1
        #[arg(short, long, num_args = 1..)]
        rows: Vec<usize>,

        /// Resource types to keep
        #[arg(short, long, num_args = 1.., value_parser = resource_types())]
        types: Vec<ResourceType>,

        /// Also replace characters reserved on desktop filesystems
        #[arg(short, long)]
        escape: bool,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// `log` has no critical level; critical-only output shows errors.
    const fn filter(self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::Debug,
            Self::Info => LevelFilter::Info,
            Self::Warning => LevelFilter::Warn,
            Self::Error | Self::Critical => LevelFilter::Error,
        }
    }
}

impl Cli {
    const fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Info
        } else {
            self.logging.filter()
        }
    }
}

/// Accepts the short type names and lists them in `--help`.
fn resource_types() -> impl TypedValueParser<Value = ResourceType> {
    PossibleValuesParser::new(ResourceType::iter().map(<&'static str>::from))
        .try_map(|name| ResourceType::from_str(&name))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.level())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
    clear_warnings();

    match cli.command {
        Command::Query {
            selector,
            path,
            html,
            count,
            strict,
        } => {
            let html = match html {
                Some(html) => html,
                None => read_page(path.as_deref())?,
            };
            run_query(&html, &selector, count, strict)
        }
        Command::Plan {
            path,
            course,
            parts,
            rows,
            types,
            escape,
            json,
        } => {
            let html = read_page(Some(&path))?;
            let options = PlanOptions {
                selection: Selection::from_numbers(&parts, &rows, types),
                escape,
            };
            let tree = load(&html);
            let plan = plan(tree.root_ref(), &course, &options);
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan);
            }
            Ok(())
        }
    }
}

fn read_page(path: Option<&Path>) -> Result<String> {
    let path = path.context("no input file or --html provided")?;
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

/// Parse a page, logging what the tree builder had to repair.
fn load(html: &str) -> DomTree {
    let (tree, issues) = parse_document_with_issues(html);
    for issue in &issues {
        log::debug!("token {}: {}", issue.token_index, issue.message);
    }
    log::info!("parsed {} nodes, {} issues", tree.len(), issues.len());
    tree
}

fn run_query(html: &str, selector: &str, count: bool, strict: bool) -> Result<()> {
    let tree = load(html);
    let root = tree.root_ref();
    let matches = match try_select(root, selector) {
        Ok(matches) => matches,
        Err(error) if strict => {
            return Err(error).with_context(|| format!("cannot run selector '{selector}'"));
        }
        Err(error) => {
            warn_once("Selector", &error.to_string());
            Vec::new()
        }
    };

    if count {
        println!("{}", matches.len());
        return Ok(());
    }

    let total = matches.len();
    for (i, element) in matches.iter().enumerate() {
        println!("{}", format!("=== Match {} of {total} ===", i + 1).bold());
        print!("{}", render_tree(&tree, element.id()));
    }
    if total == 0 {
        eprintln!("{}", "No matches".dimmed());
    }
    Ok(())
}

fn print_plan(plan: &DownloadPlan) {
    println!(
        "{}",
        format!("=== {} ({} downloads) ===", plan.course, plan.len()).bold()
    );
    let mut section: Option<&str> = None;
    for download in &plan.downloads {
        if section != Some(download.section_dir.as_str()) {
            section = Some(download.section_dir.as_str());
            println!("{}", format!("{}/", download.section_dir).cyan());
        }
        println!("  {}", download.file_name());
        println!("    {}", download.url.dimmed());
    }
}

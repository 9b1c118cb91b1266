//! Command-line front end: highlights a Wing source file using a syntax tree
//! dumped by the Wing parser.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use wing_highlight::html::{to_html, tree_panel};
use wing_highlight::tree::printer::{outline, summary, to_sexp};
use wing_highlight::{HighlightConfig, HighlightError, Highlighter, SyntaxTree};

/// Exit status when the syntax tree cannot be loaded.
pub const EXIT_UNAVAILABLE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Highlighted `<pre>` followed by the syntax tree panel
    #[default]
    Html,
    /// Segment list as JSON
    Json,
    /// Indented tree outline and summary
    Outline,
}

#[derive(Debug, Parser)]
#[command(name = "wing-highlight", version, about = "Highlight Wing code from a parsed syntax tree")]
pub struct Args {
    /// Wing source file
    pub source: PathBuf,

    /// Syntax tree dump (s-expression or JSON) produced from the source
    #[arg(short, long)]
    pub tree: PathBuf,

    /// JSON file overriding the keyword and special character sets
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Trim surrounding whitespace from the source before highlighting
    #[arg(long)]
    pub trim: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runs one highlighting pass and returns what should be printed.
pub fn run(args: &Args) -> Result<String> {
    let raw = fs::read_to_string(&args.source)
        .with_context(|| format!("cannot read source file {}", args.source.display()))?;
    let source = if args.trim { raw.trim() } else { raw.as_str() };

    let config = match args.config.as_deref() {
        Some(path) => load_config(path)?,
        None => HighlightConfig::default(),
    };

    // no context: `unavailable_reason` downcasts the bare error
    let tree = SyntaxTree::load(&args.tree)?;
    if tree.has_error() {
        log::warn!("syntax tree of {} contains errors", args.source.display());
    }
    tree.validate(source)
        .with_context(|| format!("{} does not match {}", args.tree.display(), args.source.display()))?;

    let root = tree.root_node();
    let output = match args.format {
        Format::Html => {
            let segments = Highlighter::new(config).highlight(&root, source)?;
            let mut output = to_html(&segments);
            output.push('\n');
            output.push_str(&tree_panel(&to_sexp(&root)));
            output.push('\n');
            output
        }
        Format::Json => {
            let segments = Highlighter::new(config).highlight(&root, source)?;
            let mut output = serde_json::to_string_pretty(&segments)?;
            output.push('\n');
            output
        }
        Format::Outline => {
            let mut output = outline(&root, source);
            output.push_str(&summary(&root).to_string());
            output.push('\n');
            output
        }
    };
    Ok(output)
}

fn load_config(path: &Path) -> Result<HighlightConfig> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    HighlightConfig::from_json(&input)
        .with_context(|| format!("invalid config file {}", path.display()))
}

/// The reason a tree could not be loaded, if that is why `run` failed.
pub fn unavailable_reason(error: &anyhow::Error) -> Option<&str> {
    match error.downcast_ref::<HighlightError>() {
        Some(HighlightError::Unavailable(reason)) => Some(reason),
        _ => None,
    }
}

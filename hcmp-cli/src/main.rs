//! hcmp - structural comparison of HTML documents
//!
//! Checks whether a reference document is included in, or identical to, a
//! candidate document, searches tags and validates their text content.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use htmlcmp::{
    find_tag, find_tags, identical_nodes, included_node, included_node_typed, is_text_tag,
    parse_file, print_data, text_content, NodeInner, NodeRef, NodeType, ANY_TYPE,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Structural comparison of HTML documents
#[derive(Parser)]
#[command(name = "hcmp")]
#[command(version)]
#[command(about = "Structural search and comparison of HTML documents", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the reference tree is included in the candidate
    #[command(visible_alias = "i")]
    Include {
        #[command(flatten)]
        pair: TreePair,

        /// Only report divergences between nodes of this type
        #[arg(short = 't', long = "type", value_enum)]
        node_type: Option<TypeArg>,
    },

    /// Check that both trees are identical, sibling counts included
    #[command(visible_alias = "id")]
    Identical {
        #[command(flatten)]
        pair: TreePair,

        /// Only report divergences between nodes of this type
        #[arg(short = 't', long = "type", value_enum, default_value = "any")]
        node_type: TypeArg,
    },

    /// Find nodes by name
    #[command(visible_alias = "f")]
    Find {
        /// Document to search
        file: String,
        /// Tag name (or text for text nodes)
        name: String,

        /// Type of the nodes to find
        #[arg(short = 't', long = "type", value_enum, default_value = "element")]
        node_type: TypeArg,

        /// Print every match instead of the first one
        #[arg(short, long)]
        all: bool,
    },

    /// Print or validate the text under a tag
    #[command(visible_alias = "t")]
    Text {
        /// Document to search
        file: String,
        /// Element name
        tag: String,

        /// Expected text (markup allowed); fails when it differs
        #[arg(short, long)]
        expect: Option<String>,
    },
}

/// Reference and candidate documents.
#[derive(Args)]
struct TreePair {
    /// Reference document
    reference: String,
    /// Candidate document
    candidate: String,

    /// Compare the first element with this name in each document
    #[arg(short, long)]
    select: Option<String>,
}

/// Node type filter.
#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    Any,
    Text,
    Document,
    Element,
    Comment,
    Doctype,
}

impl From<TypeArg> for NodeType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Any => ANY_TYPE,
            TypeArg::Text => NodeType::Text,
            TypeArg::Document => NodeType::Document,
            TypeArg::Element => NodeType::Element,
            TypeArg::Comment => NodeType::Comment,
            TypeArg::Doctype => NodeType::DocType,
        }
    }
}

/// Outcome of a command that ran to completion.
enum Outcome {
    Pass,
    Fail,
}

type CommandResult = Result<Outcome, Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Include { pair, node_type } => run_include(&pair, node_type),
        Commands::Identical { pair, node_type } => run_identical(&pair, node_type),
        Commands::Find {
            file,
            name,
            node_type,
            all,
        } => run_find(&file, &name, node_type, all),
        Commands::Text { file, tag, expect } => run_text(&file, &tag, expect.as_deref()),
    };

    match result {
        Ok(Outcome::Pass) => ExitCode::SUCCESS,
        Ok(Outcome::Fail) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses both documents, narrowed to the selected element if requested.
fn load_pair(pair: &TreePair) -> Result<(NodeRef, NodeRef), Box<dyn std::error::Error>> {
    info!(reference = %pair.reference, candidate = %pair.candidate, "loading documents");
    let m = select(parse_file(&pair.reference)?, pair.select.as_deref(), &pair.reference)?;
    let n = select(parse_file(&pair.candidate)?, pair.select.as_deref(), &pair.candidate)?;
    Ok((m, n))
}

fn select(
    doc: NodeRef,
    tag: Option<&str>,
    path: &str,
) -> Result<NodeRef, Box<dyn std::error::Error>> {
    match tag {
        None => Ok(doc),
        Some(tag) => find_tag(&doc, tag, NodeType::Element)
            .ok_or_else(|| format!("<{}> not found in {}", tag, path).into()),
    }
}

/// Prints the divergence, if any.
fn report(divergence: Option<NodeRef>) -> Outcome {
    match divergence {
        None => {
            eprintln!("No divergence.");
            Outcome::Pass
        }
        Some(node) => {
            println!(
                "nodes structures diverge from: {}",
                print_data(node.borrow().content())
            );
            println!("at {}", NodeInner::path_of_ref(&node));
            Outcome::Fail
        }
    }
}

fn run_include(pair: &TreePair, node_type: Option<TypeArg>) -> CommandResult {
    let (m, n) = load_pair(pair)?;
    let divergence = match node_type {
        None => included_node(Some(&m), Some(&n)),
        Some(t) => included_node_typed(Some(&m), Some(&n), t.into()),
    };
    Ok(report(divergence))
}

fn run_identical(pair: &TreePair, node_type: TypeArg) -> CommandResult {
    let (m, n) = load_pair(pair)?;
    Ok(report(identical_nodes(Some(&m), Some(&n), node_type.into())))
}

fn run_find(file: &str, name: &str, node_type: TypeArg, all: bool) -> CommandResult {
    let doc = parse_file(file)?;
    let found = if all {
        find_tags(&doc, name, node_type.into())
    } else {
        find_tag(&doc, name, node_type.into()).into_iter().collect()
    };
    debug!(matches = found.len(), "search complete");

    if found.is_empty() {
        eprintln!("{} not found in {}", name, file);
        return Ok(Outcome::Fail);
    }
    for node in &found {
        println!("{}", print_data(node.borrow().content()));
    }
    Ok(Outcome::Pass)
}

fn run_text(file: &str, tag: &str, expect: Option<&str>) -> CommandResult {
    match expect {
        Some(expected) => {
            let input = std::fs::File::open(file)?;
            match is_text_tag(input, tag, expected) {
                Ok(()) => {
                    eprintln!("Text matches.");
                    Ok(Outcome::Pass)
                }
                Err(e) => {
                    println!("{}", e);
                    Ok(Outcome::Fail)
                }
            }
        }
        None => {
            let doc = parse_file(file)?;
            match find_tag(&doc, tag, NodeType::Element) {
                Some(node) => {
                    println!("{}", text_content(&node));
                    Ok(Outcome::Pass)
                }
                None => {
                    eprintln!("findtag: tag {} not found", tag);
                    Ok(Outcome::Fail)
                }
            }
        }
    }
}

use clap::Parser;
use std::path::PathBuf;

/// Terminal viewer for markup documents with in-page search
#[derive(Debug, Parser)]
#[command(name = "docview", version, about)]
pub struct Cli {
    /// Markup document to view; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Content region to search, as "#id" or a tag name
    #[arg(long)]
    pub region: Option<String>,
}

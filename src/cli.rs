use std::path::PathBuf;

use clap::Parser;

/// Reply to a conversation from the terminal, with response templates and
/// @-mentions
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Config file (default: ~/.config/quickreply/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Templates file (default: ~/.config/quickreply/templates.toml)
    #[arg(long, value_name = "FILE")]
    pub templates: Option<PathBuf>,

    /// Disable @-mention suggestions
    #[arg(long)]
    pub no_mentions: bool,

    /// Print the loaded templates as JSON and exit
    #[arg(long, conflicts_with = "match_query")]
    pub list_templates: bool,

    /// Print the names of templates matching QUERY and exit
    #[arg(long = "match", value_name = "QUERY")]
    pub match_query: Option<String>,
}

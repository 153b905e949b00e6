//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the Global Search and Resource Controller APIs
#[derive(Parser, Debug)]
#[command(name = "platform-services")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Service configuration file (YAML, one section per service)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search resources with a Lucene query
    Search {
        /// Query string, e.g. "name:my-vm*"
        #[arg(short, long)]
        query: Option<String>,

        /// Fields to return (comma-separated)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Maximum items per batch
        #[arg(long)]
        limit: Option<i64>,

        /// Account to search in
        #[arg(long)]
        account_id: Option<String>,

        /// Follow the search cursor until the results are exhausted
        #[arg(long)]
        all: bool,
    },

    /// List the resource types indexed by search
    SupportedTypes,

    /// Resource instances
    #[command(subcommand)]
    Instances(InstanceCommands),

    /// Resource keys
    #[command(subcommand)]
    Keys(KeyCommands),
}

/// Resource instance subcommands
#[derive(Subcommand, Debug)]
pub enum InstanceCommands {
    /// List resource instances
    List {
        /// Instance name
        #[arg(long)]
        name: Option<String>,

        /// Resource group id
        #[arg(long)]
        resource_group_id: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Show one resource instance
    Get {
        /// Instance id or GUID
        id: String,
    },
}

/// Resource key subcommands
#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// List resource keys
    List {
        /// Only keys of this instance
        #[arg(long)]
        instance_id: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Show one resource key
    Get {
        /// Key id or GUID
        id: String,
    },
}

/// Paging flags shared by list commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PagingArgs {
    /// Maximum items per page
    #[arg(long)]
    pub limit: Option<i64>,

    /// Fetch every page instead of the first one
    #[arg(long)]
    pub all: bool,
}

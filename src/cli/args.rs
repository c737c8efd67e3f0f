//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Network inventory: machines, addresses and hardware rendered as an ASCII tree
#[derive(Parser, Debug)]
#[command(name = "netinv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Inventory file (default: settings, then built-in sample network)
    #[arg(short, long, global = true, env = "NETINV_INVENTORY", value_hint = ValueHint::FilePath)]
    pub inventory: Option<PathBuf>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the network as a tree
    Render {
        /// Render through termtree instead of the native renderer
        #[arg(long)]
        termtree: bool,
    },

    /// Locate a machine by exact hostname
    Find {
        /// Hostname to look up
        hostname: String,
    },

    /// Deep-clone a machine, rename the copy and show both
    Clone {
        /// Hostname of the machine to clone
        hostname: String,
        /// Hostname for the copy (default: <hostname>-copy)
        #[arg(long = "as")]
        new_hostname: Option<String>,
    },

    /// Run the sample walkthrough: render, lookup, clone and re-render
    Demo,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,

    /// Print a commented config template
    Template,
}

// vlib-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_TIMEOUT_SECS;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vlib: Content library tool",
    long_about = "Manages content library items over the REST API via the vlib-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub client: ClientArgs,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy SRC library item to DST library
    #[command(
        name = "library.cp",
        visible_alias = "cp",
        after_help = "Examples:\n  vlib library.cp /my-content/my-item /my-other-content\n  vlib library.cp -n my-item2 /my-content/my-item /my-other-content"
    )]
    LibraryCp(CopyArgs),
}

/// Connection flags shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Server URL (e.g., https://vcenter.example.com)
    #[arg(long, global = true, value_name = "URL", env = "VLIB_URL")]
    pub url: Option<String>,

    /// Username for creating a session
    #[arg(long, global = true, value_name = "USER", env = "VLIB_USERNAME")]
    pub username: Option<String>,

    /// Password for creating a session
    #[arg(long, global = true, value_name = "PASSWORD", env = "VLIB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Existing session id, used instead of username/password
    #[arg(long, global = true, value_name = "SESSION_ID", env = "VLIB_SESSION", hide_env_values = true)]
    pub session: Option<String>,

    /// Skip verification of the server certificate
    #[arg(long, global = true, default_value_t = false, env = "VLIB_INSECURE")]
    pub insecure: bool,

    /// Give up on the whole command after this many seconds
    #[arg(
        long,
        global = true,
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

#[derive(Args, Debug, Clone)]
pub struct CopyArgs {
    /// Library item name (defaults to the source item's name)
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Path of the library item to copy
    #[arg(required = true, value_name = "SRC")]
    pub source: String,

    /// Path of the destination library
    #[arg(required = true, value_name = "DST")]
    pub destination: String,
}

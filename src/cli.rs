use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version)]
pub struct Args {
    /// Directory holding machines.yaml, ssh_config and roles/
    #[arg(long, env = "VMSPEC_PROJECT_DIR", global = true)]
    pub project_dir: Option<PathBuf>,

    /// Machines document (YAML or TOML)
    #[arg(short, long, env = "VMSPEC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Public key used when the document sets no global.ssh_pub_key,
    /// relative to the home directory
    #[arg(long, env = "VMSPEC_DEFAULT_PUB_KEY", global = true)]
    pub default_pub_key: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub subcommand: Subcommands,
}

#[derive(Subcommand)]
pub enum Subcommands {
    /// Print information about all machines
    Machines,
    /// Print information about a machine
    Machine {
        /// Hostname of the machine
        #[arg(value_parser)]
        name: String,
    },
    /// Generate the SSH client configuration
    SshConfig {
        /// Print to stdout instead of writing ssh_config
        #[arg(long, default_value_t = false)]
        stdout: bool,
    },
    /// Copy ~/.gitconfig into every controller role's templates
    Gitconfig,
    /// Print the SSH public key handed to the machines
    PubKey,
    /// Print enabled experimental features
    Features {
        /// Provider to check disk support for (default: every machine's provider)
        #[arg(short, long)]
        provider: Option<String>,
    },
    /// Run every preparation step
    Prepare,
}

mod cli;
use cli::{Args, Subcommands};

mod tables;
use tables::{FeatureTable, MachineTable};

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vmspec::{
    enabled_features, propagate_gitconfig, render_ssh_config, resolve_pub_key, write_ssh_config,
    Config, Error, MachineCollection, Project, PubKey,
};

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("vmspec=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vmspec=info"))
    };

    tracing_subscriber::fmt()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn project(args: &Args) -> Result<Project> {
    let mut project = match &args.project_dir {
        Some(dir) => Project::new(dir, vmspec::home_dir()?),
        None => Project::bundled()?,
    };
    if let Some(config) = &args.config {
        project = project.with_config_path(config);
    }
    if let Some(key) = &args.default_pub_key {
        project = project.with_default_pub_key(key);
    }
    Ok(project)
}

fn machines(config: &Config) -> Result<MachineCollection> {
    Ok(config.machines().transpose()?.unwrap_or_default())
}

fn print_pub_key(key: PubKey) {
    match key {
        PubKey::Available(key) => println!("{key}"),
        PubKey::Unavailable { path, source } => {
            eprintln!("warning: cannot read ssh public key {}: {source}", path.display())
        }
    }
}

/// Runs every preparation step even when an earlier one fails, then
/// reports how many failed.
fn prepare(project: &Project) -> Result<()> {
    let mut failed = 0;

    match propagate_gitconfig(project.gitconfig_path(), project.roles_dir_path()) {
        Ok(written) => info!(count = written.len(), "git config templates"),
        Err(err) => {
            warn!(error = %err, "git config propagation failed");
            failed += 1;
        }
    }

    let config = match Config::load(project.config_path()) {
        Ok(config) => {
            if let Err(err) = write_ssh_config(&config, project.ssh_config_path()) {
                warn!(error = %err, "ssh_config generation failed");
                failed += 1;
            }
            config
        }
        Err(err) => {
            warn!(error = %err, "cannot load machines document, skipping ssh_config");
            failed += 1;
            Config::default()
        }
    };

    if !resolve_pub_key(&config.global, project).is_available() {
        warn!("continuing without an ssh public key");
    }

    anyhow::ensure!(failed == 0, "{failed} preparation step(s) failed");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let project = project(&args)?;
    let load = || Config::load(project.config_path());

    match args.subcommand {
        Subcommands::Machines => {
            println!("{}", MachineTable::new(&machines(&load()?)?));
        }
        Subcommands::Machine { name } => {
            let machines = machines(&load()?)?;
            if machines.get(&name).is_none() {
                return Err(Error::InvalidMachine { name }.into());
            }
            println!("{}", MachineTable::filtered(&machines, &[&name]));
        }
        Subcommands::SshConfig { stdout } => {
            let config = load()?;
            if stdout {
                match config.machines() {
                    Some(machines) => print!("{}", render_ssh_config(&machines?)?),
                    None => info!("no machines defined, nothing to print"),
                }
            } else {
                write_ssh_config(&config, project.ssh_config_path())?;
            }
        }
        Subcommands::Gitconfig => {
            propagate_gitconfig(project.gitconfig_path(), project.roles_dir_path())?;
        }
        Subcommands::PubKey => {
            print_pub_key(resolve_pub_key(&load()?.global, &project));
        }
        Subcommands::Features { provider } => {
            let features = enabled_features();
            println!("enabled: {}", features.join(","));

            let mut providers = match provider {
                Some(provider) => vec![provider],
                None => machines(&load()?)?
                    .iter()
                    .map(|machine| machine.provider().to_string())
                    .collect(),
            };
            providers.sort();
            providers.dedup();
            println!("{}", FeatureTable::new(&providers, &features));
        }
        Subcommands::Prepare => prepare(&project)?,
    };

    Ok(())
}

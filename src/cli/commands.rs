//! Command handlers: each builds the hierarchy it needs and writes its report to `out`.
//!
//! Settings are loaded only by the handlers that read them, so a broken config
//! file never blocks `demo`, `completion`, `config path` or `config template`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{build_network, sample_network};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{DeepClone, Render};
use crate::tree_traits::TreeNodeConvert;

/// Hostname looked up and cloned by the demo walkthrough.
const DEMO_HOSTNAME: &str = "server1.misis.ru";
const DEMO_CLONE_HOSTNAME: &str = "server1-copy.misis.ru";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(cli, &mut out)
}

/// Run the parsed command, writing everything it reports to `out`.
pub fn execute_command_to<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render { termtree }) => {
            let inventory = resolve_inventory(cli)?;
            _render(out, inventory.as_deref(), *termtree)
        }
        Some(Commands::Find { hostname }) => {
            let inventory = resolve_inventory(cli)?;
            _find(out, inventory.as_deref(), hostname)
        }
        Some(Commands::Clone {
            hostname,
            new_hostname,
        }) => {
            let inventory = resolve_inventory(cli)?;
            _clone(out, inventory.as_deref(), hostname, new_hostname.as_deref())
        }
        Some(Commands::Demo) => _demo(out),
        Some(Commands::Config { command }) => _config(out, command),
        Some(Commands::Completion { shell }) => _completion(out, *shell),
        None => Ok(()),
    }
}

fn load_settings() -> CliResult<Settings> {
    let settings = Settings::load()?;
    if !settings.color {
        colored::control::set_override(false);
    }
    Ok(settings)
}

/// Command line wins over settings.
fn resolve_inventory(cli: &Cli) -> CliResult<Option<PathBuf>> {
    let settings = load_settings()?;
    Ok(cli.inventory.clone().or(settings.inventory))
}

#[instrument(skip(out))]
fn _render<W: Write>(out: &mut W, inventory: Option<&Path>, termtree: bool) -> CliResult<()> {
    let network = build_network(inventory)?;
    if termtree {
        write!(out, "{}", network.to_tree_string())?;
    } else {
        network.render_to(out, 0, false, None)?;
    }
    Ok(())
}

#[instrument(skip(out))]
fn _find<W: Write>(out: &mut W, inventory: Option<&Path>, hostname: &str) -> CliResult<()> {
    let network = build_network(inventory)?;
    match network.find_machine(hostname) {
        Some(machine) => {
            writeln!(out, "Located machine: {}", machine.hostname)?;
            machine.render_to(out, 0, false, None)?;
            Ok(())
        }
        None => {
            writeln!(out, "Located machine: None")?;
            Err(CliError::MachineNotFound(hostname.to_string()))
        }
    }
}

#[instrument(skip(out))]
fn _clone<W: Write>(
    out: &mut W,
    inventory: Option<&Path>,
    hostname: &str,
    new_hostname: Option<&str>,
) -> CliResult<()> {
    let network = build_network(inventory)?;
    let original = network
        .find_machine(hostname)
        .ok_or_else(|| CliError::MachineNotFound(hostname.to_string()))?;

    let mut copy = original.deep_clone();
    copy.hostname = new_hostname
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}-copy", hostname));
    debug!("Cloned {} as {}", original.hostname, copy.hostname);

    writeln!(out, "Original machine:")?;
    original.render_to(out, 0, false, None)?;
    writeln!(out)?;
    writeln!(out, "Cloned machine (changed):")?;
    copy.render_to(out, 0, false, None)?;
    Ok(())
}

#[instrument(skip(out))]
fn _demo<W: Write>(out: &mut W) -> CliResult<()> {
    let network = sample_network();
    network.render_to(out, 0, false, None)?;

    let found = network.find_machine(DEMO_HOSTNAME);
    writeln!(out)?;
    writeln!(
        out,
        "Located machine: {}",
        found.map(|m| m.hostname.as_str()).unwrap_or("None")
    )?;

    if let Some(original) = found {
        let mut copy = original.deep_clone();
        copy.hostname = DEMO_CLONE_HOSTNAME.to_string();

        writeln!(out)?;
        writeln!(out, "Original machine:")?;
        original.render_to(out, 0, false, None)?;
        writeln!(out)?;
        writeln!(out, "Cloned machine (changed):")?;
        copy.render_to(out, 0, false, None)?;
    }
    Ok(())
}

#[instrument(skip(out))]
fn _config<W: Write>(out: &mut W, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => write!(out, "{}", load_settings()?.to_toml()?)?,
        ConfigCommands::Path => match global_config_path() {
            Some(path) => writeln!(out, "{}", path.display())?,
            None => output::warning("no config directory available on this platform"),
        },
        ConfigCommands::Template => write!(out, "{}", Settings::template())?,
    }
    Ok(())
}

fn _completion<W: Write>(out: &mut W, shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    Ok(())
}

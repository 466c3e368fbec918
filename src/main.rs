// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use microk8s_cloudinit::{
    cloudinit::{
        new_init_control_plane, new_join_control_plane, ControlPlaneInput, ControlPlaneJoinInput,
    },
    config::{init_logging, load_input, LogFormat, OutputEncoding},
    template::MiniJinjaRenderer,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Generate cloud-init user data for MicroK8s control plane machines
#[derive(Debug, Parser)]
#[command(name = "microk8s-cloudinit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render user data for the machine that initializes the cluster
    Init(RenderArgs),
    /// Render user data for a control plane machine joining the cluster
    Join(RenderArgs),
    /// Print the JSON Schema of a request document
    Schema {
        /// Which request document
        #[arg(value_enum)]
        kind: RequestKind,
    },
}

#[derive(Debug, clap::Args)]
struct RenderArgs {
    /// Request document (YAML or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Write the user data here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Encoding of the written user data
    #[arg(short, long, value_enum, default_value_t = OutputEncoding::Raw)]
    encoding: OutputEncoding,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RequestKind {
    Init,
    Join,
}

fn main() -> Result<()> {
    init_logging(LogFormat::from_env());

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match cli.command {
        Command::Init(args) => {
            let mut input: ControlPlaneInput = load_input(&args.input)?;
            info!(
                endpoint = %input.control_plane_endpoint,
                version = %input.version,
                "Generating control plane init user data"
            );
            let user_data = new_init_control_plane(&MiniJinjaRenderer::new(), &mut input)?;
            write_output(args.output.as_deref(), &args.encoding.encode(user_data))
        }
        Command::Join(args) => {
            let mut input: ControlPlaneJoinInput = load_input(&args.input)?;
            info!(
                endpoint = %input.control_plane_endpoint,
                node_to_join = %input.ip_of_node_to_join,
                version = %input.version,
                "Generating control plane join user data"
            );
            let user_data = new_join_control_plane(&MiniJinjaRenderer::new(), &mut input)?;
            write_output(args.output.as_deref(), &args.encoding.encode(user_data))
        }
        Command::Schema { kind } => {
            let schema = match kind {
                RequestKind::Init => schemars::schema_for!(ControlPlaneInput),
                RequestKind::Join => schemars::schema_for!(ControlPlaneJoinInput),
            };
            let rendered = serde_json::to_string_pretty(&schema)?;
            write_output(None, format!("{rendered}\n").as_bytes())
        }
    }
}

fn write_output(path: Option<&Path>, payload: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, payload)
                .with_context(|| format!("Failed to write user data to {}", path.display()))?;
            info!(path = %path.display(), bytes = payload.len(), "Wrote user data");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(payload)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command-line tool for the Addressable duck type.
//!
//! Usage:
//!   addressable schema --kind status --output yaml
//!   addressable sample --output json
//!   addressable inspect broker.yaml
//!   kubectl get broker default -o yaml | addressable inspect
//!
//! Logging respects `RUST_LOG` (default `info`) and `RUST_LOG_FORMAT`
//! (`text` or `json`). Logs go to stderr so stdout stays parseable.

use addressable::addressable::{AddressStatus, Addressable, AddressableType};
use addressable::destination::Destination;
use addressable::duck::{from_unstructured, Populatable};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "addressable", version, about = "Inspect and generate Addressable duck types")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the JSON schema of an Addressable record
    Schema {
        #[arg(long, value_enum, default_value_t = SchemaKind::Status)]
        kind: SchemaKind,
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,
    },
    /// Print the populated sample AddressableType
    Sample {
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,
    },
    /// Read a resource and print the destinations it advertises
    Inspect {
        /// YAML or JSON file; reads stdin when omitted or `-`
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SchemaKind {
    /// A single `Addressable`
    Addressable,
    /// The `AddressStatus` status fragment
    Status,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    let output = match cli.command {
        Command::Schema { kind, output } => render_schema(kind, output)?,
        Command::Sample { output } => render_sample(output)?,
        Command::Inspect { file } => {
            let input = read_input(file.as_deref())?;
            inspect(&input)?
        }
    };

    print!("{output}");
    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .compact()
                .init();
        }
    }
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).context("failed to encode YAML"),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(value).context("failed to encode JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_schema(kind: SchemaKind, format: OutputFormat) -> Result<String> {
    let schema = match kind {
        SchemaKind::Addressable => schemars::schema_for!(Addressable),
        SchemaKind::Status => schemars::schema_for!(AddressStatus),
    };
    render(&schema, format)
}

fn render_sample(format: OutputFormat) -> Result<String> {
    let mut sample = AddressableType::new("sample");
    sample.populate();
    render(&sample, format)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Decode `input` as an addressable resource and describe its destinations.
fn inspect(input: &str) -> Result<String> {
    // YAML is a superset of JSON, so one decoder covers both.
    let value: serde_json::Value =
        serde_yaml::from_str(input).context("input is not valid YAML or JSON")?;
    let duck: AddressableType =
        from_unstructured(&value).context("input is not an addressable resource")?;

    let kind = duck.types.as_ref().map_or("<unknown>", |t| t.kind.as_str());
    let name = duck.metadata.name.as_deref().unwrap_or("<unnamed>");
    info!(kind, name, "Inspecting resource");

    let mut out = format!("{kind}/{name}\n");
    let destination = Destination::select(&duck.status);
    if !destination.is_ready() {
        out.push_str("not ready\n");
        return Ok(out);
    }

    for address in destination.candidates() {
        let url = address.url.as_ref().map_or("<no url>", |u| u.as_str());
        write!(out, "- {url}")?;
        if let Some(name) = &address.name {
            write!(out, " name={name}")?;
        }
        if let Some(audience) = &address.audience {
            write!(out, " audience={audience}")?;
        }
        if address.ca_certs.is_some() {
            out.push_str(" tls=custom-ca");
        }
        out.push('\n');
    }
    Ok(out)
}

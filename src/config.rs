// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Configuration for the command line front end.
//!
//! Covers loading request documents, encoding the rendered payload and setting up
//! logging from the environment.

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_FORMAT_ENV};
use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Load a request document from a YAML (or JSON) file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not deserialize into `T`.
pub fn load_input<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request document {}", path.display()))?;
    let input = parse_input(&raw)
        .with_context(|| format!("Failed to parse request document {}", path.display()))?;
    debug!(path = %path.display(), "Loaded request document");
    Ok(input)
}

/// Parse a request document from a YAML (or JSON) string.
///
/// # Errors
///
/// Returns an error if the document does not deserialize into `T`.
pub fn parse_input<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_yaml::from_str(raw).context("Invalid request document")
}

/// How the rendered user data is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputEncoding {
    /// The cloud-init document as is
    #[default]
    Raw,
    /// Standard base64, as most instance metadata APIs expect
    Base64,
}

impl OutputEncoding {
    /// Encode rendered user data.
    #[must_use]
    pub fn encode(self, user_data: Vec<u8>) -> Vec<u8> {
        match self {
            Self::Raw => user_data,
            Self::Base64 => BASE64.encode(user_data).into_bytes(),
        }
    }
}

/// Log output format, selected with `RUST_LOG_FORMAT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable compact output
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name; anything other than `json` means text.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }

    /// Read the format from `RUST_LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG` (default `info`) and `RUST_LOG_FORMAT`. Logs go to stderr
/// so stdout can carry the rendered user data.
pub fn init_logging(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_LEVEL));

    match format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        LogFormat::Text => {
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

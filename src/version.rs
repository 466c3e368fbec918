// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Kubernetes version handling.
//!
//! Turns a human-entered Kubernetes version (e.g. `v1.21.3`) into the snap channel
//! argument MicroK8s is installed with (e.g. `--channel=1.21/stable`).

use crate::constants::SNAP_CHANNEL_RISK;
use crate::errors::UserDataError;

/// Extract the major and minor components of a Kubernetes version.
///
/// Accepted forms are `major.minor[.patch[...]]`, optionally prefixed with `v` and
/// optionally suffixed with a `-prerelease` or `+build` tag. Surrounding whitespace
/// is ignored. Only major and minor are validated; anything after them is not
/// interpreted.
///
/// # Examples
///
/// ```
/// use microk8s_cloudinit::version::extract_version_parts;
///
/// assert_eq!(extract_version_parts("1.21.3").unwrap(), (1, 21));
/// assert_eq!(extract_version_parts("v1.30").unwrap(), (1, 30));
/// assert_eq!(extract_version_parts("1.21.x").unwrap(), (1, 21));
/// assert!(extract_version_parts("1").is_err());
/// ```
///
/// # Errors
///
/// Returns [`UserDataError::VersionFormat`] if there are fewer than two components
/// or major or minor is not a non-negative integer.
pub fn extract_version_parts(version: &str) -> Result<(u64, u64), UserDataError> {
    let trimmed = version.trim();
    let without_prefix = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    // Drop pre-release and build metadata
    let core = without_prefix
        .split(['-', '+'])
        .next()
        .unwrap_or(without_prefix);

    let mut components = core.split('.');
    let (Some(major), Some(minor)) = (components.next(), components.next()) else {
        return Err(UserDataError::version_format(
            version,
            "expected <major>.<minor>[.<patch>]",
        ));
    };

    Ok((
        parse_component(version, major)?,
        parse_component(version, minor)?,
    ))
}

fn parse_component(version: &str, component: &str) -> Result<u64, UserDataError> {
    if component.is_empty() || !component.chars().all(|c| c.is_ascii_digit()) {
        return Err(UserDataError::version_format(
            version,
            format!("component '{component}' is not a non-negative integer"),
        ));
    }
    component.parse().map_err(|e| {
        UserDataError::version_format(version, format!("component '{component}': {e}"))
    })
}

/// Format the snap channel argument for a major/minor pair.
#[must_use]
pub fn snap_channel_argument(major: u64, minor: u64) -> String {
    format!("--channel={major}.{minor}/{SNAP_CHANNEL_RISK}")
}

/// Parse a version and return its snap channel argument.
///
/// # Errors
///
/// Returns [`UserDataError::VersionFormat`] if the version cannot be parsed.
pub fn snap_channel_for_version(version: &str) -> Result<String, UserDataError> {
    let (major, minor) = extract_version_parts(version)?;
    Ok(snap_channel_argument(major, minor))
}

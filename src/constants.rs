// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the MicroK8s cloud-init generator.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Cloud-Init Document Constants
// ============================================================================

/// Header placed at the top of every generated user data document.
///
/// The `## template: jinja` line lets cloud-init expand instance metadata before parsing.
pub const CLOUD_CONFIG_HEADER: &str = "## template: jinja\n#cloud-config";

/// Command that marks bootstrap success for the machine controller
pub const SENTINEL_FILE_COMMAND: &str =
    "mkdir -p /run/cluster-api && echo success > /run/cluster-api/bootstrap-success.complete";

// ============================================================================
// Template Names
// ============================================================================

/// Template name for the node that initializes the cluster
pub const TEMPLATE_INIT_CONTROL_PLANE: &str = "InitControlplane";

/// Template name for a control plane node joining an existing cluster
pub const TEMPLATE_JOIN_CONTROL_PLANE: &str = "JoinControlplane";

// ============================================================================
// MicroK8s Constants
// ============================================================================

/// Default port of the MicroK8s cluster agent
pub const DEFAULT_CLUSTER_AGENT_PORT: u16 = 25000;

/// Default port of the dqlite datastore
pub const DEFAULT_DQLITE_PORT: u16 = 19001;

/// Risk level of the snap channel MicroK8s is installed from
pub const SNAP_CHANNEL_RISK: &str = "stable";

/// Addon that must always be enabled on a new cluster
pub const DEFAULT_ADDON: &str = "dns";

// ============================================================================
// Certificate Files
// ============================================================================

/// Path the cluster CA certificate is written to (consumed by `microk8s refresh-certs /var/tmp`)
pub const CA_CERT_PATH: &str = "/var/tmp/ca.crt";

/// Path the cluster CA private key is written to
pub const CA_KEY_PATH: &str = "/var/tmp/ca.key";

/// Permissions of the CA certificate file
pub const CA_CERT_PERMISSIONS: &str = "0600";

/// Permissions of every private key file
pub const KEY_FILE_PERMISSIONS: &str = "0600";

/// Permissions of non-CA certificate files
pub const CERT_FILE_PERMISSIONS: &str = "0640";

// ============================================================================
// Logging
// ============================================================================

/// Environment variable selecting the log output format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "RUST_LOG_FORMAT";

/// Log level used when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! User data for the control plane machine that initializes the cluster.

use super::{classify_endpoint, normalize_version, BaseUserData};
use crate::addons::normalize_addons;
use crate::certs::Certificates;
use crate::constants::{
    DEFAULT_CLUSTER_AGENT_PORT, DEFAULT_DQLITE_PORT, TEMPLATE_INIT_CONTROL_PLANE,
};
use crate::endpoint::EndpointType;
use crate::errors::UserDataError;
use crate::template::TemplateRenderer;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

const CONTROL_PLANE_INIT_TEMPLATE: &str =
    include_str!("../../templates/controlplane-init.yaml.tmpl");

/// Context for the user data of the cluster's first control plane machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneInput {
    /// Shared header, sentinel and write-file fields
    #[serde(flatten)]
    pub base: BaseUserData,
    /// Cluster certificates, written before any additional file
    #[serde(skip_serializing)]
    pub certificates: Certificates,
    /// IP literal or DNS name the API server is reached at
    pub control_plane_endpoint: String,
    /// Derived from `control_plane_endpoint`
    #[serde(default, skip_deserializing)]
    pub control_plane_endpoint_type: EndpointType,
    /// Token other nodes join with
    pub join_token: String,
    /// Validity window of the join token
    #[serde(rename = "joinTokenTTLInSecs", default)]
    pub join_token_ttl_in_secs: u64,
    /// Kubernetes version in, snap channel argument out
    pub version: String,
    /// Port the MicroK8s cluster agent listens on
    #[serde(default = "super::default_cluster_agent_port")]
    pub port_of_cluster_agent: u16,
    /// Port the dqlite datastore listens on
    #[serde(default = "super::default_dqlite_port")]
    pub port_of_dqlite: u16,
    /// Addons to enable once the node is ready; always ends up enabling DNS
    #[serde(default)]
    pub addons: Vec<String>,
}

impl ControlPlaneInput {
    /// Create a request with default ports, no addons and no additional files.
    pub fn new(
        certificates: Certificates,
        control_plane_endpoint: impl Into<String>,
        join_token: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            base: BaseUserData::default(),
            certificates,
            control_plane_endpoint: control_plane_endpoint.into(),
            control_plane_endpoint_type: EndpointType::default(),
            join_token: join_token.into(),
            join_token_ttl_in_secs: 0,
            version: version.into(),
            port_of_cluster_agent: DEFAULT_CLUSTER_AGENT_PORT,
            port_of_dqlite: DEFAULT_DQLITE_PORT,
            addons: Vec::new(),
        }
    }
}

/// Generate the user data for the control plane machine that initializes the cluster.
///
/// The request is normalized in place:
/// 1. Header and sentinel command are set
/// 2. `writeFiles` becomes the certificate files followed by the additional files
/// 3. The version is replaced by its snap channel argument
/// 4. The addon list is made to enable DNS
/// 5. The endpoint type is derived from the endpoint
///
/// Renderer errors are returned unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - The version is not `major.minor[.patch]` ([`UserDataError::VersionFormat`])
/// - The renderer fails ([`UserDataError::Render`])
pub fn new_init_control_plane<R: TemplateRenderer>(
    renderer: &R,
    input: &mut ControlPlaneInput,
) -> Result<Vec<u8>, UserDataError> {
    input.base.write_files = input.certificates.as_files();
    input.base.apply_defaults();
    input.control_plane_endpoint_type = EndpointType::Dns;

    normalize_version(&mut input.version)?;

    normalize_addons(&mut input.addons);
    debug!(addons = ?input.addons, "Normalized addon list");

    input.control_plane_endpoint_type = classify_endpoint(&input.control_plane_endpoint);

    let user_data = renderer.render(
        TEMPLATE_INIT_CONTROL_PLANE,
        CONTROL_PLANE_INIT_TEMPLATE,
        &*input,
    )?;
    debug!(bytes = user_data.len(), "Generated control plane init user data");
    Ok(user_data)
}

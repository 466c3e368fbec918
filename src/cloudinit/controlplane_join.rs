// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! User data for a control plane machine joining a running cluster.
//!
//! Addons are not handled here; a joining node inherits the cluster-wide addon state.

use super::{classify_endpoint, normalize_version, BaseUserData};
use crate::certs::Certificates;
use crate::constants::{
    DEFAULT_CLUSTER_AGENT_PORT, DEFAULT_DQLITE_PORT, TEMPLATE_JOIN_CONTROL_PLANE,
};
use crate::endpoint::EndpointType;
use crate::errors::UserDataError;
use crate::template::TemplateRenderer;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

const CONTROL_PLANE_JOIN_TEMPLATE: &str =
    include_str!("../../templates/controlplane-join.yaml.tmpl");

/// Context for the user data of a control plane machine joining the cluster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneJoinInput {
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
    /// Token used to join, re-issued by this node once it has joined
    pub join_token: String,
    /// Validity window of the join token
    #[serde(rename = "joinTokenTTLInSecs", default)]
    pub join_token_ttl_in_secs: u64,
    /// Address of an existing control plane member
    #[serde(rename = "ipOfNodeToJoin")]
    pub ip_of_node_to_join: String,
    /// Cluster agent port of the existing member
    #[serde(default = "super::default_cluster_agent_port")]
    pub port_of_node_to_join: u16,
    /// Port the dqlite datastore listens on
    #[serde(default = "super::default_dqlite_port")]
    pub port_of_dqlite: u16,
    /// Kubernetes version in, snap channel argument out
    pub version: String,
}

impl ControlPlaneJoinInput {
    /// Create a request with default ports and no additional files.
    pub fn new(
        certificates: Certificates,
        control_plane_endpoint: impl Into<String>,
        join_token: impl Into<String>,
        ip_of_node_to_join: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            base: BaseUserData::default(),
            certificates,
            control_plane_endpoint: control_plane_endpoint.into(),
            control_plane_endpoint_type: EndpointType::default(),
            join_token: join_token.into(),
            join_token_ttl_in_secs: 0,
            ip_of_node_to_join: ip_of_node_to_join.into(),
            port_of_node_to_join: DEFAULT_CLUSTER_AGENT_PORT,
            port_of_dqlite: DEFAULT_DQLITE_PORT,
            version: version.into(),
        }
    }
}

/// Generate the user data for a control plane machine joining the cluster.
///
/// Renderer errors are wrapped in [`UserDataError::JoinControlPlane`], keeping the
/// renderer error as the source.
///
/// # Errors
///
/// Returns an error if:
/// - An additional file is malformed or shadows a certificate ([`UserDataError::Preparation`])
/// - The version is not `major.minor[.patch]` ([`UserDataError::VersionFormat`])
/// - The renderer fails ([`UserDataError::JoinControlPlane`])
pub fn new_join_control_plane<R: TemplateRenderer>(
    renderer: &R,
    input: &mut ControlPlaneJoinInput,
) -> Result<Vec<u8>, UserDataError> {
    input.base.write_files = input.certificates.as_files();
    input.base.control_plane = true;
    input.base.prepare()?;

    normalize_version(&mut input.version)?;

    input.control_plane_endpoint_type = classify_endpoint(&input.control_plane_endpoint);

    let user_data = renderer
        .render(
            TEMPLATE_JOIN_CONTROL_PLANE,
            CONTROL_PLANE_JOIN_TEMPLATE,
            &*input,
        )
        .map_err(|source| UserDataError::JoinControlPlane { source })?;
    debug!(
        bytes = user_data.len(),
        node_to_join = %input.ip_of_node_to_join,
        "Generated control plane join user data"
    );
    Ok(user_data)
}

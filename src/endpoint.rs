// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Control plane endpoint classification.
//!
//! The endpoint type ends up in the API server CSR template as the subject
//! alternative name kind (`IP.100 = ...` or `DNS.100 = ...`), so both builders
//! must agree on it for the same literal.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Address family of the control plane endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EndpointType {
    /// Raw IPv4 or IPv6 literal
    #[serde(rename = "IP")]
    Ip,
    /// Resolvable host name
    #[default]
    #[serde(rename = "DNS")]
    Dns,
}

impl EndpointType {
    /// Classify an endpoint: `IP` if it parses as an IP literal, `DNS` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use microk8s_cloudinit::endpoint::EndpointType;
    ///
    /// assert_eq!(EndpointType::classify("10.0.0.5"), EndpointType::Ip);
    /// assert_eq!(EndpointType::classify("cluster.example.com"), EndpointType::Dns);
    /// assert_eq!(EndpointType::classify(""), EndpointType::Dns);
    /// ```
    #[must_use]
    pub fn classify(endpoint: &str) -> Self {
        if endpoint.parse::<IpAddr>().is_ok() {
            Self::Ip
        } else {
            Self::Dns
        }
    }

    /// The SAN kind as written in the CSR template
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ip => "IP",
            Self::Dns => "DNS",
        }
    }
}

impl fmt::Display for EndpointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

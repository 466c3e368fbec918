// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Certificate material handed to control plane machines.
//!
//! The certificates themselves are generated elsewhere; this module only knows how to
//! lay them out as write-file directives. The cluster CA is mandatory, so the file list
//! produced by [`Certificates::as_files`] is never empty.

use crate::constants::{
    CA_CERT_PATH, CA_CERT_PERMISSIONS, CA_KEY_PATH, CERT_FILE_PERMISSIONS, KEY_FILE_PERMISSIONS,
};
use crate::files::File;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A PEM-encoded certificate and its private key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeyPair {
    /// PEM-encoded certificate
    pub cert: String,
    /// PEM-encoded private key
    pub key: String,
}

/// A non-CA certificate together with the paths it is written to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// What the certificate is used for (e.g. `front-proxy-ca`)
    pub purpose: String,
    /// Destination of the certificate
    pub cert_file: String,
    /// Destination of the private key
    pub key_file: String,
    /// The certificate material
    pub key_pair: KeyPair,
}

/// The certificate set of a cluster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Certificates {
    /// Cluster certificate authority
    pub ca: KeyPair,
    /// Further certificates, written after the CA
    #[serde(default)]
    pub additional: Vec<Certificate>,
}

impl Certificates {
    /// Certificates holding only the cluster CA.
    #[must_use]
    pub fn new(ca: KeyPair) -> Self {
        Self {
            ca,
            additional: Vec::new(),
        }
    }

    /// Append a further certificate.
    #[must_use]
    pub fn with_certificate(mut self, certificate: Certificate) -> Self {
        self.additional.push(certificate);
        self
    }

    /// Lay the certificates out as write-file directives.
    ///
    /// The CA key comes first, then the CA certificate, then each additional
    /// certificate followed by its key.
    #[must_use]
    pub fn as_files(&self) -> Vec<File> {
        let mut files = vec![
            File::new(self.ca.key.clone(), CA_KEY_PATH, KEY_FILE_PERMISSIONS),
            File::new(self.ca.cert.clone(), CA_CERT_PATH, CA_CERT_PERMISSIONS),
        ];
        for certificate in &self.additional {
            files.push(File::new(
                certificate.key_pair.cert.clone(),
                certificate.cert_file.clone(),
                CERT_FILE_PERMISSIONS,
            ));
            files.push(File::new(
                certificate.key_pair.key.clone(),
                certificate.key_file.clone(),
                KEY_FILE_PERMISSIONS,
            ));
        }
        files
    }
}

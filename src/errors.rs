// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for user data generation.
//!
//! This module provides specialized error types for:
//! - Kubernetes version strings that cannot be turned into a snap channel
//! - Base user data preparation (write-file validation on the join path)
//! - Template rendering failures
//!
//! Every failure aborts generation; callers never receive partial user data.

use thiserror::Error;

/// Errors returned by the control plane user data builders.
#[derive(Error, Debug)]
pub enum UserDataError {
    /// The Kubernetes version does not decompose into major and minor components
    #[error("failed to parse the Kubernetes version '{version}': {reason}")]
    VersionFormat {
        /// The version string as supplied by the caller
        version: String,
        /// Explanation of what is malformed
        reason: String,
    },

    /// The shared base preparation step rejected the request
    #[error("failed to prepare user data: {0}")]
    Preparation(#[from] PreparationError),

    /// The template renderer failed; surfaced unchanged
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The template renderer failed while rendering a control plane join
    #[error("failed to generate user data for machine joining control plane: {source}")]
    JoinControlPlane {
        /// The underlying renderer failure
        #[source]
        source: RenderError,
    },
}

impl UserDataError {
    /// Create a version format error for the given version string
    pub fn version_format(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::VersionFormat {
            version: version.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while preparing the base user data fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreparationError {
    /// An additional file was supplied without a destination path
    #[error("additional file has an empty path")]
    EmptyFilePath,

    /// An additional file path is not absolute
    #[error("additional file path '{path}' must be absolute")]
    RelativeFilePath {
        /// The offending path
        path: String,
    },

    /// Permissions are not an octal mode such as `0600`
    #[error("additional file '{path}' has invalid permissions '{permissions}': expected 3 or 4 octal digits")]
    InvalidPermissions {
        /// Path of the file carrying the permissions
        path: String,
        /// The rejected permission string
        permissions: String,
    },

    /// An additional file would overwrite a certificate file
    #[error("additional file '{path}' conflicts with a certificate file")]
    ConflictsWithCertificate {
        /// The conflicting path
        path: String,
    },
}

/// Errors produced by a [`TemplateRenderer`](crate::template::TemplateRenderer).
#[derive(Error, Debug)]
pub enum RenderError {
    /// The template failed to parse or execute
    #[error("failed to generate {name} template: {source}")]
    Template {
        /// Name of the template being rendered
        name: String,
        /// Error reported by the template engine
        #[source]
        source: minijinja::Error,
    },
}

impl RenderError {
    /// Wrap a template engine error for the named template
    pub fn template(name: impl Into<String>, source: minijinja::Error) -> Self {
        Self::Template {
            name: name.into(),
            source,
        }
    }
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Write-file directives for the cloud-init `write_files` section.

use crate::errors::PreparationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single "write this content to this path with these permissions" directive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// File content, written verbatim
    pub content: String,
    /// Absolute destination path on the machine
    pub path: String,
    /// Octal permission string (e.g. `0600`)
    pub permissions: String,
}

impl File {
    /// Create a new write-file directive.
    pub fn new(
        content: impl Into<String>,
        path: impl Into<String>,
        permissions: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            path: path.into(),
            permissions: permissions.into(),
        }
    }

    /// Validate the directive before it is handed to cloud-init.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path is empty or not absolute
    /// - The permissions are not 3 or 4 octal digits
    pub fn validate(&self) -> Result<(), PreparationError> {
        if self.path.is_empty() {
            return Err(PreparationError::EmptyFilePath);
        }
        if !self.path.starts_with('/') {
            return Err(PreparationError::RelativeFilePath {
                path: self.path.clone(),
            });
        }
        if !is_octal_mode(&self.permissions) {
            return Err(PreparationError::InvalidPermissions {
                path: self.path.clone(),
                permissions: self.permissions.clone(),
            });
        }
        Ok(())
    }
}

fn is_octal_mode(permissions: &str) -> bool {
    matches!(permissions.len(), 3 | 4) && permissions.chars().all(|c| ('0'..='7').contains(&c))
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the shared base user data preparation

#[cfg(test)]
mod tests {
    use super::super::{classify_endpoint, normalize_version, BaseUserData};
    use crate::constants::{CLOUD_CONFIG_HEADER, SENTINEL_FILE_COMMAND};
    use crate::endpoint::EndpointType;
    use crate::errors::{PreparationError, UserDataError};
    use crate::files::File;

    fn cert_files() -> Vec<File> {
        vec![
            File::new("KEY", "/var/tmp/ca.key", "0600"),
            File::new("CERT", "/var/tmp/ca.crt", "0600"),
        ]
    }

    #[test]
    fn test_apply_defaults_sets_header_and_sentinel() {
        let mut base = BaseUserData {
            write_files: cert_files(),
            ..Default::default()
        };
        base.apply_defaults();

        assert_eq!(base.header, CLOUD_CONFIG_HEADER);
        assert_eq!(base.sentinel_file_command, SENTINEL_FILE_COMMAND);
        assert_eq!(base.write_files, cert_files());
    }

    #[test]
    fn test_prepare_appends_additional_files_after_certificates() {
        let extra = File::new("hello", "/etc/motd", "0644");
        let mut base = BaseUserData {
            additional_files: vec![extra.clone()],
            write_files: cert_files(),
            control_plane: true,
            ..Default::default()
        };
        base.prepare().unwrap();

        let mut expected = cert_files();
        expected.push(extra);
        assert_eq!(base.write_files, expected);
        assert_eq!(base.header, CLOUD_CONFIG_HEADER);
        assert!(base.control_plane);
    }

    #[test]
    fn test_prepare_rejects_file_shadowing_certificate() {
        let mut base = BaseUserData {
            additional_files: vec![File::new("evil", "/var/tmp/ca.key", "0600")],
            write_files: cert_files(),
            ..Default::default()
        };
        assert_eq!(
            base.prepare(),
            Err(PreparationError::ConflictsWithCertificate {
                path: "/var/tmp/ca.key".to_string()
            })
        );
        assert_eq!(base.write_files, cert_files());
    }

    #[test]
    fn test_prepare_rejects_invalid_file() {
        let mut base = BaseUserData {
            additional_files: vec![File::new("x", "relative/path", "0600")],
            write_files: cert_files(),
            ..Default::default()
        };
        assert!(matches!(
            base.prepare(),
            Err(PreparationError::RelativeFilePath { .. })
        ));
        assert!(base.header.is_empty());
    }

    #[test]
    fn test_normalize_version_replaces_in_place() {
        let mut version = "v1.26.9".to_string();
        normalize_version(&mut version).unwrap();
        assert_eq!(version, "--channel=1.26/stable");
    }

    #[test]
    fn test_normalize_version_leaves_malformed_untouched() {
        let mut version = "edge".to_string();
        assert!(matches!(
            normalize_version(&mut version),
            Err(UserDataError::VersionFormat { .. })
        ));
        assert_eq!(version, "edge");
    }

    #[test]
    fn test_classify_endpoint() {
        assert_eq!(classify_endpoint("10.0.0.5"), EndpointType::Ip);
        assert_eq!(classify_endpoint("cluster.example.com"), EndpointType::Dns);
        assert_eq!(classify_endpoint(""), EndpointType::Dns);
    }
}

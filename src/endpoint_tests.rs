// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for control plane endpoint classification

#[cfg(test)]
mod tests {
    use crate::endpoint::EndpointType;

    #[test]
    fn test_classify_ipv4_literal() {
        assert_eq!(EndpointType::classify("10.0.0.5"), EndpointType::Ip);
        assert_eq!(EndpointType::classify("192.168.1.254"), EndpointType::Ip);
    }

    #[test]
    fn test_classify_ipv6_literal() {
        assert_eq!(EndpointType::classify("fd00::10"), EndpointType::Ip);
        assert_eq!(EndpointType::classify("::1"), EndpointType::Ip);
    }

    #[test]
    fn test_classify_dns_name() {
        assert_eq!(
            EndpointType::classify("cluster.example.com"),
            EndpointType::Dns
        );
        assert_eq!(EndpointType::classify("localhost"), EndpointType::Dns);
    }

    #[test]
    fn test_classify_empty_is_dns() {
        assert_eq!(EndpointType::classify(""), EndpointType::Dns);
    }

    #[test]
    fn test_classify_not_quite_ip_is_dns() {
        // Ports, brackets, CIDRs and padding are not IP literals
        for endpoint in [
            "10.0.0.5:6443",
            "[fd00::10]",
            "10.0.0.0/24",
            " 10.0.0.5",
            "10.0.0",
            "256.0.0.1",
        ] {
            assert_eq!(
                EndpointType::classify(endpoint),
                EndpointType::Dns,
                "'{endpoint}' should classify as DNS"
            );
        }
    }

    #[test]
    fn test_default_is_dns() {
        assert_eq!(EndpointType::default(), EndpointType::Dns);
    }

    #[test]
    fn test_display_matches_csr_san_kind() {
        assert_eq!(EndpointType::Ip.to_string(), "IP");
        assert_eq!(EndpointType::Dns.to_string(), "DNS");
    }

    #[test]
    fn test_serializes_as_san_kind() {
        assert_eq!(serde_json::to_string(&EndpointType::Ip).unwrap(), "\"IP\"");
        assert_eq!(serde_json::to_string(&EndpointType::Dns).unwrap(), "\"DNS\"");
    }
}

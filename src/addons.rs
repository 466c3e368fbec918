// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! MicroK8s addon list handling for the bootstrap node.
//!
//! A new cluster always gets DNS. Matching is by substring: any addon whose name
//! contains `dns` (e.g. `coredns-extra`) counts as DNS being enabled.

use crate::constants::DEFAULT_ADDON;

/// Returns `true` if any addon name contains `dns`.
#[must_use]
pub fn has_dns_addon(addons: &[String]) -> bool {
    addons.iter().any(|addon| addon.contains(DEFAULT_ADDON))
}

/// Ensure the addon list enables DNS.
///
/// An empty list becomes `["dns"]`; a list without a DNS-like entry gets `dns`
/// appended. Insertion order is preserved and the operation is idempotent.
pub fn normalize_addons(addons: &mut Vec<String>) {
    if !has_dns_addon(addons) {
        addons.push(DEFAULT_ADDON.to_string());
    }
}

/// Render addon names as single-quoted, space-separated shell words.
///
/// Names are not escaped; an embedded single quote breaks out of its word.
///
/// # Examples
///
/// ```
/// use microk8s_cloudinit::addons::quote_addons;
///
/// let addons = vec!["dns".to_string(), "ingress".to_string()];
/// assert_eq!(quote_addons(&addons), "'dns' 'ingress'");
/// ```
#[must_use]
pub fn quote_addons<S: AsRef<str>>(addons: &[S]) -> String {
    addons
        .iter()
        .map(|addon| format!("'{}'", addon.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

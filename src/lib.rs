// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # microk8s-cloudinit - Control plane user data for MicroK8s machines
//!
//! Generates the cloud-init user data a new virtual machine runs on first boot to
//! become a MicroK8s control plane node, either as the node that initializes the
//! cluster or as a node joining a running control plane.
//!
//! ## Overview
//!
//! A cluster lifecycle orchestrator decides *when* to create a machine; this crate
//! answers *what that machine executes*. Each call takes a request, normalizes it in
//! place and renders it into a `#cloud-config` document with `write_files` and
//! `runcmd` sections:
//!
//! - Certificates are laid out as write-file directives (CA first)
//! - The Kubernetes version becomes a snap channel argument (`--channel=1.21/stable`)
//! - The control plane endpoint is classified as `IP` or `DNS`
//! - The bootstrap node's addon list always enables DNS
//!
//! ## Modules
//!
//! - [`cloudinit`] - Bootstrap and join builders and their request types
//! - [`certs`] - Certificate material and its write-file layout
//! - [`files`] - Write-file directives
//! - [`version`] - Version parsing and snap channel formatting
//! - [`endpoint`] - Endpoint classification
//! - [`addons`] - Addon list normalization and shell quoting
//! - [`template`] - Template renderer boundary and the minijinja implementation
//! - [`config`] - Request documents, output encoding and logging setup
//! - [`errors`] - Error types
//!
//! Every builder call is synchronous and works only on the request it is given, so
//! calls for different machines can run concurrently.

pub mod addons;
pub mod certs;
pub mod cloudinit;
pub mod config;
pub mod constants;
pub mod endpoint;
pub mod errors;
pub mod files;
pub mod template;
pub mod version;

pub use errors::{PreparationError, RenderError, UserDataError};

#[cfg(test)]
mod endpoint_tests;

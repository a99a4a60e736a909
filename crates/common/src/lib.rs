//! Wire types shared by the Service Fabric REST client and the `fabricctl` CLI.
//!
//! Everything that crosses the HTTP boundary lives under [`api`]: entity models,
//! polymorphic unions, health and upgrade descriptions, per-operation optional
//! parameter bags and response aliases.

#![warn(missing_docs)]

/// Cluster management REST API types.
pub mod api;

// src/core/mod.rs
//! Outbound services shared by the portal views

pub mod service_client;

pub use service_client::PortalClient;

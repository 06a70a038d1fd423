//! Core services and the collaborator contracts they depend on.

pub mod ports;
pub mod services;

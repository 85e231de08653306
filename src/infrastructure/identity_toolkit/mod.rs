//! Identity Toolkit (Firebase Auth) REST provider

pub mod client;
pub mod token;
pub mod wire;

pub use client::IdentityToolkitClient;
pub use token::{TokenSource, EMULATOR_TOKEN};

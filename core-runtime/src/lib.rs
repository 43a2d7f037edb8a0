//! # Core Runtime Module
//!
//! Provides the runtime infrastructure the utility bundle depends on:
//! - Logging and tracing initialisation (native and browser)
//! - Configuration: tunable settings plus the injected host bridges
//!
//! ## Overview
//!
//! Hosts build a [`UtilsConfig`](config::UtilsConfig) once at startup,
//! handing over their bridge implementations, and pass it to
//! `core_utils::AppUtils`. Missing required bridges fail fast with
//! [`Error::CapabilityMissing`].

pub mod config;
pub mod error;
pub mod logging;

pub use config::{UploadPolicy, UtilsConfig, UtilsConfigBuilder, UtilsSettings};
pub use error::{Error, Result};

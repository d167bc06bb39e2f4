//! # Config Crate
//!
//! Centralized configuration constants for primitive mesh generation.
//! Tolerances, resource limits and seed-mesh sizes are defined here so the
//! generator crates and their tests agree on a single set of numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GeneratorLimits, MAX_ICOSPHERE_SUBDIVISIONS};
//!
//! // The default limits admit every level up to the documented ceiling
//! let limits = GeneratorLimits::default();
//! assert!(limits.allows_icosphere(MAX_ICOSPHERE_SUBDIVISIONS));
//! assert!(!limits.allows_icosphere(MAX_ICOSPHERE_SUBDIVISIONS + 1));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain constants and a small validated struct
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

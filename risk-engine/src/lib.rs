//! Risk Engine for SafeTransfer
//!
//! Rule-based fraud risk evaluation for bank transfers

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;
pub mod config;
pub mod jurisdiction;
pub mod scoring;

pub use error::{Error, Result};
pub use types::*;
pub use config::ScoringConfig;
pub use jurisdiction::JurisdictionList;
pub use scoring::RiskScorer;

//! Insight Engine - rule-based status text for metric rows
//!
//! Each dashboard variant annotates its rows with a status column derived
//! from an ordered list of threshold rules. Two strategies are available:
//!
//! - **First match** ([`FirstMatch`]) - the first satisfied rule decides the
//!   status, otherwise a fallback applies. Used for the municipal
//!   sustainability table.
//! - **Accumulate** ([`Accumulate`]) - every satisfied rule contributes its
//!   message, joined in rule order; a sentinel is used when none fire. Used
//!   for the outlook table.
//!
//! Classification is a pure function of the row and the thresholds.
//!
//! ## Usage
//!
//! ```rust
//! use civic_core::insights::{InsightEngine, InsightThresholds};
//! use civic_core::models::SustainabilityRecord;
//!
//! let engine = InsightEngine::new(InsightThresholds::default());
//! let row = SustainabilityRecord::new(2023, 110000.0, 40.0, 65.0);
//! assert_eq!(engine.classify_sustainability(&row), "On track");
//! ```

pub mod engine;
pub mod outlook;
pub mod rules;
pub mod sustainability;
pub mod types;

pub use engine::InsightEngine;
pub use outlook::outlook_classifier;
pub use rules::{Accumulate, Classifier, FirstMatch, Rule};
pub use sustainability::sustainability_classifier;
pub use types::{InsightThresholds, OutlookThresholds, SustainabilityThresholds};

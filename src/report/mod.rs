//! Report layer: core types, filtering, and shape classification.
//!
//! Architecture:
//! ```text
//!   upstream collector
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Report   │  module fqn → feature name → FeatureValue (ordered)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  module / feature substring predicates → Report
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ classify  │  scalar vs. channel features, channel count
//!   └──────────┘
//! ```

pub mod classify;
pub mod filter;
pub mod model;
pub mod sample;

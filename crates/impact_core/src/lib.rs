//! # impact_core: Outbreak Impact Estimation Kernel
//!
//! ## Kernel Layer Role
//!
//! impact_core is the bottom layer of the workspace. It turns a handful of reported
//! outbreak statistics into two parallel projections ("normal" and "severe") and
//! provides:
//! - Input and output records with their JSON field names (`types`)
//! - Period normalisation: days, weeks and months to a day count (`types::period`)
//! - The estimation formula chain and its policy constants (`estimator`)
//! - The dual-scenario orchestrator (`estimator::orchestrator`)
//! - A demo dataset for examples and tests (`demo`)
//!
//! ## No I/O
//!
//! Nothing in this crate touches files, sockets or the environment. Loading
//! inputs and rendering results belongs to the service crates (`impact_cli`,
//! `impact_server`).
//!
//! ## Usage Examples
//!
//! ```rust
//! use impact_core::demo::demo_input;
//! use impact_core::estimator::run;
//!
//! let input = demo_input();
//! let estimate = run(&input).unwrap();
//!
//! assert_eq!(estimate.impact.currently_infected, 6_740);
//! assert_eq!(estimate.severe_impact.currently_infected, 33_700);
//! assert_eq!(estimate.impact.dollars_in_flight, 216_286_878);
//! assert_eq!(estimate.data, input);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod demo;
pub mod estimator;
pub mod types;

pub use estimator::{estimate, run, Scenario};
pub use types::{
    EstimatorError, ImpactEstimate, ImpactProjection, InputRecord, PeriodType, Quantity, Region,
};

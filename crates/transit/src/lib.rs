//! # Transit Core
//!
//! Core modules for the bus location service: the shared error type, the
//! upstream wire model, the schedule bucketizer and the arrival estimator.

mod arrival;
mod error;
mod model;
mod schedule;

pub use crate::arrival::*;
pub use crate::error::*;
pub use crate::model::*;
pub use crate::schedule::*;

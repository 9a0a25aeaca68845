//! # WFS Client
//!
//! Client modules for the upstream GeoServer WFS: query construction, the
//! GeoJSON feature envelope and typed fetches for the position and schedule
//! layers.

mod positions;
mod provider;
mod query;
mod schedules;
mod types;

pub use crate::positions::*;
pub use crate::provider::*;
pub use crate::query::*;
pub use crate::schedules::*;
pub use crate::types::*;

//! axis-plan: toolkit-independent chart axis resolution.
//!
//! Given axis options and a scale description, the crate computes a drawable
//! plan: axis line extent, nice tick values with pixel positions and labels,
//! tick mark sizes, label anchoring and title placement. Drawing is left to the
//! caller.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisConfigResolver, AxisSpec, ResolvedAxis, ScaleSpec, resolve_axis};
pub use error::{AxisError, AxisResult, TickFormatError};

//! Hydrological analysis algorithms
//!
//! - River tracing: greedy steepest descent from a start cell

mod river;

pub use river::{trace_river, trace_rivers, Path, River, RiverParams, RiverTracer};

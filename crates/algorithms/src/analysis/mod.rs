//! End-to-end analysis
//!
//! - Pipeline: surface, peaks and rivers from one set of parameters
//! - Pick session: accumulates three picked points into a strike/dip

mod pipeline;
mod session;

pub use pipeline::{run_analysis, AnalysisParams, AnalysisResult};
pub use session::{PickOutcome, PickSession, POINTS_PER_PLANE};

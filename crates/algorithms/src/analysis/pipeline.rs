//! One analysis run: generate the surface, find its peaks, trace a river from each

use serde::{Deserialize, Serialize};
use tracing::debug;

use geomap_core::raster::GridIndex;
use geomap_core::{Result, Surface};

use crate::hydrology::{trace_rivers, River, RiverParams};
use crate::terrain::{generate_terrain, local_maxima, MaximaParams, TerrainParams};

/// Parameters for a full analysis run.
///
/// Deserialises from partial JSON; missing fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    pub terrain: TerrainParams,
    pub maxima: MaximaParams,
    pub river: RiverParams,
}

/// Everything a renderer needs: the grid, its peaks and their rivers
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub surface: Surface,
    pub maxima: Vec<GridIndex>,
    pub rivers: Vec<River>,
}

impl AnalysisResult {
    /// Rivers whose path left the peak
    pub fn flowing_rivers(&self) -> impl Iterator<Item = &River> {
        self.rivers.iter().filter(|r| r.path.has_flow())
    }
}

/// Run the analysis once.
///
/// Generates the surface, detects its local maxima and traces one river
/// per maximum; `rivers[i].peak == maxima[i]`.
pub fn run_analysis(params: AnalysisParams) -> Result<AnalysisResult> {
    let surface = generate_terrain(params.terrain)?;
    let (rows, cols) = surface.shape();
    debug!(rows, cols, sigma = params.terrain.sigma, "generated surface");

    let maxima = local_maxima(surface.z(), params.maxima)?;
    debug!(count = maxima.len(), "detected local maxima");

    let rivers = trace_rivers(surface.z(), &maxima, params.river)?;
    for river in &rivers {
        debug!(peak = %river.peak, cells = river.path.len(), "traced river");
    }

    Ok(AnalysisResult {
        surface,
        maxima,
        rivers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> AnalysisParams {
        AnalysisParams {
            terrain: TerrainParams {
                size: 60,
                sigma: 1.5,
                ..TerrainParams::default()
            },
            ..AnalysisParams::default()
        }
    }

    #[test]
    fn test_one_river_per_peak() {
        let result = run_analysis(small()).unwrap();
        assert!(!result.maxima.is_empty());
        assert_eq!(result.rivers.len(), result.maxima.len());
        for (river, &peak) in result.rivers.iter().zip(&result.maxima) {
            assert_eq!(river.peak, peak);
            assert_eq!(river.path.start(), peak);
        }
    }

    #[test]
    fn test_flowing_rivers_moved() {
        let result = run_analysis(small()).unwrap();
        assert!(result.flowing_rivers().all(|r| r.path.len() > 1));
    }

    #[test]
    fn test_params_from_partial_json() {
        let params: AnalysisParams =
            serde_json::from_str(r#"{ "terrain": { "size": 120 }, "river": { "step_limit": 50 } }"#)
                .unwrap();
        assert_eq!(params.terrain.size, 120);
        assert_eq!(params.terrain.sigma, 3.0);
        assert_eq!(params.river.step_limit, 50);
        assert_eq!(params.maxima, MaximaParams::default());
    }

    #[test]
    fn test_invalid_size_propagates() {
        let mut params = small();
        params.terrain.size = 1;
        assert!(run_analysis(params).is_err());
    }
}

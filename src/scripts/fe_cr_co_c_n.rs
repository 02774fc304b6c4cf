use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::submodules::composition_grid::{CompositionGrid, GridPoint};
use crate::submodules::engine::{CompositionUnit, EngineKinds, ScheilConfig, ScheilEngineTrait};
use crate::submodules::metrics::SusceptibilityResult;
use crate::submodules::plotting::plot_scheil_curve;
use crate::submodules::report::{ReportWriter, SweepRecord};
use crate::submodules::scheil_curve::ScheilCurve;

pub struct SweepSettings {
    pub output_dir: PathBuf,
    pub figures: bool,
}

impl Default for SweepSettings {
    fn default() -> Self {
        SweepSettings {
            output_dir: PathBuf::from("."),
            figures: true,
        }
    }
}

pub struct SweepSummary {
    pub completed: usize,
    pub skipped: usize,
    pub records: Vec<SweepRecord>,
}

/// Full Fe-Cr-Co-C-N study: 19 Cr x 11 Co x 6 C/N = 1254 compositions with
/// the analytic backend, report files and figures in the working directory.
pub fn run() -> Result<SweepSummary, Box<dyn std::error::Error>> {
    let engine = EngineKinds::Analytic(Default::default());
    let grid = CompositionGrid::fe_cr_co_c_n();
    run_with(&engine, &grid, &SweepSettings::default())
}

pub fn run_with(engine: &EngineKinds, grid: &CompositionGrid, settings: &SweepSettings) -> Result<SweepSummary, Box<dyn std::error::Error>> {
    let figure_dir = settings.output_dir.join("scheil_curve_figures");
    if settings.figures {
        std::fs::create_dir_all(&figure_dir)?;
    }
    let writer = ReportWriter::new(&settings.output_dir);

    let points = grid.points();
    info!(points = points.len(), "starting solidification sweep");

    // Curve and metric evaluation is pure per point, so it fans out across
    // the grid; file appends and figures stay sequential in index order.
    let outcomes: Vec<(GridPoint, Result<(ScheilCurve, SusceptibilityResult), String>)> = points
        .par_iter()
        .map(|&point| (point, evaluate_point(engine, &point)))
        .collect();

    let mut summary = SweepSummary {
        completed: 0,
        skipped: 0,
        records: Vec::new(),
    };
    for (point, outcome) in outcomes {
        match outcome {
            Ok((curve, result)) => {
                let record = SweepRecord {
                    index: point.index,
                    cr: point.cr,
                    co: point.co,
                    c_n: point.c_n,
                    hcs: result.hcs,
                    grf: result.grf,
                };
                writer.append(&record)?;
                if settings.figures {
                    plot_scheil_curve(&curve, point.index, &figure_dir)?;
                }
                summary.completed += 1;
                summary.records.push(record);
            }
            Err(reason) => {
                warn!(index = point.index, cr = point.cr, co = point.co, c_n = point.c_n, %reason, "skipping grid point");
                summary.skipped += 1;
            }
        }
    }

    info!(completed = summary.completed, skipped = summary.skipped, "sweep finished");
    Ok(summary)
}

fn evaluate_point(engine: &EngineKinds, point: &GridPoint) -> Result<(ScheilCurve, SusceptibilityResult), String> {
    let mut config = ScheilConfig::new(CompositionUnit::MassPercent);
    config.set_composition("Cr", point.cr);
    config.set_composition("Co", point.co);
    config.set_composition("C", point.c_n);
    config.set_composition("N", point.c_n);

    let curve = engine.calculate(&config).map_err(|err| err.to_string())?;
    let result = SusceptibilityResult::from_curve(&curve).map_err(|err| err.to_string())?;
    Ok((curve, result))
}

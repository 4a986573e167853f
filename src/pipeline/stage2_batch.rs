use tracing::{info, warn};

use crate::input::{ReadingTable, SampleReading};
use crate::model::fractions::StructureFractions;
use crate::model::params::EstimatorParams;
use crate::pipeline::stage1_estimate::{EstimateError, estimate_with};

#[derive(Debug, Clone)]
pub struct EstimatedSample {
    pub sample: SampleReading,
    pub fractions: StructureFractions,
}

#[derive(Debug, Clone)]
pub struct RejectedSample {
    pub sample: SampleReading,
    pub error: EstimateError,
}

#[derive(Debug, Clone, Default)]
pub struct Stage2Output {
    pub estimated: Vec<EstimatedSample>,
    pub rejected: Vec<RejectedSample>,
}

impl Stage2Output {
    pub fn n_samples(&self) -> usize {
        self.estimated.len() + self.rejected.len()
    }
}

/// Runs the estimator over every row, in table order.
pub fn run_stage2(table: &ReadingTable, params: &EstimatorParams) -> Stage2Output {
    let mut out = Stage2Output::default();
    for row in &table.rows {
        match estimate_with(&row.reading, params) {
            Ok(fractions) => out.estimated.push(EstimatedSample {
                sample: row.clone(),
                fractions,
            }),
            Err(error) => {
                warn!(sample = %row.sample, line = row.line, %error, "skipping sample");
                out.rejected.push(RejectedSample {
                    sample: row.clone(),
                    error,
                });
            }
        }
    }
    info!(
        estimated = out.estimated.len(),
        rejected = out.rejected.len(),
        "estimated secondary-structure fractions"
    );
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_batch.rs"]
mod tests;

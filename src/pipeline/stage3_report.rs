use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::model::fractions::class_order;
use crate::model::params::EstimatorParams;
use crate::pipeline::stage2_batch::Stage2Output;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    Counts, DominantStat, FractionStat, RejectedEntry, ReportError, SummaryData, ToolMeta,
    format_f64_6, mean, median,
};

pub struct Stage3Input<'a> {
    pub batch: &'a Stage2Output,
    pub params: &'a EstimatorParams,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage3Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let fractions_path = out_dir.join("fractions.tsv");
    write_fractions_tsv(input.batch, &fractions_path)?;

    let summary = build_summary(input);
    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(&summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(&summary))?;

    info!(out = %out_dir.display(), "wrote reports");
    Ok(())
}

fn write_fractions_tsv(batch: &Stage2Output, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "sample",
        "e208",
        "e217",
        "e195",
        "alpha_helix",
        "beta_sheet",
        "turn",
        "random_coil",
        "dominant",
    ];
    writeln!(w, "{}", header.join("\t"))?;

    for row in &batch.estimated {
        let r = &row.sample.reading;
        let f = &row.fractions;
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.sample.sample,
            r.e208,
            r.e217,
            r.e195,
            format_f64_6(f.alpha_helix),
            format_f64_6(f.beta_sheet),
            format_f64_6(f.turn),
            format_f64_6(f.random_coil),
            f.dominant().name()
        )?;
    }
    w.flush()
}

pub fn build_summary(input: &Stage3Input<'_>) -> SummaryData {
    let batch = input.batch;
    let n_estimated = batch.estimated.len();

    let fractions = class_order()
        .iter()
        .map(|&class| {
            let values: Vec<f64> = batch
                .estimated
                .iter()
                .map(|s| s.fractions.get(class))
                .collect();
            FractionStat {
                name: class.name(),
                median: median(&values),
                mean: mean(&values),
            }
        })
        .collect();

    let dominant = class_order()
        .iter()
        .map(|&class| {
            let count = batch
                .estimated
                .iter()
                .filter(|s| s.fractions.dominant() == class)
                .count();
            let fraction = if n_estimated > 0 {
                count as f64 / n_estimated as f64
            } else {
                0.0
            };
            DominantStat {
                name: class.name(),
                count,
                fraction,
            }
        })
        .collect();

    let rejected = batch
        .rejected
        .iter()
        .map(|r| RejectedEntry {
            sample: r.sample.sample.clone(),
            line: r.sample.line,
            reason: r.error.to_string(),
        })
        .collect();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        params: input.params.clone(),
        counts: Counts {
            n_samples: batch.n_samples(),
            n_estimated,
            n_rejected: batch.rejected.len(),
        },
        fractions,
        dominant,
        rejected,
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;

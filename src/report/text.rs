use crate::model::fractions::StructureFractions;
use crate::report::{SummaryData, format_f64_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("CD Secondary-Structure Estimate Report\n");
    out.push_str("======================================\n\n");

    out.push_str("1. Samples\n");
    out.push_str(&format!(
        "Samples: {}\nEstimated: {}\nRejected: {}\n\n",
        data.counts.n_samples, data.counts.n_estimated, data.counts.n_rejected
    ));

    out.push_str("2. Fractions (median / mean)\n");
    for stat in &data.fractions {
        out.push_str(&format!(
            "{}: {} / {}\n",
            stat.name,
            format_f64_6(stat.median),
            format_f64_6(stat.mean)
        ));
    }
    out.push('\n');

    out.push_str("3. Dominant class\n");
    for stat in &data.dominant {
        out.push_str(&format!(
            "{}: {} ({})\n",
            stat.name,
            stat.count,
            format_f64_6(stat.fraction)
        ));
    }
    out.push('\n');

    if !data.rejected.is_empty() {
        out.push_str("4. Rejected samples\n");
        for r in &data.rejected {
            out.push_str(&format!("{} (line {}): {}\n", r.sample, r.line, r.reason));
        }
        out.push('\n');
    }

    out.push_str("Caveat: fractions come from a sign/magnitude heuristic on 208/217/195 nm ");
    out.push_str("ellipticity and indicate relative trends only. Use a reference-set ");
    out.push_str("deconvolution for quantitative secondary-structure content.\n");

    out
}

pub fn render_fractions_text(fractions: &StructureFractions) -> String {
    format!(
        "alpha_helix\t{}\nbeta_sheet\t{}\nturn\t{}\nrandom_coil\t{}\n",
        format_f64_6(fractions.alpha_helix),
        format_f64_6(fractions.beta_sheet),
        format_f64_6(fractions.turn),
        format_f64_6(fractions.random_coil)
    )
}

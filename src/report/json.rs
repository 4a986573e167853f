use crate::model::fractions::StructureFractions;
use crate::report::{ReportError, SummaryData};

pub fn render_summary_json(data: &SummaryData) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}

/// Single-line mapping keyed `alpha_helix, beta_sheet, turn, random_coil`.
pub fn render_fractions_json(fractions: &StructureFractions) -> Result<String, ReportError> {
    Ok(serde_json::to_string(fractions)?)
}

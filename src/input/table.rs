use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use tracing::{debug, warn};

use crate::input::{InputError, open_maybe_gz};
use crate::model::reading::{EllipticityReading, Wavelength, wavelength_order};

#[derive(Debug, Clone, PartialEq)]
pub struct SampleReading {
    pub sample: String,
    /// 1-based line number in the source table.
    pub line: usize,
    pub reading: EllipticityReading,
}

#[derive(Debug, Clone, Default)]
pub struct ReadingTable {
    pub rows: Vec<SampleReading>,
}

impl ReadingTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    sample: Option<usize>,
    values: [usize; 3],
}

pub fn load_readings(path: &Path) -> Result<ReadingTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let table = parse_readings(reader)?;
    debug!(path = %path.display(), rows = table.len(), "loaded reading table");
    Ok(table)
}

pub fn parse_readings<R: BufRead>(mut reader: R) -> Result<ReadingTable, InputError> {
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse("reading table is empty".to_string()));
    }
    let header: Vec<String> = buf
        .trim_end()
        .split('\t')
        .map(|s| s.trim().to_ascii_lowercase())
        .collect();
    let layout = resolve_layout(&header)?;

    let mut rows = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut line_no = 1usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();

        let sample = match layout.sample {
            Some(idx) => fields.get(idx).copied().unwrap_or("").to_string(),
            None => String::new(),
        };
        let sample = if sample.is_empty() {
            format!("row{}", rows.len() + 1)
        } else {
            sample
        };

        let mut values = [0.0f64; 3];
        for (slot, &w) in wavelength_order().iter().enumerate() {
            values[slot] = parse_value(&fields, layout.values[slot], w, line_no)?;
        }

        if !seen.insert(sample.clone()) {
            warn!(sample = %sample, line = line_no, "duplicate sample id in reading table");
        }

        rows.push(SampleReading {
            sample,
            line: line_no,
            reading: EllipticityReading::new(values[0], values[1], values[2]),
        });
    }

    Ok(ReadingTable { rows })
}

fn resolve_layout(header: &[String]) -> Result<ColumnLayout, InputError> {
    let sample = header
        .iter()
        .position(|name| name == "sample" || name == "sample_id" || name == "id");

    let mut values = [0usize; 3];
    for (slot, &w) in wavelength_order().iter().enumerate() {
        values[slot] = header
            .iter()
            .position(|name| column_matches(name, w))
            .ok_or_else(|| {
                InputError::MissingInput(format!(
                    "reading table has no {} column (accepted: e{nm}, mre{nm}, mre_{nm}, {nm})",
                    w.column(),
                    nm = w.nm()
                ))
            })?;
    }

    Ok(ColumnLayout { sample, values })
}

pub(crate) fn column_matches(name: &str, wavelength: Wavelength) -> bool {
    let nm = wavelength.nm().to_string();
    match name.strip_prefix("mre_").or_else(|| name.strip_prefix("mre")) {
        Some(rest) => rest == nm,
        None => name.strip_prefix('e').unwrap_or(name) == nm,
    }
}

fn parse_value(
    fields: &[&str],
    idx: usize,
    wavelength: Wavelength,
    line_no: usize,
) -> Result<f64, InputError> {
    let raw = fields.get(idx).copied().unwrap_or("");
    if raw.is_empty() {
        return Err(InputError::Parse(format!(
            "missing {} value (line {})",
            wavelength.column(),
            line_no
        )));
    }
    raw.parse::<f64>().map_err(|_| {
        InputError::Parse(format!(
            "invalid {} value '{}' (line {})",
            wavelength.column(),
            raw,
            line_no
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;

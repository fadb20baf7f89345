use std::fs;
use std::path::Path;

use ndarray::Array2;

use crate::error::{Result, XvgError};
use crate::header::{parse_directive, Directive};
use crate::model::XvgDataset;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Read the first dataset from an XVG file on disk.
pub fn from_path(path: impl AsRef<Path>) -> Result<XvgDataset> {
    let text = fs::read_to_string(path)?;
    from_lines(text.lines())
}

/// Read the first dataset from a sequence of XVG lines.
///
/// Reading stops at the first `//` separator or at the end of the input,
/// whichever comes first; later datasets are never consumed. Parsing is
/// all-or-nothing: on any error no dataset is returned.
pub fn from_lines<I, S>(lines: I) -> Result<XvgDataset>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dataset = XvgDataset::default();
    let mut rows: Vec<Vec<String>> = Vec::new();

    for line in lines {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);
        if line.starts_with("//") {
            break;
        } else if let Some(body) = line.strip_prefix('@') {
            let directive = parse_directive(body.trim())?;
            if directive == Directive::Ignored {
                log::trace!("ignoring directive: @{body}");
            }
            dataset.apply(directive);
        } else if line.starts_with('#') {
            continue;
        } else {
            let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            // Blank lines carry no fields and no row.
            if !fields.is_empty() {
                rows.push(fields);
            }
        }
    }

    dataset.values = assemble(rows)?;
    log::debug!(
        "parsed {} rows x {} columns (title: {:?})",
        dataset.values.nrows(),
        dataset.values.ncols(),
        dataset.title
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Matrix assembly
// ---------------------------------------------------------------------------

/// Convert the accumulated raw fields into the value matrix.
///
/// Every row must be as wide as the first and every field must parse as a
/// float; otherwise the whole parse fails and no matrix is produced.
fn assemble(rows: Vec<Vec<String>>) -> Result<Array2<f64>> {
    let Some(first) = rows.first() else {
        // Headers and comments only. Keep the degenerate shape; callers
        // detect "no data parsed" via `nrows() == 0`.
        return Ok(Array2::zeros((0, 0)));
    };
    let ncols = first.len();

    let mut flat = Vec::with_capacity(rows.len() * ncols);
    for (row, fields) in rows.iter().enumerate() {
        if fields.len() != ncols {
            return Err(XvgError::RaggedRow {
                row,
                expected: ncols,
                found: fields.len(),
            });
        }
        for (column, field) in fields.iter().enumerate() {
            let value: f64 = field.parse().map_err(|_| XvgError::InvalidNumber {
                row,
                column,
                token: field.clone(),
            })?;
            flat.push(value);
        }
    }

    Ok(Array2::from_shape_vec((rows.len(), ncols), flat).expect("row widths validated above"))
}

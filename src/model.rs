use std::collections::BTreeMap;

use ndarray::{Array2, ArrayView1, ArrayViewMut1};
use serde::{Deserialize, Serialize};

use crate::header::Directive;

// ---------------------------------------------------------------------------
// XvgDataset – one parsed dataset with its metadata
// ---------------------------------------------------------------------------

/// A single XVG dataset: plot metadata plus the numeric value matrix.
///
/// Rows are samples in file order, columns are fields in file order.
/// Column 0 holds the independent variable (usually time) and is unnamed;
/// `sN legend` directives name the curve columns starting at index 1.
///
/// Positional and slice access go directly through [`values`](Self::values),
/// with ndarray's own indexing semantics; [`column`](Self::column) adds
/// lookup by legend name on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XvgDataset {
    /// Dataset title, empty if the file declares none.
    pub title: String,
    /// X-axis label, empty if the file declares none.
    pub xlabel: String,
    /// Y-axis label, empty if the file declares none.
    pub ylabel: String,
    /// Parsed values; 0×0 when the file holds no data rows.
    pub values: Array2<f64>,
    /// Legend name → data-column index. Sparse: unnamed columns have no
    /// entry, and indices need not be contiguous.
    legends: BTreeMap<String, usize>,
}

impl XvgDataset {
    /// Data-column index registered for `name`, if any.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.legends.get(name).copied()
    }

    /// View of the column registered under `name`.
    ///
    /// `None` for names no `sN legend` directive declared. Panics inside
    /// ndarray if the name was declared for a column the data rows never
    /// reached.
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.column_index(name).map(|i| self.values.column(i))
    }

    /// Mutable view of the column registered under `name`; writes land in
    /// [`values`](Self::values).
    pub fn column_mut(&mut self, name: &str) -> Option<ArrayViewMut1<'_, f64>> {
        let i = self.column_index(name)?;
        Some(self.values.column_mut(i))
    }

    /// Column names in column order, with empty-string placeholders for
    /// unnamed columns.
    ///
    /// The list ends at the highest named column, so its length is one past
    /// that index rather than the matrix width. Column 0 is always a
    /// placeholder.
    pub fn column_names(&self) -> Vec<String> {
        let mut by_column: Vec<(usize, &str)> = self
            .legends
            .iter()
            .map(|(name, &column)| (column, name.as_str()))
            .collect();
        by_column.sort_unstable();

        let mut names = Vec::new();
        for (column, name) in by_column {
            while names.len() < column {
                names.push(String::new());
            }
            names.push(name.to_string());
        }
        names
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    /// True when the file contained no data rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fold one header directive into the metadata. Repeated directives
    /// overwrite earlier values.
    pub(crate) fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::Title(title) => self.title = title,
            Directive::XLabel(label) => self.xlabel = label,
            Directive::YLabel(label) => self.ylabel = label,
            Directive::Legend { column, name } => {
                self.legends.insert(name, column);
            }
            Directive::Ignored => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> XvgDataset {
        let mut dataset = XvgDataset {
            values: array![[0.0, 10.0, 20.0], [1.0, 11.0, 21.0], [2.0, 12.0, 22.0]],
            ..XvgDataset::default()
        };
        dataset.apply(Directive::Legend {
            column: 1,
            name: "first".to_string(),
        });
        dataset.apply(Directive::Legend {
            column: 2,
            name: "second".to_string(),
        });
        dataset
    }

    #[test]
    fn column_by_name_matches_positional_access() {
        let dataset = sample();
        assert_eq!(dataset.column_index("first"), Some(1));
        assert_eq!(dataset.column("first").unwrap(), dataset.values.column(1));
        assert_eq!(dataset.column("second").unwrap(), dataset.values.column(2));
        assert!(dataset.column("absent").is_none());
    }

    #[test]
    fn column_mut_writes_into_the_matrix() {
        let mut dataset = sample();
        dataset.column_mut("first").unwrap()[1] = 99.0;
        assert_eq!(dataset.values[[1, 1]], 99.0);
    }

    #[test]
    fn column_names_fill_gaps_with_placeholders() {
        let mut dataset = XvgDataset::default();
        dataset.apply(Directive::Legend {
            column: 1,
            name: "name0".to_string(),
        });
        dataset.apply(Directive::Legend {
            column: 3,
            name: "name2".to_string(),
        });
        assert_eq!(dataset.column_names(), vec!["", "name0", "", "name2"]);
    }

    #[test]
    fn column_names_empty_without_legends() {
        assert_eq!(XvgDataset::default().column_names(), Vec::<String>::new());
    }

    #[test]
    fn repeated_metadata_directives_overwrite() {
        let mut dataset = XvgDataset::default();
        dataset.apply(Directive::Title("one".to_string()));
        dataset.apply(Directive::Title("two".to_string()));
        assert_eq!(dataset.title, "two");
    }

    #[test]
    fn len_tracks_rows() {
        assert_eq!(sample().len(), 3);
        assert!(!sample().is_empty());
        assert!(XvgDataset::default().is_empty());
    }
}

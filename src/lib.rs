//! Reader for XVG plot-data files.
//!
//! XVG is the line-oriented text format written by GROMACS and the Grace
//! plotting tools:
//!
//! ```text
//! @ title "Potential Energy"        metadata directive
//! # produced by gmx energy          comment
//! 0.0  -1234.5  301.2               whitespace-separated data row
//! //                                 dataset separator
//! ```
//!
//! Only the first dataset of a file is read; everything after the first `//`
//! is left untouched. The result is an [`XvgDataset`] holding the title and
//! axis labels, the legend names resolved to column indices, and the values
//! in an [`ndarray::Array2`] of `f64`.
//!
//! ```no_run
//! let energy = xvg::from_path("energy.xvg")?;
//! println!("{}: {} rows", energy.title, energy.len());
//! if let Some(potential) = energy.column("Potential") {
//!     println!("first sample: {}", potential[0]);
//! }
//! # Ok::<(), xvg::XvgError>(())
//! ```

mod error;
mod header;
mod loader;
mod model;

pub use error::{Result, XvgError};
pub use loader::{from_lines, from_path};
pub use model::XvgDataset;

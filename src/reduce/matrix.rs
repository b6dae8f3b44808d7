//! Block-averaging matrix reduction
//!
//! Pairwise and per-residue analyses arrive as square matrices with
//! thousands of rows; a heatmap can render a few hundred at most.
//! The reducer partitions the grid into contiguous blocks of
//! `row_stride x col_stride` cells, replaces each block with the mean
//! of its finite values, and records the inclusive source-index range
//! of every block so axis labels can still name the original frames
//! or residues ("Residue 14-27").
//!
//! Rows are allowed to vary in length; missing cells count as absent,
//! not as zeros, so they never bias a block mean.

use tracing::debug;

/// A matrix reduced to a renderable resolution
///
/// `row_ranges`/`col_ranges` hold the inclusive original-index bounds
/// of each block. They partition the original `[0, rows)` and
/// `[0, cols)` exactly, with the widest row defining the column axis:
/// `row_ranges.len() == rows()` and `col_ranges.len() == cols()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedMatrix {
    /// Reduced cell values, `ceil(rows/row_stride) x ceil(cols/col_stride)`
    pub values: Vec<Vec<f64>>,
    /// Source rows per output row
    pub row_stride: usize,
    /// Source columns per output column
    pub col_stride: usize,
    /// Inclusive source row range per output row
    pub row_ranges: Vec<(usize, usize)>,
    /// Inclusive source column range per output column
    pub col_ranges: Vec<(usize, usize)>,
}

impl ReducedMatrix {
    /// Number of output rows
    pub fn rows(&self) -> usize {
        self.values.len()
    }

    /// Number of output columns
    ///
    /// Counts column blocks rather than reading the first row, so
    /// ragged input kept on the fast path still reports the full
    /// width even when its first row is short.
    pub fn cols(&self) -> usize {
        self.col_ranges.len()
    }

    /// Flatten to `(col, row, value)` triples for a heatmap surface
    pub fn heatmap_cells(&self) -> Vec<[f64; 3]> {
        let mut cells = Vec::with_capacity(self.rows() * self.cols());
        for (y, row) in self.values.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells.push([x as f64, y as f64, v]);
            }
        }
        cells
    }
}

fn stride_for(len: usize, target: usize) -> usize {
    if len <= target {
        1
    } else {
        len.div_ceil(target)
    }
}

/// Contiguous blocks of `stride` indices covering `[0, len)`, each as
/// an inclusive `(start, end)`; the final block may be shorter.
fn block_ranges(len: usize, stride: usize) -> Vec<(usize, usize)> {
    (0..len)
        .step_by(stride)
        .map(|start| (start, (start + stride - 1).min(len - 1)))
        .collect()
}

/// Reduce a matrix to at most `target_size` rows and columns
///
/// Strides are chosen independently per axis: 1 when the axis fits,
/// else `ceil(len / target)`. When both strides are 1 the input is
/// returned as-is (moved, not copied) with identity ranges. Otherwise
/// each output cell is the arithmetic mean of the finite values in
/// its source block; a block with no finite values yields 0. An empty
/// matrix reduces to an empty matrix with unit strides and empty
/// ranges. A zero target is clamped to 1.
pub fn downsample_matrix(matrix: Vec<Vec<f64>>, target_size: usize) -> ReducedMatrix {
    let target = target_size.max(1);
    let rows = matrix.len();
    if rows == 0 {
        return ReducedMatrix {
            values: matrix,
            row_stride: 1,
            col_stride: 1,
            row_ranges: Vec::new(),
            col_ranges: Vec::new(),
        };
    }

    // Rows may vary in length; the widest row defines the column axis.
    let cols = matrix.iter().map(|row| row.len()).max().unwrap_or(0);
    let row_stride = stride_for(rows, target);
    let col_stride = stride_for(cols, target);

    if row_stride == 1 && col_stride == 1 {
        return ReducedMatrix {
            values: matrix,
            row_stride: 1,
            col_stride: 1,
            row_ranges: (0..rows).map(|i| (i, i)).collect(),
            col_ranges: (0..cols).map(|j| (j, j)).collect(),
        };
    }

    let row_ranges = block_ranges(rows, row_stride);
    let col_ranges = block_ranges(cols, col_stride);

    let mut values = Vec::with_capacity(row_ranges.len());
    for &(r0, r1) in &row_ranges {
        let mut out_row = Vec::with_capacity(col_ranges.len());
        for &(c0, c1) in &col_ranges {
            let mut sum = 0.0;
            let mut count = 0usize;
            for row in &matrix[r0..=r1] {
                for &cell in row.iter().take(c1 + 1).skip(c0) {
                    if cell.is_finite() {
                        sum += cell;
                        count += 1;
                    }
                }
            }
            out_row.push(if count > 0 { sum / count as f64 } else { 0.0 });
        }
        values.push(out_row);
    }

    debug!(
        rows,
        cols, row_stride, col_stride, "block-reduced matrix for rendering"
    );

    ReducedMatrix {
        values,
        row_stride,
        col_stride,
        row_ranges,
        col_ranges,
    }
}

/// Render block ranges as axis labels
///
/// `offset` converts 0-based indices to the numbering shown on the
/// axis (1 for residues and frames on the portal). A single-index
/// block collapses to one number: "Residue 14", "Residue 14-27".
pub fn axis_labels(prefix: &str, ranges: &[(usize, usize)], offset: usize) -> Vec<String> {
    ranges
        .iter()
        .map(|&(start, end)| {
            if start == end {
                format!("{} {}", prefix, start + offset)
            } else {
                format!("{} {}-{}", prefix, start + offset, end + offset)
            }
        })
        .collect()
}

//! Tabular matrix formatting.

use std::fmt;

use super::Matrix;

/// Tabular [`Display`][fmt::Display] adapter returned by [`Matrix::pretty`].
///
/// Each row is printed on its own line as `[a b c]`, with every column right-aligned to its widest
/// element. A precision given in the format string (`{:.3}`) applies to every element.
pub struct Pretty<'a, T, const R: usize, const C: usize>(&'a Matrix<T, R, C>);

impl<'a, T, const R: usize, const C: usize> Pretty<'a, T, R, C> {
    pub(super) fn new(matrix: &'a Matrix<T, R, C>) -> Self {
        Self(matrix)
    }
}

impl<'a, T: fmt::Display, const R: usize, const C: usize> fmt::Display for Pretty<'a, T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .0
            .as_rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|elem| match f.precision() {
                        Some(precision) => format!("{elem:.precision$}"),
                        None => elem.to_string(),
                    })
                    .collect()
            })
            .collect();

        let mut widths = [0; C];
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for row in &cells {
            f.write_str("[")?;
            for (col, cell) in row.iter().enumerate() {
                if col != 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell:>width$}", width = widths[col])?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Matrix;

    #[test]
    fn aligned_columns() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [1.0, -0.3, 100.0],
            [-12.5, 3.0, 0.0],
        ]);
        assert_eq!(
            mat.pretty().to_string(),
            "[    1 -0.3 100]\n[-12.5    3   0]\n"
        );
        assert_eq!(
            format!("{:.1}", mat.pretty()),
            "[  1.0 -0.3 100.0]\n[-12.5  3.0   0.0]\n"
        );
    }
}

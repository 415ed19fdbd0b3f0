//! Null injection: overwrite a percentage of cells with nulls.

use crate::dataset::{Dataset, Value};
use rand::Rng;

/// Overwrite `floor(rows * cols * percent / 100)` cells with nulls, picking
/// each position uniformly at random **with replacement** — the same cell
/// may be hit more than once, so the number of distinct nulled cells can be
/// lower than the attempt count. Returns the number of overwrite attempts.
///
/// `percent` is expected in `[0, 100]`. A zero percentage or an empty
/// dataset performs no overwrites.
pub fn inject<R: Rng>(dataset: &mut Dataset, percent: u32, rng: &mut R) -> usize {
    let rows = dataset.row_count();
    let cols = dataset.column_count();
    if rows == 0 || cols == 0 || percent == 0 {
        return 0;
    }

    let attempts = rows * cols * percent as usize / 100;
    for _ in 0..attempts {
        let row = rng.random_range(0..rows);
        let col = rng.random_range(0..cols);
        dataset.set(row, col, Value::Null);
    }
    attempts
}

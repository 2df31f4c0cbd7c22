use rand::Rng;
use serde::{Serialize, Deserialize};

/// Dense row-major matrix of connection weights.
///
/// Rows index the destination layer's units, columns the source layer's units,
/// so `data[j][k]` is the weight from source `k` into destination `j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Independent uniform draws in `[-1, 1)` for every entry.
    pub fn uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row]
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        )
    }

    /// Adds `uniform[-1, 1) * scale` to every entry, each with its own draw.
    pub fn perturb<R: Rng>(&mut self, scale: f64, rng: &mut R) {
        for row in self.data.iter_mut() {
            for w in row.iter_mut() {
                *w += (rng.gen::<f64>() * 2.0 - 1.0) * scale;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn uniform_stays_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::uniform(20, 30, &mut rng);
        assert_eq!(m.shape(), (20, 30));
        assert!(m.data.iter().flatten().all(|&w| (-1.0..1.0).contains(&w)));
    }

    #[test]
    fn from_data_infers_shape() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(1, 2), 6.0);
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(Matrix::from_data(vec![]).shape(), (0, 0));
    }

    #[test]
    fn map_applies_to_every_entry() {
        let m = Matrix::from_data(vec![vec![1.0, -2.0], vec![0.5, 0.0]]).map(|x| x * 2.0);
        assert_eq!(m.data, vec![vec![2.0, -4.0], vec![1.0, 0.0]]);
        assert_eq!(m.shape(), (2, 2));
    }

    #[test]
    fn perturb_is_bounded_by_scale() {
        let mut rng = StdRng::seed_from_u64(11);
        let before = Matrix::zeros(5, 4);
        let mut after = before.clone();
        after.perturb(0.25, &mut rng);
        for (a, b) in after.data.iter().flatten().zip(before.data.iter().flatten()) {
            assert!((a - b).abs() <= 0.25);
        }
        assert_ne!(after, before);
    }
}

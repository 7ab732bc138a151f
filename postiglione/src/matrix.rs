use bincode::{Decode, Encode};

/// Dense matrix backed by a flat vector in row-major order.
#[derive(Debug, Clone, PartialEq, Decode, Encode)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: Default + Clone,
{
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Matrix<T> {
    /// Gets the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Gets the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gets a row as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.cols + col]
    }
}

impl<T> Matrix<T>
where
    T: Copy,
{
    /// Gets the value at the given position.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.row(row)[col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_new_zeroed() {
        let m = Matrix::<u32>::new(2, 3);

        assert_eq!(2, m.rows());
        assert_eq!(3, m.cols());
        assert_eq!(&[0, 0, 0], m.row(0));
        assert_eq!(&[0, 0, 0], m.row(1));
    }

    #[test]
    fn test_matrix_row_major_layout() {
        let mut m = Matrix::<u32>::new(2, 3);
        *m.get_mut(0, 2) = 5;
        *m.get_mut(1, 0) = 7;

        assert_eq!(5, m.get(0, 2));
        assert_eq!(7, m.get(1, 0));
        assert_eq!(&[0, 0, 5], m.row(0));
        assert_eq!(&[7, 0, 0], m.row(1));
    }
}

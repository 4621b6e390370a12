use std::{array, fmt};

use crate::{error::check_index, MathError, Number, One, Signed, Vector, Zero};

mod ops;

/// A 4x4 matrix with [`f32`] elements.
pub type Matrix4f = Matrix4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Matrix4d = Matrix4<f64>;
/// A 4x4 matrix with [`i32`] elements.
pub type Matrix4i = Matrix4<i32>;

/// A row-major 4x4 matrix with element type `T`.
///
/// # Construction
///
/// - [`Matrix4::new`] takes the 16 elements in row-major (reading) order.
/// - [`Matrix4::from_rows`] takes an array of 4 rows.
/// - [`Matrix4::from_fn`] invokes a closure with the row and column of each element.
/// - [`Matrix4::fill`] sets every element to the same value.
/// - [`Matrix4::IDENTITY`] (or [`Matrix4::identity`]) and [`Matrix4::ZERO`].
/// - The [`transform`](crate::transform) module builds scaling, rotation, translation, view and
///   projection matrices.
///
/// # Element Access
///
/// [`Matrix4`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use hinae_linalg::*;
/// let mut mat = Matrix4::fill(0);
/// mat[(1, 2)] = 4;
/// mat.set(3, 0, 7);
/// assert_eq!(mat[(1, 2)], 4);
/// assert_eq!(mat.get(3, 0), Some(&7));
/// assert_eq!(mat.get(4, 0), None);
/// assert_eq!(mat.row(1), vec4(0, 0, 4, 0));
/// ```
///
/// Indexing out of bounds panics with [`MathError::IndexOutOfRange`]. [`Matrix4::get`] and
/// [`Matrix4::get_mut`] return [`Option`]s instead.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Matrix4<T>(pub(crate) [[T; 4]; 4]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Matrix4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Matrix4<T> {}

impl<T: Zero + Copy> Matrix4<T> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; 4]; 4]);
}

impl<T: Zero + One> Matrix4<T> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector,
    /// point or matrix with it returns that value unchanged.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE,  T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE,  T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE,  T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE ],
    ]);

    /// Returns the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }
}

impl<T> Matrix4<T> {
    /// Creates a matrix from its 16 elements, given in row-major order.
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self([
            [m00, m01, m02, m03],
            [m10, m11, m12, m13],
            [m20, m21, m22, m23],
            [m30, m31, m32, m33],
        ])
    }

    /// Creates a matrix from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// let mat = Matrix4::from_rows([
    ///     [0, 1, 2, 3],
    ///     [4, 5, 6, 7],
    ///     [8, 9, 10, 11],
    ///     [12, 13, 14, 15],
    /// ]);
    /// assert_eq!(mat, Matrix4::from_fn(|row, col| row * 4 + col));
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Self(rows)
    }

    /// Creates a matrix by invoking a closure with the position (row and column) of each element.
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Creates a matrix with every element set to `value`.
    #[inline]
    pub fn fill(value: T) -> Self
    where
        T: Copy,
    {
        Self([[value; 4]; 4])
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix4<U>
    where
        F: FnMut(T) -> U,
    {
        Matrix4(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// let mat = Matrix4::from_fn(|row, col| row * 4 + col);
    /// assert_eq!(mat.transpose(), Matrix4::from_fn(|row, col| col * 4 + row));
    /// assert_eq!(mat.transpose().transpose(), mat);
    /// ```
    pub fn transpose(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Replaces the element at `(row, col)` with `value`.
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::IndexOutOfRange`] if `row` or `col` is 4 or greater.
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        *self.elem_mut(row, col) = value;
    }

    /// Returns row `i` as a vector.
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::IndexOutOfRange`] if `i` is 4 or greater.
    #[track_caller]
    pub fn row(&self, i: usize) -> Vector<T, 4>
    where
        T: Copy,
    {
        check_index(i, 4);
        Vector(self.0[i])
    }

    /// Returns column `j` as a vector.
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::IndexOutOfRange`] if `j` is 4 or greater.
    #[track_caller]
    pub fn col(&self, j: usize) -> Vector<T, 4>
    where
        T: Copy,
    {
        check_index(j, 4);
        Vector::from_fn(|i| self.0[i][j])
    }

    /// Returns the rows of this matrix.
    #[inline]
    pub fn into_rows(self) -> [[T; 4]; 4] {
        self.0
    }

    #[track_caller]
    #[inline]
    pub(crate) fn elem(&self, row: usize, col: usize) -> &T {
        check_index(row, 4);
        check_index(col, 4);
        &self.0[row][col]
    }

    #[track_caller]
    #[inline]
    pub(crate) fn elem_mut(&mut self, row: usize, col: usize) -> &mut T {
        check_index(row, 4);
        check_index(col, 4);
        &mut self.0[row][col]
    }
}

impl<T: Signed> Matrix4<T> {
    /// Determinant of the 3x3 matrix left after deleting `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> T {
        let skip = |k: usize, deleted: usize| if k < deleted { k } else { k + 1 };
        let e = |r: usize, c: usize| self.0[skip(r, row)][skip(c, col)];

        e(0, 0) * (e(1, 1) * e(2, 2) - e(1, 2) * e(2, 1))
            - e(0, 1) * (e(1, 0) * e(2, 2) - e(1, 2) * e(2, 0))
            + e(0, 2) * (e(1, 0) * e(2, 1) - e(1, 1) * e(2, 0))
    }

    /// The minor at `(row, col)`, negated when `row + col` is odd.
    fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col);
        // Leave zero alone so that float results don't contain `-0.0`.
        if (row + col) % 2 == 1 && minor != T::ZERO {
            -minor
        } else {
            minor
        }
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// Computed by cofactor expansion along the first row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// assert_eq!(Matrix4i::IDENTITY.determinant(), 1);
    /// assert_eq!(Matrix4::fill(2.0).determinant(), 0.0);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, col| acc + self.0[0][col] * self.cofactor(0, col))
    }

    /// Returns the [adjugate] (the transposed cofactor matrix).
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        Self::from_fn(|row, col| self.cofactor(col, row))
    }

    /// Inverts this matrix, returning [`MathError::SingularMatrix`] if its determinant is zero.
    ///
    /// The inverse is the [adjugate](Self::adjugate) divided by the
    /// [determinant](Self::determinant). For integer element types the division truncates.
    pub fn checked_inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det == T::ZERO {
            log::trace!("attempted to invert a singular matrix");
            return Err(MathError::SingularMatrix);
        }

        Ok(self.adjugate().map(|elem| elem / det))
    }

    /// Inverts this matrix.
    ///
    /// # Panics
    ///
    /// This method will panic with [`MathError::SingularMatrix`] if `self` is not invertible (ie.
    /// if its [`determinant()`] is zero). Use [`Matrix4::checked_inverse`] to handle that case.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// assert_eq!(Matrix4i::IDENTITY.inverse(), Matrix4i::IDENTITY);
    ///
    /// let scale = Matrix4::new(
    ///     2.0, 0.0, 0.0, 0.0,
    ///     0.0, 4.0, 0.0, 0.0,
    ///     0.0, 0.0, 0.5, 0.0,
    ///     0.0, 0.0, 0.0, 1.0,
    /// );
    /// assert_eq!(scale * scale.inverse(), Matrix4::IDENTITY);
    /// ```
    #[track_caller]
    pub fn inverse(&self) -> Self {
        match self.checked_inverse() {
            Ok(inv) => inv,
            Err(e) => e.raise(),
        }
    }
}

impl<T: Number> Matrix4<T> {
    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    pub fn trace(&self) -> T {
        (0..4).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

impl<T: Default> Default for Matrix4<T> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T> From<[[T; 4]; 4]> for Matrix4<T> {
    #[inline]
    fn from(rows: [[T; 4]; 4]) -> Self {
        Self(rows)
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a [T; 4]);
        impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

/// Prints one row per line, as `[a, b, c, d]`.
impl<T: fmt::Display> fmt::Display for Matrix4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            let [a, b, c, d] = row;
            writeln!(f, "[{a}, {b}, {c}, {d}]")?;
        }
        Ok(())
    }
}

//! Arithmetic operators for [`Matrix`].
//!
//! Shapes are checked by the type system: addition requires equal
//! dimensions and multiplication requires the inner dimensions to agree.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use arr2d_core::Scalar;

use crate::fixed::Matrix;

impl<T: Scalar, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Matrix {
            data: self.data.map(|row| row.map(|v| -v)),
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> AddAssign for Matrix<T, M, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (dst, src) in self.data.iter_mut().zip(&rhs.data) {
            for (d, &s) in dst.iter_mut().zip(src) {
                *d += s;
            }
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> SubAssign for Matrix<T, M, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (dst, src) in self.data.iter_mut().zip(&rhs.data) {
            for (d, &s) in dst.iter_mut().zip(src) {
                *d -= s;
            }
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> Add for Matrix<T, M, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> Sub for Matrix<T, M, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> MulAssign<T> for Matrix<T, M, N> {
    fn mul_assign(&mut self, scalar: T) {
        for v in self.iter_mut() {
            *v *= scalar;
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

/// `(M x N) * (N x P) = (M x P)`.
impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        let mut out = Matrix::<T, M, P>::zeros();
        for (i, lhs_row) in self.data.iter().enumerate() {
            for (k, &a) in lhs_row.iter().enumerate() {
                for (o, &b) in out.data[i].iter_mut().zip(&rhs.data[k]) {
                    *o += a * b;
                }
            }
        }
        out
    }
}

// Scalar on the left. Coherence rules out a blanket `impl Mul<Matrix<T>> for T`.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const M: usize, const N: usize> Mul<Matrix<$t, M, N>> for $t {
            type Output = Matrix<$t, M, N>;

            fn mul(self, rhs: Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn elementwise_add_sub_neg() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Matrix::from_rows([[11, 22], [33, 44]]));
        assert_eq!(b - a, Matrix::from_rows([[9, 18], [27, 36]]));
        assert_eq!(-a, Matrix::from_rows([[-1, -2], [-3, -4]]));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn scalar_multiplication_both_sides() {
        let a = Matrix::from_rows([[1.0, -2.0], [0.5, 4.0]]);
        let want = Matrix::from_rows([[2.0, -4.0], [1.0, 8.0]]);
        assert_eq!(a * 2.0, want);
        assert_eq!(2.0 * a, want);
        let mut b = a;
        b *= 2.0;
        assert_eq!(b, want);
        assert_eq!(a.scale(2.0), want);
    }

    #[test]
    fn rectangular_product() {
        let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::from_rows([[7, 8], [9, 10], [11, 12]]);
        assert_eq!(a * b, Matrix::from_rows([[58, 64], [139, 154]]));
        let c = b * a;
        assert_eq!(c.rows(), 3);
        assert_eq!(c.as_rows()[0], [39, 54, 69]);
    }

    #[test]
    fn row_vector_times_column_vector() {
        let row = Matrix::from_rows([[1, 2, 3]]);
        let col = Matrix::from_cols([[4, 5, 6]]);
        assert_eq!(row * col, Matrix::from_rows([[32]]));
    }

    proptest! {
        #[test]
        fn product_transpose_identity(
            a in prop::array::uniform6(-20i64..=20),
            b in prop::array::uniform6(-20i64..=20),
        ) {
            let a: Matrix<i64, 2, 3> = Matrix::from_row_major(&a).unwrap();
            let b: Matrix<i64, 3, 2> = Matrix::from_row_major(&b).unwrap();
            prop_assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
        }

        #[test]
        fn sub_undoes_add(
            a in prop::array::uniform4(-1000i32..=1000),
            b in prop::array::uniform4(-1000i32..=1000),
        ) {
            let a: Matrix<i32, 2, 2> = Matrix::from_row_major(&a).unwrap();
            let b: Matrix<i32, 2, 2> = Matrix::from_row_major(&b).unwrap();
            prop_assert_eq!(a + b - b, a);
            prop_assert_eq!(a + -a, Matrix::zeros());
        }
    }
}

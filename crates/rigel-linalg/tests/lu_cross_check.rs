//! Randomized checks of determinants, inverses and LU solves against `nalgebra`.

use approx::{assert_relative_eq, assert_abs_diff_eq};
use rigel_linalg::{LuDecomposition, Mat4d, Matrix, Vector};

const ROUNDS: usize = 500;

/// Random matrix with elements in `[-1, 1)`, shifted along the diagonal to keep it well
/// conditioned.
fn random_matrix(rng: &mut fastrand::Rng, diagonal_shift: f64) -> Mat4d {
    Matrix::from_fn(|row, col| {
        let elem = rng.f64() * 2.0 - 1.0;
        if row == col {
            elem + diagonal_shift
        } else {
            elem
        }
    })
}

fn to_nalgebra(m: &Mat4d) -> nalgebra::Matrix4<f64> {
    nalgebra::Matrix4::from_row_slice(m.as_flat_slice())
}

#[test]
fn determinant_matches_nalgebra() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..ROUNDS {
        let m = random_matrix(&mut rng, 0.0);
        let expected = to_nalgebra(&m).determinant();
        assert_abs_diff_eq!(m.determinant(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(
            LuDecomposition::decompose_pivoted(m).determinant(),
            expected,
            epsilon = 1e-12
        );
    }
}

#[test]
fn inverse_matches_nalgebra() {
    let mut rng = fastrand::Rng::with_seed(0xc0ffee);
    for _ in 0..ROUNDS {
        let m = random_matrix(&mut rng, 4.0);
        let Some(expected) = to_nalgebra(&m).try_inverse() else {
            panic!("diagonally dominant matrix must be invertible: {m:?}");
        };
        let inverse = m.inverse();
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(
                    inverse[(row, col)],
                    expected[(row, col)],
                    epsilon = 1e-12,
                    max_relative = 1e-9
                );
            }
        }
        assert_eq!(m.try_inverse(1e-12), Ok(inverse));
    }
}

#[test]
fn lu_round_trip() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..ROUNDS {
        let a = random_matrix(&mut rng, 4.0);

        let plain = LuDecomposition::decompose(a);
        assert!(plain.lower().is_lower() && plain.upper().is_upper());
        assert_relative_eq!(plain.product(), a, epsilon = 1e-12);

        let pivoted = LuDecomposition::decompose_pivoted(a);
        assert!(pivoted.lower().is_lower() && pivoted.upper().is_upper());
        assert_relative_eq!(
            pivoted.product(),
            pivoted.permutation_matrix() * a,
            epsilon = 1e-12
        );

        let b: Matrix<f64, 4, 3> = Matrix::from_generator(|| rng.f64() * 10.0 - 5.0);
        let x = pivoted.solve(b);
        assert_relative_eq!(a * x, b, epsilon = 1e-10);
    }
}

#[test]
fn pivoting_handles_permuted_identity() {
    // Every leading pivot is zero without pivoting.
    #[rustfmt::skip]
    let a = Matrix::from_rows([
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
    ]);
    let lu = LuDecomposition::decompose_pivoted(a);
    assert_eq!(lu.permutation(), [3, 2, 1, 0]);
    assert_eq!(lu.lower(), Mat4d::identity());
    assert_eq!(lu.upper(), Mat4d::identity());
    assert_eq!(lu.determinant(), 1.0);
    assert_eq!(a.inverse(), a);

    let b = Vector::from([1.0, 2.0, 3.0, 4.0]);
    assert_eq!(lu.solve_vector(b), [4.0, 3.0, 2.0, 1.0]);
}

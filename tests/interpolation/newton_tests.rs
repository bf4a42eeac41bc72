use osier::interpolation::errors::InterpolationError;
use osier::interpolation::newton::NewtonPolynomial;

type OsierResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

fn cubic_rows() -> Vec<Vec<f64>> {
    // y = x^3
    vec![
        vec![0.0, 0.0],
        vec![1.0, 1.0],
        vec![2.0, 8.0],
        vec![3.0, 27.0],
    ]
}

#[test]
fn cubic_exact_at_midpoint() -> OsierResult {
    let newton = NewtonPolynomial::new(&cubic_rows())?;
    assert!(approx_eq(newton.calc(1.5, 3)?, 3.375));
    Ok(())
}

#[test]
fn degree_one_blends_nearest_pair() -> OsierResult {
    let newton = NewtonPolynomial::new(&cubic_rows())?;
    assert!(approx_eq(newton.calc(1.5, 1)?, 4.5));
    Ok(())
}

#[test]
fn degree_zero_takes_nearest_node() -> OsierResult {
    let newton = NewtonPolynomial::new(&cubic_rows())?;
    assert!(approx_eq(newton.calc(1.4, 0)?, 1.0));
    assert!(approx_eq(newton.calc(1.6, 0)?, 8.0));
    Ok(())
}

#[test]
fn passes_through_nodes() -> OsierResult {
    let rows = cubic_rows();
    let newton = NewtonPolynomial::new(&rows)?;

    for row in &rows {
        assert!(approx_eq(newton.calc(row[0], 1)?, row[1]));
        assert!(approx_eq(newton.calc(row[0], 3)?, row[1]));
    }
    Ok(())
}

#[test]
fn unsorted_rows_give_same_result() -> OsierResult {
    let mut shuffled = cubic_rows();
    shuffled.swap(0, 3);
    shuffled.swap(1, 2);

    let sorted = NewtonPolynomial::new(&cubic_rows())?;
    let unsorted = NewtonPolynomial::new(&shuffled)?;
    assert_eq!(sorted.calc(1.7, 3)?, unsorted.calc(1.7, 3)?);
    Ok(())
}

#[test]
fn degree_at_node_count_fails() {
    let newton = NewtonPolynomial::new(&cubic_rows()).unwrap();
    let err = newton.calc(1.0, 4).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::NotEnoughInputData { needed: 5, got: 4 }
    ));
}

#[test]
fn negative_degree_fails() {
    let newton = NewtonPolynomial::new(&cubic_rows()).unwrap();
    let err = newton.calc(1.0, -1).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::InvalidPolynomialDegree { got: -1 }
    ));
}

#[test]
fn extrapolates_beyond_range() -> OsierResult {
    let newton = NewtonPolynomial::new(&cubic_rows())?;
    // degree 3 reproduces x^3 everywhere
    assert!(approx_eq(newton.calc(4.0, 3)?, 64.0));
    assert!(approx_eq(newton.calc(-1.0, 3)?, -1.0));
    Ok(())
}

#[test]
fn derivative_estimates() -> OsierResult {
    // y = x^2
    let rows = vec![
        vec![0.0, 0.0],
        vec![1.0, 1.0],
        vec![2.0, 4.0],
        vec![3.0, 9.0],
    ];
    let newton = NewtonPolynomial::new(&rows)?;

    let d1 = newton.derivative(1.5, 2)?;
    assert!((d1 - 3.0).abs() <= 1e-8, "d1 = {d1}");

    let d2 = newton.second_derivative(1.5, 2)?;
    assert!((d2 - 2.0).abs() <= 1e-3, "d2 = {d2}");
    Ok(())
}

#[test]
fn diff_table_shape_and_coefficients() -> OsierResult {
    let newton = NewtonPolynomial::new(&cubic_rows())?;
    let table = newton.diff_table(1.5, 3)?;

    let rows = table.rows();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], vec![0.0, 0.0, 1.0, 3.0, 1.0]);
    assert_eq!(rows[1].len(), 4);
    assert_eq!(rows[3].len(), 2);
    Ok(())
}

#[test]
fn set_points_replaces() -> OsierResult {
    let mut newton = NewtonPolynomial::new(&cubic_rows())?;
    newton.set_points(&[vec![0.0, 0.0], vec![1.0, 2.0], vec![2.0, 4.0]])?;
    assert!(approx_eq(newton.calc(1.5, 1)?, 3.0));
    Ok(())
}

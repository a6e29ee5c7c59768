//! Behaviour of the three ways of choosing bins on a small fixed sample

use approx::assert_abs_diff_eq;
use histr_histogram::{h1, h1_with_edges, h1_with_width, Error, H1Builder};

const DATA: [f64; 3] = [1.0, 2.0, 2.04];

fn assert_edges_approx(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "edges: {actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(a, e, epsilon = 1e-9);
    }
}

#[test]
fn test_works_no_args() {
    let h = h1(&DATA).unwrap();
    assert_edges_approx(
        h.bin_edges(),
        &[1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0, 2.1],
    );
    let mut expected = vec![1.0];
    expected.extend([0.0; 9]);
    expected.push(2.0);
    assert_eq!(h.bin_contents(), &expected[..]);
}

#[test]
fn test_works_bin_width() {
    let h = h1_with_width(&DATA, 0.4).unwrap();
    assert_edges_approx(h.bin_edges(), &[0.8, 1.2, 1.6, 2.0, 2.4]);
    assert_eq!(h.bin_contents(), &[1.0, 0.0, 0.0, 2.0]);
}

#[test]
fn test_works_bin_edges() {
    let edges = [1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2];
    let h = h1_with_edges(&DATA, &edges).unwrap();
    assert_eq!(h.bin_edges(), &edges);
    assert_eq!(h.bin_contents(), &[1.0, 0.0, 0.0, 0.0, 0.0, 2.0]);
}

#[test]
fn test_builder_matches_functions() {
    assert_eq!(H1Builder::new().build(&DATA).unwrap(), h1(&DATA).unwrap());
    assert_eq!(
        H1Builder::new().bin_width(0.4).build(&DATA).unwrap(),
        h1_with_width(&DATA, 0.4).unwrap()
    );
}

#[test]
fn test_width_and_edges_together_fail() {
    let err = H1Builder::new()
        .bin_width(0.4)
        .bin_edges(vec![1.0, 2.0])
        .build(&DATA)
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_invalid_configuration() {
    assert!(h1_with_width(&DATA, 0.0).unwrap_err().is_configuration());
    assert!(h1_with_width(&DATA, -1.0).unwrap_err().is_configuration());
    assert!(h1_with_edges(&DATA, &[1.0]).unwrap_err().is_configuration());
    assert!(h1_with_edges(&DATA, &[1.0, 1.0, 2.0]).unwrap_err().is_configuration());
    assert!(h1_with_edges(&DATA, &[2.0, 1.0]).unwrap_err().is_configuration());
}

#[test]
fn test_empty_samples_with_derived_bins_fail() {
    assert!(matches!(
        h1(&[]),
        Err(Error::InsufficientData { expected: 1, actual: 0 })
    ));
    assert!(matches!(
        h1_with_width(&[], 0.4),
        Err(Error::InsufficientData { .. })
    ));
}

#[test]
fn test_empty_samples_with_explicit_edges_give_zero_histogram() {
    let h = h1_with_edges(&[], &[0.0, 1.0, 2.0]).unwrap();
    assert_eq!(h.bin_contents(), &[0.0, 0.0]);
    assert_eq!(h.total(), 0.0);
}

#[test]
fn test_out_of_range_samples_are_dropped() {
    let h = h1_with_edges(&[-5.0, 0.5, 1.0, 2.0, 9.0, f64::INFINITY], &[0.0, 1.0, 2.0]).unwrap();
    assert_eq!(h.bin_contents(), &[1.0, 2.0]);
}

#[test]
fn test_non_finite_samples_are_invalid_input() {
    assert!(matches!(h1(&[1.0, f64::NAN]), Err(Error::InvalidInput(_))));
    assert!(matches!(
        h1_with_edges(&[f64::NAN], &[0.0, 1.0]),
        Err(Error::InvalidInput(_))
    ));
}

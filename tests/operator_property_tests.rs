use minitorch::{
    add, add_lists, eq, exp, id, inv, inv_back, is_close, log, log_back, lt, map, mapper, max,
    mul, neg, neg_list, prod, reduce, reducer, relu, relu_back, sigmoid, sum, zip_with, zipper,
    OpError, EPS,
};

/// Deterministic sample grid covering signs, zeros, tiny and large magnitudes.
fn samples() -> Vec<f64> {
    vec![
        -1000.0, -100.0, -3.5, -1.0, -0.5, -1e-7, -0.0, 0.0, 1e-7, 0.25, 1.0, 2.0, 7.75, 100.0,
        1e6,
    ]
}

fn sample_lists() -> Vec<Vec<f64>> {
    vec![
        vec![],
        vec![1.0],
        vec![1.0, -2.0, 3.0],
        vec![0.1, 0.2, 0.3, 0.4],
        vec![-1000.0, 1e-3, 42.0, -7.5, 0.0],
    ]
}

#[test]
fn test_add_and_mul_commute() {
    for &x in &samples() {
        for &y in &samples() {
            assert_eq!(add(x, y), add(y, x));
            assert_eq!(mul(x, y), mul(y, x));
        }
    }
}

#[test]
fn test_neg_is_an_involution() {
    for &x in &samples() {
        assert_eq!(neg(neg(x)), x);
        assert_eq!(id(x), x);
    }
}

#[test]
fn test_relu_matches_max_with_zero() {
    for &x in &samples() {
        assert_eq!(relu(x), max(0.0, x));
        assert!(relu(x) >= 0.0);
    }
}

#[test]
fn test_inv_fails_only_at_zero() {
    for &x in &samples() {
        let res = inv(x);
        if x == 0.0 {
            assert!(matches!(res, Err(OpError::DivisionByZero { op: "inv" })));
        } else {
            assert_eq!(res.unwrap(), 1.0 / x);
        }
    }
}

#[test]
fn test_sum_of_negated_list_is_negated_sum() {
    for ls in sample_lists() {
        let lhs = sum(&neg_list(&ls));
        let rhs = -sum(&ls);
        assert!((lhs - rhs).abs() < 1e-9, "{lhs} vs {rhs}");
    }
}

#[test]
fn test_empty_reductions_return_start() {
    assert_eq!(reduce(add, 0.0, Vec::<f64>::new()), 0.0);
    assert_eq!(reduce(mul, 1.0, Vec::<f64>::new()), 1.0);
    assert_eq!(reducer(add, 0.0)(&[]), 0.0);
    assert_eq!(reducer(mul, 1.0)(&[]), 1.0);
    assert_eq!(sum(&[]), 0.0);
    assert_eq!(prod(&[]), 1.0);
}

#[test]
fn test_zip_with_truncates_to_shorter() {
    assert_eq!(zip_with(add, [1.0, 2.0, 3.0], [4.0, 5.0]), vec![5.0, 7.0]);
    assert_eq!(zipper(add)(&[1.0, 2.0, 3.0], &[4.0, 5.0]), vec![5.0, 7.0]);
    assert_eq!(add_lists(&[4.0, 5.0], &[1.0, 2.0, 3.0]), vec![5.0, 7.0]);
}

#[test]
fn test_map_neg() {
    assert_eq!(map(neg, [1.0, -2.0, 3.0]), vec![-1.0, 2.0, -3.0]);
    assert_eq!(mapper(neg)(&[1.0, -2.0, 3.0]), vec![-1.0, 2.0, -3.0]);
    assert_eq!(neg_list(&[1.0, -2.0, 3.0]), vec![-1.0, 2.0, -3.0]);
}

#[test]
fn test_is_close_returns_bool_not_encoded_float() {
    // Unlike `lt` and `eq`, `is_close` is a plain boolean.
    let close: bool = is_close(1.0, 1.009);
    assert!(close);
    assert!(!is_close(1.0, 1.02));
    assert_eq!(lt(1.0, 1.009), 1.0);
    assert_eq!(eq(1.0, 1.009), 0.0);
}

#[test]
fn test_sigmoid_reference_points() {
    assert_eq!(sigmoid(0.0), 0.5);
    let s = sigmoid(-1000.0);
    assert!(s.is_finite());
    assert!(is_close(s, 0.0));
    for &x in &samples() {
        let s = sigmoid(x);
        assert!((0.0..=1.0).contains(&s), "sigmoid({x}) = {s}");
    }
}

#[test]
fn test_log_epsilon_shift_and_domain() {
    assert_eq!(log(0.0).unwrap(), EPS.ln());
    let err = log(-1e-6 - 0.001).unwrap_err();
    assert!(matches!(err, OpError::Domain { op: "log", .. }));
    assert!(log_back(-1e-6 - 0.001, 1.0).unwrap_err().is_domain());
}

#[test]
fn test_max_tie_break_favours_second_argument() {
    assert_eq!(max(3.0, 3.0), 3.0);
    assert_eq!(max(3.0, 3.0 + 0.0), 3.0);
    // Signed zeros compare equal, so the tie is observable through the sign bit.
    assert!(max(0.0, -0.0).is_sign_negative());
}

#[test]
fn test_backward_helpers_match_finite_differences() {
    let h = 1e-6;
    for &x in &[0.5, 1.0, 2.0, 10.0] {
        let numeric = (log(x + h).unwrap() - log(x - h).unwrap()) / (2.0 * h);
        assert!((log_back(x, 1.0).unwrap() - numeric).abs() < 1e-4);

        let numeric = (inv(x + h).unwrap() - inv(x - h).unwrap()) / (2.0 * h);
        assert!((inv_back(x, 1.0).unwrap() - numeric).abs() < 1e-4);

        let numeric = (relu(x + h) - relu(x - h)) / (2.0 * h);
        assert!((relu_back(x, 1.0) - numeric).abs() < 1e-4);
    }
    assert!((exp(1.0) - std::f64::consts::E).abs() < 1e-12);
}

#[test]
fn test_operators_are_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let ls: Vec<f64> = (0..100).map(|j| (i * 100 + j) as f64).collect();
                (sum(&ls), prod(&neg_list(&ls[..3])))
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let (s, _) = h.join().unwrap();
        let base = (i * 100) as f64;
        assert_eq!(s, 100.0 * base + 4950.0);
    }
}

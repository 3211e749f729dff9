mod common;

use common::assert_close;
use fitcalc::config::sample_packages;
use fitcalc::{read_package, FitCalcError, Training, WorkoutKind};
use rstest::rstest;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[rstest]
#[case("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], "Swimming")]
#[case("RUN", &[15000.0, 1.0, 75.0], "Running")]
#[case("WLK", &[9000.0, 1.0, 75.0, 180.0], "SportsWalking")]
fn test_codes_resolve_to_variants(
    #[case] code: &str,
    #[case] params: &[f64],
    #[case] name: &str,
) {
    let training = read_package(code, params).unwrap();
    assert_eq!(training.name(), name);
}

#[rstest]
#[case("XYZ")]
#[case("")]
#[case("run")]
#[case("RUN ")]
fn test_unknown_code(#[case] code: &str) {
    match read_package(code, &[15000.0, 1.0, 75.0]) {
        Err(FitCalcError::UnknownWorkoutType(c)) => assert_eq!(c, code),
        Err(e) => panic!("expected UnknownWorkoutType, got {}", e),
        Ok(_) => panic!("expected UnknownWorkoutType for '{}'", code),
    }
}

#[rstest]
#[case("RUN", &[1.0, 2.0])]
#[case("RUN", &[1.0, 2.0, 3.0, 4.0])]
#[case("WLK", &[9000.0, 1.0, 75.0])]
#[case("SWM", &[720.0, 1.0, 80.0, 25.0])]
#[case("SWM", &[])]
fn test_wrong_arity(#[case] code: &str, #[case] params: &[f64]) {
    let err = read_package(code, params).err().expect("arity must be checked");
    assert!(
        matches!(err, FitCalcError::InvalidParameters(_)),
        "unexpected error: {}",
        err
    );
}

#[rstest]
#[case("RUN", &[15000.5, 1.0, 75.0])]
#[case("RUN", &[-1.0, 1.0, 75.0])]
#[case("RUN", &[15000.0, 0.0, 75.0])]
#[case("RUN", &[15000.0, 1.0, -75.0])]
#[case("WLK", &[9000.0, 1.0, 75.0, 0.0])]
#[case("SWM", &[720.0, 1.0, 80.0, 0.0, 40.0])]
#[case("SWM", &[720.0, 1.0, 80.0, 25.0, 0.0])]
#[case("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5])]
#[case("RUN", &[f64::NAN, 1.0, 75.0])]
fn test_invalid_values(#[case] code: &str, #[case] params: &[f64]) {
    let err = read_package(code, params).err().expect("values must be validated");
    assert!(matches!(err, FitCalcError::InvalidParameters(_)));
}

#[test]
fn test_kind_table() {
    let table: Vec<(String, usize)> = WorkoutKind::iter()
        .map(|k| (k.to_string(), k.arity()))
        .collect();
    assert_eq!(
        table,
        vec![
            ("SWM".to_string(), 5),
            ("RUN".to_string(), 3),
            ("WLK".to_string(), 4)
        ]
    );
    assert_eq!(WorkoutKind::from_str("WLK").unwrap(), WorkoutKind::SportsWalking);
}

#[test]
fn test_samples_all_resolve() {
    let calories: Vec<f64> = sample_packages()
        .iter()
        .map(|p| {
            read_package(&p.code, &p.params)
                .and_then(|t| t.spent_calories())
                .unwrap()
        })
        .collect();

    assert_close(calories[0], 336.0);
    assert_close(calories[1], 699.75);
    assert_close(calories[2], 157.5);
}

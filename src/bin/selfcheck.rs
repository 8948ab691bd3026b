//! Pass/fail self-check over the crate's core contracts.
//!
//! Prints a single success line and exits 0 when every check passes, or
//! exits with a distinct code in 1..=12 identifying the first failed check,
//! printing nothing on failure. Suitable for wiring into external harnesses
//! that key off exit codes.

use std::process::exit;

use scalarstats::comparison::Fuzzy;
use scalarstats::rounding;
use scalarstats::statistics::RunningNorm;

const TOLERANCE: f64 = 1.0e-12;

fn main() {
    if rounding::to_integer(3.6) != 4 {
        exit(1);
    }
    if rounding::to_integer(-3.6) != -4 {
        exit(2);
    }
    if rounding::floor(-3.1) != -4 {
        exit(3);
    }
    if rounding::ceiling(-3.1) != -3 {
        exit(4);
    }

    let mut norm = RunningNorm::new();
    norm.add(-2.0);
    norm.add(1.0);
    norm.add(3.0);

    let Some(mean) = norm.mean() else { exit(5) };
    if (mean - 2.0 / 3.0).abs() > TOLERANCE {
        exit(5);
    }
    let Some(two_norm) = norm.two_norm() else { exit(6) };
    if (two_norm - 14.0_f64.sqrt()).abs() > TOLERANCE {
        exit(6);
    }
    let Some(rms_norm) = norm.rms_norm() else { exit(7) };
    if (rms_norm - (14.0_f64 / 3.0).sqrt()).abs() > TOLERANCE {
        exit(7);
    }
    if norm.max() != Some(3.0) || norm.min() != Some(-2.0) {
        exit(8);
    }

    let Ok(fuzzy) = Fuzzy::new(1.0e-9) else { exit(9) };
    if !fuzzy.eq(1.0, 1.0 + 5.0e-10) {
        exit(9);
    }
    if fuzzy.eq(1.0, 1.0 + 1.0e-6) {
        exit(10);
    }
    if fuzzy.floor(2.0 + 1.0e-12) != 2 {
        exit(11);
    }
    if fuzzy.ceiling(2.0 - 1.0e-12) != 2 {
        exit(12);
    }

    println!("scalarstats self-check passed");
}

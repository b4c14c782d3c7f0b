//! Runner contract validation through the public crate API.
//!
//! These tests pin the behavioral contract of the diagnostic runner: report
//! cardinality and ordering, failure containment, rate arithmetic, and the
//! threshold policy.

use trip_doctor::runner::{self, Readiness};
use trip_doctor::{Check, CheckStatus, Logger, RunnerConfig};

fn quiet() -> Logger {
    Logger::plain()
}

#[test]
fn report_contains_exactly_one_entry_per_registered_check() {
    let checks = vec![
        Check::new("one", |_| Ok(CheckStatus::Ok)),
        Check::new("two", |_| Ok(CheckStatus::Failed("no".into()))),
        Check::new("three", |_| Ok(CheckStatus::Warning("eh".into()))),
        Check::new("four", |_| anyhow::bail!("kaput")),
        Check::new("five", |_| Ok(CheckStatus::Ok)),
    ];

    let report = runner::run(&quiet(), checks);

    assert_eq!(report.total(), 5);
    let names: Vec<&str> = report.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["one", "two", "three", "four", "five"]);
}

#[test]
fn an_erroring_check_does_not_stop_the_run() {
    let checks = vec![
        Check::new("before", |_| Ok(CheckStatus::Ok)),
        Check::new("faulty", |_| anyhow::bail!("probe crashed")),
        Check::new("after", |_| Ok(CheckStatus::Ok)),
    ];

    let report = runner::run(&quiet(), checks);

    assert!(!report.records()[1].passed);
    assert!(report.records()[2].passed, "run must continue past failures");
}

#[test]
fn success_rate_is_passed_count_over_total_count() {
    let checks = vec![
        Check::new("a", |_| Ok(CheckStatus::Ok)),
        Check::new("b", |_| Ok(CheckStatus::Ok)),
        Check::new("c", |_| Ok(CheckStatus::Failed("no".into()))),
        Check::new("d", |_| Ok(CheckStatus::Ok)),
        Check::new("e", |_| Ok(CheckStatus::Failed("no".into()))),
    ];

    let report = runner::run(&quiet(), checks);

    assert_eq!(report.passed_count(), 3);
    assert_eq!(report.total(), 5);
    assert_eq!(report.success_rate(), Some(0.6));
}

#[test]
fn empty_run_has_no_success_rate_and_never_meets_a_threshold() {
    let report = runner::run(&quiet(), Vec::new());

    assert_eq!(report.success_rate(), None);
    assert!(!RunnerConfig::with_threshold(0.0).meets_threshold(&report));
    assert!(!RunnerConfig::with_threshold(1.0).meets_threshold(&report));
}

#[test]
fn scenario_pass_error_fail_yields_one_third_and_misses_both_policies() {
    // checks = [("A", returns true), ("B", raises), ("C", returns false)]
    let checks = vec![
        Check::new("A", |_| Ok(CheckStatus::Ok)),
        Check::new("B", |_| anyhow::bail!("raised")),
        Check::new("C", |_| Ok(CheckStatus::Failed("returned false".into()))),
    ];

    let report = runner::run(&quiet(), checks);

    let outcomes: Vec<(String, bool)> = report
        .records()
        .iter()
        .map(|r| (r.name.clone(), r.passed))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ("A".to_string(), true),
            ("B".to_string(), false),
            ("C".to_string(), false),
        ]
    );

    let rate = report.success_rate().unwrap();
    assert!((rate - 1.0 / 3.0).abs() < 1e-9);

    // exit code 1 under "all must pass" and under ">= 85%" alike
    assert!(!RunnerConfig::with_threshold(1.0).meets_threshold(&report));
    assert!(!RunnerConfig::with_threshold(0.85).meets_threshold(&report));
}

#[test]
fn readiness_tiers_follow_the_fixed_thresholds() {
    assert_eq!(Readiness::classify(0.86), Readiness::Ready);
    assert_eq!(Readiness::classify(0.85), Readiness::Ready);
    assert_eq!(Readiness::classify(0.80), Readiness::Degraded);
    assert_eq!(Readiness::classify(0.70), Readiness::Degraded);
    assert_eq!(Readiness::classify(0.50), Readiness::Broken);
}

#[test]
fn warnings_count_toward_the_pass_rate() {
    let checks = vec![
        Check::new("clean", |_| Ok(CheckStatus::Ok)),
        Check::new("degraded", |_| {
            Ok(CheckStatus::Warning("optional piece missing".into()))
        }),
    ];

    let report = runner::run(&quiet(), checks);

    assert_eq!(report.success_rate(), Some(1.0));
    assert!(RunnerConfig::with_threshold(1.0).meets_threshold(&report));
    // the caveat is preserved for callers
    assert_eq!(
        report.records()[1].detail.as_deref(),
        Some("optional piece missing")
    );
}

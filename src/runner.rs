//! Diagnostic check runner.
//!
//! Executes an ordered list of named checks, contains each check's failure,
//! aggregates pass/fail outcomes into a report, classifies overall readiness,
//! and decides the process exit against an explicit pass threshold.

use anyhow::Result;

use crate::logger::{BOLD, GREEN, Logger, RED, RESET, YELLOW};

/// Success rate at or above which the environment counts as ready.
pub const READY_THRESHOLD: f64 = 0.85;
/// Success rate at or above which the environment is usable with caveats.
pub const DEGRADED_THRESHOLD: f64 = 0.70;

/// Outcome of a single check probe.
///
/// Probes return status values instead of signalling through panics or
/// unstructured errors, so failure causes stay inspectable. A `Warning`
/// still counts as passed: it marks an optional capability that is missing
/// or degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning(String),
    Failed(String),
}

impl CheckStatus {
    /// Whether this status counts toward the pass rate.
    pub fn passed(&self) -> bool {
        !matches!(self, CheckStatus::Failed(_))
    }

    fn detail(&self) -> Option<String> {
        match self {
            CheckStatus::Ok => None,
            CheckStatus::Warning(reason) | CheckStatus::Failed(reason) => Some(reason.clone()),
        }
    }
}

/// A named diagnostic check, registered before the run and executed once.
pub struct Check {
    name: &'static str,
    probe: Box<dyn FnOnce(&Logger) -> Result<CheckStatus>>,
}

impl Check {
    pub fn new(
        name: &'static str,
        probe: impl FnOnce(&Logger) -> Result<CheckStatus> + 'static,
    ) -> Self {
        Check {
            name,
            probe: Box::new(probe),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// One line of the final report.
#[derive(Debug, Clone)]
pub struct CheckRecord {
    pub name: String,
    pub passed: bool,
    pub detail: Option<String>,
}

/// Ordered outcomes of one diagnostic run.
///
/// Contains exactly one record per registered check, in registration order,
/// regardless of how each check ended.
#[derive(Debug, Clone, Default)]
pub struct Report {
    records: Vec<CheckRecord>,
}

impl Report {
    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn passed_count(&self) -> usize {
        self.records.iter().filter(|r| r.passed).count()
    }

    /// Passed checks over total checks. `None` for an empty run, where the
    /// rate is undefined.
    pub fn success_rate(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        Some(self.passed_count() as f64 / self.total() as f64)
    }

    pub fn all_passed(&self) -> bool {
        self.records.iter().all(|r| r.passed)
    }

    fn push(&mut self, record: CheckRecord) {
        self.records.push(record);
    }
}

/// Qualitative readiness derived from the success rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    Degraded,
    Broken,
}

impl Readiness {
    pub fn classify(success_rate: f64) -> Self {
        if success_rate >= READY_THRESHOLD {
            Readiness::Ready
        } else if success_rate >= DEGRADED_THRESHOLD {
            Readiness::Degraded
        } else {
            Readiness::Broken
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Readiness::Ready => "ready",
            Readiness::Degraded => "usable with caveats",
            Readiness::Broken => "broken",
        }
    }

    /// Suggested next step for this tier.
    pub fn remediation(self) -> &'static str {
        match self {
            Readiness::Ready => "environment is ready; configure API keys to enable every feature",
            Readiness::Degraded => "review the failed checks above and fix them before a full run",
            Readiness::Broken => "check the toolchain installation, dependencies, and API credentials",
        }
    }
}

/// Runner policy.
///
/// The pass threshold is an explicit configuration value: the basic suite
/// accepts an 85% pass rate while the api suite requires every check to
/// pass, and callers may override either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunnerConfig {
    pub pass_threshold: f64,
}

impl RunnerConfig {
    pub fn with_threshold(pass_threshold: f64) -> Self {
        RunnerConfig { pass_threshold }
    }

    /// Whether the report's pass rate satisfies this configuration. An empty
    /// report never satisfies it.
    pub fn meets_threshold(&self, report: &Report) -> bool {
        report
            .success_rate()
            .is_some_and(|rate| rate >= self.pass_threshold)
    }
}

/// Runs every check in registration order.
///
/// Failures are contained per check: a probe that returns an error is
/// recorded as failed and the run continues with the next check. There is no
/// short-circuiting and no cancellation of remaining checks.
pub fn run(logger: &Logger, checks: Vec<Check>) -> Report {
    let mut report = Report::default();

    for check in checks {
        let name = check.name;
        logger.info(&format!("checking {}...", name));

        let status = match (check.probe)(logger) {
            Ok(status) => status,
            Err(e) => CheckStatus::Failed(format!("{:#}", e)),
        };

        match &status {
            CheckStatus::Ok => {}
            CheckStatus::Warning(reason) => logger.warn(&format!("{}: {}", name, reason)),
            CheckStatus::Failed(reason) => logger.error(&format!("{}: {}", name, reason)),
        }

        report.push(CheckRecord {
            name: name.to_string(),
            passed: status.passed(),
            detail: status.detail(),
        });
    }

    report
}

/// Prints the per-check summary, the aggregate pass rate, and the readiness
/// verdict with its remediation suggestion.
pub fn print_summary(logger: &Logger, report: &Report) {
    logger.info("============================================================");
    logger.info(&format!("{}Check results:{}", BOLD, RESET));

    for record in report.records() {
        let line = if record.passed {
            format!("  {}\u{2713}{} {}: passed", GREEN, RESET, record.name)
        } else {
            format!("  {}\u{2717}{} {}: failed", RED, RESET, record.name)
        };
        logger.info(&line);
        if let Some(detail) = &record.detail {
            logger.info(&format!("      {}", detail));
        }
    }

    let Some(rate) = report.success_rate() else {
        logger.warn("no checks were registered");
        return;
    };

    logger.info(&format!(
        "Pass rate: {:.1}% ({}/{})",
        rate * 100.0,
        report.passed_count(),
        report.total()
    ));

    let readiness = Readiness::classify(rate);
    let verdict = format!("verdict: {} - {}", readiness.label(), readiness.remediation());
    match readiness {
        Readiness::Ready => logger.info(&format!("{}{}{}", GREEN, verdict, RESET)),
        Readiness::Degraded => logger.warn(&format!("{}{}{}", YELLOW, verdict, RESET)),
        Readiness::Broken => logger.error(&format!("{}{}{}", RED, verdict, RESET)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Logger {
        Logger::plain()
    }

    #[test]
    fn report_has_one_entry_per_check_in_registration_order() {
        let checks = vec![
            Check::new("first", |_| Ok(CheckStatus::Ok)),
            Check::new("second", |_| Ok(CheckStatus::Warning("caveat".into()))),
            Check::new("third", |_| Ok(CheckStatus::Failed("broken".into()))),
        ];

        let report = run(&quiet(), checks);

        assert_eq!(report.total(), 3);
        let names: Vec<&str> = report.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn erroring_check_records_false_and_run_continues() {
        let checks = vec![
            Check::new("ok", |_| Ok(CheckStatus::Ok)),
            Check::new("blows-up", |_| anyhow::bail!("probe exploded")),
            Check::new("after", |_| Ok(CheckStatus::Ok)),
        ];

        let report = run(&quiet(), checks);

        assert_eq!(report.total(), 3);
        assert!(report.records()[0].passed);
        assert!(!report.records()[1].passed);
        assert!(
            report.records()[1]
                .detail
                .as_deref()
                .unwrap()
                .contains("probe exploded")
        );
        assert!(report.records()[2].passed);
    }

    #[test]
    fn warning_counts_as_passed() {
        let checks = vec![Check::new("warned", |_| {
            Ok(CheckStatus::Warning("optional capability missing".into()))
        })];

        let report = run(&quiet(), checks);

        assert!(report.records()[0].passed);
        assert_eq!(report.success_rate(), Some(1.0));
    }

    #[test]
    fn success_rate_is_passed_over_total() {
        let checks = vec![
            Check::new("a", |_| Ok(CheckStatus::Ok)),
            Check::new("b", |_| Ok(CheckStatus::Failed("no".into()))),
            Check::new("c", |_| Ok(CheckStatus::Ok)),
            Check::new("d", |_| Ok(CheckStatus::Ok)),
        ];

        let report = run(&quiet(), checks);

        assert_eq!(report.passed_count(), 3);
        assert_eq!(report.success_rate(), Some(0.75));
    }

    #[test]
    fn success_rate_is_undefined_for_empty_run() {
        let report = run(&quiet(), Vec::new());
        assert_eq!(report.total(), 0);
        assert_eq!(report.success_rate(), None);
        assert!(!RunnerConfig::with_threshold(0.0).meets_threshold(&report));
    }

    #[test]
    fn mixed_scenario_fails_under_both_threshold_policies() {
        // checks = [A: true, B: raises, C: false]
        let checks = vec![
            Check::new("A", |_| Ok(CheckStatus::Ok)),
            Check::new("B", |_| anyhow::bail!("boom")),
            Check::new("C", |_| Ok(CheckStatus::Failed("nope".into()))),
        ];

        let report = run(&quiet(), checks);

        let outcomes: Vec<bool> = report.records().iter().map(|r| r.passed).collect();
        assert_eq!(outcomes, vec![true, false, false]);
        let rate = report.success_rate().unwrap();
        assert!((rate - 1.0 / 3.0).abs() < 1e-9);

        assert!(!RunnerConfig::with_threshold(0.85).meets_threshold(&report));
        assert!(!RunnerConfig::with_threshold(1.0).meets_threshold(&report));
    }

    #[test]
    fn threshold_comparison_is_inclusive() {
        let checks = vec![
            Check::new("a", |_| Ok(CheckStatus::Ok)),
            Check::new("b", |_| Ok(CheckStatus::Ok)),
            Check::new("c", |_| Ok(CheckStatus::Ok)),
            Check::new("d", |_| Ok(CheckStatus::Failed("no".into()))),
        ];

        let report = run(&quiet(), checks);

        assert!(RunnerConfig::with_threshold(0.75).meets_threshold(&report));
        assert!(!RunnerConfig::with_threshold(0.76).meets_threshold(&report));
    }

    #[test]
    fn readiness_tiers_use_fixed_boundaries() {
        assert_eq!(Readiness::classify(1.0), Readiness::Ready);
        assert_eq!(Readiness::classify(0.85), Readiness::Ready);
        assert_eq!(Readiness::classify(0.84), Readiness::Degraded);
        assert_eq!(Readiness::classify(0.70), Readiness::Degraded);
        assert_eq!(Readiness::classify(0.69), Readiness::Broken);
        assert_eq!(Readiness::classify(0.0), Readiness::Broken);
    }

    #[test]
    fn readiness_labels_and_remediations_are_nonempty() {
        for tier in [Readiness::Ready, Readiness::Degraded, Readiness::Broken] {
            assert!(!tier.label().is_empty());
            assert!(!tier.remediation().is_empty());
        }
    }

    #[test]
    fn all_passed_reflects_the_records() {
        let passing = run(&quiet(), vec![Check::new("a", |_| Ok(CheckStatus::Ok))]);
        assert!(passing.all_passed());

        let failing = run(
            &quiet(),
            vec![Check::new("a", |_| Ok(CheckStatus::Failed("no".into())))],
        );
        assert!(!failing.all_passed());
    }
}

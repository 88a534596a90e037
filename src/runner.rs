//! Exercise runner
//!
//! Resolves a [`Selection`] against the registry, then feeds the chosen
//! exercises to a pool of worker threads through a crossbeam channel. Each
//! case runs under `catch_unwind`, so a panicking exercise is reported as a
//! failed case instead of taking the run down.

use crate::exercises::{Category, Exercise, ExerciseRegistry, TestCase};
use crate::report::{CaseOutcome, CaseStatus, ExerciseReport, RunReport};
use crossbeam_channel::unbounded;
use std::any::Any;
use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("Unknown exercise '{0}'")]
    UnknownExercise(String),

    #[error("A runner worker thread panicked")]
    WorkerPanicked,
}

pub type RunResult<T> = Result<T, RunError>;

/// Which exercises to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every exercise in an enabled category
    All,
    /// Exactly these exercises, whatever their category
    Names(Vec<String>),
    /// Every exercise in these categories
    Categories(Vec<Category>),
}

/// Runner configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Worker threads; 0 picks the available parallelism
    pub jobs: usize,
    /// Stop scheduling exercises after the first failure
    pub fail_fast: bool,
    /// Categories included by [`Selection::All`]
    pub enabled: Vec<Category>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            jobs: 0,
            fail_fast: false,
            enabled: Category::all().to_vec(),
        }
    }
}

pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Resolve a selection to exercises ordered by id. Unknown names fail the
    /// whole selection before anything runs.
    pub fn resolve<'r>(
        &self,
        registry: &'r ExerciseRegistry,
        selection: &Selection,
    ) -> RunResult<Vec<&'r Exercise>> {
        let mut selected: Vec<&Exercise> = match selection {
            Selection::All => registry
                .list()
                .into_iter()
                .filter(|e| self.config.enabled.contains(&e.category))
                .collect(),
            Selection::Names(names) => {
                let mut seen = BTreeSet::new();
                let mut out = Vec::with_capacity(names.len());
                for name in names {
                    let exercise = registry
                        .get_by_name(name)
                        .ok_or_else(|| RunError::UnknownExercise(name.clone()))?;
                    if seen.insert(exercise.id) {
                        out.push(exercise);
                    }
                }
                out
            }
            Selection::Categories(categories) => registry
                .list()
                .into_iter()
                .filter(|e| categories.contains(&e.category))
                .collect(),
        };
        selected.sort_by_key(|e| e.id);
        Ok(selected)
    }

    /// Run the selected exercises and collect a report ordered by id.
    pub fn run(&self, registry: &ExerciseRegistry, selection: &Selection) -> RunResult<RunReport> {
        let selected = self.resolve(registry, selection)?;
        let workers = self.worker_count(selected.len());
        let fail_fast = self.config.fail_fast;
        tracing::info!(exercises = selected.len(), workers, fail_fast, "starting run");

        let started = Instant::now();
        let (job_tx, job_rx) = unbounded::<&Exercise>();
        let (done_tx, done_rx) = unbounded::<ExerciseReport>();
        for exercise in &selected {
            // the receiver is alive until the scope below ends
            let _ = job_tx.send(*exercise);
        }
        drop(job_tx);

        let stop = AtomicBool::new(false);
        crossbeam::scope(|s| {
            for worker in 0..workers {
                let job_rx = job_rx.clone();
                let done_tx = done_tx.clone();
                let stop = &stop;
                s.spawn(move |_| {
                    for exercise in job_rx.iter() {
                        if stop.load(Ordering::Acquire) {
                            continue;
                        }
                        let report = run_exercise(exercise);
                        tracing::debug!(
                            worker,
                            exercise = %exercise.name,
                            passed = report.cases_passed(),
                            elapsed_us = report.elapsed_us,
                            "exercise finished"
                        );
                        if !report.is_success() {
                            tracing::warn!(exercise = %exercise.name, "exercise failed");
                            if fail_fast {
                                stop.store(true, Ordering::Release);
                            }
                        }
                        if done_tx.send(report).is_err() {
                            break;
                        }
                    }
                });
            }
        })
        .map_err(|_| RunError::WorkerPanicked)?;
        drop(done_tx);

        let reports: Vec<ExerciseReport> = done_rx.iter().collect();
        let finished: BTreeSet<u32> = reports.iter().map(|r| r.id).collect();
        let skipped: Vec<String> = selected
            .iter()
            .filter(|e| !finished.contains(&e.id))
            .map(|e| e.name.clone())
            .collect();

        let report = RunReport::new(reports, skipped, started.elapsed().as_micros() as u64);
        tracing::info!(
            passed = report.summary.exercises_passed,
            total = report.summary.exercises,
            skipped = report.summary.skipped,
            elapsed_us = report.summary.elapsed_us,
            "run complete"
        );
        Ok(report)
    }

    fn worker_count(&self, exercises: usize) -> usize {
        let jobs = if self.config.jobs == 0 {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1)
        } else {
            self.config.jobs
        };
        jobs.min(exercises).max(1)
    }
}

/// Run every case of one exercise.
pub fn run_exercise(exercise: &Exercise) -> ExerciseReport {
    let started = Instant::now();
    let cases = exercise
        .cases
        .iter()
        .enumerate()
        .map(|(index, case)| run_case(exercise, index, case))
        .collect();
    ExerciseReport {
        id: exercise.id,
        name: exercise.name.clone(),
        category: exercise.category,
        cases,
        elapsed_us: started.elapsed().as_micros() as u64,
    }
}

fn run_case(exercise: &Exercise, index: usize, case: &TestCase) -> CaseOutcome {
    let (status, actual, error) =
        match panic::catch_unwind(AssertUnwindSafe(|| exercise.run_case(case))) {
            Ok(Ok(actual)) if actual == case.expected => (CaseStatus::Passed, Some(actual), None),
            Ok(Ok(actual)) => (CaseStatus::Mismatch, Some(actual), None),
            Ok(Err(e)) => (CaseStatus::Error, None, Some(e.to_string())),
            Err(payload) => (CaseStatus::Panic, None, Some(panic_message(payload.as_ref()))),
        };
    CaseOutcome {
        index,
        status,
        input: case.input.clone(),
        expected: case.expected.clone(),
        actual,
        error,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::{case, fallible, typed};
    use serde_json::json;

    fn sample_registry() -> ExerciseRegistry {
        let mut registry = ExerciseRegistry::new();
        registry
            .register(
                "double",
                "",
                Category::Numeric,
                (0..5).map(|i| case(json!(i), json!(i * 2))).collect(),
                typed(|n: i64| n * 2),
            )
            .unwrap();
        registry
            .register(
                "off_by_one",
                "",
                Category::Numeric,
                (0..5).map(|i| case(json!(i), json!(i))).collect(),
                typed(|n: i64| if n == 3 { n + 1 } else { n }),
            )
            .unwrap();
        registry
            .register(
                "panics",
                "",
                Category::Strings,
                (0..5).map(|i| case(json!(i), json!(i))).collect(),
                typed(|n: i64| {
                    if n == 4 {
                        panic!("boom");
                    }
                    n
                }),
            )
            .unwrap();
        registry
            .register(
                "errors",
                "",
                Category::Sorting,
                (0..5).map(|i| case(json!(i), json!(i))).collect(),
                fallible(|n: i64| if n == 0 { Err("zero") } else { Ok(n) }),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_run_all_reports_every_status() {
        let registry = sample_registry();
        let runner = Runner::new(RunnerConfig {
            jobs: 2,
            ..Default::default()
        });
        let report = runner.run(&registry, &Selection::All).unwrap();

        let names: Vec<&str> = report.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["double", "off_by_one", "panics", "errors"]);
        assert!(report.exercises[0].is_success());
        assert_eq!(report.exercises[1].cases[3].status, CaseStatus::Mismatch);
        assert_eq!(report.exercises[2].cases[4].status, CaseStatus::Panic);
        assert_eq!(report.exercises[2].cases[4].error.as_deref(), Some("boom"));
        assert_eq!(report.exercises[3].cases[0].status, CaseStatus::Error);
        assert_eq!(report.summary.cases_passed, 17);
        assert!(!report.is_success());
    }

    #[test]
    fn test_selection_by_name_and_category() {
        let registry = sample_registry();
        let runner = Runner::new(RunnerConfig::default());

        let names = Selection::Names(vec!["errors".into(), "double".into(), "double".into()]);
        let picked: Vec<u32> = runner
            .resolve(&registry, &names)
            .unwrap()
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(picked, [1, 4]);

        let numeric = Selection::Categories(vec![Category::Numeric]);
        assert_eq!(runner.resolve(&registry, &numeric).unwrap().len(), 2);

        assert_eq!(
            runner
                .resolve(&registry, &Selection::Names(vec!["nope".into()]))
                .unwrap_err(),
            RunError::UnknownExercise("nope".into())
        );
    }

    #[test]
    fn test_disabled_categories_only_affect_all() {
        let registry = sample_registry();
        let runner = Runner::new(RunnerConfig {
            enabled: vec![Category::Numeric],
            ..Default::default()
        });
        assert_eq!(runner.resolve(&registry, &Selection::All).unwrap().len(), 2);
        let explicit = Selection::Names(vec!["panics".into()]);
        assert_eq!(runner.resolve(&registry, &explicit).unwrap().len(), 1);
    }

    #[test]
    fn test_fail_fast_single_worker_skips_the_rest() {
        let registry = sample_registry();
        let runner = Runner::new(RunnerConfig {
            jobs: 1,
            fail_fast: true,
            ..Default::default()
        });
        let report = runner.run(&registry, &Selection::All).unwrap();
        assert_eq!(report.exercises.len(), 2);
        assert_eq!(report.skipped, ["panics", "errors"]);
        assert!(!report.is_success());
    }

    #[test]
    fn test_empty_selection() {
        let registry = sample_registry();
        let runner = Runner::new(RunnerConfig::default());
        let report = runner
            .run(&registry, &Selection::Categories(vec![Category::Crypto]))
            .unwrap();
        assert!(report.exercises.is_empty());
        assert!(report.is_success());
    }
}

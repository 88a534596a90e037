//! Run reports
//!
//! Plain data produced by the runner: one [`CaseOutcome`] per case, grouped
//! into an [`ExerciseReport`] per exercise and a [`RunReport`] per run.
//! Everything serializes with serde for `--format json`.

use crate::exercises::Category;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// How a report is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}' (expected text or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    /// Output equals the expected value
    Passed,
    /// Output differs from the expected value
    Mismatch,
    /// The exercise returned an error
    Error,
    /// The exercise panicked
    Panic,
}

/// Result of running a single case
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub index: usize,
    pub status: CaseStatus,
    pub input: Value,
    pub expected: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.status == CaseStatus::Passed
    }
}

/// Result of running every case of one exercise
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseReport {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub cases: Vec<CaseOutcome>,
    pub elapsed_us: u64,
}

impl ExerciseReport {
    pub fn cases_passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed()).count()
    }

    pub fn is_success(&self) -> bool {
        self.cases.iter().all(CaseOutcome::passed)
    }
}

/// Totals over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub exercises: usize,
    pub exercises_passed: usize,
    pub cases: usize,
    pub cases_passed: usize,
    pub skipped: usize,
    pub elapsed_us: u64,
}

/// Result of a run, ordered by exercise id
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub summary: RunSummary,
    pub exercises: Vec<ExerciseReport>,
    /// Selected exercises that never ran because of fail-fast
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl RunReport {
    pub fn new(mut exercises: Vec<ExerciseReport>, skipped: Vec<String>, elapsed_us: u64) -> Self {
        exercises.sort_by_key(|e| e.id);
        let summary = RunSummary {
            exercises: exercises.len(),
            exercises_passed: exercises.iter().filter(|e| e.is_success()).count(),
            cases: exercises.iter().map(|e| e.cases.len()).sum(),
            cases_passed: exercises.iter().map(ExerciseReport::cases_passed).sum(),
            skipped: skipped.len(),
            elapsed_us,
        };
        Self {
            summary,
            exercises,
            skipped,
        }
    }

    /// True when every exercise ran and every case passed
    pub fn is_success(&self) -> bool {
        self.skipped.is_empty() && self.exercises.iter().all(ExerciseReport::is_success)
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for exercise in &self.exercises {
            let tag = if exercise.is_success() { "PASS" } else { "FAIL" };
            let _ = writeln!(
                out,
                "[{}] {:<32} {:<12} {}/{} ({})",
                tag,
                exercise.name,
                exercise.category,
                exercise.cases_passed(),
                exercise.cases.len(),
                format_micros(exercise.elapsed_us)
            );
            for case in exercise.cases.iter().filter(|c| !c.passed()) {
                let _ = writeln!(out, "    case {}: {}", case.index + 1, describe_failure(case));
            }
        }

        let s = &self.summary;
        let _ = writeln!(
            out,
            "\n{}/{} exercises passed, {}/{} cases passed in {}",
            s.exercises_passed,
            s.exercises,
            s.cases_passed,
            s.cases,
            format_micros(s.elapsed_us)
        );
        if !self.skipped.is_empty() {
            let _ = writeln!(out, "skipped after failure: {}", self.skipped.join(", "));
        }
        out
    }
}

fn describe_failure(case: &CaseOutcome) -> String {
    match case.status {
        CaseStatus::Passed => "passed".to_string(),
        CaseStatus::Mismatch => format!(
            "input {} expected {} got {}",
            case.input,
            case.expected,
            case.actual.as_ref().unwrap_or(&Value::Null)
        ),
        CaseStatus::Error => format!(
            "input {} failed: {}",
            case.input,
            case.error.as_deref().unwrap_or("unknown error")
        ),
        CaseStatus::Panic => format!(
            "input {} panicked: {}",
            case.input,
            case.error.as_deref().unwrap_or("unknown panic")
        ),
    }
}

fn format_micros(us: u64) -> String {
    if us >= 1_000_000 {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    } else if us >= 1_000 {
        format!("{:.2}ms", us as f64 / 1_000.0)
    } else {
        format!("{}us", us)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome(index: usize, status: CaseStatus) -> CaseOutcome {
        CaseOutcome {
            index,
            status,
            input: json!(index),
            expected: json!(index * 2),
            actual: Some(json!(index * 3)),
            error: None,
        }
    }

    fn exercise(id: u32, name: &str, statuses: &[CaseStatus]) -> ExerciseReport {
        ExerciseReport {
            id,
            name: name.to_string(),
            category: Category::Numeric,
            cases: statuses
                .iter()
                .enumerate()
                .map(|(i, &s)| outcome(i, s))
                .collect(),
            elapsed_us: 1500,
        }
    }

    #[test]
    fn test_summary_and_ordering() {
        let report = RunReport::new(
            vec![
                exercise(2, "b", &[CaseStatus::Passed, CaseStatus::Mismatch]),
                exercise(1, "a", &[CaseStatus::Passed, CaseStatus::Passed]),
            ],
            vec![],
            2000,
        );
        assert_eq!(report.exercises[0].name, "a");
        assert_eq!(report.summary.exercises, 2);
        assert_eq!(report.summary.exercises_passed, 1);
        assert_eq!(report.summary.cases, 4);
        assert_eq!(report.summary.cases_passed, 3);
        assert!(!report.is_success());
    }

    #[test]
    fn test_skipped_is_not_success() {
        let report = RunReport::new(
            vec![exercise(1, "a", &[CaseStatus::Passed])],
            vec!["b".to_string()],
            10,
        );
        assert!(!report.is_success());
        assert!(report.render_text().contains("skipped after failure: b"));
    }

    #[test]
    fn test_render_text_lists_failures() {
        let report = RunReport::new(
            vec![exercise(1, "double", &[CaseStatus::Passed, CaseStatus::Mismatch])],
            vec![],
            10,
        );
        let text = report.render_text();
        assert!(text.contains("[FAIL] double"));
        assert!(text.contains("case 2: input 1 expected 2 got 3"));
        assert!(text.contains("0/1 exercises passed, 1/2 cases passed"));
    }

    #[test]
    fn test_render_json() {
        let report = RunReport::new(vec![exercise(1, "a", &[CaseStatus::Passed])], vec![], 10);
        let json: Value = serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["summary"]["cases_passed"], 1);
        assert_eq!(json["exercises"][0]["category"], "numeric");
        assert_eq!(json["exercises"][0]["cases"][0]["status"], "passed");
        assert!(json.get("skipped").is_none());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_micros() {
        assert_eq!(format_micros(12), "12us");
        assert_eq!(format_micros(1500), "1.50ms");
        assert_eq!(format_micros(2_500_000), "2.50s");
    }
}

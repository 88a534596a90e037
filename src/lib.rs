#![recursion_limit = "256"]
//! Katas - small programming exercises with their own test cases
//!
//! A flat collection of independent exercises: sorting, searching, graph
//! traversal, string processing, number theory, dynamic programming, data
//! structures, basic cryptography, secure-coding helpers and classroom
//! concurrency puzzles. Every exercise is one function or tiny type paired
//! with exactly five literal test cases.
//!
//! # Layout
//!
//! - **`katas-algo`**: dependency-free textbook algorithms (re-exported as [`algo`])
//! - **[`crypto`]**, **[`secure`]**, **[`concurrency`]**: exercises that need the
//!   crate's third-party stack (ring, argon2, regex, crossbeam, parking_lot)
//! - **[`exercises`]**: the catalog pairing every exercise with its cases
//! - **[`runner`]** / **[`report`]**: execute cases on a worker pool and report
//! - **[`config`]** / **[`logging`]**: `katas.toml` and tracing setup for the CLI
//!
//! # Example
//!
//! ```rust
//! use katas::{ExerciseRegistry, Runner, RunnerConfig, Selection};
//!
//! let registry = ExerciseRegistry::builtin().unwrap();
//! let runner = Runner::new(RunnerConfig::default());
//! let report = runner
//!     .run(&registry, &Selection::Names(vec!["heap_sort".into()]))
//!     .unwrap();
//!
//! assert!(report.is_success());
//! assert_eq!(report.summary.cases, 5);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   kata CLI      │  clap, katas.toml, tracing-subscriber
//! └────────┬────────┘
//!          │ Selection
//!          ▼
//! ┌─────────────────┐
//! │   Runner        │  crossbeam worker pool, catch_unwind per case
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Registry      │  name -> id -> Exercise { cases, func }
//! └────────┬────────┘
//!          │
//!     ┌────┴──────────────┐
//!     ▼                   ▼
//! ┌───────────┐  ┌──────────────────────────┐
//! │katas-algo │  │ crypto / secure / threads│
//! └───────────┘  └──────────────────────────┘
//! ```

#![warn(clippy::all)]

pub mod concurrency;
pub mod config;
pub mod crypto;
pub mod exercises;
pub mod logging;
pub mod report;
pub mod runner;
pub mod secure;

pub use katas_algo as algo;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, KatasConfig};
pub use exercises::{
    Category, Exercise, ExerciseError, ExerciseFn, ExerciseRegistry, RegistryError, TestCase,
    CASES_PER_EXERCISE,
};
pub use report::{CaseOutcome, CaseStatus, ExerciseReport, OutputFormat, RunReport, RunSummary};
pub use runner::{RunError, Runner, RunnerConfig, Selection};

// Exercise implementations outside katas-algo
pub use concurrency::{ConcurrencyError, FooBar, H2o, PrintInOrder, Semaphore, ZeroEvenOdd};
pub use crypto::{CryptoError, PasswordHasher};
pub use secure::ValidationError;

//! Exercise Catalog
//!
//! Every exercise is a small function paired with exactly five literal test
//! cases. Exercises never call each other; the registry only gives them ids,
//! names and categories so the runner can find and execute them.
//!
//! # Architecture
//!
//! ```text
//! kata run heap_sort
//!          |
//!          v
//! Registry:   "heap_sort" -> ID 1
//!          |
//!          v
//! Exercise:   func(case.input) -> value, compared with case.expected
//! ```
//!
//! Inputs and outputs travel as `serde_json::Value` so one runner can drive
//! exercises with unrelated signatures. [`typed`] and [`fallible`] adapt a
//! plain Rust function to that shape.
//!
//! # Categories
//!
//! | Category | Source |
//! |----------|--------|
//! | sorting, searching, graph, strings, numeric, dynamic, collections | `katas-algo` |
//! | crypto | [`crate::crypto`] |
//! | secure | [`crate::secure`] |
//! | concurrency | [`crate::concurrency`] |

// Submodules - each registers the exercises of one category
pub mod collections;
pub mod concurrency;
pub mod crypto;
pub mod dynamic;
pub mod graph;
pub mod numeric;
pub mod searching;
pub mod secure;
pub mod sorting;
pub mod strings;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Number of literal cases every exercise carries.
pub const CASES_PER_EXERCISE: usize = 5;

// =============================================================================
// Errors
// =============================================================================

/// Failure while executing a single case.
#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error("Invalid input: {0}")]
    InvalidInput(serde_json::Error),

    #[error("Unserializable output: {0}")]
    Output(serde_json::Error),

    #[error("Exercise failed: {0}")]
    Failed(String),
}

/// Failure while building the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Exercise '{0}' is already registered")]
    Duplicate(String),

    #[error("Exercise '{name}' has {got} cases, expected {expected}")]
    CaseCount {
        name: String,
        got: usize,
        expected: usize,
    },
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

// =============================================================================
// Category
// =============================================================================

/// Category of exercise for organization and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Searching,
    Graph,
    Strings,
    Numeric,
    Dynamic,
    Collections,
    Crypto,
    Secure,
    Concurrency,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Sorting,
            Category::Searching,
            Category::Graph,
            Category::Strings,
            Category::Numeric,
            Category::Dynamic,
            Category::Collections,
            Category::Crypto,
            Category::Secure,
            Category::Concurrency,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
            Category::Graph => "graph",
            Category::Strings => "strings",
            Category::Numeric => "numeric",
            Category::Dynamic => "dynamic",
            Category::Collections => "collections",
            Category::Crypto => "crypto",
            Category::Secure => "secure",
            Category::Concurrency => "concurrency",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Category::all().iter().map(Category::as_str).collect();
                format!("unknown category '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

// =============================================================================
// Test Cases & Exercise Functions
// =============================================================================

/// One literal input/expected-output pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: Value,
    pub expected: Value,
}

/// Build a [`TestCase`]; usually called with `serde_json::json!` literals.
pub fn case(input: Value, expected: Value) -> TestCase {
    TestCase { input, expected }
}

/// Exercise function signature: input -> Result<output, error>
pub type ExerciseFn = Arc<dyn Fn(&Value) -> Result<Value, ExerciseError> + Send + Sync>;

/// Adapt an infallible function: the input is deserialized into `I` and the
/// returned `O` serialized back.
///
/// Functions whose *expected* behaviour includes an error should return a
/// `Result` here: it serializes as `{"Ok": ..}` / `{"Err": ..}` and the error
/// becomes part of the checked output.
pub fn typed<I, O, F>(f: F) -> ExerciseFn
where
    I: DeserializeOwned,
    O: Serialize,
    F: Fn(I) -> O + Send + Sync + 'static,
{
    Arc::new(move |input: &Value| {
        let args: I = serde_json::from_value(input.clone()).map_err(ExerciseError::InvalidInput)?;
        serde_json::to_value(f(args)).map_err(ExerciseError::Output)
    })
}

/// Adapt a function whose errors mean the case could not be evaluated at all.
pub fn fallible<I, O, E, F>(f: F) -> ExerciseFn
where
    I: DeserializeOwned,
    O: Serialize,
    E: fmt::Display,
    F: Fn(I) -> Result<O, E> + Send + Sync + 'static,
{
    Arc::new(move |input: &Value| {
        let args: I = serde_json::from_value(input.clone()).map_err(ExerciseError::InvalidInput)?;
        let out = f(args).map_err(|e| ExerciseError::Failed(e.to_string()))?;
        serde_json::to_value(out).map_err(ExerciseError::Output)
    })
}

/// A registered exercise
pub struct Exercise {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub cases: Vec<TestCase>,
    pub func: ExerciseFn,
}

impl Exercise {
    /// Evaluate one case. Comparing against `case.expected` is the caller's job.
    pub fn run_case(&self, case: &TestCase) -> Result<Value, ExerciseError> {
        (self.func)(&case.input)
    }
}

impl fmt::Debug for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exercise")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("cases", &self.cases.len())
            .finish()
    }
}

// =============================================================================
// Exercise Registry
// =============================================================================

#[derive(Default)]
pub struct ExerciseRegistry {
    by_id: HashMap<u32, Exercise>,
    by_name: HashMap<String, u32>,
    next_id: u32,
}

impl ExerciseRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            by_name: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a registry with every built-in exercise registered
    pub fn builtin() -> RegistryResult<Self> {
        let mut registry = Self::new();
        registry.register_builtins()?;
        tracing::debug!(exercises = registry.len(), "built-in catalog registered");
        Ok(registry)
    }

    /// Register an exercise and return its ID
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        category: Category,
        cases: Vec<TestCase>,
        func: ExerciseFn,
    ) -> RegistryResult<u32> {
        if self.by_name.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        if cases.len() != CASES_PER_EXERCISE {
            return Err(RegistryError::CaseCount {
                name: name.to_string(),
                got: cases.len(),
                expected: CASES_PER_EXERCISE,
            });
        }

        // `Default` leaves next_id at 0; ids start at 1
        let id = self.next_id.max(1);
        self.next_id = id + 1;

        self.by_name.insert(name.to_string(), id);
        self.by_id.insert(
            id,
            Exercise {
                id,
                name: name.to_string(),
                description: description.to_string(),
                category,
                cases,
                func,
            },
        );
        tracing::trace!(id, name, %category, "registered exercise");
        Ok(id)
    }

    pub fn get(&self, id: u32) -> Option<&Exercise> {
        self.by_id.get(&id)
    }

    pub fn get_id(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Exercise> {
        self.by_name.get(name).and_then(|id| self.by_id.get(id))
    }

    /// All exercises ordered by id (registration order)
    pub fn list(&self) -> Vec<&Exercise> {
        let mut all: Vec<&Exercise> = self.by_id.values().collect();
        all.sort_by_key(|e| e.id);
        all
    }

    pub fn list_by_category(&self, category: Category) -> Vec<&Exercise> {
        self.list()
            .into_iter()
            .filter(|e| e.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Register all built-in exercises
    fn register_builtins(&mut self) -> RegistryResult<()> {
        sorting::register_sorting(self)?;
        searching::register_searching(self)?;
        graph::register_graph(self)?;
        strings::register_strings(self)?;
        numeric::register_numeric(self)?;
        dynamic::register_dynamic(self)?;
        collections::register_collections(self)?;
        crypto::register_crypto(self)?;
        secure::register_secure(self)?;
        concurrency::register_concurrency(self)?;
        Ok(())
    }
}

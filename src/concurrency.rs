//! Classroom concurrency puzzles
//!
//! Each puzzle owns its threads from spawn to join: nothing outlives the call
//! that started it and no state is shared between puzzles.
//!
//! Ordering is enforced with counting semaphores built on `parking_lot`
//! primitives; the producer/consumer and parallel-sum puzzles use `crossbeam`
//! channels and scoped threads.

use crossbeam_channel::bounded;
use parking_lot::{Condvar, Mutex};
use std::sync::{Arc, Barrier};
use std::thread;
use thiserror::Error;

/// Errors from puzzle setup or execution
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConcurrencyError {
    #[error("Invalid start order {0:?}: expected a permutation of 1, 2, 3")]
    InvalidOrder(Vec<u8>),

    #[error("Invalid atom '{0}': expected 'H' or 'O'")]
    InvalidAtom(char),

    #[error("Cannot form water from {hydrogen} hydrogen and {oxygen} oxygen atoms")]
    Unbalanced { hydrogen: usize, oxygen: usize },

    #[error("At least one consumer is required")]
    NoConsumers,

    #[error("A worker thread panicked")]
    WorkerPanicked,
}

/// Result type for concurrency puzzles.
pub type ConcurrencyResult<T> = Result<T, ConcurrencyError>;

// ============================================================================
// Semaphore
// ============================================================================

/// Counting semaphore.
#[derive(Debug)]
pub struct Semaphore {
    permits: Mutex<usize>,
    cvar: Condvar,
}

impl Semaphore {
    pub fn new(permits: usize) -> Self {
        Self {
            permits: Mutex::new(permits),
            cvar: Condvar::new(),
        }
    }

    /// Block until a permit is available, then take it.
    pub fn acquire(&self) {
        let mut permits = self.permits.lock();
        while *permits == 0 {
            self.cvar.wait(&mut permits);
        }
        *permits -= 1;
    }

    /// Take a permit if one is available right now.
    pub fn try_acquire(&self) -> bool {
        let mut permits = self.permits.lock();
        if *permits == 0 {
            return false;
        }
        *permits -= 1;
        true
    }

    pub fn release(&self) {
        let mut permits = self.permits.lock();
        *permits += 1;
        self.cvar.notify_one();
    }

    pub fn available(&self) -> usize {
        *self.permits.lock()
    }
}

/// Join every handle, then report whether any of them panicked.
///
/// The semaphore puzzles only reach this if no thread panics while a peer
/// waits on it: a panicking worker never releases its permit, so the peer
/// blocks forever.
fn join_all(handles: Vec<thread::JoinHandle<()>>) -> ConcurrencyResult<()> {
    let mut panicked = false;
    for handle in handles {
        panicked |= handle.join().is_err();
    }
    if panicked {
        return Err(ConcurrencyError::WorkerPanicked);
    }
    Ok(())
}

fn take_output(output: Arc<Mutex<String>>) -> String {
    let mut guard = output.lock();
    std::mem::take(&mut *guard)
}

// ============================================================================
// Zero / Even / Odd
// ============================================================================

/// Three threads print `0 1 0 2 0 3 ... 0 n`: one prints zeros, one odd
/// numbers and one even numbers.
#[derive(Debug, Clone, Copy)]
pub struct ZeroEvenOdd {
    n: u32,
}

impl ZeroEvenOdd {
    pub fn new(n: u32) -> Self {
        Self { n }
    }

    /// Run the three threads and return everything they printed, concatenated.
    pub fn run(&self) -> ConcurrencyResult<String> {
        let n = self.n;
        let zero = Arc::new(Semaphore::new(1));
        let odd = Arc::new(Semaphore::new(0));
        let even = Arc::new(Semaphore::new(0));
        let output = Arc::new(Mutex::new(String::new()));

        let zero_thread = {
            let (zero, odd, even, output) = (zero.clone(), odd.clone(), even.clone(), output.clone());
            thread::spawn(move || {
                for i in 1..=n {
                    zero.acquire();
                    output.lock().push('0');
                    if i % 2 == 1 {
                        odd.release();
                    } else {
                        even.release();
                    }
                }
            })
        };

        let odd_thread = {
            let (zero, odd, output) = (zero.clone(), odd.clone(), output.clone());
            thread::spawn(move || {
                for i in (1..=n).step_by(2) {
                    odd.acquire();
                    output.lock().push_str(&i.to_string());
                    zero.release();
                }
            })
        };

        let even_thread = {
            let (zero, even, output) = (zero, even, output.clone());
            thread::spawn(move || {
                for i in (2..=n).step_by(2) {
                    even.acquire();
                    output.lock().push_str(&i.to_string());
                    zero.release();
                }
            })
        };

        join_all(vec![zero_thread, odd_thread, even_thread])?;
        Ok(take_output(output))
    }
}

// ============================================================================
// Foo / Bar
// ============================================================================

/// Two threads alternate so the output is "foobar" repeated `n` times.
#[derive(Debug, Clone, Copy)]
pub struct FooBar {
    n: u32,
}

impl FooBar {
    pub fn new(n: u32) -> Self {
        Self { n }
    }

    pub fn run(&self) -> ConcurrencyResult<String> {
        let n = self.n;
        let foo_turn = Arc::new(Semaphore::new(1));
        let bar_turn = Arc::new(Semaphore::new(0));
        let output = Arc::new(Mutex::new(String::new()));

        let foo = {
            let (foo_turn, bar_turn, output) = (foo_turn.clone(), bar_turn.clone(), output.clone());
            thread::spawn(move || {
                for _ in 0..n {
                    foo_turn.acquire();
                    output.lock().push_str("foo");
                    bar_turn.release();
                }
            })
        };
        let bar = {
            let output = output.clone();
            thread::spawn(move || {
                for _ in 0..n {
                    bar_turn.acquire();
                    output.lock().push_str("bar");
                    foo_turn.release();
                }
            })
        };

        join_all(vec![foo, bar])?;
        Ok(take_output(output))
    }
}

// ============================================================================
// Print In Order
// ============================================================================

/// Threads for "first", "second" and "third" are started in an arbitrary
/// order; the output is always "firstsecondthird".
pub struct PrintInOrder;

impl PrintInOrder {
    /// `order` lists which job (1, 2 or 3) each spawned thread runs.
    pub fn run(order: &[u8]) -> ConcurrencyResult<String> {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        if sorted != [1, 2, 3] {
            return Err(ConcurrencyError::InvalidOrder(order.to_vec()));
        }

        let second_ready = Arc::new(Semaphore::new(0));
        let third_ready = Arc::new(Semaphore::new(0));
        let output = Arc::new(Mutex::new(String::new()));

        let handles = order
            .iter()
            .map(|&job| {
                let second_ready = second_ready.clone();
                let third_ready = third_ready.clone();
                let output = output.clone();
                thread::spawn(move || match job {
                    1 => {
                        output.lock().push_str("first");
                        second_ready.release();
                    }
                    2 => {
                        second_ready.acquire();
                        output.lock().push_str("second");
                        third_ready.release();
                    }
                    _ => {
                        third_ready.acquire();
                        output.lock().push_str("third");
                    }
                })
            })
            .collect();

        join_all(handles)?;
        Ok(take_output(output))
    }
}

// ============================================================================
// H2O
// ============================================================================

/// Building water: one thread per atom, and atoms leave in groups of exactly
/// two hydrogens and one oxygen.
#[derive(Debug, Default)]
pub struct H2o;

impl H2o {
    pub fn new() -> Self {
        Self
    }

    /// Release every atom of `water` (a string of 'H' and 'O') as its own
    /// thread. Returns the molecules in the order they were bonded; the atom
    /// order inside a molecule depends on scheduling.
    pub fn form(&self, water: &str) -> ConcurrencyResult<Vec<String>> {
        let mut hydrogen = 0;
        let mut oxygen = 0;
        for atom in water.chars() {
            match atom {
                'H' => hydrogen += 1,
                'O' => oxygen += 1,
                other => return Err(ConcurrencyError::InvalidAtom(other)),
            }
        }
        if hydrogen != 2 * oxygen {
            return Err(ConcurrencyError::Unbalanced { hydrogen, oxygen });
        }

        let h_slots = Arc::new(Semaphore::new(2));
        let o_slots = Arc::new(Semaphore::new(1));
        let bond = Arc::new(Barrier::new(3));
        let output = Arc::new(Mutex::new(String::new()));

        let handles = water
            .chars()
            .map(|atom| {
                let (h_slots, o_slots) = (h_slots.clone(), o_slots.clone());
                let bond = bond.clone();
                let output = output.clone();
                thread::spawn(move || {
                    let slots = if atom == 'H' { &h_slots } else { &o_slots };
                    slots.acquire();
                    output.lock().push(atom);
                    // the last atom through the barrier reopens all three slots
                    if bond.wait().is_leader() {
                        h_slots.release();
                        h_slots.release();
                        o_slots.release();
                    }
                })
            })
            .collect();

        join_all(handles)?;
        let atoms: Vec<char> = take_output(output).chars().collect();
        Ok(atoms.chunks(3).map(|m| m.iter().collect()).collect())
    }
}

/// Whether a molecule has exactly two hydrogens and one oxygen.
pub fn is_water(molecule: &str) -> bool {
    molecule.len() == 3
        && molecule.chars().filter(|&c| c == 'H').count() == 2
        && molecule.chars().filter(|&c| c == 'O').count() == 1
}

// ============================================================================
// Producer / Consumer
// ============================================================================

/// One producer sends `1..=items` through a bounded channel of `capacity`
/// slots; `consumers` threads drain it. Returns every consumed item, sorted.
pub fn producer_consumer(items: u64, capacity: usize, consumers: usize) -> ConcurrencyResult<Vec<u64>> {
    if consumers == 0 {
        return Err(ConcurrencyError::NoConsumers);
    }
    let (tx, rx) = bounded::<u64>(capacity);
    let consumed = Mutex::new(Vec::new());

    crossbeam::scope(|s| {
        s.spawn(move |_| {
            for item in 1..=items {
                if tx.send(item).is_err() {
                    break;
                }
            }
            // dropping `tx` disconnects the channel and ends the consumers
        });
        for _ in 0..consumers {
            let rx = rx.clone();
            let consumed = &consumed;
            s.spawn(move |_| {
                for item in rx.iter() {
                    consumed.lock().push(item);
                }
            });
        }
        drop(rx);
    })
    .map_err(|_| ConcurrencyError::WorkerPanicked)?;

    let mut consumed = consumed.into_inner();
    consumed.sort_unstable();
    Ok(consumed)
}

/// Sum `values` by splitting them across `workers` scoped threads.
/// Returns `None` on overflow. Zero workers is treated as one.
pub fn parallel_sum(values: &[u64], workers: usize) -> ConcurrencyResult<Option<u64>> {
    let workers = workers.max(1);
    let chunk = values.len().div_ceil(workers).max(1);

    let partials = crossbeam::scope(|s| {
        let handles: Vec<_> = values
            .chunks(chunk)
            .map(|part| {
                s.spawn(move |_| {
                    part.iter()
                        .try_fold(0u64, |acc, &v| acc.checked_add(v))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join())
            .collect::<Result<Vec<Option<u64>>, _>>()
    })
    .map_err(|_| ConcurrencyError::WorkerPanicked)?
    .map_err(|_| ConcurrencyError::WorkerPanicked)?;

    Ok(partials
        .into_iter()
        .try_fold(0u64, |acc, part| acc.checked_add(part?)))
}

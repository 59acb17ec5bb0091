//! Basic delegate example
//!
//! Binds free functions and methods, rebinds between instances, and times a
//! tight invocation loop against a direct call.
//!
//! # Environment Variables
//!
//! - `GVD_ITERATIONS=<n>` - Calls per timing loop (default 1000000)
//! - `GVD_VERBOSE=1` - Raise the log level to debug
//! - `GVD_LOG_LEVEL=debug` - Set log level (off, error, warn, info, debug, trace)

use std::cell::Cell;
use std::hint::black_box;
use std::ptr::NonNull;
use std::time::{Duration, Instant};

use gvdelegate::{env_get, env_get_bool, kdebug, kinfo, kwarn, set_log_level, LogLevel};
use gvdelegate::{Delegate, DelegateError};

/// Settings for the demo run
#[derive(Debug, Clone)]
struct DemoConfig {
    /// Calls per timing loop
    iterations: u64,

    /// Log at debug level
    verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            verbose: false,
        }
    }
}

impl DemoConfig {
    /// Defaults overridden by `GVD_ITERATIONS` and `GVD_VERBOSE`
    fn from_env() -> Self {
        let config = Self::default();
        let iterations = env_get("GVD_ITERATIONS", config.iterations);
        let verbose = env_get_bool("GVD_VERBOSE", config.verbose);
        config.iterations(iterations).verbose(verbose)
    }

    fn iterations(mut self, n: u64) -> Self {
        self.iterations = n.max(1);
        self
    }

    fn verbose(mut self, enable: bool) -> Self {
        self.verbose = enable;
        self
    }
}

fn add(a: u64, b: u64) -> u64 {
    a.wrapping_add(b)
}

fn mul(a: u64, b: u64) -> u64 {
    a.wrapping_mul(b)
}

struct Counter {
    name: &'static str,
    count: Cell<u64>,
}

impl Counter {
    fn new(name: &'static str) -> Self {
        Counter {
            name,
            count: Cell::new(0),
        }
    }

    fn increment(&self, n: u64) {
        self.count.set(self.count.get() + n);
        kdebug!("{} += {} -> {}", self.name, n, self.count.get());
    }
}

struct Histogram {
    buckets: [u32; 4],
}

impl Histogram {
    fn record(&mut self, value: u64) -> u32 {
        let bucket = &mut self.buckets[(value % 4) as usize];
        *bucket += 1;
        *bucket
    }
}

fn time_loop(iterations: u64, mut f: impl FnMut(u64) -> u64) -> Duration {
    let start = Instant::now();
    let mut acc = 0u64;
    for i in 0..iterations {
        acc = acc.wrapping_add(f(black_box(i)));
    }
    black_box(acc);
    start.elapsed()
}

// GVD_LOG_LEVEL=debug GVD_ITERATIONS=5000000 cargo run --release -p gvdelegate-basic
fn main() {
    println!("=== gvdelegate Basic Example ===\n");

    let config = DemoConfig::from_env();
    if config.verbose {
        set_log_level(LogLevel::Debug);
    }
    kdebug!("{:?}", config);

    // Free functions
    let mut op: Delegate<fn(u64, u64) -> u64> = Delegate::new();
    match op.try_call(2, 3) {
        Err(DelegateError::Empty) => kinfo!("unbound delegate refused the call"),
        other => kwarn!("unexpected result from empty delegate: {:?}", other),
    }

    op.connect(add);
    println!("add(2, 3)  = {}", op.call(2, 3));
    op.connect(mul);
    println!("mul(2, 3)  = {}", op.call(2, 3));

    // Methods, rebinding between instances
    let left = Counter::new("left");
    let right = Counter::new("right");

    let mut bump = Delegate::<fn(u64)>::from_method(&left, Counter::increment);
    bump.call(5);
    let on_left = bump;
    bump.connect_method(&right, Counter::increment);
    bump.call(3);

    println!("left={} right={}", left.count.get(), right.count.get());
    println!("same binding after rebind: {}", on_left == bump);

    // Exclusive access through a raw binding
    let mut histogram = Histogram { buckets: [0; 4] };
    let mut record: Delegate<fn(u64) -> u32> = Delegate::new();
    // SAFETY: histogram outlives `record` and is not touched until after the
    // last call through it.
    unsafe { record.connect_method_raw(NonNull::from(&mut histogram), Histogram::record) };
    for value in 0..10 {
        record.call(value);
    }
    record.reset();
    println!("histogram buckets = {:?}", histogram.buckets);

    // Timing
    let n = config.iterations;
    let sum = Delegate::<fn(u64, u64) -> u64>::from_fn(add);

    let direct = time_loop(n, |i| add(i, 1));
    let through = time_loop(n, |i| black_box(&sum).call(i, 1));

    kinfo!("{} calls: direct {:?}, delegate {:?}", n, direct, through);
    println!(
        "\nper call: direct {:.2}ns, delegate {:.2}ns",
        direct.as_nanos() as f64 / n as f64,
        through.as_nanos() as f64 / n as f64,
    );

    println!("\n=== Example Complete ===");
}

//! # gvdelegate
//!
//! Single-slot, non-owning delegate: one two-word value that holds either a
//! free function or a method bound to an instance, and invokes either through
//! the same call signature with a single indirect call. No allocation, no
//! vtable, no ownership of the bound instance.
//!
//! ## Modules
//!
//! - `delegate` - `Delegate` and the `Signature` trait
//! - `error` - Error types for checked invocation
//! - `kprint` - Kernel-style leveled logging macros
//! - `env` - Environment variable utilities
//!
//! ## Quick Start
//!
//! ```
//! use std::cell::Cell;
//! use gvdelegate::Delegate;
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! struct Counter {
//!     count: Cell<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self, n: i32) {
//!         self.count.set(self.count.get() + n);
//!     }
//! }
//!
//! let mut sum: Delegate<fn(i32, i32) -> i32> = Delegate::new();
//! assert!(sum.empty());
//! sum.connect(add);
//! assert_eq!(sum.call(2, 3), 5);
//! sum.reset();
//! assert!(sum.empty());
//!
//! let counter = Counter { count: Cell::new(0) };
//! let bump = Delegate::<fn(i32)>::from_method(&counter, Counter::increment);
//! bump.call(5);
//! assert_eq!(counter.count.get(), 5);
//! ```
//!
//! ## Compile-time checks
//!
//! A callable whose signature does not match is rejected when binding:
//!
//! ```compile_fail
//! use gvdelegate::Delegate;
//!
//! fn shout(s: String) -> String {
//!     s.to_uppercase()
//! }
//!
//! let mut d: Delegate<fn(i32) -> i32> = Delegate::new();
//! d.connect(shout);
//! ```
//!
//! So is binding a method on an instance that does not outlive the delegate:
//!
//! ```compile_fail
//! use gvdelegate::Delegate;
//!
//! struct Meter(u32);
//!
//! impl Meter {
//!     fn read(&self) -> u32 {
//!         self.0
//!     }
//! }
//!
//! let mut d: Delegate<fn() -> u32> = Delegate::new();
//! {
//!     let meter = Meter(7);
//!     d.connect_method(&meter, Meter::read);
//! }
//! d.call();
//! ```
//!
//! Callables carrying runtime state are rejected when the binding is built,
//! whether a capturing closure:
//!
//! ```compile_fail
//! use gvdelegate::Delegate;
//!
//! let k = 10;
//! let mut d: Delegate<fn(i32, i32) -> i32> = Delegate::new();
//! d.connect(move |a, b| a + b + k);
//! ```
//!
//! or a function pointer value, whose target is only known at runtime:
//!
//! ```compile_fail
//! use gvdelegate::Delegate;
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let f: fn(i32, i32) -> i32 = add;
//! let mut d: Delegate<fn(i32, i32) -> i32> = Delegate::new();
//! d.connect(f);
//! ```
//!
//! A zero-sized callable cannot outlive a lifetime it carries:
//!
//! ```compile_fail
//! use std::marker::PhantomData;
//! use gvdelegate::Delegate;
//!
//! fn brand<'b>(_: &'b i32) -> PhantomData<&'b i32> {
//!     PhantomData
//! }
//!
//! let mut d: Delegate<'static, fn(i32) -> i32> = Delegate::new();
//! let local = 5;
//! let token = brand(&local);
//! d.connect(move |x: i32| {
//!     let _token = token;
//!     x
//! });
//! ```
//!
//! Methods cannot be bound on zero-sized instances, since two of them may
//! share an address:
//!
//! ```compile_fail
//! use gvdelegate::Delegate;
//!
//! struct Unit;
//!
//! impl Unit {
//!     fn id(&self) -> u32 {
//!         1
//!     }
//! }
//!
//! let unit = Unit;
//! let d = Delegate::<fn() -> u32>::from_method(&unit, Unit::id);
//! d.call();
//! ```
//!
//! ## Feature Flags
//!
//! | Flag               | Effect |
//! |--------------------|--------|
//! | `debug-assertions` | `call_unchecked` panics on an empty delegate even in release builds |
//! | `debug-logging`    | Every bind and reset is traced with `ktrace!` |
//!
//! ## Environment Variables
//!
//! - `GVD_LOG_LEVEL=<level>` - off, error, warn, info, debug, trace
//! - `GVD_FLUSH_EPRINT=1` - Flush stderr after every log line

pub mod delegate;
pub mod env;
pub mod error;
pub mod kprint;

// Re-exports for convenience
pub use delegate::{Delegate, Signature};
pub use error::{DelegateError, DelegateResult};
pub use env::{env_get, env_get_bool, env_get_opt};
pub use kprint::{set_flush_enabled, set_log_level, LogLevel};

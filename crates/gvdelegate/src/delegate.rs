//! Single-slot delegate
//!
//! A `Delegate` is a fat function pointer: an opaque context pointer plus a
//! trampoline that turns the context back into the bound target and calls
//! it. The target's identity is not stored anywhere at runtime. It lives in
//! the type of the bound callable (a fn item or a non-capturing closure,
//! both zero-sized) and the trampoline is monomorphized for that type when
//! the delegate is connected.
//!
//! ```text
//! ┌──────────────────┬──────────────────────────────────────────┐
//! │ context: *const  │ trampoline: Option<unsafe fn(ctx, ..)>   │
//! │ null for free fn │ None when empty                          │
//! └──────────────────┴──────────────────────────────────────────┘
//!          │                          │
//!          └──────── passed to ───────┘──► target(instance?, args..)
//! ```
//!
//! Both fields are one word, so a delegate is two words, `Copy`, and never
//! allocates. Invoking it costs one indirect call whatever was bound.
//!
//! The delegate does not own the bound instance. Instances bound through
//! `connect_method` are borrowed for `'a`, so the borrow checker keeps them
//! alive. `connect_method_raw` hands that responsibility to the caller.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use crate::error::{DelegateError, DelegateResult};

mod sealed {
    pub trait Sealed {}
}

/// Function signature a delegate can be declared with
///
/// Implemented for `fn(A0, .., An) -> R` with up to eight arguments.
pub trait Signature: sealed::Sealed {
    /// Dispatcher stored in the delegate: `unsafe fn(context, args..) -> R`
    type Trampoline: Copy;

    /// Address of a dispatcher, used for identity comparison
    fn address(trampoline: Self::Trampoline) -> *const ();
}

/// Non-owning, single-slot handle to a free function or a bound method
///
/// `S` is the call signature, written as a function pointer type:
/// `Delegate<fn(i32, i32) -> i32>`.
///
/// Equality is identity of the binding (same context, same trampoline), not
/// equality of what the bound functions compute. Trampolines are generic
/// instantiations, so the same function bound from two different crates may
/// compare unequal.
///
/// A delegate holds a raw context pointer and is neither `Send` nor `Sync`.
pub struct Delegate<'a, S: Signature> {
    /// Bound instance, or null for free functions and empty delegates
    context: *const (),

    /// `None` iff nothing is bound
    trampoline: Option<S::Trampoline>,

    _marker: PhantomData<(&'a (), S)>,
}

impl<'a, S: Signature> Delegate<'a, S> {
    /// Create an empty delegate
    #[inline]
    pub const fn new() -> Self {
        Delegate {
            context: ptr::null(),
            trampoline: None,
            _marker: PhantomData,
        }
    }

    /// Check whether nothing is bound
    #[inline]
    pub fn empty(&self) -> bool {
        // context is null for free functions, only the trampoline decides
        self.trampoline.is_none()
    }

    /// Address of the bound instance (null for free functions or when empty)
    #[inline]
    pub fn context(&self) -> *const () {
        self.context
    }

    /// Drop the current binding
    ///
    /// The delegate can be connected again afterwards.
    #[inline]
    pub fn reset(&mut self) {
        #[cfg(feature = "debug-logging")]
        crate::ktrace!("delegate reset: context={:p}", self.context);

        self.context = ptr::null();
        self.trampoline = None;
    }

    /// Replace both halves of the binding at once
    #[inline]
    fn bind(&mut self, context: *const (), trampoline: S::Trampoline) {
        #[cfg(feature = "debug-logging")]
        crate::ktrace!(
            "delegate bound: context={:p} trampoline={:p}",
            context,
            S::address(trampoline)
        );

        *self = Delegate {
            context,
            trampoline: Some(trampoline),
            _marker: PhantomData,
        };
    }

    #[inline]
    fn identity(&self) -> (*const (), Option<*const ()>) {
        (self.context, self.trampoline.map(S::address))
    }
}

// Guard used by call_unchecked. Debug builds (or the debug-assertions
// feature) turn empty invocation into a panic, release builds check nothing.
cfg_if::cfg_if! {
    if #[cfg(any(debug_assertions, feature = "debug-assertions"))] {
        #[inline(always)]
        fn guard_bound(bound: bool) {
            if !bound {
                empty_invoked()
            }
        }
    } else {
        #[inline(always)]
        fn guard_bound(_bound: bool) {}
    }
}

#[cold]
#[inline(never)]
fn empty_invoked() -> ! {
    crate::kerror!("invoked an empty delegate");
    panic!("invoked an empty delegate")
}

/// Reject callables that carry runtime state
///
/// Fails at monomorphization time, so binding a function pointer value or a
/// capturing closure is a compile error rather than a runtime one.
#[inline(always)]
fn assert_stateless<F: Copy>(_callable: &F) {
    const {
        assert!(
            mem::size_of::<F>() == 0,
            "a delegate binds stateless callables only (fn items or non-capturing closures)"
        )
    }
}

/// Reject zero-sized instance types
///
/// Distinct zero-sized values may share one address, which would make
/// bindings to different instances indistinguishable.
#[inline(always)]
fn assert_addressable<T>(_instance: *const T) {
    const {
        assert!(
            mem::size_of::<T>() != 0,
            "a delegate cannot bind methods on zero-sized instances"
        )
    }
}

/// Materialize a stateless callable from its type alone
///
/// # Safety
///
/// `F` must be zero-sized and a value of `F` must have existed. Every
/// trampoline is instantiated by a `connect*` call that was handed one and
/// passed it through `assert_stateless`.
#[inline(always)]
unsafe fn conjure<F: Copy>() -> F {
    debug_assert_eq!(mem::size_of::<F>(), 0);
    NonNull::<F>::dangling().as_ptr().read()
}

macro_rules! impl_signature {
    ($($arg:ident: $ty:ident),*) => {
        impl<R $(, $ty)*> sealed::Sealed for fn($($ty),*) -> R {}

        impl<R $(, $ty)*> Signature for fn($($ty),*) -> R {
            type Trampoline = unsafe fn(*const () $(, $ty)*) -> R;

            #[inline]
            fn address(trampoline: Self::Trampoline) -> *const () {
                trampoline as *const ()
            }
        }

        impl<'a, R $(, $ty)*> Delegate<'a, fn($($ty),*) -> R> {
            /// Create a delegate bound to a free function
            #[inline]
            pub fn from_fn<F, O>(function: F) -> Self
            where
                F: Fn($($ty),*) -> O + Copy + 'a,
                O: Into<R>,
            {
                let mut delegate = Self::new();
                delegate.connect(function);
                delegate
            }

            /// Create a delegate bound to a method of `instance`
            #[inline]
            pub fn from_method<T, F, O>(instance: &'a T, method: F) -> Self
            where
                F: Fn(&T $(, $ty)*) -> O + Copy + 'a,
                O: Into<R>,
            {
                let mut delegate = Self::new();
                delegate.connect_method(instance, method);
                delegate
            }

            /// Bind a free function, replacing any previous binding
            ///
            /// `function` must be a fn item or a non-capturing closure. Its
            /// return value only has to convert into `R`.
            pub fn connect<F, O>(&mut self, function: F)
            where
                F: Fn($($ty),*) -> O + Copy + 'a,
                O: Into<R>,
            {
                unsafe fn trampoline<F, O, R $(, $ty)*>(_context: *const () $(, $arg: $ty)*) -> R
                where
                    F: Fn($($ty),*) -> O + Copy,
                    O: Into<R>,
                {
                    conjure::<F>()($($arg),*).into()
                }

                assert_stateless(&function);
                self.bind(ptr::null(), trampoline::<F, O, R $(, $ty)*>);
            }

            /// Bind `method` on `instance`, replacing any previous binding
            ///
            /// `method` is anything stateless taking `&T` first: a method
            /// path such as `Counter::get`, or a free function that wants the
            /// instance as a payload. The delegate borrows `instance` for `'a`.
            /// `T` must not be zero-sized: distinct zero-sized values can share
            /// an address, so their bindings could not be told apart.
            pub fn connect_method<T, F, O>(&mut self, instance: &'a T, method: F)
            where
                F: Fn(&T $(, $ty)*) -> O + Copy + 'a,
                O: Into<R>,
            {
                unsafe fn trampoline<T, F, O, R $(, $ty)*>(context: *const () $(, $arg: $ty)*) -> R
                where
                    F: Fn(&T $(, $ty)*) -> O + Copy,
                    O: Into<R>,
                {
                    let instance = &*context.cast::<T>();
                    conjure::<F>()(instance $(, $arg)*).into()
                }

                assert_stateless(&method);
                assert_addressable::<T>(instance);
                self.bind(
                    (instance as *const T).cast(),
                    trampoline::<T, F, O, R $(, $ty)*>,
                );
            }

            /// Bind a `&mut T` method on a raw instance pointer
            ///
            /// # Safety
            ///
            /// Until this delegate (and every copy of it) is rebound, reset,
            /// or dropped, `instance` must stay valid, and no other reference
            /// to it may be live while the delegate is being invoked.
            pub unsafe fn connect_method_raw<T, F, O>(&mut self, instance: NonNull<T>, method: F)
            where
                F: Fn(&mut T $(, $ty)*) -> O + Copy + 'a,
                O: Into<R>,
            {
                unsafe fn trampoline<T, F, O, R $(, $ty)*>(context: *const () $(, $arg: $ty)*) -> R
                where
                    F: Fn(&mut T $(, $ty)*) -> O + Copy,
                    O: Into<R>,
                {
                    let instance = &mut *context.cast::<T>().cast_mut();
                    conjure::<F>()(instance $(, $arg)*).into()
                }

                assert_stateless(&method);
                assert_addressable::<T>(instance.as_ptr());
                self.bind(
                    instance.as_ptr().cast_const().cast(),
                    trampoline::<T, F, O, R $(, $ty)*>,
                );
            }

            /// Invoke the bound target
            ///
            /// # Panics
            ///
            /// Panics if the delegate is empty.
            #[inline]
            pub fn call(&self $(, $arg: $ty)*) -> R {
                match self.trampoline {
                    // SAFETY: context and trampoline were paired by a connect
                    // call. Safe bindings borrow the instance for 'a, raw ones
                    // rely on the connect_method_raw contract.
                    Some(trampoline) => unsafe { trampoline(self.context $(, $arg)*) },
                    None => empty_invoked(),
                }
            }

            /// Invoke the bound target, or report that nothing is bound
            #[inline]
            pub fn try_call(&self $(, $arg: $ty)*) -> DelegateResult<R> {
                match self.trampoline {
                    // SAFETY: see `call`
                    Some(trampoline) => Ok(unsafe { trampoline(self.context $(, $arg)*) }),
                    None => Err(DelegateError::Empty),
                }
            }

            /// Invoke the bound target without checking for emptiness
            ///
            /// Debug builds, and builds with the `debug-assertions` feature,
            /// still panic on an empty delegate.
            ///
            /// # Safety
            ///
            /// The delegate must not be empty.
            #[inline]
            pub unsafe fn call_unchecked(&self $(, $arg: $ty)*) -> R {
                guard_bound(self.trampoline.is_some());
                let trampoline = self.trampoline.unwrap_unchecked();
                trampoline(self.context $(, $arg)*)
            }
        }
    };
}

impl_signature!();
impl_signature!(a0: A0);
impl_signature!(a0: A0, a1: A1);
impl_signature!(a0: A0, a1: A1, a2: A2);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);

impl<'a, S: Signature> Default for Delegate<'a, S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: Signature> Clone for Delegate<'a, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: Signature> Copy for Delegate<'a, S> {}

impl<'a, S: Signature> PartialEq for Delegate<'a, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl<'a, S: Signature> Eq for Delegate<'a, S> {}

impl<'a, S: Signature> Hash for Delegate<'a, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl<'a, S: Signature> fmt::Debug for Delegate<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.trampoline {
            None => write!(f, "Delegate(empty)"),
            Some(trampoline) => f
                .debug_struct("Delegate")
                .field("context", &self.context)
                .field("trampoline", &S::address(trampoline))
                .finish(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn mul(a: i32, b: i32) -> i32 {
        a * b
    }

    fn negate(x: i32) -> i32 {
        -x
    }

    fn answer() -> u64 {
        42
    }

    fn bump(x: u8) -> u8 {
        x.wrapping_add(7)
    }

    fn boom(_: i32) -> i32 {
        panic!("boom")
    }

    struct Counter {
        count: Cell<i32>,
    }

    impl Counter {
        fn new(start: i32) -> Self {
            Counter {
                count: Cell::new(start),
            }
        }

        fn increment(&self, n: i32) {
            self.count.set(self.count.get() + n);
        }

        fn get(&self) -> i32 {
            self.count.get()
        }

        fn scaled(&self, factor: i32) -> i32 {
            self.count.get() * factor
        }
    }

    // Free function that takes the bound instance as a payload
    fn offset(counter: &Counter, n: i32) -> i32 {
        counter.get() + n
    }

    struct Accumulator {
        total: i64,
    }

    impl Accumulator {
        fn push(&mut self, v: i64) -> i64 {
            self.total += v;
            self.total
        }
    }

    #[test]
    fn test_default_is_empty() {
        let d: Delegate<fn(i32, i32) -> i32> = Delegate::default();
        assert!(d.empty());
        assert!(d.context().is_null());

        let d: Delegate<fn()> = Delegate::new();
        assert!(d.empty());
    }

    #[test]
    fn test_two_words() {
        assert_eq!(
            mem::size_of::<Delegate<fn(i32, i32) -> i32>>(),
            2 * mem::size_of::<usize>()
        );
        assert_eq!(mem::size_of::<Delegate<fn()>>(), 2 * mem::size_of::<usize>());
    }

    #[test]
    fn test_free_function_scenario() {
        let mut d: Delegate<fn(i32, i32) -> i32> = Delegate::new();
        d.connect(add);
        assert!(!d.empty());
        assert!(d.context().is_null());
        assert_eq!(d.call(2, 3), 5);

        d.reset();
        assert!(d.empty());
    }

    #[test]
    fn test_free_function_matches_direct_call() {
        let d = Delegate::<fn(i32, i32) -> i32>::from_fn(mul);
        for a in -4..4 {
            for b in -4..4 {
                assert_eq!(d.call(a, b), mul(a, b));
            }
        }
    }

    #[test]
    fn test_zero_arguments() {
        let d = Delegate::<fn() -> u64>::from_fn(answer);
        assert_eq!(d.call(), 42);
    }

    #[test]
    fn test_eight_arguments() {
        fn sum8(a: u8, b: u16, c: u32, d: u64, e: i8, f: i16, g: i32, h: i64) -> i64 {
            a as i64 + b as i64 + c as i64 + d as i64 + e as i64 + f as i64 + g as i64 + h
        }

        let d = Delegate::<fn(u8, u16, u32, u64, i8, i16, i32, i64) -> i64>::from_fn(sum8);
        assert_eq!(d.call(1, 2, 3, 4, -5, 6, 7, 8), 26);
    }

    #[test]
    fn test_return_value_converted() {
        let d = Delegate::<fn(u8) -> u32>::from_fn(bump);
        assert_eq!(d.call(250), bump(250) as u32);
    }

    #[test]
    fn test_non_capturing_closure() {
        let mut d: Delegate<fn(i32, i32) -> i32> = Delegate::new();
        d.connect(|a, b| a - b);
        assert_eq!(d.call(10, 4), 6);
    }

    #[test]
    fn test_owned_arguments_forwarded() {
        let d = Delegate::<fn(String, Vec<u8>) -> usize>::from_fn(|s: String, v: Vec<u8>| {
            s.len() + v.len()
        });
        assert_eq!(d.call("abc".to_string(), vec![1, 2]), 5);
    }

    #[test]
    fn test_method_scenario() {
        let first = Counter::new(0);
        let second = Counter::new(0);

        let mut d: Delegate<fn(i32)> = Delegate::new();
        d.connect_method(&first, Counter::increment);
        assert!(!d.empty());
        d.call(5);
        assert_eq!(first.get(), 5);

        d.connect_method(&second, Counter::increment);
        d.call(3);
        assert_eq!(first.get(), 5);
        assert_eq!(second.get(), 3);
    }

    #[test]
    fn test_method_matches_direct_call() {
        let counter = Counter::new(7);
        let d = Delegate::<fn(i32) -> i32>::from_method(&counter, Counter::scaled);
        for factor in -3..3 {
            assert_eq!(d.call(factor), counter.scaled(factor));
        }
    }

    #[test]
    fn test_method_closure() {
        let counter = Counter::new(2);
        let mut d: Delegate<fn() -> i32> = Delegate::new();
        d.connect_method(&counter, |c: &Counter| c.get() * 10);
        assert_eq!(d.call(), 20);
    }

    #[test]
    fn test_curried_free_function() {
        let counter = Counter::new(100);
        let d = Delegate::<fn(i32) -> i32>::from_method(&counter, offset);
        assert_eq!(d.call(5), 105);
        assert_eq!(d.context(), &counter as *const Counter as *const ());
    }

    #[test]
    fn test_raw_method_binding() {
        let mut acc = Accumulator { total: 0 };
        let mut d: Delegate<fn(i64) -> i64> = Delegate::new();
        unsafe { d.connect_method_raw(NonNull::from(&mut acc), Accumulator::push) };

        assert_eq!(d.call(3), 3);
        assert_eq!(d.call(4), 7);
        d.reset();
        assert_eq!(acc.total, 7);
    }

    #[test]
    fn test_rebind_replaces_target() {
        let mut d = Delegate::<fn(i32, i32) -> i32>::from_fn(add);
        assert_eq!(d.call(3, 4), 7);

        d.connect(mul);
        assert_eq!(d.call(3, 4), 12);
    }

    #[test]
    fn test_rebind_method_to_free() {
        let counter = Counter::new(3);
        let mut d = Delegate::<fn(i32) -> i32>::from_method(&counter, Counter::scaled);
        assert!(!d.context().is_null());
        assert_eq!(d.call(2), 6);

        d.connect(negate);
        assert!(d.context().is_null());
        assert_eq!(d.call(2), -2);
    }

    #[test]
    fn test_reset_then_reconnect() {
        let mut d = Delegate::<fn(i32) -> i32>::from_fn(negate);
        d.reset();
        assert!(d.empty());
        assert_eq!(d, Delegate::new());

        d.connect(negate);
        assert_eq!(d.call(9), -9);
    }

    #[test]
    fn test_copies_share_binding() {
        let counter = Counter::new(0);
        let d = Delegate::<fn(i32)>::from_method(&counter, Counter::increment);
        let mut copy = d;
        copy.call(1);
        d.call(1);
        assert_eq!(counter.get(), 2);

        copy.reset();
        assert!(copy.empty());
        assert!(!d.empty());
    }

    #[test]
    fn test_equality_same_free_function() {
        let d1 = Delegate::<fn(i32, i32) -> i32>::from_fn(add);
        let mut d2: Delegate<fn(i32, i32) -> i32> = Delegate::new();
        d2.connect(add);
        assert_eq!(d1, d2);
        assert!(!(d1 != d2));
    }

    #[test]
    fn test_equality_different_free_functions() {
        let d1 = Delegate::<fn(i32, i32) -> i32>::from_fn(add);
        let d2 = Delegate::<fn(i32, i32) -> i32>::from_fn(mul);
        assert_ne!(d1, d2);
    }

    #[test]
    fn test_equality_free_vs_method() {
        let counter = Counter::new(1);
        let free = Delegate::<fn(i32) -> i32>::from_fn(negate);
        let method = Delegate::<fn(i32) -> i32>::from_method(&counter, Counter::scaled);
        assert_ne!(free, method);
    }

    #[test]
    fn test_equality_same_method_instances() {
        let first = Counter::new(4);
        let second = Counter::new(4);

        let d1 = Delegate::<fn(i32) -> i32>::from_method(&first, Counter::scaled);
        let d2 = Delegate::<fn(i32) -> i32>::from_method(&first, Counter::scaled);
        let d3 = Delegate::<fn(i32) -> i32>::from_method(&second, Counter::scaled);

        assert_eq!(d1, d2);
        assert_ne!(d1, d3);
    }

    #[test]
    fn test_smallest_instances_keep_distinct_contexts() {
        struct Flag(u8);

        impl Flag {
            fn get(&self) -> u8 {
                self.0
            }
        }

        let first = Flag(1);
        let second = Flag(1);
        let d1 = Delegate::<fn() -> u8>::from_method(&first, Flag::get);
        let d2 = Delegate::<fn() -> u8>::from_method(&second, Flag::get);

        assert_ne!(d1.context(), d2.context());
        assert_ne!(d1, d2);
        assert_eq!(d1.call(), d2.call());
    }

    #[test]
    fn test_equality_is_identity_not_behavior() {
        // Same outputs for every input, different bindings
        let first = Counter::new(4);
        let second = Counter::new(4);
        let d1 = Delegate::<fn(i32) -> i32>::from_method(&first, Counter::scaled);
        let d2 = Delegate::<fn(i32) -> i32>::from_method(&second, Counter::scaled);

        assert_eq!(d1.call(3), d2.call(3));
        assert_ne!(d1, d2);
    }

    #[test]
    fn test_empty_delegates_equal() {
        let d1: Delegate<fn(i32) -> i32> = Delegate::new();
        let d2: Delegate<fn(i32) -> i32> = Delegate::default();
        assert_eq!(d1, d2);

        let bound = Delegate::<fn(i32) -> i32>::from_fn(negate);
        assert_ne!(d1, bound);
    }

    #[test]
    fn test_hash_follows_identity() {
        let first = Counter::new(0);
        let second = Counter::new(0);

        let mut set = HashSet::new();
        set.insert(Delegate::<fn(i32) -> i32>::from_method(&first, Counter::scaled));
        set.insert(Delegate::<fn(i32) -> i32>::from_method(&first, Counter::scaled));
        set.insert(Delegate::<fn(i32) -> i32>::from_method(&second, Counter::scaled));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_try_call() {
        let mut d: Delegate<fn(i32, i32) -> i32> = Delegate::new();
        assert_eq!(d.try_call(1, 2), Err(DelegateError::Empty));

        d.connect(add);
        assert_eq!(d.try_call(1, 2), Ok(3));
    }

    #[test]
    #[should_panic(expected = "invoked an empty delegate")]
    fn test_call_empty_panics() {
        crate::kprint::set_log_level(crate::kprint::LogLevel::Off);
        let d: Delegate<fn(i32) -> i32> = Delegate::new();
        d.call(1);
    }

    #[test]
    #[should_panic(expected = "invoked an empty delegate")]
    fn test_call_after_reset_panics() {
        crate::kprint::set_log_level(crate::kprint::LogLevel::Off);
        let mut d = Delegate::<fn(i32) -> i32>::from_fn(negate);
        d.reset();
        d.call(1);
    }

    #[test]
    fn test_call_unchecked_bound() {
        let d = Delegate::<fn(i32, i32) -> i32>::from_fn(add);
        assert_eq!(unsafe { d.call_unchecked(20, 22) }, 42);
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "debug-assertions"))]
    #[should_panic(expected = "invoked an empty delegate")]
    fn test_call_unchecked_empty_asserts() {
        crate::kprint::set_log_level(crate::kprint::LogLevel::Off);
        let d: Delegate<fn(i32, i32) -> i32> = Delegate::new();
        unsafe { d.call_unchecked(1, 2) };
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_target_panic_propagates() {
        let d = Delegate::<fn(i32) -> i32>::from_fn(boom);
        d.call(0);
    }

    #[test]
    fn test_debug_format() {
        let d: Delegate<fn(i32) -> i32> = Delegate::new();
        assert_eq!(format!("{:?}", d), "Delegate(empty)");

        let d = Delegate::<fn(i32) -> i32>::from_fn(negate);
        let text = format!("{:?}", d);
        assert!(text.starts_with("Delegate {"));
        assert!(text.contains("context"));
        assert!(text.contains("trampoline"));
    }
}

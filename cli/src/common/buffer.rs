//! # cbrs Growable Buffer (`common::buffer`)
//!
//! File: cli/src/common/buffer.rs
//!
//! ## Overview
//!
//! `GrowableBuffer<T>` is the append-only sequence container underneath both
//! the argument list of a `Cmd` and the scratch character sequences used for
//! quoting and for rendering diagnostics.
//!
//! ## Growth Policy
//!
//! - Capacity starts at 0.
//! - The first insertion grows it to the base capacity (`DEFAULT_BASE_CAPACITY`
//!   unless overridden per container with `with_base_capacity`).
//! - Afterwards, whenever an insertion would exceed it, capacity doubles.
//! - A bulk append keeps doubling until the new total fits and then grows the
//!   storage once.
//! - Capacity never shrinks, not even on `clear`.
//!
//! ## Allocation Failure
//!
//! Growing the storage uses `try_reserve_exact`. If that fails the buffer
//! prints one diagnostic naming the call site and aborts the process. There is
//! no way to recover from it: a build step without heap cannot continue.
//!
use std::fmt;
use std::ops::Deref;
use std::panic::Location;

/// Capacity a buffer grows to on its first insertion.
pub const DEFAULT_BASE_CAPACITY: usize = 64;

/// Append-only, amortized-doubling sequence container.
///
/// `capacity` is the logical capacity dictated by the growth policy; the
/// backing `Vec` always holds at least that much storage.
#[derive(Clone)]
pub struct GrowableBuffer<T> {
    elements: Vec<T>,
    capacity: usize,
    base_capacity: usize,
}

impl<T> GrowableBuffer<T> {
    /// Creates an empty buffer using `DEFAULT_BASE_CAPACITY`. Does not allocate.
    pub fn new() -> Self {
        Self::with_base_capacity(DEFAULT_BASE_CAPACITY)
    }

    /// Creates an empty buffer with a custom base capacity. A base of 0 is
    /// treated as 1 so that doubling always makes progress.
    pub fn with_base_capacity(base_capacity: usize) -> Self {
        Self {
            elements: Vec::new(),
            capacity: 0,
            base_capacity: base_capacity.max(1),
        }
    }

    /// Appends one element, growing the storage if needed.
    #[track_caller]
    pub fn push(&mut self, element: T) {
        if self.capacity <= self.elements.len() {
            let new_capacity = if self.capacity == 0 {
                self.base_capacity
            } else {
                self.doubled(self.capacity)
            };
            self.grow_to(new_capacity, Location::caller());
        }
        self.elements.push(element);
    }

    /// Drops every element. The capacity is kept so the buffer can be refilled
    /// without reallocating.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Logical capacity according to the growth policy.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn base_capacity(&self) -> usize {
        self.base_capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    fn doubled(&self, capacity: usize) -> usize {
        capacity.checked_mul(2).unwrap_or(usize::MAX)
    }

    fn grow_to(&mut self, new_capacity: usize, caller: &'static Location<'static>) {
        let additional = new_capacity - self.elements.len();
        if let Err(err) = self.elements.try_reserve_exact(additional) {
            allocation_failed(caller, &err);
        }
        self.capacity = new_capacity;
    }
}

impl<T: Clone> GrowableBuffer<T> {
    /// Appends all of `elements` in a single growth step. An empty slice is a
    /// no-op and never allocates.
    #[track_caller]
    pub fn append_bulk(&mut self, elements: &[T]) {
        if elements.is_empty() {
            return;
        }
        let required = self.elements.len().saturating_add(elements.len());
        if self.capacity < required {
            let mut new_capacity = if self.capacity == 0 {
                self.base_capacity
            } else {
                self.capacity
            };
            while new_capacity < required {
                new_capacity = self.doubled(new_capacity);
            }
            self.grow_to(new_capacity, Location::caller());
        }
        self.elements.extend_from_slice(elements);
    }
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowableBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableBuffer")
            .field("elements", &self.elements)
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// Reports a failed reservation and terminates the process.
#[cold]
fn allocation_failed(caller: &Location<'_>, err: &std::collections::TryReserveError) -> ! {
    tracing::error!(
        "The allocation for the dynamic array has failed in: {}:{} ({})",
        caller.file(),
        caller.line(),
        err
    );
    eprintln!(
        "The allocation for the dynamic array has failed in: {}:{}",
        caller.file(),
        caller.line()
    );
    std::process::abort()
}

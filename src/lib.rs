// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A last in, first out stack backed by a single array, which grows and
//! shrinks with its contents and never holds more than a fixed number of
//! values.
//!
//! # Resizing
//!
//! An [`ArrayStack`][ArrayStack] starts out with a buffer of its initial size
//! ([`DEFAULT_INITIAL_SIZE`][DEFAULT_INITIAL_SIZE] unless you say otherwise).
//!
//!   * When you push onto a stack whose buffer is full, the buffer is
//!     reallocated at twice its size, capped at the stack's maximum size.
//!   * When a pop leaves the stack holding no more than half of its buffer
//!     size, the buffer is reallocated at half its size, unless that would
//!     take it below the initial size. This check happens on every pop.
//!
//! The buffer is always exactly the size the policy says it is, so
//! [`capacity()`][capacity] reports it precisely, unlike
//! [`Vec::capacity()`][Vec::capacity], which only promises a lower bound.
//!
//! # Bounds
//!
//! The maximum size ([`DEFAULT_MAX_SIZE`][DEFAULT_MAX_SIZE], ie.
//! `usize::MAX`, unless you say otherwise) is a hard limit on the number of
//! values the stack holds. Pushing onto a full stack gives you a
//! [`StackFull`][StackFull] error with your value inside it, and reading
//! from or popping an empty stack gives you [`StackEmpty`][StackEmpty]. A
//! failed call never changes the stack.
//!
//! Sizes are checked when the stack is constructed: an initial size of zero,
//! or one larger than the maximum size, is a [`ConfigError`][ConfigError].
//!
//! # Thread Safety
//!
//! An [`ArrayStack`][ArrayStack] is a plain owned value, and every operation
//! which changes it takes `&mut self`. If you need to share one between
//! threads, put it behind a [`Mutex`][Mutex].
//!
//! # Example
//!
//! ```rust
//! # use arraystack::{ArrayStack, StackEmpty};
//! // A stack which starts with room for 2 values and will never hold more
//! // than 5.
//! let mut stack = ArrayStack::with_initial_and_max_size(2, 5);
//!
//! for value in &["a", "b", "c", "d"] {
//!     stack.push(*value).unwrap();
//! }
//! // Pushing the third value doubled the buffer.
//! assert_eq!(4, stack.capacity());
//!
//! assert_eq!(Ok("d"), stack.pop());
//! assert_eq!(4, stack.capacity());
//!
//! // Down to half the buffer size, so it halves.
//! assert_eq!(Ok("c"), stack.pop());
//! assert_eq!(2, stack.capacity());
//!
//! // It never goes below the initial size.
//! stack.pop().unwrap();
//! stack.pop().unwrap();
//! assert_eq!(2, stack.capacity());
//! assert_eq!(Err(StackEmpty), stack.pop());
//! ```
//!
//! [ArrayStack]: struct.ArrayStack.html
//! [capacity]: struct.ArrayStack.html#method.capacity
//! [StackFull]: struct.StackFull.html
//! [StackEmpty]: struct.StackEmpty.html
//! [ConfigError]: enum.ConfigError.html
//! [DEFAULT_INITIAL_SIZE]: constant.DEFAULT_INITIAL_SIZE.html
//! [DEFAULT_MAX_SIZE]: constant.DEFAULT_MAX_SIZE.html
//! [Vec::capacity]: https://doc.rust-lang.org/std/vec/struct.Vec.html#method.capacity
//! [Mutex]: https://doc.rust-lang.org/std/sync/struct.Mutex.html

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod buffer;
mod config;
mod error;
mod stack;

pub use self::config::{StackConfig, DEFAULT_INITIAL_SIZE, DEFAULT_MAX_SIZE};
pub use self::error::{ConfigError, StackEmpty, StackFull};
pub use self::stack::ArrayStack;

#[cfg(test)]
mod test {
    use super::*;
    use static_assertions::assert_impl_all;
    use std::sync::atomic::{AtomicUsize, Ordering};

    assert_impl_all!(ArrayStack<u8>: Send, Sync);
    assert_impl_all!(StackFull<u8>: Send, Sync);
    assert_impl_all!(StackEmpty: Send, Sync);

    struct DropTest<'a> {
        counter: &'a AtomicUsize,
    }

    impl<'a> DropTest<'a> {
        fn new(counter: &'a AtomicUsize) -> Self {
            counter.fetch_add(1, Ordering::Relaxed);
            DropTest { counter }
        }
    }

    impl<'a> Drop for DropTest<'a> {
        fn drop(&mut self) {
            self.counter.fetch_sub(1, Ordering::Relaxed);
        }
    }

    fn fill_drop(initial_size: usize, push_count: usize, pop_count: usize) {
        let counter = AtomicUsize::new(0);
        {
            let mut stack = ArrayStack::with_initial_size(initial_size);
            for _ in 0..push_count {
                stack.push(DropTest::new(&counter)).ok().unwrap();
            }
            assert_eq!(push_count, counter.load(Ordering::SeqCst));
            for _ in 0..pop_count {
                std::mem::drop(stack.pop());
            }
            assert_eq!(push_count - pop_count, counter.load(Ordering::SeqCst));
        }
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn dropping_full() {
        fill_drop(16, 2048, 0);
    }

    #[test]
    fn dropping_half_popped() {
        fill_drop(1, 2048, 1024);
    }

    #[test]
    fn dropping_all_popped() {
        fill_drop(4, 100, 100);
    }

    #[test]
    fn rejected_push_drops_nothing_else() {
        let counter = AtomicUsize::new(0);
        let mut stack = ArrayStack::with_initial_and_max_size(1, 2);
        stack.push(DropTest::new(&counter)).ok().unwrap();
        stack.push(DropTest::new(&counter)).ok().unwrap();
        let rejected = stack.push(DropTest::new(&counter)).unwrap_err();
        assert_eq!(3, counter.load(Ordering::SeqCst));
        std::mem::drop(rejected);
        assert_eq!(2, counter.load(Ordering::SeqCst));
        std::mem::drop(stack);
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }
}

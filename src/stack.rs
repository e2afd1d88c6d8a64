// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};

use tracing::trace;

use crate::buffer::SlotBuffer;
use crate::config::StackConfig;
use crate::error::{ConfigError, StackEmpty, StackFull};

/// A last in, first out stack backed by a single contiguous buffer.
///
/// The buffer starts out at the stack's initial size. When a push finds it
/// full, it doubles, up to the stack's maximum size. When a pop leaves the
/// stack at half the buffer's size or less, the buffer halves, but never
/// below the initial size.
///
/// The maximum size is a hard limit on the number of elements: pushing onto a
/// stack which holds `max_size()` elements fails with
/// [`StackFull`][StackFull], which gives you the value back.
///
/// # Example
///
/// ```rust
/// # use arraystack::ArrayStack;
/// let mut stack = ArrayStack::with_initial_and_max_size(1, 5);
/// let mut capacities = Vec::new();
/// for value in 1..=5 {
///     stack.push(value).unwrap();
///     capacities.push(stack.capacity());
/// }
/// assert_eq!(vec![1, 2, 4, 4, 5], capacities);
/// assert!(stack.push(6).is_err());
/// assert_eq!(Ok(5), stack.pop());
/// ```
///
/// [StackFull]: struct.StackFull.html
pub struct ArrayStack<A> {
    buffer: SlotBuffer<A>,
    count: usize,
    initial_size: usize,
    max_size: usize,
}

impl<A> ArrayStack<A> {
    /// Construct an empty stack with the default initial size of
    /// [`DEFAULT_INITIAL_SIZE`][DEFAULT_INITIAL_SIZE] and no practical limit
    /// on its size.
    ///
    /// [DEFAULT_INITIAL_SIZE]: constant.DEFAULT_INITIAL_SIZE.html
    pub fn new() -> Self {
        Self::from_valid_config(StackConfig::default())
    }

    /// Construct an empty stack whose buffer starts out at `initial_size`.
    ///
    /// # Panics
    ///
    /// If `initial_size` is zero. Use
    /// [`try_with_initial_size()`][try] to get an error instead.
    ///
    /// [try]: #method.try_with_initial_size
    pub fn with_initial_size(initial_size: usize) -> Self {
        Self::from_config(StackConfig::default().with_initial_size(initial_size))
    }

    /// Construct an empty stack whose buffer starts out at `initial_size`,
    /// and which will hold at most `max_size` elements.
    ///
    /// # Panics
    ///
    /// If `initial_size` is zero or larger than `max_size`. Use
    /// [`try_with_initial_and_max_size()`][try] to get an error instead.
    ///
    /// [try]: #method.try_with_initial_and_max_size
    pub fn with_initial_and_max_size(initial_size: usize, max_size: usize) -> Self {
        Self::from_config(
            StackConfig::default()
                .with_initial_size(initial_size)
                .with_max_size(max_size),
        )
    }

    /// Construct an empty stack from a [`StackConfig`][StackConfig].
    ///
    /// # Panics
    ///
    /// If the config doesn't [`validate()`][validate].
    ///
    /// [StackConfig]: struct.StackConfig.html
    /// [validate]: struct.StackConfig.html#method.validate
    pub fn from_config(config: StackConfig) -> Self {
        match Self::try_from_config(config) {
            Ok(stack) => stack,
            Err(error) => panic!("ArrayStack: {}", error),
        }
    }

    /// Construct an empty stack whose buffer starts out at `initial_size`, or
    /// fail if `initial_size` is zero.
    pub fn try_with_initial_size(initial_size: usize) -> Result<Self, ConfigError> {
        Self::try_from_config(StackConfig::default().with_initial_size(initial_size))
    }

    /// Construct an empty stack with the given initial and maximum sizes, or
    /// fail if they don't make sense together.
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, ConfigError};
    /// assert_eq!(
    ///     Err(ConfigError::InitialExceedsMax { initial_size: 4, max_size: 2 }),
    ///     ArrayStack::<u8>::try_with_initial_and_max_size(4, 2).map(|_| ())
    /// );
    /// ```
    pub fn try_with_initial_and_max_size(
        initial_size: usize,
        max_size: usize,
    ) -> Result<Self, ConfigError> {
        Self::try_from_config(
            StackConfig::default()
                .with_initial_size(initial_size)
                .with_max_size(max_size),
        )
    }

    /// Construct an empty stack from a [`StackConfig`][StackConfig], or fail
    /// if it doesn't [`validate()`][validate].
    ///
    /// [StackConfig]: struct.StackConfig.html
    /// [validate]: struct.StackConfig.html#method.validate
    pub fn try_from_config(config: StackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: StackConfig) -> Self {
        Self {
            buffer: SlotBuffer::new(config.initial_size),
            count: 0,
            initial_size: config.initial_size,
            max_size: config.max_size,
        }
    }

    /// Push a value onto the top of the stack.
    ///
    /// If the buffer is full, it's reallocated at twice its size, or at the
    /// stack's maximum size if that's smaller.
    ///
    /// If the stack already holds `max_size()` elements, the value is
    /// returned inside a [`StackFull`][StackFull] error and the stack is left
    /// untouched.
    ///
    /// [StackFull]: struct.StackFull.html
    pub fn push(&mut self, value: A) -> Result<(), StackFull<A>> {
        if self.count == self.max_size {
            return Err(StackFull(value));
        }
        if self.count == self.buffer.capacity() {
            self.grow();
        }
        unsafe { self.buffer.write(self.count, value) };
        self.count += 1;
        Ok(())
    }

    fn grow(&mut self) {
        let from = self.buffer.capacity();
        let to = from.saturating_mul(2).min(self.max_size);
        trace!(from, to, len = self.count, "growing stack buffer");
        unsafe { self.buffer.resize(self.count, to) };
    }

    /// Remove the value on top of the stack and return it.
    ///
    /// If this leaves the stack at half its buffer size or less, the buffer
    /// is reallocated at half its size, as long as that isn't smaller than
    /// the stack's initial size.
    pub fn pop(&mut self) -> Result<A, StackEmpty> {
        if self.is_empty() {
            return Err(StackEmpty);
        }
        self.count -= 1;
        let value = unsafe { self.buffer.read(self.count) };
        self.shrink_if_sparse();
        Ok(value)
    }

    fn shrink_if_sparse(&mut self) {
        let from = self.buffer.capacity();
        let to = from / 2;
        if self.count <= to && to >= self.initial_size {
            trace!(from, to, len = self.count, "shrinking stack buffer");
            unsafe { self.buffer.resize(self.count, to) };
        }
    }

    /// Get a reference to the value on top of the stack.
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, StackEmpty};
    /// let mut stack = ArrayStack::new();
    /// assert_eq!(Err(StackEmpty), stack.peek());
    /// stack.push("a").unwrap();
    /// assert_eq!(Ok(&"a"), stack.peek());
    /// assert_eq!(1, stack.len());
    /// ```
    pub fn peek(&self) -> Result<&A, StackEmpty> {
        if self.is_empty() {
            return Err(StackEmpty);
        }
        Ok(unsafe { self.buffer.get(self.count - 1) })
    }

    /// Get a mutable reference to the value on top of the stack.
    pub fn peek_mut(&mut self) -> Result<&mut A, StackEmpty> {
        if self.is_empty() {
            return Err(StackEmpty);
        }
        Ok(unsafe { self.buffer.get_mut(self.count - 1) })
    }

    /// Test whether the stack holds no values.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Test whether the stack holds as many values as it's allowed to.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.count == self.max_size
    }

    /// Get the number of values on the stack.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Get the current size of the stack's buffer.
    ///
    /// This is always between [`initial_size()`][initial_size] and
    /// [`max_size()`][max_size], and never less than [`len()`][len].
    ///
    /// [initial_size]: #method.initial_size
    /// [max_size]: #method.max_size
    /// [len]: #method.len
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Get the buffer size the stack started out with.
    pub fn initial_size(&self) -> usize {
        self.initial_size
    }

    /// Get the maximum number of values the stack will hold.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl<A> Default for ArrayStack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Drop for ArrayStack<A> {
    fn drop(&mut self) {
        let count = self.count;
        self.count = 0;
        unsafe { self.buffer.drop_prefix(count) };
    }
}

impl<A> Debug for ArrayStack<A>
where
    A: Debug,
{
    /// Debug implementation for `ArrayStack`.
    ///
    /// Values are listed from the bottom of the stack to the top.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::ArrayStack;
    /// let mut stack = ArrayStack::with_initial_and_max_size(2, 8);
    /// stack.push(1).unwrap();
    /// stack.push(2).unwrap();
    /// stack.push(3).unwrap();
    /// assert_eq!("ArrayStack[3/4/8][1, 2, 3]", format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "ArrayStack[{}/{}/{}]",
            self.len(),
            self.capacity(),
            self.max_size()
        )?;
        f.debug_list()
            .entries(unsafe { self.buffer.prefix(self.count) })
            .finish()
    }
}

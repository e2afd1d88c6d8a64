// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Display, Error, Formatter};

/// The error returned when reading from or popping an empty
/// [`ArrayStack`][ArrayStack].
///
/// [ArrayStack]: struct.ArrayStack.html
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StackEmpty;

impl Display for StackEmpty {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "stack is empty")
    }
}

impl std::error::Error for StackEmpty {}

/// The error returned when pushing onto an [`ArrayStack`][ArrayStack] which
/// already holds its maximum number of elements.
///
/// The rejected value is handed back, so nothing is lost:
///
/// ```rust
/// # use arraystack::ArrayStack;
/// let mut stack = ArrayStack::with_initial_and_max_size(1, 1);
/// stack.push("first").unwrap();
/// let error = stack.push("second").unwrap_err();
/// assert_eq!("second", error.into_inner());
/// ```
///
/// [ArrayStack]: struct.ArrayStack.html
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackFull<A>(pub A);

impl<A> StackFull<A> {
    /// Take back the value which couldn't be pushed.
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> Debug for StackFull<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "StackFull(..)")
    }
}

impl<A> Display for StackFull<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "stack is full")
    }
}

impl<A> std::error::Error for StackFull<A> {}

/// The error returned when a [`StackConfig`][StackConfig] describes a stack
/// which can't exist.
///
/// [StackConfig]: struct.StackConfig.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// The initial size was zero. A zero sized buffer can never double.
    ZeroInitialSize,
    /// The initial size was larger than the maximum size.
    InitialExceedsMax {
        /// The requested initial size.
        initial_size: usize,
        /// The requested maximum size.
        max_size: usize,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            ConfigError::ZeroInitialSize => write!(f, "initial size must be at least 1"),
            ConfigError::InitialExceedsMax {
                initial_size,
                max_size,
            } => write!(
                f,
                "initial size {} exceeds max size {}",
                initial_size, max_size
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

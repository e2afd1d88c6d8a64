// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::error::ConfigError;

/// The initial buffer size used by [`ArrayStack::new()`][new].
///
/// [new]: struct.ArrayStack.html#method.new
pub const DEFAULT_INITIAL_SIZE: usize = 16;

/// The maximum size used when none is given: effectively unbounded.
pub const DEFAULT_MAX_SIZE: usize = usize::MAX;

/// Construction parameters for an [`ArrayStack`][ArrayStack].
///
/// # Examples
///
/// ```rust
/// # use arraystack::{ArrayStack, StackConfig};
/// let config = StackConfig::default().with_initial_size(4).with_max_size(64);
/// let stack: ArrayStack<u8> = ArrayStack::try_from_config(config).unwrap();
/// assert_eq!(4, stack.capacity());
/// assert_eq!(64, stack.max_size());
/// ```
///
/// [ArrayStack]: struct.ArrayStack.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StackConfig {
    /// The buffer size a new stack starts with. The buffer never shrinks
    /// below this.
    pub initial_size: usize,
    /// The largest number of elements the stack will accept.
    pub max_size: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            initial_size: DEFAULT_INITIAL_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl StackConfig {
    /// Set the initial buffer size.
    pub fn with_initial_size(mut self, initial_size: usize) -> Self {
        self.initial_size = initial_size;
        self
    }

    /// Set the maximum number of elements.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Check that the configuration describes a usable stack.
    ///
    /// ```rust
    /// # use arraystack::{ConfigError, StackConfig};
    /// assert_eq!(
    ///     Err(ConfigError::ZeroInitialSize),
    ///     StackConfig::default().with_initial_size(0).validate()
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_size == 0 {
            Err(ConfigError::ZeroInitialSize)
        } else if self.initial_size > self.max_size {
            Err(ConfigError::InitialExceedsMax {
                initial_size: self.initial_size,
                max_size: self.max_size,
            })
        } else {
            Ok(())
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::mem::MaybeUninit;

/// A fixed size run of possibly uninitialised slots.
///
/// The buffer doesn't know which of its slots are live; its owner does. It
/// never drops slot contents by itself, so dropping a buffer with live values
/// in it leaks them unless [`drop_prefix()`][drop_prefix] was called first.
///
/// [drop_prefix]: #method.drop_prefix
pub(crate) struct SlotBuffer<A> {
    data: Box<[MaybeUninit<A>]>,
}

impl<A> SlotBuffer<A> {
    /// Allocate exactly `capacity` uninitialised slots.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: (0..capacity).map(|_| MaybeUninit::uninit()).collect(),
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    fn data_ptr(&mut self) -> *mut A {
        self.data.as_mut_ptr().cast::<A>()
    }

    /// Write a value into a slot.
    ///
    /// # Safety
    ///
    /// The slot must be empty, or its previous value is leaked.
    #[inline(always)]
    pub(crate) unsafe fn write(&mut self, index: usize, value: A) {
        self.data[index].as_mut_ptr().write(value);
    }

    /// Move a value out of a slot, leaving it empty.
    ///
    /// # Safety
    ///
    /// The slot must be live, and must be treated as empty afterwards.
    #[inline(always)]
    pub(crate) unsafe fn read(&mut self, index: usize) -> A {
        self.data[index].as_ptr().read()
    }

    /// # Safety
    ///
    /// The slot must be live.
    #[inline(always)]
    pub(crate) unsafe fn get(&self, index: usize) -> &A {
        &*self.data[index].as_ptr()
    }

    /// # Safety
    ///
    /// The slot must be live.
    #[inline(always)]
    pub(crate) unsafe fn get_mut(&mut self, index: usize) -> &mut A {
        &mut *self.data[index].as_mut_ptr()
    }

    /// View the first `len` slots as a slice.
    ///
    /// # Safety
    ///
    /// The first `len` slots must all be live.
    pub(crate) unsafe fn prefix(&self, len: usize) -> &[A] {
        debug_assert!(len <= self.capacity());
        std::slice::from_raw_parts(self.data.as_ptr().cast::<A>(), len)
    }

    /// Move the first `len` values into a fresh allocation of exactly
    /// `new_capacity` slots and release the old one.
    ///
    /// The new allocation is made before anything moves, so a failed
    /// allocation leaves the buffer as it was.
    ///
    /// # Safety
    ///
    /// The first `len` slots must all be live, and `len` must not exceed
    /// `new_capacity`.
    pub(crate) unsafe fn resize(&mut self, len: usize, new_capacity: usize) {
        debug_assert!(len <= self.capacity());
        debug_assert!(len <= new_capacity);
        let mut target = Self::new(new_capacity);
        std::ptr::copy_nonoverlapping(self.data_ptr(), target.data_ptr(), len);
        *self = target;
    }

    /// Drop the first `len` values in place, leaving every slot empty.
    ///
    /// # Safety
    ///
    /// The first `len` slots must all be live.
    pub(crate) unsafe fn drop_prefix(&mut self, len: usize) {
        if std::mem::needs_drop::<A>() {
            let data = self.data_ptr();
            std::ptr::drop_in_place(std::slice::from_raw_parts_mut(data, len));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn exact_capacity() {
        for size in &[1, 2, 3, 5, 16, 1000] {
            let buffer: SlotBuffer<u64> = SlotBuffer::new(*size);
            assert_eq!(*size, buffer.capacity());
        }
        let buffer: SlotBuffer<()> = SlotBuffer::new(7);
        assert_eq!(7, buffer.capacity());
    }

    #[test]
    fn resize_keeps_order() {
        let mut buffer: SlotBuffer<String> = SlotBuffer::new(2);
        unsafe {
            buffer.write(0, "a".to_string());
            buffer.write(1, "b".to_string());
            buffer.resize(2, 4);
            assert_eq!(4, buffer.capacity());
            assert_eq!(&["a".to_string(), "b".to_string()], buffer.prefix(2));
            assert_eq!("b", buffer.read(1));
            buffer.resize(1, 1);
            assert_eq!(1, buffer.capacity());
            assert_eq!("a", buffer.get(0));
            buffer.get_mut(0).push('!');
            assert_eq!("a!", buffer.read(0));
        }
    }

    #[test]
    fn drop_prefix_drops_live_values() {
        let value = Rc::new(());
        let mut buffer = SlotBuffer::new(4);
        unsafe {
            buffer.write(0, value.clone());
            buffer.write(1, value.clone());
            buffer.write(2, value.clone());
        }
        assert_eq!(4, Rc::strong_count(&value));
        unsafe { buffer.drop_prefix(3) };
        assert_eq!(1, Rc::strong_count(&value));
    }
}

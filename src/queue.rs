
use std::{fmt, iter::FusedIterator, slice, vec};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A FIFO queue with amortized O(1) enqueue and dequeue.
///
/// Elements live in a single backing [`Vec`]. Dequeuing does not shift the
/// remaining elements; it only advances a front offset. The consumed prefix
/// is dropped once it makes up at least half of the backing storage, so the
/// queue never holds more than about twice its length in slots.
///
/// Equality, [`Debug`](fmt::Debug) and serialization only look at the
/// elements currently in the queue, front to back.
pub struct Queue<T> {
    elements: Vec<Option<T>>,
    offset: usize,
}

/// Returned by [`Queue::try_front`] and [`Queue::try_back`] when the queue holds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Queue is empty")]
pub struct EmptyQueueError;

impl<T> Queue<T> {
    /// Creates an empty [`Queue`].
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            offset: 0,
        }
    }

    /// Creates an empty [`Queue`] with room for `capacity` elements
    /// before the backing storage has to grow.
    ///
    /// This is not a limit; the queue keeps growing past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            offset: 0,
        }
    }

    fn from_elements(elements: impl Iterator<Item = T>) -> Self {
        Self {
            elements: elements.map(Some).collect(),
            offset: 0,
        }
    }

    /// Adds an element to the back of the queue.
    pub fn enqueue(&mut self, element: T) -> &mut Self {
        self.elements.push(Some(element));
        self
    }

    /// Alias for [`Queue::enqueue`].
    pub fn push(&mut self, element: T) -> &mut Self {
        self.enqueue(element)
    }

    /// Removes and returns the element at the front of the queue,
    /// or [`None`] if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let first = self.elements[self.offset].take();
        self.offset += 1;

        if self.offset * 2 < self.elements.len() {
            return first;
        }

        log::trace!(
            "compacting queue: dropping {} consumed slots, {} elements remain",
            self.offset,
            self.elements.len() - self.offset
        );
        self.elements = self.elements.split_off(self.offset);
        self.offset = 0;

        first
    }

    /// Alias for [`Queue::dequeue`].
    pub fn pop(&mut self) -> Option<T> {
        self.dequeue()
    }

    /// Returns the element at the front without removing it.
    pub fn front(&self) -> Option<&T> {
        self.elements.get(self.offset).and_then(Option::as_ref)
    }

    /// Returns the element at the back without removing it.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.elements.last().and_then(Option::as_ref)
    }

    /// Like [`Queue::front`], but an empty queue is an error.
    pub fn try_front(&self) -> Result<&T, EmptyQueueError> {
        self.front().ok_or(EmptyQueueError)
    }

    /// Like [`Queue::back`], but an empty queue is an error.
    pub fn try_back(&self) -> Result<&T, EmptyQueueError> {
        self.back().ok_or(EmptyQueueError)
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.elements.len() - self.offset
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element, releasing the backing storage.
    pub fn clear(&mut self) -> &mut Self {
        self.elements = Vec::new();
        self.offset = 0;
        self
    }

    /// Returns an iterator over the queue, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elements[self.offset..].iter(),
        }
    }

    /// Consumes the queue, returning its elements front to back.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T: Clone> Queue<T> {
    /// Creates a [`Queue`] holding a copy of `elements`, first element at the front.
    pub fn from_slice(elements: &[T]) -> Self {
        elements.iter().cloned().collect()
    }

    /// Returns a copy of the elements, front to back.
    ///
    /// The returned vector is detached from the queue.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Returns `true` if the queue contains the given item and `false` otherwise.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Only the live elements are copied, so the clone starts at offset 0.
impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self::from_elements(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_elements(elements.into_iter())
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter.into_iter())
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Some));
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.elements.drain(..self.offset);
        IntoIter {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator returned by [`Queue::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator returned by [`Queue::into_iter`].
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Serialized as a plain sequence, front to back.
impl<T: Serialize> Serialize for Queue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Queue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

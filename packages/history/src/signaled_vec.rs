use std::{cell::RefCell, fmt, rc::Rc};

use crate::{Dispatcher, Emitter, SequenceError, Subscription};

/// The notification emitted by a [`SignaledVec`] after every mutation.
///
/// It carries a copy of the contents as they were right after the mutation. Later mutations
/// never show through an event that was already emitted.
pub struct Changed<T> {
    items: Rc<[T]>,
}

impl<T> Changed<T> {
    /// The contents right after the mutation.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The tail element right after the mutation.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// The length right after the mutation.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence was empty right after the mutation.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A shared handle to the snapshot.
    pub fn snapshot(&self) -> Rc<[T]> {
        self.items.clone()
    }
}

impl<T> Clone for Changed<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Changed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Changed")
            .field("items", &self.items)
            .finish()
    }
}

/// An ordered sequence that emits a [`Changed`] notification after each mutation.
///
/// Every mutating method emits exactly one notification, even when it ended up moving no
/// elements. Notifications are delivered through the sequence's [`Dispatcher`], never from
/// inside the mutating call.
///
/// Removing more elements than the sequence holds is not an error: the removal stops at the
/// boundary and returns only the elements that were actually removed.
pub struct SignaledVec<T: 'static> {
    items: RefCell<Vec<T>>,
    emitter: Emitter<Changed<T>>,
}

impl<T: Clone + 'static> Default for SignaledVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> SignaledVec<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a sequence holding `items`. No notification is emitted.
    pub fn with_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: RefCell::new(items.into_iter().collect()),
            emitter: Emitter::new(),
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// A copy of the element at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.borrow().get(index).cloned()
    }

    /// A copy of the tail element.
    pub fn last(&self) -> Option<T> {
        self.items.borrow().last().cloned()
    }

    /// A copy of the whole sequence.
    pub fn snapshot(&self) -> Rc<[T]> {
        Rc::from(self.items.borrow().as_slice())
    }

    /// A copy of the whole sequence as a [`Vec`].
    pub fn to_vec(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    /// The index of the first element matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.borrow().iter().position(predicate)
    }

    /// A copy of the first element matching `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        self.items.borrow().iter().find(|item| predicate(item)).cloned()
    }

    /// Add `items` at the tail, keeping their order.
    pub fn append(&self, items: impl IntoIterator<Item = T>) {
        self.items.borrow_mut().extend(items);
        self.notify("append");
    }

    /// Add `items` at the head, keeping their order.
    pub fn prepend(&self, items: impl IntoIterator<Item = T>) {
        {
            let mut current = self.items.borrow_mut();
            let tail = std::mem::take(&mut *current);
            current.extend(items);
            current.extend(tail);
        }
        self.notify("prepend");
    }

    /// Remove up to `count` elements from the tail.
    ///
    /// The removed elements are returned in their original order, not reversed.
    pub fn remove_from_tail(&self, count: usize) -> Vec<T> {
        let removed = {
            let mut items = self.items.borrow_mut();
            let start = items.len().saturating_sub(count);
            items.split_off(start)
        };
        if removed.len() < count {
            tracing::trace!(
                requested = count,
                removed = removed.len(),
                "removal from tail stopped at the head"
            );
        }
        self.notify("remove_from_tail");
        removed
    }

    /// Remove up to `count` elements from the head, returned in their original order.
    pub fn remove_from_head(&self, count: usize) -> Vec<T> {
        let removed: Vec<T> = {
            let mut items = self.items.borrow_mut();
            let end = count.min(items.len());
            items.drain(..end).collect()
        };
        if removed.len() < count {
            tracing::trace!(
                requested = count,
                removed = removed.len(),
                "removal from head stopped at the tail"
            );
        }
        self.notify("remove_from_head");
        removed
    }

    /// Overwrite the element at `index`, returning the previous one.
    pub fn replace_at(&self, index: usize, item: T) -> Result<T, SequenceError> {
        let previous = {
            let mut items = self.items.borrow_mut();
            let len = items.len();
            let slot = items
                .get_mut(index)
                .ok_or(SequenceError::OutOfBounds { index, len })?;
            std::mem::replace(slot, item)
        };
        self.notify("replace_at");
        Ok(previous)
    }

    /// Overwrite the tail element, returning the previous one. Returns [`None`] and leaves the
    /// sequence untouched when it is empty.
    pub fn replace_last(&self, item: T) -> Option<T> {
        let previous = {
            let mut items = self.items.borrow_mut();
            let slot = items.last_mut()?;
            std::mem::replace(slot, item)
        };
        self.notify("replace_last");
        Some(previous)
    }

    /// Remove the element at `index`, shifting the following elements towards the head.
    pub fn remove_at(&self, index: usize) -> Result<T, SequenceError> {
        let removed = {
            let mut items = self.items.borrow_mut();
            let len = items.len();
            if index >= len {
                return Err(SequenceError::OutOfBounds { index, len });
            }
            items.remove(index)
        };
        self.notify("remove_at");
        Ok(removed)
    }

    /// Register a listener for the notifications of every later mutation.
    pub fn subscribe(&self, listener: impl Fn(&Changed<T>) + 'static) -> Subscription {
        self.emitter.subscribe(listener)
    }

    /// The number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.emitter.listener_count()
    }

    /// Get a handle that delivers this sequence's notifications.
    pub fn dispatcher(&self) -> Dispatcher<Changed<T>> {
        self.emitter.dispatcher()
    }

    fn notify(&self, operation: &'static str) {
        if self.emitter.listener_count() == 0 {
            tracing::trace!(operation, "sequence changed, nobody listening");
            return;
        }

        let items = self.snapshot();
        tracing::trace!(operation, len = items.len(), "sequence changed");
        self.emitter.emit(Changed { items });
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for SignaledVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignaledVec")
            .field("items", &self.items.borrow())
            .field("emitter", &self.emitter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_from_tail_keeps_order() {
        let seq = SignaledVec::with_items([1, 2, 3, 4]);

        assert_eq!(seq.remove_from_tail(2), vec![3, 4]);
        assert_eq!(seq.to_vec(), vec![1, 2]);
    }

    #[test]
    fn removal_truncates_at_the_boundary() {
        let seq = SignaledVec::with_items(["a", "b"]);

        assert_eq!(seq.remove_from_tail(5), vec!["a", "b"]);
        assert!(seq.is_empty());
        assert_eq!(seq.remove_from_tail(1), Vec::<&str>::new());

        let seq = SignaledVec::with_items(["a", "b", "c"]);
        assert_eq!(seq.remove_from_head(2), vec!["a", "b"]);
        assert_eq!(seq.remove_from_head(2), vec!["c"]);
    }

    #[test]
    fn index_errors_report_the_length() {
        let seq = SignaledVec::with_items([10]);

        assert_eq!(
            seq.replace_at(1, 11),
            Err(SequenceError::OutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(
            seq.remove_at(3),
            Err(SequenceError::OutOfBounds { index: 3, len: 1 })
        );
        assert_eq!(seq.dispatcher().pending(), 0);
    }
}

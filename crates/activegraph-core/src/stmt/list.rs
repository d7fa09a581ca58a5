use std::{fmt, sync::Arc};

/// An append-only persistent list.
///
/// Pushing returns a new list that shares every existing node with the
/// receiver, which is never modified. Two lists extended from the same base
/// are fully independent.
pub struct List<T> {
    head: Option<Arc<Node<T>>>,
    len: usize,
}

struct Node<T> {
    value: T,
    prev: Option<Arc<Node<T>>>,
}

impl<T> List<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns a new list with `value` appended.
    #[must_use]
    pub fn push(&self, value: T) -> Self {
        Self {
            head: Some(Arc::new(Node {
                value,
                prev: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the most recently pushed item.
    pub fn last(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Iterates items in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        let mut items = Vec::with_capacity(self.len);
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            items.push(&n.value);
            node = n.prev.as_deref();
        }
        items.into_iter().rev()
    }
}

impl<T: PartialEq> List<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(List::new(), |list, value| list.push(value))
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned nodes iteratively so long lists do not
        // overflow the stack.
        let mut node = self.head.take();
        while let Some(n) = node {
            match Arc::try_unwrap(n) {
                Ok(mut n) => node = n.prev.take(),
                Err(_) => break,
            }
        }
    }
}

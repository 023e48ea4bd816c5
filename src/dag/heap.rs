// src/dag/heap.rs

//! Binary heap ordered by an injected comparator.

use std::fmt;

/// Priority queue backed by an implicit complete binary tree.
///
/// `is_higher(a, b)` returns `true` when `a` should come out before `b`.
/// The queue stores no ordering knowledge of its own, so elements need not
/// implement `Ord`. Elements the comparator considers equal come out in an
/// order that depends on their position in the tree, not on insertion order.
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    is_higher: F,
    inner: Vec<T>,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(is_higher: F) -> Self {
        Self {
            is_higher,
            inner: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize, is_higher: F) -> Self {
        Self {
            is_higher,
            inner: Vec::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// The element `pop` would return next.
    pub fn peek(&self) -> Option<&T> {
        self.inner.first()
    }

    pub fn push(&mut self, element: T) {
        self.inner.push(element);
        self.sift_up(self.inner.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.inner.is_empty() {
            return None;
        }
        let last = self.inner.len() - 1;
        self.inner.swap(0, last);
        let top = self.inner.pop();
        self.sift_down(0);
        top
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !(self.is_higher)(&self.inner[index], &self.inner[parent]) {
                break;
            }
            self.inner.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let target = self.promotion_target(index);
            if target == index {
                break;
            }
            self.inner.swap(index, target);
            index = target;
        }
    }

    /// Index that should sit at `index`: the node itself or its more-top child.
    fn promotion_target(&self, index: usize) -> usize {
        let len = self.inner.len();
        let left = 2 * index + 1;
        let right = left + 1;

        let child = if right < len {
            self.top_of(left, right)
        } else if left < len {
            left
        } else {
            return index;
        };

        self.top_of(child, index)
    }

    fn top_of(&self, a: usize, b: usize) -> usize {
        if (self.is_higher)(&self.inner[a], &self.inner[b]) {
            a
        } else {
            b
        }
    }
}

impl<T, F> Extend<T> for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

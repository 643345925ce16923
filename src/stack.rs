//! A LIFO stack that manages its own backing buffer.
//!
//! The buffer is a boxed slice of `Option<T>` slots. Slots `[0, size)` hold
//! live elements and every slot past `size` is `None`, so a popped value is
//! never kept alive by the stack. When the buffer is full the stack moves its
//! elements into a new buffer of `2 * size + 1` slots. It never shrinks.

use std::fmt;
use std::iter::FromIterator;

use tracing::debug;

use crate::config::StackSettings;
use crate::error::EmptyStackError;

pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

pub struct Stack<T> {
    elements: Box<[Option<T>]>,
    size: usize,
}

fn empty_slots<T>(count: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(count).collect()
}

// =============================================================================
// Construction
// =============================================================================

impl<T> Stack<T> {
    /// Creates an empty stack with room for 16 elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty stack with `capacity` slots. Zero is allowed; the
    /// first push then grows the buffer to a single slot.
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            elements: empty_slots(capacity),
            size: 0,
        }
    }

    pub fn from_settings(settings: &StackSettings) -> Self {
        Self::with_capacity(settings.initial_capacity)
    }

    // =========================================================================
    // Core operations
    // =========================================================================

    /// Places `value` on top of the stack, growing the buffer if it is full.
    pub fn push(&mut self, value: T) {
        self.ensure_capacity();
        self.elements[self.size] = Some(value);
        self.size += 1;
    }

    /// Removes and returns the top element.
    ///
    /// The vacated slot is reset to `None`, so the stack holds no reference to
    /// the returned value afterwards.
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        if self.size == 0 {
            return Err(EmptyStackError);
        }
        self.size -= 1;
        self.elements[self.size].take().ok_or(EmptyStackError)
    }

    pub fn peek(&self) -> Option<&T> {
        let top = self.size.checked_sub(1)?;
        self.elements[top].as_ref()
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.elements[..self.size] {
            *slot = None;
        }
        self.size = 0;
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// Iterates from the top of the stack to the bottom, i.e. in pop order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.elements[..self.size]
            .iter()
            .rev()
            .filter_map(Option::as_ref)
    }

    // =========================================================================
    // Buffer management
    // =========================================================================

    fn ensure_capacity(&mut self) {
        if self.elements.len() != self.size {
            return;
        }

        let new_capacity = 2 * self.size + 1;
        debug!(
            old_capacity = self.elements.len(),
            new_capacity, "growing stack buffer"
        );

        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend(self.elements.iter_mut().map(Option::take));
        grown.resize_with(new_capacity, || None);
        self.elements = grown.into_boxed_slice();
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.elements[..self.size].iter().flatten())
            .finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::rc::Rc;

    #[test]
    fn test_push_pop_reverse_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(EmptyStackError));
    }

    #[test]
    fn test_pop_on_fresh_stack() {
        let mut stack: Stack<String> = Stack::new();
        assert_eq!(stack.pop(), Err(EmptyStackError));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_default_capacity() {
        let stack: Stack<u8> = Stack::default();
        assert_eq!(stack.capacity(), DEFAULT_INITIAL_CAPACITY);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_growth_is_two_n_plus_one() {
        let mut stack = Stack::new();
        for i in 0..16 {
            stack.push(i);
        }
        assert_eq!(stack.capacity(), 16);

        stack.push(16);
        assert_eq!(stack.capacity(), 33);

        for i in 17..34 {
            stack.push(i);
        }
        assert_eq!(stack.capacity(), 67);
        assert_eq!(stack.len(), 34);
    }

    #[test]
    fn test_zero_capacity_grows_to_one() {
        let mut stack = Stack::with_capacity(0);
        assert_eq!(stack.capacity(), 0);
        stack.push('a');
        assert_eq!(stack.capacity(), 1);
        stack.push('b');
        assert_eq!(stack.capacity(), 3);
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let mut stack = Stack::with_capacity(1);
        stack.extend(0..10);
        let grown = stack.capacity();
        while stack.pop().is_ok() {}
        assert_eq!(stack.capacity(), grown);
    }

    #[test]
    fn test_pop_clears_vacated_slot() {
        let mut stack = Stack::new();
        stack.push("bottom".to_string());
        stack.push("top".to_string());

        stack.pop().unwrap();
        assert!(stack.elements[1].is_none());
        assert!(stack.elements[0].is_some());
    }

    #[test]
    fn test_popped_value_not_retained() {
        let value = Rc::new(42);
        let mut stack = Stack::new();
        stack.push(Rc::clone(&value));
        assert_eq!(Rc::strong_count(&value), 2);

        drop(stack.pop().unwrap());
        assert_eq!(Rc::strong_count(&value), 1);
    }

    #[test]
    fn test_growth_keeps_elements() {
        let mut stack = Stack::with_capacity(2);
        stack.extend(vec![10, 20, 30, 40]);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![40, 30, 20, 10]);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = Stack::new();
        assert_eq!(stack.peek(), None);
        stack.push(7);
        assert_eq!(stack.peek(), Some(&7));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_clear_releases_everything() {
        let value = Rc::new(());
        let mut stack: Stack<Rc<()>> = std::iter::repeat_with(|| Rc::clone(&value))
            .take(5)
            .collect();
        let capacity = stack.capacity();
        assert_eq!(Rc::strong_count(&value), 6);

        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), capacity);
        assert_eq!(Rc::strong_count(&value), 1);
        assert_eq!(stack.pop(), Err(EmptyStackError));
    }

    #[test]
    fn test_from_iter_last_item_on_top() {
        let mut stack: Stack<&str> = vec!["a", "b", "c"].into_iter().collect();
        assert_eq!(stack.pop(), Ok("c"));
    }

    #[test]
    fn test_debug_shows_live_elements_only() {
        let mut stack = Stack::new();
        stack.extend([1, 2, 3]);
        stack.pop().unwrap();
        assert_eq!(format!("{:?}", stack), "[1, 2]");
    }

    #[test]
    fn test_from_settings() {
        let settings = StackSettings {
            initial_capacity: 4,
        };
        let stack: Stack<i32> = Stack::from_settings(&settings);
        assert_eq!(stack.capacity(), 4);
    }

    proptest! {
        #[test]
        fn prop_pops_reverse_pushes(values in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut stack = Stack::new();
            for v in &values {
                stack.push(*v);
            }

            let mut popped = Vec::new();
            while let Ok(v) = stack.pop() {
                popped.push(v);
            }
            popped.reverse();
            prop_assert_eq!(popped, values);
            prop_assert_eq!(stack.pop(), Err(EmptyStackError));
        }

        #[test]
        fn prop_len_tracks_pushes(n in 0usize..300, initial in 0usize..20) {
            let mut stack = Stack::with_capacity(initial);
            for i in 0..n {
                stack.push(i);
                prop_assert!(stack.capacity() >= stack.len());
            }
            prop_assert_eq!(stack.len(), n);
        }

        #[test]
        fn prop_empty_after_drain(values in prop::collection::vec(any::<u8>(), 0..50)) {
            let mut stack: Stack<u8> = values.iter().copied().collect();
            for _ in 0..values.len() {
                prop_assert!(stack.pop().is_ok());
            }
            prop_assert!(stack.is_empty());
            prop_assert_eq!(stack.pop(), Err(EmptyStackError));
        }
    }
}

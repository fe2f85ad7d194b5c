/// Append-only buffer that keeps its storage across `clear()`.
///
/// Performance characteristics:
/// - `push()` is amortized O(1); capacity doubles (minimum 8) when full
/// - `clear()` is O(1) for `Copy` elements and never releases storage
///
/// Allocation failure aborts the process; there is no recoverable
/// out-of-memory path.
#[derive(Debug, Clone)]
pub struct GrowingBuffer<T> {
    items: Vec<T>,
}

const MIN_GROW: usize = 8;

impl<T> GrowingBuffer<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty buffer with room for `count` elements.
    pub fn with_reserve(count: usize) -> Self {
        Self { items: Vec::with_capacity(count) }
    }

    /// Appends `element` and returns its index.
    #[inline]
    pub fn push(&mut self, element: T) -> usize {
        if self.items.len() == self.items.capacity() {
            self.grow_for(self.items.len() + 1);
        }
        self.items.push(element);
        self.items.len() - 1
    }

    /// Ensures the total capacity is at least `count` elements.
    pub fn reserve(&mut self, count: usize) {
        if count > self.items.capacity() {
            self.items.reserve_exact(count - self.items.len());
        }
    }

    /// Resets the logical length to zero. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn grow_for(&mut self, needed: usize) {
        let target = needed.max(self.items.capacity() * 2).max(MIN_GROW);
        self.items.reserve_exact(target - self.items.len());
    }
}

impl<T: Default> GrowingBuffer<T> {
    /// Sets the logical length to `count`, filling new slots with `T::default()`.
    pub fn resize(&mut self, count: usize) {
        if count > self.items.capacity() {
            self.grow_for(count);
        }
        self.items.resize_with(count, T::default);
    }
}

impl<T> Default for GrowingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a GrowingBuffer<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty_and_unallocated() {
        let b: GrowingBuffer<u32> = GrowingBuffer::new();
        assert_eq!(b.len(), 0);
        assert_eq!(b.capacity(), 0);
    }

    #[test]
    fn push_returns_index_of_stored_element() {
        let mut b = GrowingBuffer::new();
        assert_eq!(b.push(10), 0);
        assert_eq!(b.push(20), 1);
        assert_eq!(b.get(1), Some(&20));
    }

    #[test]
    fn growth_at_least_doubles() {
        let mut b = GrowingBuffer::new();
        for i in 0..8 {
            b.push(i);
        }
        assert!(b.capacity() >= 8);
        let before = b.capacity();
        for i in 0..=before {
            b.push(i);
        }
        assert!(b.capacity() >= before * 2);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut b = GrowingBuffer::with_reserve(64);
        for i in 0..50 {
            b.push(i);
        }
        let cap = b.capacity();
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.capacity(), cap);
    }

    #[test]
    fn reserve_is_total_not_additional() {
        let mut b = GrowingBuffer::new();
        b.push(1u8);
        b.reserve(100);
        assert!(b.capacity() >= 100);
        let cap = b.capacity();
        b.reserve(10);
        assert_eq!(b.capacity(), cap);
    }

    #[test]
    fn resize_fills_with_default_and_truncates() {
        let mut b = GrowingBuffer::new();
        b.push(7i32);
        b.resize(4);
        assert_eq!(b.as_slice(), &[7, 0, 0, 0]);
        b.resize(1);
        assert_eq!(b.as_slice(), &[7]);
    }
}

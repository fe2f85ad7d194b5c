use super::{DrawError, StackKind};

/// Fixed-depth stack backing the z-layer and scissor state of a frame.
///
/// Storage grows on demand and is kept across resets.
#[derive(Debug, Clone)]
pub(crate) struct BoundedStack<T> {
    items: Vec<T>,
    max: usize,
    kind: StackKind,
}

impl<T: Copy> BoundedStack<T> {
    pub(crate) fn new(kind: StackKind, max: usize) -> Self {
        Self { items: Vec::new(), max, kind }
    }

    pub(crate) fn push(&mut self, value: T) -> Result<(), DrawError> {
        if self.items.len() >= self.max {
            return Err(DrawError::StackOverflow { stack: self.kind, max: self.max });
        }
        self.items.push(value);
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Result<T, DrawError> {
        self.items.pop().ok_or(DrawError::StackUnderflow { stack: self.kind })
    }

    #[inline]
    pub(crate) fn top(&self) -> Option<T> {
        self.items.last().copied()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

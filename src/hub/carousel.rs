//! Wrap-around selection over a fixed number of slots.

/// Index into a non-empty list that wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Starts at slot 0. A zero length is treated as one slot.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    /// Current slot.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Advances one slot, wrapping to the first.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Steps back one slot, wrapping to the last.
    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut carousel = Carousel::new(5);
        assert_eq!(carousel.previous(), 4);
        assert_eq!(carousel.next(), 0);
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 4);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_single_slot() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.len(), 1);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.previous(), 0);
    }
}

//! Wrap-around carousel over a fixed, ordered list.

/// Index into a fixed list with wrap-around navigation.
///
/// `next` and `prev` wrap with modulo arithmetic; `select` jumps directly.
/// An empty carousel ignores all navigation and has no current item.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn next(&mut self) {
        let n = self.items.len();
        if n > 0 {
            self.index = (self.index + 1) % n;
        }
    }

    pub fn prev(&mut self) {
        let n = self.items.len();
        if n > 0 {
            self.index = (self.index + n - 1) % n;
        }
    }

    /// Jumps to `index`. Returns false (and leaves the position unchanged)
    /// when the index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.index = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_nexts_return_to_start() {
        let mut carousel = Carousel::new(vec!['a', 'b', 'c']);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_prev_from_start_wraps_to_last() {
        let mut carousel = Carousel::new(vec!['a', 'b', 'c']);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.current(), Some(&'c'));
    }

    #[test]
    fn test_select_jumps_and_rejects_out_of_range() {
        let mut carousel = Carousel::new(vec![1, 2, 3]);
        assert!(carousel.select(1));
        assert_eq!(carousel.current(), Some(&2));
        assert!(!carousel.select(3));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel: Carousel<u8> = Carousel::new(Vec::new());
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.current().is_none());
        assert!(!carousel.select(0));
    }
}

// 🎠 Testimonial carousel
//
// Shows `visible` consecutive testimonials starting at `current`. The number
// visible depends on the viewport width and is recomputed on resize.

/// Viewports narrower than this show a single testimonial
pub const NARROW_WIDTH: u16 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    visible: usize,
}

impl Carousel {
    pub fn new(len: usize, width: u16) -> Self {
        let mut carousel = Carousel {
            len,
            current: 0,
            visible: 0,
        };
        carousel.resize(width);
        carousel
    }

    pub fn visible_for_width(width: u16) -> usize {
        if width < NARROW_WIDTH {
            1
        } else {
            2
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Last valid starting slide
    fn last_start(&self) -> usize {
        self.len.saturating_sub(self.visible)
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = if self.current >= self.last_start() {
            0
        } else {
            self.current + 1
        };
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = if self.current == 0 {
            self.last_start()
        } else {
            self.current - 1
        };
    }

    pub fn go_to(&mut self, slide: usize) {
        if slide <= self.last_start() && !self.is_empty() {
            self.current = slide;
        }
    }

    /// Indices into the testimonial list currently on screen
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }
        (0..self.visible)
            .map(|k| (self.current + k) % self.len)
            .collect()
    }

    /// One dot per valid starting slide
    pub fn indicator_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.len - self.visible + 1
        }
    }

    pub fn resize(&mut self, width: u16) {
        self.visible = Self::visible_for_width(width).min(self.len);
        self.current = self.current.min(self.last_start());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_count_by_width() {
        assert_eq!(Carousel::new(4, 80).visible(), 1);
        assert_eq!(Carousel::new(4, 160).visible(), 2);
        assert_eq!(Carousel::new(1, 160).visible(), 1);
    }

    #[test]
    fn test_next_wraps_after_last_start() {
        let mut carousel = Carousel::new(4, 160);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 2);
        assert_eq!(carousel.visible_indices(), vec![2, 3]);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last_start() {
        let mut carousel = Carousel::new(4, 160);
        carousel.previous();
        assert_eq!(carousel.current(), 2);

        let mut narrow = Carousel::new(4, 60);
        narrow.previous();
        assert_eq!(narrow.current(), 3);
    }

    #[test]
    fn test_indicator_count() {
        assert_eq!(Carousel::new(4, 160).indicator_count(), 3);
        assert_eq!(Carousel::new(4, 60).indicator_count(), 4);
        assert_eq!(Carousel::new(0, 60).indicator_count(), 0);
    }

    #[test]
    fn test_resize_reclamps_current() {
        let mut carousel = Carousel::new(4, 60);
        carousel.go_to(3);
        assert_eq!(carousel.current(), 3);

        carousel.resize(160);
        assert_eq!(carousel.visible(), 2);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_go_to_ignores_invalid_slide() {
        let mut carousel = Carousel::new(4, 160);
        carousel.go_to(3);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(0, 160);
        carousel.next();
        carousel.previous();
        assert!(carousel.visible_indices().is_empty());
    }
}

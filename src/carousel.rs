/// Looping slide index with an optional lightbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    lightbox: Option<usize>,
}

impl Carousel {
    pub const AUTOPLAY_MS: u32 = 3500;

    pub fn new(len: usize) -> Self {
        Self { len, current: 0, lightbox: None }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Autoplay step. Paused while the lightbox is open.
    pub fn autoplay_tick(&mut self) {
        if self.lightbox.is_none() {
            self.next();
        }
    }

    pub fn open_lightbox(&mut self, index: usize) {
        if index < self.len {
            self.lightbox = Some(index);
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    pub fn lightbox(&self) -> Option<usize> {
        self.lightbox
    }

    pub fn lightbox_next(&mut self) {
        if let Some(i) = self.lightbox {
            self.lightbox = Some((i + 1) % self.len);
        }
    }

    pub fn lightbox_prev(&mut self) {
        if let Some(i) = self.lightbox {
            self.lightbox = Some((i + self.len - 1) % self.len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut carousel = Carousel::new(6);
        carousel.prev();
        assert_eq!(carousel.current(), 5);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.go_to(4);
        carousel.go_to(40);
        assert_eq!(carousel.current(), 4);
    }

    #[test]
    fn autoplay_keeps_going_after_manual_navigation() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(2);
        carousel.autoplay_tick();
        assert_eq!(carousel.current(), 0);
        carousel.autoplay_tick();
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn lightbox_pauses_autoplay_and_steps_independently() {
        let mut carousel = Carousel::new(6);
        carousel.open_lightbox(5);
        carousel.autoplay_tick();
        assert_eq!(carousel.current(), 0);
        carousel.lightbox_next();
        assert_eq!(carousel.lightbox(), Some(0));
        carousel.lightbox_prev();
        carousel.lightbox_prev();
        assert_eq!(carousel.lightbox(), Some(4));
        carousel.close_lightbox();
        carousel.autoplay_tick();
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert!(!Carousel::new(3).is_empty());
        carousel.next();
        carousel.prev();
        carousel.open_lightbox(0);
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.lightbox(), None);
    }
}

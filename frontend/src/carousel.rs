/// Auto-scrolling track for the team cards.
///
/// `offset` is the fraction of one full pass already travelled. The track
/// holds `LOOP_COPIES` back-to-back copies of the cards, so one pass moves it
/// by a single copy's share of its own width and the wrap from 1.0 back to 0.0
/// lands on an identical frame.
pub const LOOP_COPIES: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    offset: f64,
    cycle_ms: f64,
    hovered: Option<usize>,
}

impl Carousel {
    pub fn new(cycle_ms: f64) -> Self {
        Self { offset: 0.0, cycle_ms, hovered: None }
    }

    pub fn advance(&mut self, elapsed_ms: f64) {
        if self.is_paused() || self.cycle_ms <= 0.0 {
            return;
        }
        self.offset = (self.offset + elapsed_ms / self.cycle_ms).fract();
    }

    pub fn hover(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_paused(&self) -> bool {
        self.hovered.is_some()
    }

    /// Translation as a percentage of the whole track's width.
    pub fn translate_percent(&self) -> f64 {
        -self.offset * 100.0 / LOOP_COPIES as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_moves_linearly_and_wraps() {
        let mut carousel = Carousel::new(10_000.0);
        carousel.advance(2_500.0);
        assert!(approx(carousel.translate_percent(), -12.5));

        carousel.advance(10_000.0);
        assert!(approx(carousel.translate_percent(), -12.5));

        carousel.advance(7_500.0);
        assert!(approx(carousel.translate_percent(), 0.0));
    }

    #[test]
    fn test_hover_pauses_and_leave_resumes() {
        let mut carousel = Carousel::new(10_000.0);
        carousel.advance(1_000.0);

        carousel.hover(3);
        assert!(carousel.is_paused());
        assert_eq!(carousel.hovered(), Some(3));
        carousel.advance(4_000.0);
        assert!(approx(carousel.translate_percent(), -5.0));

        carousel.leave();
        assert!(!carousel.is_paused());
        assert_eq!(carousel.hovered(), None);
        carousel.advance(1_000.0);
        assert!(approx(carousel.translate_percent(), -10.0));
    }

    #[test]
    fn test_full_pass_shifts_exactly_one_copy() {
        let mut carousel = Carousel::new(10_000.0);
        carousel.advance(9_375.0);
        let copy_share = 100.0 / LOOP_COPIES as f64;
        assert!(approx(carousel.translate_percent(), -copy_share * 0.9375));

        carousel.advance(625.0);
        assert!(approx(carousel.translate_percent(), 0.0));
    }
}

//! Horizontal scroll state of the project card strip.
//!
//! The host owns the actual scroll position. These types only decide which
//! arrow buttons are usable and where an arrow click should scroll to.

/// Scroll offsets at or below this count as "at the start".
const START_TOLERANCE: f64 = 1.0;

/// Scroll measurements read from the card strip container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderMetrics {
    /// Current horizontal scroll offset
    pub scroll_left: f64,
    /// Total scrollable width of the content
    pub scroll_width: f64,
    /// Visible width of the container
    pub client_width: f64,
}

impl SliderMetrics {
    pub fn new(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    /// Largest offset the host will accept.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn at_start(&self) -> bool {
        self.scroll_left < START_TOLERANCE
    }

    pub fn at_end(&self) -> bool {
        (self.scroll_left + self.client_width).ceil() >= self.scroll_width
    }

    /// Same measurements scrolled back to the start.
    pub fn reset(self) -> Self {
        Self {
            scroll_left: 0.0,
            ..self
        }
    }
}

/// Enablement of the previous/next arrow controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonStates {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl ButtonStates {
    pub fn from_metrics(metrics: &SliderMetrics) -> Self {
        Self {
            prev_disabled: metrics.at_start(),
            next_disabled: metrics.at_end(),
        }
    }
}

impl Default for ButtonStates {
    /// Nothing measured yet: both arrows disabled.
    fn default() -> Self {
        Self::from_metrics(&SliderMetrics::default())
    }
}

/// Arrow direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Previous,
    Next,
}

impl ScrollDirection {
    fn sign(self) -> f64 {
        match self {
            ScrollDirection::Previous => -1.0,
            ScrollDirection::Next => 1.0,
        }
    }
}

/// One arrow step: the first visible card's width plus the inter-card gap.
///
/// Without a visible card the step is zero, so the scroll is a no-op.
pub fn scroll_step(first_card_width: Option<f64>, gap: f64) -> f64 {
    match first_card_width {
        Some(width) => width + gap,
        None => 0.0,
    }
}

/// Offset an arrow click should scroll to, clamped to the scrollable range.
pub fn scroll_target(metrics: &SliderMetrics, direction: ScrollDirection, step: f64) -> f64 {
    let target = metrics.scroll_left + direction.sign() * step;
    target.clamp(0.0, metrics.max_scroll())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_disabled_within_one_pixel_of_start() {
        let states = ButtonStates::from_metrics(&SliderMetrics::new(0.6, 1000.0, 400.0));
        assert!(states.prev_disabled);
        assert!(!states.next_disabled);

        let states = ButtonStates::from_metrics(&SliderMetrics::new(1.0, 1000.0, 400.0));
        assert!(!states.prev_disabled);
    }

    #[test]
    fn next_disabled_at_end_with_rounding() {
        // Fractional offsets near the end round up.
        let states = ButtonStates::from_metrics(&SliderMetrics::new(599.2, 1000.0, 400.0));
        assert!(states.next_disabled);

        let states = ButtonStates::from_metrics(&SliderMetrics::new(598.0, 1000.0, 400.0));
        assert!(!states.next_disabled);
    }

    #[test]
    fn content_narrower_than_viewport_disables_both() {
        let states = ButtonStates::from_metrics(&SliderMetrics::new(0.0, 300.0, 400.0));
        assert!(states.prev_disabled);
        assert!(states.next_disabled);
        assert_eq!(ButtonStates::default(), states);
    }

    #[test]
    fn step_uses_card_width_plus_gap() {
        assert_eq!(scroll_step(Some(320.0), 24.0), 344.0);
        assert_eq!(scroll_step(None, 24.0), 0.0);
    }

    #[test]
    fn target_is_clamped_to_scroll_range() {
        let metrics = SliderMetrics::new(100.0, 1000.0, 400.0);
        assert_eq!(scroll_target(&metrics, ScrollDirection::Next, 344.0), 444.0);
        assert_eq!(scroll_target(&metrics, ScrollDirection::Previous, 344.0), 0.0);

        let near_end = SliderMetrics::new(500.0, 1000.0, 400.0);
        assert_eq!(scroll_target(&near_end, ScrollDirection::Next, 344.0), 600.0);
    }

    #[test]
    fn zero_step_is_noop() {
        let metrics = SliderMetrics::new(250.0, 1000.0, 400.0);
        assert_eq!(scroll_target(&metrics, ScrollDirection::Next, 0.0), 250.0);
    }
}

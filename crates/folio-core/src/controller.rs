//! Project slider, filter and modal controller.
//!
//! Owns the project cards, the active filter, the last measured scroll state
//! of the card strip and the modal. Event handlers in the host hold one
//! controller and call into it; nothing here touches a live document.

use tracing::debug;

use crate::filter::{visible_set, Filter};
use crate::modal::ModalState;
use crate::project::ProjectCard;
use crate::slider::{scroll_step, scroll_target, ButtonStates, ScrollDirection, SliderMetrics};

/// Keys the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKey {
    Escape,
    Other,
}

/// Where a click inside the modal overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayTarget {
    /// The background scrim around the content
    Scrim,
    /// Anything inside the content panel
    Content,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectController {
    cards: Vec<ProjectCard>,
    filter: Filter,
    visible: Vec<usize>,
    metrics: SliderMetrics,
    buttons: ButtonStates,
    modal: ModalState,
}

impl ProjectController {
    /// Create a controller showing every card.
    pub fn new(cards: Vec<ProjectCard>) -> Self {
        let mut controller = Self {
            cards,
            ..Default::default()
        };
        controller.set_filter(Filter::All);
        controller
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Filter
    // ═══════════════════════════════════════════════════════════════════════

    /// Apply `filter`, reset the strip to the start and recompute the arrows.
    pub fn set_filter(&mut self, filter: Filter) {
        self.visible = visible_set(&self.cards, &filter);
        debug!(filter = %filter, visible = self.visible.len(), "Project filter applied");
        self.filter = filter;
        self.metrics = self.metrics.reset();
        self.buttons = ButtonStates::from_metrics(&self.metrics);
    }

    /// Apply a filter button's tag.
    pub fn set_filter_tag(&mut self, tag: &str) {
        self.set_filter(Filter::from_tag(tag));
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    /// Indices into `cards()` of the visible cards.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &ProjectCard> + '_ {
        self.visible.iter().map(|&i| &self.cards[i])
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Scroll / arrows
    // ═══════════════════════════════════════════════════════════════════════

    /// Record fresh measurements of the strip and recompute the arrows.
    pub fn update_button_states(&mut self, metrics: SliderMetrics) {
        self.metrics = metrics;
        self.buttons = ButtonStates::from_metrics(&metrics);
    }

    /// Offset the strip should scroll to for an arrow click.
    ///
    /// `first_card_width` is the rendered width of the first visible card,
    /// `None` when no card is visible. The controller records the new offset
    /// and recomputes the arrows; the host performs the actual scroll.
    pub fn scroll_by(
        &mut self,
        direction: ScrollDirection,
        first_card_width: Option<f64>,
        gap: f64,
    ) -> f64 {
        let width = if self.visible.is_empty() {
            None
        } else {
            first_card_width
        };
        let target = scroll_target(&self.metrics, direction, scroll_step(width, gap));
        self.update_button_states(SliderMetrics {
            scroll_left: target,
            ..self.metrics
        });
        target
    }

    pub fn metrics(&self) -> SliderMetrics {
        self.metrics
    }

    pub fn buttons(&self) -> ButtonStates {
        self.buttons
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Modal
    // ═══════════════════════════════════════════════════════════════════════

    /// Open the modal for the card at `index` (an index into `cards()`).
    ///
    /// Out-of-range indices are ignored.
    pub fn open_modal(&mut self, index: usize) {
        match self.cards.get(index) {
            Some(card) => {
                debug!(title = %card.title, "Opening project modal");
                self.modal.open(card);
            }
            None => debug!(index, "Ignoring modal open for unknown card"),
        }
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    pub fn show_image(&mut self, index: isize) {
        self.modal.show_image(index);
    }

    pub fn next_image(&mut self) {
        self.modal.next_image();
    }

    pub fn previous_image(&mut self) {
        self.modal.previous_image();
    }

    /// Escape closes the modal while it is visible.
    pub fn handle_key(&mut self, key: ControlKey) {
        if key == ControlKey::Escape && self.modal.is_open() {
            self.close_modal();
        }
    }

    /// Clicks on the scrim close the modal, clicks on the content do not.
    pub fn handle_overlay_click(&mut self, target: OverlayTarget) {
        if target == OverlayTarget::Scrim {
            self.close_modal();
        }
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }
}

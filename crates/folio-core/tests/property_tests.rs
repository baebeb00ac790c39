//! Property-based tests for the project controller
//!
//! Uses proptest to check filter, scroll and carousel invariants over
//! arbitrary card sets and event sequences.

use folio_core::modal::Slide;
use folio_core::project::split_list;
use folio_core::{Filter, ModalState, ProjectCard, ProjectController, SliderMetrics};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("web".to_string()),
        Just("design".to_string()),
        Just("marketing".to_string()),
    ]
}

/// Comma-joined lists with occasional blank entries
fn list_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => "[a-z0-9./]{1,12}",
            1 => Just(String::new()),
            1 => Just("  ".to_string()),
        ],
        0..8,
    )
    .prop_map(|items| items.join(","))
}

fn card_strategy() -> impl Strategy<Value = ProjectCard> {
    (category_strategy(), "[A-Za-z ]{1,20}", list_strategy()).prop_map(
        |(category, title, images)| ProjectCard {
            category,
            title,
            images,
            ..Default::default()
        },
    )
}

fn tag_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("all".to_string()),
        category_strategy(),
        Just("unknown".to_string()),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every visible card matches the filter, and "all" shows everything
    #[test]
    fn visible_cards_match_filter(
        cards in prop::collection::vec(card_strategy(), 0..20),
        tag in tag_strategy(),
    ) {
        let mut controller = ProjectController::new(cards.clone());
        controller.set_filter_tag(&tag);

        if tag == "all" {
            prop_assert_eq!(controller.visible_indices().len(), cards.len());
        } else {
            for card in controller.visible_cards() {
                prop_assert_eq!(&card.category, &tag);
            }
            let expected = cards.iter().filter(|c| c.category == tag).count();
            prop_assert_eq!(controller.visible_indices().len(), expected);
        }
    }

    /// A filter change always rewinds the strip and disables "previous"
    #[test]
    fn filter_change_resets_scroll(
        cards in prop::collection::vec(card_strategy(), 1..10),
        scroll_left in 0.0f64..5000.0,
        tag in tag_strategy(),
    ) {
        let mut controller = ProjectController::new(cards);
        controller.update_button_states(SliderMetrics::new(scroll_left, 6000.0, 500.0));
        controller.set_filter(Filter::from_tag(&tag));

        prop_assert_eq!(controller.metrics().scroll_left, 0.0);
        prop_assert!(controller.buttons().prev_disabled);
    }

    /// Out-of-range indices show the nearest boundary image
    #[test]
    fn show_image_clamps(card in card_strategy(), index in -50isize..50) {
        let images = split_list(&card.images);
        let mut modal = ModalState::new();
        modal.open(&card);
        modal.show_image(index);

        if images.is_empty() {
            prop_assert!(matches!(modal.carousel().slide, Slide::Placeholder(_)));
            prop_assert!(!modal.carousel().show_controls);
        } else {
            let expected = index.clamp(0, images.len() as isize - 1) as usize;
            prop_assert_eq!(modal.current_index(), expected);
            prop_assert_eq!(modal.carousel().slide, Slide::Image(images[expected].clone()));
        }
    }

    /// Any sequence of next/previous clicks keeps the index in bounds
    #[test]
    fn carousel_index_stays_in_bounds(
        card in card_strategy(),
        moves in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut modal = ModalState::new();
        modal.open(&card);

        for forward in moves {
            if forward {
                modal.next_image();
            } else {
                modal.previous_image();
            }
            let len = modal.images().len();
            if len > 0 {
                prop_assert!(modal.current_index() < len);
                let view = modal.carousel();
                prop_assert_eq!(view.prev_disabled, modal.current_index() == 0);
                prop_assert_eq!(view.next_disabled, modal.current_index() == len - 1);
            }
        }
    }

    /// List parsing keeps non-blank tokens in source order
    #[test]
    fn split_list_preserves_order(raw in list_strategy()) {
        let expected: Vec<String> = raw
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(String::from)
            .collect();
        prop_assert_eq!(split_list(&raw), expected);
    }
}

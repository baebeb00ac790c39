//! Category filter for the project slider.

use std::fmt;

use crate::project::ProjectCard;

/// Tag that selects every card.
pub const ALL_TAG: &str = "all";

/// The single active category filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a filter button tag. `"all"` is the pass-through sentinel.
    pub fn from_tag(tag: &str) -> Self {
        if tag == ALL_TAG {
            Filter::All
        } else {
            Filter::Category(tag.to_string())
        }
    }

    /// The tag this filter was parsed from.
    pub fn tag(&self) -> &str {
        match self {
            Filter::All => ALL_TAG,
            Filter::Category(tag) => tag,
        }
    }

    pub fn matches(&self, card: &ProjectCard) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(tag) => card.category == *tag,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Indices of the cards matching `filter`, in card order.
pub fn visible_set(cards: &[ProjectCard], filter: &Filter) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| filter.matches(card))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(category: &str) -> ProjectCard {
        ProjectCard {
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn all_tag_is_sentinel() {
        assert_eq!(Filter::from_tag("all"), Filter::All);
        assert_eq!(Filter::from_tag("web"), Filter::Category("web".into()));
        assert_eq!(Filter::from_tag("web").to_string(), "web");
        assert_eq!(Filter::All.tag(), "all");
    }

    #[test]
    fn visible_set_keeps_card_order() {
        let cards = vec![card("web"), card("design"), card("web")];
        assert_eq!(visible_set(&cards, &Filter::All), vec![0, 1, 2]);
        assert_eq!(visible_set(&cards, &Filter::from_tag("web")), vec![0, 2]);
        assert_eq!(visible_set(&cards, &Filter::from_tag("design")), vec![1]);
    }

    #[test]
    fn unknown_tag_yields_empty_set() {
        let cards = vec![card("web")];
        assert!(visible_set(&cards, &Filter::from_tag("video")).is_empty());
    }
}

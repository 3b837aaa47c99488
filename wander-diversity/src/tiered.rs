//! Score-tiered bucket shuffle.
//!
//! Cards are split into tiers by descending score cutoffs, each tier is
//! shuffled on its own, and tiers are concatenated high to low. The run state
//! carries over from one tier to the next so no run forms across a boundary.

use wander_core::models::CuratedCard;

use crate::bucket;
use crate::runs::RunState;

/// Diversify within score tiers. `cutoffs` must be strictly descending;
/// `[0.6, 0.45]` yields the tiers `>= 0.6`, `[0.45, 0.6)` and `< 0.45`.
pub fn diversify_tiered(
    cards: Vec<CuratedCard>,
    max_run: usize,
    cutoffs: &[f64],
) -> Vec<CuratedCard> {
    let total = cards.len();
    let mut state = RunState::new();
    let mut out = Vec::with_capacity(total);
    for tier in split_tiers(cards, cutoffs) {
        out.extend(bucket::diversify_from(tier, max_run, &mut state));
    }
    out
}

/// Partition cards into `cutoffs.len() + 1` tiers, highest first.
/// Input order is preserved inside each tier.
pub fn split_tiers(cards: Vec<CuratedCard>, cutoffs: &[f64]) -> Vec<Vec<CuratedCard>> {
    let mut tiers: Vec<Vec<CuratedCard>> = vec![Vec::new(); cutoffs.len() + 1];
    for card in cards {
        let tier = cutoffs
            .iter()
            .position(|cut| card.score.total >= *cut)
            .unwrap_or(cutoffs.len());
        tiers[tier].push(card);
    }
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::card;

    #[test]
    fn split_respects_cutoffs() {
        let cards = vec![
            card("low", "A", None, 0.2),
            card("top", "B", None, 0.6),
            card("mid", "C", None, 0.5),
        ];
        let tiers = split_tiers(cards, &[0.6, 0.45]);
        let ids: Vec<Vec<&str>> = tiers
            .iter()
            .map(|t| t.iter().map(|c| c.hotel_id.as_str()).collect())
            .collect();
        assert_eq!(ids, vec![vec!["top"], vec!["mid"], vec!["low"]]);
    }

    #[test]
    fn no_cutoffs_is_one_tier() {
        let cards = vec![card("a", "A", None, 0.9), card("b", "B", None, 0.1)];
        assert_eq!(split_tiers(cards, &[]).len(), 1);
    }
}

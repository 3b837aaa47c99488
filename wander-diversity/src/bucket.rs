//! Bucket shuffle.
//!
//! Cards are ranked by score (stable), then emitted one at a time. At each
//! step the next card is the one whose city bucket has the most cards left,
//! then whose brand bucket has the most left, then the best ranked, among
//! the cards that would not extend a city or brand run past `max_run`.
//! Draining the largest bucket first keeps the run limit satisfiable for as
//! long as possible; a bounded lookahead (see `search`) skips a pick when
//! the cards left behind could no longer be placed.
//!
//! When no card satisfies both limits the shuffle relaxes them in order:
//! city only, then brand only, then any card. It never drops a card.

use wander_core::models::CuratedCard;

use crate::runs::RunState;
use crate::search::Search;

/// Reorder `cards` so that no more than `max_run` consecutive cards share a
/// city or a brand, wherever the input allows it.
pub fn diversify(cards: Vec<CuratedCard>, max_run: usize) -> Vec<CuratedCard> {
    let mut state = RunState::new();
    diversify_from(cards, max_run, &mut state)
}

/// Same as [`diversify`], continuing from runs already emitted before `cards`.
pub(crate) fn diversify_from(
    mut cards: Vec<CuratedCard>,
    max_run: usize,
    state: &mut RunState,
) -> Vec<CuratedCard> {
    sort_by_score(&mut cards);

    let keys: Vec<(String, Option<String>)> = cards
        .iter()
        .map(|card| (card.city_key(), card.brand_key()))
        .collect();
    let mut search = Search::new(&keys, max_run);
    let mut tail = search.tail_of(state);

    let mut slots: Vec<Option<CuratedCard>> = cards.into_iter().map(Some).collect();
    let mut out = Vec::with_capacity(slots.len());
    while let Some(class) = search.choose(tail) {
        let pos = search.take(class);
        tail = search.advance(tail, class);
        let (city, brand) = &keys[pos];
        state.push(city, brand.as_deref());
        if let Some(card) = slots[pos].take() {
            out.push(card);
        }
    }
    out
}

/// Stable sort by total score, highest first.
pub(crate) fn sort_by_score(cards: &mut [CuratedCard]) {
    cards.sort_by(|a, b| b.score.total.total_cmp(&a.score.total));
}

//! Bounded feasibility search behind the bucket shuffle.
//!
//! Cards that share both a city and a brand are interchangeable as far as the
//! run limit goes, so the search works on those classes instead of on single
//! cards. A state is the number of cards left in each class plus the trailing
//! city and brand run. Visited states are memoized.
//!
//! Moves are tried in the shuffle's own priority order, so the search agrees
//! with the greedy pick whenever the greedy pick can still be completed.

use std::cmp::Reverse;

use rustc_hash::FxHashMap;

use crate::runs::RunState;

/// States expanded per shuffle before the search stops proving and answers
/// optimistically.
const NODE_BUDGET: usize = 20_000;

/// How far ahead of the current position the search looks.
const HORIZON: usize = 256;

/// Trailing runs, with keys interned and lengths capped at `max_run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) struct Tail {
    city: Option<(u32, usize)>,
    brand: Option<(u32, usize)>,
}

#[derive(Debug, Clone, Copy)]
struct Class {
    city: u32,
    brand: Option<u32>,
}

pub(crate) struct Search {
    max_run: usize,
    classes: Vec<Class>,
    /// Ranked positions of each class's cards, best first.
    positions: Vec<Vec<usize>>,
    counts: Vec<usize>,
    city_left: Vec<usize>,
    brand_left: Vec<usize>,
    remaining: usize,
    city_ids: FxHashMap<String, u32>,
    brand_ids: FxHashMap<String, u32>,
    memo: FxHashMap<(Vec<usize>, Tail), bool>,
    budget: usize,
}

impl Search {
    /// `keys[i]` is the normalized (city, brand) of the card ranked `i`.
    pub(crate) fn new(keys: &[(String, Option<String>)], max_run: usize) -> Self {
        let mut city_ids = FxHashMap::default();
        let mut brand_ids = FxHashMap::default();
        let mut class_ids: FxHashMap<(u32, Option<u32>), usize> = FxHashMap::default();
        let mut classes = Vec::new();
        let mut positions: Vec<Vec<usize>> = Vec::new();

        for (pos, (city, brand)) in keys.iter().enumerate() {
            let city = intern(&mut city_ids, city);
            let brand = brand.as_deref().map(|b| intern(&mut brand_ids, b));
            let class = *class_ids.entry((city, brand)).or_insert_with(|| {
                classes.push(Class { city, brand });
                positions.push(Vec::new());
                classes.len() - 1
            });
            positions[class].push(pos);
        }

        let counts: Vec<usize> = positions.iter().map(Vec::len).collect();
        let mut city_left = vec![0; city_ids.len()];
        let mut brand_left = vec![0; brand_ids.len()];
        for (class, n) in classes.iter().zip(&counts) {
            city_left[class.city as usize] += n;
            if let Some(b) = class.brand {
                brand_left[b as usize] += n;
            }
        }

        Self {
            max_run: max_run.max(1),
            classes,
            positions,
            counts,
            city_left,
            brand_left,
            remaining: keys.len(),
            city_ids,
            brand_ids,
            memo: FxHashMap::default(),
            budget: NODE_BUDGET,
        }
    }

    /// The trailing runs of `state` in this search's terms. Keys that do not
    /// occur among the remaining cards cannot extend a run and map to `None`.
    pub(crate) fn tail_of(&self, state: &RunState) -> Tail {
        let cap = |n: usize| n.min(self.max_run);
        Tail {
            city: state
                .last_city()
                .and_then(|(key, n)| self.city_ids.get(key).map(|&id| (id, cap(n)))),
            brand: state
                .last_brand()
                .and_then(|(key, n)| self.brand_ids.get(key).map(|&id| (id, cap(n)))),
        }
    }

    /// Class of the next card to emit after `tail`, or `None` once every card
    /// is out.
    ///
    /// Among the classes that respect both limits, the first in priority order
    /// from which the rest can still be placed wins. Without such a class the
    /// limits are relaxed: city first, then brand, then the best ranked card.
    pub(crate) fn choose(&mut self, tail: Tail) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        let open = self.candidates(tail, |(city, brand)| city && brand);
        for &class in &open {
            let next = self.advance(tail, class);
            self.take(class);
            let completes = self.completes(next, 1);
            self.put_back(class);
            if completes {
                return Some(class);
            }
        }
        if let Some(&class) = open.first() {
            return Some(class);
        }

        tracing::debug!(remaining = self.remaining, "run limit unsatisfiable, relaxing");
        self.candidates(tail, |(city, _)| city)
            .first()
            .copied()
            .or_else(|| self.candidates(tail, |(_, brand)| brand).first().copied())
            .or_else(|| {
                (0..self.classes.len())
                    .filter(|&c| self.counts[c] > 0)
                    .min_by_key(|&c| self.next_position(c))
            })
    }

    /// Remove the best ranked card of `class`, returning its position.
    pub(crate) fn take(&mut self, class: usize) -> usize {
        let pos = self.next_position(class);
        let Class { city, brand } = self.classes[class];
        self.counts[class] -= 1;
        self.city_left[city as usize] -= 1;
        if let Some(b) = brand {
            self.brand_left[b as usize] -= 1;
        }
        self.remaining -= 1;
        pos
    }

    /// Trailing runs after emitting a card of `class`.
    pub(crate) fn advance(&self, tail: Tail, class: usize) -> Tail {
        let Class { city, brand } = self.classes[class];
        Tail {
            city: Some(extend(tail.city, city, self.max_run)),
            brand: brand.map(|b| extend(tail.brand, b, self.max_run)),
        }
    }

    fn put_back(&mut self, class: usize) {
        let Class { city, brand } = self.classes[class];
        self.counts[class] += 1;
        self.city_left[city as usize] += 1;
        if let Some(b) = brand {
            self.brand_left[b as usize] += 1;
        }
        self.remaining += 1;
    }

    /// True if the remaining cards can follow `tail` without breaking either
    /// limit. `false` is exact; `true` may be optimistic once the budget or
    /// the horizon runs out.
    fn completes(&mut self, tail: Tail, depth: usize) -> bool {
        if self.remaining == 0 {
            return true;
        }
        let key = (self.counts.clone(), tail);
        if let Some(&known) = self.memo.get(&key) {
            return known;
        }
        if self.budget == 0 || depth >= HORIZON {
            return true;
        }
        self.budget -= 1;

        let mut found = false;
        for class in self.candidates(tail, |(city, brand)| city && brand) {
            let next = self.advance(tail, class);
            self.take(class);
            found = self.completes(next, depth + 1);
            self.put_back(class);
            if found {
                break;
            }
        }
        self.memo.insert(key, found);
        found
    }

    /// Classes with cards left whose fit after `tail` passes `accept`, in
    /// priority order: largest city bucket, then largest brand bucket, then
    /// best ranked next card.
    fn candidates<F>(&self, tail: Tail, accept: F) -> Vec<usize>
    where
        F: Fn((bool, bool)) -> bool,
    {
        let mut out: Vec<usize> = (0..self.classes.len())
            .filter(|&c| self.counts[c] > 0 && accept(self.fits(tail, c)))
            .collect();
        out.sort_by_key(|&c| (Reverse(self.priority(c)), self.next_position(c)));
        out
    }

    /// Whether a card of `class` keeps the city run and the brand run within
    /// `max_run`.
    fn fits(&self, tail: Tail, class: usize) -> (bool, bool) {
        let Class { city, brand } = self.classes[class];
        let city_ok = !matches!(tail.city, Some((last, n)) if last == city && n >= self.max_run);
        let brand_ok = match (brand, tail.brand) {
            (Some(b), Some((last, n))) => !(last == b && n >= self.max_run),
            _ => true,
        };
        (city_ok, brand_ok)
    }

    fn priority(&self, class: usize) -> (usize, usize) {
        let Class { city, brand } = self.classes[class];
        let brand_left = brand.map_or(0, |b| self.brand_left[b as usize]);
        (self.city_left[city as usize], brand_left)
    }

    fn next_position(&self, class: usize) -> usize {
        let positions = &self.positions[class];
        positions[positions.len() - self.counts[class]]
    }
}

fn intern(ids: &mut FxHashMap<String, u32>, key: &str) -> u32 {
    if let Some(&id) = ids.get(key) {
        return id;
    }
    let id = ids.len() as u32;
    ids.insert(key.to_string(), id);
    id
}

fn extend(run: Option<(u32, usize)>, key: u32, max_run: usize) -> (u32, usize) {
    match run {
        Some((last, n)) if last == key => (key, (n + 1).min(max_run)),
        _ => (key, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[(&str, Option<&str>)]) -> Vec<(String, Option<String>)> {
        raw.iter()
            .map(|(c, b)| (c.to_string(), b.map(str::to_string)))
            .collect()
    }

    fn drain(search: &mut Search, mut tail: Tail) -> Vec<usize> {
        let mut order = Vec::new();
        while let Some(class) = search.choose(tail) {
            order.push(search.take(class));
            tail = search.advance(tail, class);
        }
        order
    }

    #[test]
    fn same_city_and_brand_share_a_class() {
        let search = Search::new(
            &keys(&[("a", Some("X")), ("a", Some("X")), ("a", None), ("b", Some("X"))]),
            2,
        );
        assert_eq!(search.classes.len(), 3);
        assert_eq!(search.positions[0], vec![0, 1]);
        assert_eq!(search.priority(0), (3, 3));
        assert_eq!(search.priority(1), (3, 0));
    }

    #[test]
    fn lookahead_defers_a_brandless_card() {
        // Greedy would lead with a/None and strand the Y cards.
        let mut search = Search::new(
            &keys(&[("a", None), ("a", Some("Y")), ("c", Some("Y")), ("a", Some("Y"))]),
            2,
        );
        assert_eq!(drain(&mut search, Tail::default()), vec![1, 0, 2, 3]);
    }

    #[test]
    fn dead_end_is_exact() {
        let mut search = Search::new(&keys(&[("a", None), ("a", None), ("a", None)]), 2);
        assert!(!search.completes(Tail::default(), 0));
        // Still drains every card.
        assert_eq!(drain(&mut search, Tail::default()), vec![0, 1, 2]);
    }

    #[test]
    fn tail_from_earlier_cards_blocks_the_first_pick() {
        let mut state = RunState::new();
        state.push("a", None);
        state.push("a", None);
        let mut search = Search::new(&keys(&[("a", None), ("b", None)]), 2);
        let tail = search.tail_of(&state);
        assert_eq!(drain(&mut search, tail), vec![1, 0]);
    }

    #[test]
    fn unknown_tail_keys_are_ignored() {
        let mut state = RunState::new();
        state.push("z", Some("Q"));
        let search = Search::new(&keys(&[("a", None)]), 2);
        assert_eq!(search.tail_of(&state), Tail::default());
    }
}

//! Default keyword classifier.
//!
//! One Aho-Corasick automaton over every keyword of every class. Matching is
//! case-insensitive. Free text only accepts hits that sit on word boundaries,
//! so "spa" does not fire inside "spacious". Hotel names are plain substring
//! checks, so "Grandhotel Pupp" carries the "grand" indicator.

use aho_corasick::{AhoCorasick, MatchKind};
use wander_core::config::KeywordConfig;
use wander_core::traits::{KeywordClass, SignalClassifier, TextSignals};

pub struct KeywordClassifier {
    automaton: Option<AhoCorasick>,
    /// Pattern index → class.
    classes: Vec<KeywordClass>,
}

impl KeywordClassifier {
    pub fn new(keywords: &KeywordConfig) -> Self {
        let mut patterns = Vec::new();
        let mut classes = Vec::new();
        for &class in KeywordClass::all() {
            for term in keywords.terms(class) {
                let term = term.trim().to_lowercase();
                if term.is_empty() {
                    continue;
                }
                patterns.push(term);
                classes.push(class);
            }
        }

        if patterns.is_empty() {
            return Self {
                automaton: None,
                classes,
            };
        }

        let automaton = match AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
        {
            Ok(ac) => Some(ac),
            Err(e) => {
                // Degrade to "no keywords detected" rather than failing the run.
                tracing::warn!(error = %e, patterns = patterns.len(), "keyword automaton build failed");
                None
            }
        };

        Self {
            automaton,
            classes,
        }
    }

    /// Number of registered keyword patterns.
    pub fn pattern_count(&self) -> usize {
        self.classes.len()
    }
}

impl KeywordClassifier {
    fn scan(&self, text: &str, word_bounded: bool) -> TextSignals {
        let mut signals = TextSignals::new();
        let Some(automaton) = &self.automaton else {
            return signals;
        };
        if text.is_empty() {
            return signals;
        }

        let haystack = text.to_lowercase();
        for m in automaton.find_overlapping_iter(&haystack) {
            if !word_bounded || is_word_bounded(&haystack, m.start(), m.end()) {
                signals.insert(self.classes[m.pattern().as_usize()]);
            }
        }
        signals
    }
}

impl SignalClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> TextSignals {
        self.scan(text, true)
    }

    fn classify_name(&self, name: &str) -> TextSignals {
        self.scan(name, false)
    }
}

fn is_word_bounded(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

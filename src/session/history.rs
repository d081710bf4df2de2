use crate::search::tokenizer::normalize;
use std::collections::VecDeque;

/// Distinct recent search terms, most recent first.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    limit: usize,
    terms: VecDeque<String>,
}

impl SearchHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            terms: VecDeque::with_capacity(limit),
        }
    }

    /// Moves `term` to the front, evicting the oldest entry past the limit.
    pub fn record(&mut self, term: &str) {
        let key = normalize(term);
        if key.is_empty() || self.limit == 0 {
            return;
        }

        self.terms.retain(|existing| *existing != key);
        self.terms.push_front(key);
        self.terms.truncate(self.limit);
    }

    pub fn terms(&self) -> Vec<String> {
        self.terms.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

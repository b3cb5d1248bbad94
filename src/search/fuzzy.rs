use levenshtein_automata::{Distance, LevenshteinAutomatonBuilder, DFA};

/// Automaton for bounded edit-distance matching against a term vocabulary.
pub struct FuzzyAutomaton {
    /// The target term to match
    term: String,

    /// Maximum allowed edit distance
    max_edit_distance: u8,

    /// Allow character transpositions (teh -> the)
    transpositions: bool,

    /// Built DFA for matching
    dfa: Option<DFA>,
}

impl FuzzyAutomaton {
    pub fn new(term: &str, max_edit_distance: u8) -> Self {
        Self {
            term: term.to_string(),
            max_edit_distance,
            transpositions: true,
            dfa: None,
        }
    }

    /// Build the DFA for fuzzy matching
    pub fn build(&mut self) {
        let lev_builder =
            LevenshteinAutomatonBuilder::new(self.max_edit_distance, self.transpositions);
        self.dfa = Some(lev_builder.build_dfa(&self.term));
    }

    /// Check if a candidate matches within edit distance
    pub fn matches(&self, candidate: &str) -> bool {
        if let Some(dfa) = &self.dfa {
            let mut state = dfa.initial_state();
            for &byte in candidate.as_bytes() {
                state = dfa.transition(state, byte);
            }
            matches!(dfa.distance(state), Distance::Exact(d) if d <= self.max_edit_distance)
        } else {
            // Fallback to plain edit distance
            self.edit_distance(candidate) <= self.max_edit_distance as usize
        }
    }

    /// Two-row Levenshtein distance (fallback)
    fn edit_distance(&self, other: &str) -> usize {
        let a = self.term.as_bytes();
        let b = other.as_bytes();

        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }

        let mut prev_row: Vec<usize> = (0..=b.len()).collect();
        let mut curr_row = vec![0; b.len() + 1];

        for (i, &ca) in a.iter().enumerate() {
            curr_row[0] = i + 1;
            for (j, &cb) in b.iter().enumerate() {
                let cost = if ca == cb { 0 } else { 1 };
                curr_row[j + 1] = (prev_row[j] + cost)
                    .min(prev_row[j + 1] + 1)
                    .min(curr_row[j] + 1);
            }
            std::mem::swap(&mut prev_row, &mut curr_row);
        }

        prev_row[b.len()]
    }
}

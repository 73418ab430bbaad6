use memchr::memmem;

/// Byte span of one match within a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub len: usize,
}

pub struct SearchMatcher;

impl SearchMatcher {
    /// Find all case-insensitive, non-overlapping occurrences of `term`
    /// in `text`, left to right. The term is literal text, never a
    /// pattern: every character matches itself.
    pub fn find_in(text: &str, term: &str) -> Vec<MatchSpan> {
        if term.is_empty() || text.is_empty() {
            return Vec::new();
        }

        // Case-fold the haystack, keeping a map from each folded byte
        // back to the originating char's byte offset. Folding can change
        // byte lengths, so positions cannot be reused directly.
        let mut folded = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len() + 1);
        for (offset, ch) in text.char_indices() {
            for low in ch.to_lowercase() {
                let from = folded.len();
                folded.push(low);
                for _ in from..folded.len() {
                    origin.push(offset);
                }
            }
        }
        origin.push(text.len());

        let folded_term = term.to_lowercase();
        let mut matches = Vec::new();
        for pos in memmem::find_iter(folded.as_bytes(), folded_term.as_bytes()) {
            let end = pos + folded_term.len();
            // Only accept matches aligned to original char boundaries
            if !is_char_start(&origin, pos) || !is_char_start(&origin, end) {
                continue;
            }
            let start = origin[pos];
            let match_end = if end >= origin.len() - 1 {
                text.len()
            } else {
                origin[end]
            };
            matches.push(MatchSpan {
                start,
                len: match_end - start,
            });
        }
        matches
    }

    /// Number of matches of `term` in `text`.
    pub fn count_in(text: &str, term: &str) -> usize {
        Self::find_in(text, term).len()
    }
}

// A folded byte index starts an original char when its origin offset
// differs from the previous byte's. Index 0 and one-past-the-end always do.
fn is_char_start(origin: &[usize], index: usize) -> bool {
    index == 0 || index >= origin.len() - 1 || origin[index] != origin[index - 1]
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;

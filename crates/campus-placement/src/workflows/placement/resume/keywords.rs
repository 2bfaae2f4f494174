/// Terms whose presence marks a document as a resume. Matched as word prefixes so plurals count.
pub(super) const RESUME_INDICATORS: &[&str] = &[
    "experience",
    "education",
    "skill",
    "email",
    "phone",
    "contact",
    "work",
    "project",
    "employment",
    "degree",
    "certificate",
    "responsibility",
    "objective",
    "summary",
    "linkedin",
    "github",
];

pub(super) const TECHNICAL_TERMS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "node",
    "sql",
    "c++",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "linux",
    "html",
    "css",
];

pub(super) const COMMUNICATION_TERMS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "presentation",
    "collaboration",
    "mentoring",
    "public speaking",
];

pub(super) const APTITUDE_TERMS: &[&str] = &[
    "problem solving",
    "analytical",
    "algorithm",
    "data structure",
    "optimization",
    "logical reasoning",
    "critical thinking",
    "competitive programming",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MatchMode {
    /// Term must start a word; any suffix is accepted.
    Prefix,
    /// Term must be a whole word, optionally followed by a plural `s`.
    Whole,
}

/// Number of distinct terms from `terms` present in the already lower-cased `text`.
pub(super) fn count_matches(text: &str, terms: &[&str], mode: MatchMode) -> usize {
    terms
        .iter()
        .filter(|term| contains_term(text, term, mode))
        .count()
}

fn contains_term(text: &str, term: &str, mode: MatchMode) -> bool {
    text.match_indices(term).any(|(start, matched)| {
        let starts_word = text[..start]
            .chars()
            .next_back()
            .map_or(true, |ch| !is_word_char(ch));
        if !starts_word {
            return false;
        }

        match mode {
            MatchMode::Prefix => true,
            MatchMode::Whole => {
                let mut rest = text[start + matched.len()..].chars();
                match rest.next() {
                    None => true,
                    Some('s') => rest.next().map_or(true, |ch| !is_word_char(ch)),
                    Some(ch) => !is_word_char(ch),
                }
            }
        }
    })
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '+' || ch == '#'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_words_do_not_match_inside_longer_terms() {
        let text = "built services in javascript and typescript";
        assert_eq!(count_matches(text, &["java", "javascript"], MatchMode::Whole), 1);
        assert_eq!(count_matches("digital marketing", &["git"], MatchMode::Whole), 0);
    }

    #[test]
    fn whole_words_accept_plural_suffix() {
        assert_eq!(
            count_matches("graph algorithms, data structures", APTITUDE_TERMS, MatchMode::Whole),
            2
        );
    }

    #[test]
    fn symbols_are_part_of_terms() {
        assert_eq!(count_matches("fluent in c++, go", &["c++"], MatchMode::Whole), 1);
        assert_eq!(count_matches("c++17", &["c++"], MatchMode::Whole), 0);
    }

    #[test]
    fn prefix_mode_matches_word_starts_only() {
        let text = "skills: rust. projects: compiler. teamwork matters";
        assert_eq!(
            count_matches(text, &["skill", "project", "work"], MatchMode::Prefix),
            2
        );
    }

    #[test]
    fn keyword_sets_have_expected_sizes() {
        assert!(RESUME_INDICATORS.len() >= 15);
        assert_eq!(TECHNICAL_TERMS.len(), 15);
        assert_eq!(COMMUNICATION_TERMS.len(), 7);
        assert_eq!(APTITUDE_TERMS.len(), 8);
    }
}

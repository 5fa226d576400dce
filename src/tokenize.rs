use crate::edit_distance::edit_distance;

/// Unit of comparison used when scoring a pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Whitespace-delimited words (WER).
    #[default]
    Word,
    /// Unicode code points, with word boundaries kept as their own tokens (CER).
    Character,
}

impl Granularity {
    pub fn from_char_level(char_level: bool) -> Self {
        if char_level {
            Granularity::Character
        } else {
            Granularity::Word
        }
    }
}

impl From<bool> for Granularity {
    fn from(char_level: bool) -> Self {
        Granularity::from_char_level(char_level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    Word(&'a str),
    Char(char),
    /// Gap between two words in character mode. Scored like any other
    /// character, but never equal to a real code point.
    Boundary,
}

pub struct Sequence<'a> {
    pub text: &'a str,
    pub tokens: Vec<Token<'a>>,
    pub n_tokens: usize,
}

impl<'a> Sequence<'a> {
    pub fn new(text: &'a str, granularity: Granularity) -> Self {
        let tokens = tokenize(text, granularity);
        let n_tokens = tokens.len();
        Sequence {
            text,
            tokens,
            n_tokens,
        }
    }

    /// Edits needed to turn `self` (the hypothesis) into `reference`.
    pub fn distance_to(&self, reference: &Sequence<'_>) -> usize {
        edit_distance(&self.tokens, &reference.tokens)
    }
}

pub fn tokenize(text: &str, granularity: Granularity) -> Vec<Token<'_>> {
    match granularity {
        Granularity::Word => str_to_words(text).into_iter().map(Token::Word).collect(),
        Granularity::Character => str_to_chars(text),
    }
}

pub fn str_to_words(string: &str) -> Vec<&str> {
    string.split_whitespace().collect()
}

// Whitespace runs collapse to a single boundary; leading and trailing
// whitespace produce none.
fn str_to_chars(string: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::with_capacity(string.len());
    for (i, word) in string.split_whitespace().enumerate() {
        if i > 0 {
            tokens.push(Token::Boundary);
        }
        tokens.extend(word.chars().map(Token::Char));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokens() {
        let seq = Sequence::new("the  cat\tsat ", Granularity::Word);
        assert_eq!(
            seq.tokens,
            vec![Token::Word("the"), Token::Word("cat"), Token::Word("sat")]
        );
        assert_eq!(seq.n_tokens, 3);
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        assert!(tokenize("", Granularity::Word).is_empty());
        assert!(tokenize("", Granularity::Character).is_empty());
        assert!(tokenize("   ", Granularity::Character).is_empty());
    }

    #[test]
    fn test_char_tokens_keep_boundaries() {
        let tokens = tokenize("a bc", Granularity::Character);
        assert_eq!(
            tokens,
            vec![
                Token::Char('a'),
                Token::Boundary,
                Token::Char('b'),
                Token::Char('c')
            ]
        );
    }

    #[test]
    fn test_char_whitespace_runs_collapse() {
        let tokens = tokenize("  a \t\n b  ", Granularity::Character);
        assert_eq!(
            tokens,
            vec![Token::Char('a'), Token::Boundary, Token::Char('b')]
        );
    }

    #[test]
    fn test_char_tokens_are_code_points() {
        // Multi-byte code points are one token each
        let seq = Sequence::new("héllo wörld", Granularity::Character);
        assert_eq!(seq.n_tokens, 11);
    }

    #[test]
    fn test_boundary_differs_from_placeholder_chars() {
        // A literal placeholder character in the text must not match a real boundary
        let hyp = Sequence::new("a▁b", Granularity::Character);
        let gold = Sequence::new("a b", Granularity::Character);
        assert_eq!(hyp.distance_to(&gold), 1);
    }

    #[test]
    fn test_missing_space_costs_one_char_edit() {
        let hyp = Sequence::new("thecat", Granularity::Character);
        let gold = Sequence::new("the cat", Granularity::Character);
        assert_eq!(hyp.distance_to(&gold), 1);
        assert_eq!(gold.n_tokens, 7);
    }

    #[test]
    fn test_granularity_from_flag() {
        assert_eq!(Granularity::from(true), Granularity::Character);
        assert_eq!(Granularity::from(false), Granularity::Word);
        assert_eq!(Granularity::default(), Granularity::Word);
    }
}

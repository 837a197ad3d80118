/*!
A tokenizer for formulas.

Tokens are:
- `[` and `]`, each on their own.
- Any other maximal run of characters, up to whitespace, a bracket, or the end of the input.

Whitespace is limited to space, tab, carriage return, and newline.

A tokenizer keeps a cursor into the input, and each call to [next_token](Tokenizer::next_token) skips whitespace, returns the token at the cursor, and moves the cursor past the token.
At the end of the input the empty token is returned, and the cursor remains at the end of the input.

```rust
# use prop_witness::parse::tokenizer::Tokenizer;
let mut tokens = Tokenizer::new("[P(a) and\tnot Q]");
assert_eq!(tokens.next_token(), "[");
assert_eq!(tokens.next_token(), "P(a)");

let position = tokens.position();
assert_eq!(tokens.collect::<Vec<_>>(), vec!["and", "not", "Q", "]"]);

// Tokenizing may be restarted from any previous position.
let mut restarted = Tokenizer::at("[P(a) and\tnot Q]", position);
assert_eq!(restarted.next_token(), "and");
```
*/

/// Whether `c` separates tokens, in formulas and in symbol and interpretation files alike.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_bracket(c: char) -> bool {
    matches!(c, '[' | ']')
}

#[derive(Clone, Debug)]
pub struct Tokenizer<'i> {
    input: &'i str,

    /// A byte index into the input, always on a char boundary.
    cursor: usize,
}

impl<'i> Tokenizer<'i> {
    pub fn new(input: &'i str) -> Self {
        Tokenizer { input, cursor: 0 }
    }

    /// A tokenizer starting from `position` of `input`.
    ///
    /// Positions past the end of the input, or inside some character, are moved to the end of the input or the start of the following character.
    pub fn at(input: &'i str, position: usize) -> Self {
        let mut cursor = position.min(input.len());
        while !input.is_char_boundary(cursor) {
            cursor += 1;
        }
        Tokenizer { input, cursor }
    }

    /// The position of the cursor, as a byte index into the input.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.input[self.cursor..].trim_start_matches(is_whitespace).is_empty()
    }

    /// The next token, or the empty token if no tokens remain.
    pub fn next_token(&mut self) -> &'i str {
        let rest = &self.input[self.cursor..];
        let trimmed = rest.trim_start_matches(is_whitespace);
        self.cursor += rest.len() - trimmed.len();

        let length = match trimmed.chars().next() {
            None => 0,
            Some(c) if is_bracket(c) => c.len_utf8(),
            Some(_) => trimmed
                .find(|c| is_whitespace(c) || is_bracket(c))
                .unwrap_or(trimmed.len()),
        };

        let token = &trimmed[..length];
        self.cursor += length;
        token
    }
}

impl<'i> Iterator for Tokenizer<'i> {
    type Item = &'i str;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            "" => None,
            token => Some(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_split_words() {
        let tokens = Tokenizer::new("[[P(a)]and]").collect::<Vec<_>>();
        assert_eq!(tokens, vec!["[", "[", "P(a)", "]", "and", "]"]);
    }

    #[test]
    fn whitespace_variants() {
        let tokens = Tokenizer::new(" \r\n\tp\r\nq\t").collect::<Vec<_>>();
        assert_eq!(tokens, vec!["p", "q"]);
    }

    #[test]
    fn empty_at_end() {
        let mut tokens = Tokenizer::new("p  ");
        assert_eq!(tokens.next_token(), "p");
        assert_eq!(tokens.next_token(), "");
        assert_eq!(tokens.position(), 3);
        assert_eq!(tokens.next_token(), "");
        assert_eq!(tokens.position(), 3);
        assert!(tokens.is_exhausted());
    }

    #[test]
    fn long_tokens() {
        let long_atom = format!("P({})", vec!["a"; 4096].join(","));
        let input = format!("not {long_atom}");
        let tokens = Tokenizer::new(&input).collect::<Vec<_>>();
        assert_eq!(tokens, vec!["not", long_atom.as_str()]);
    }

    #[test]
    fn other_whitespace_is_part_of_a_token() {
        // Only space, tab, carriage return, and newline separate tokens.
        let tokens = Tokenizer::new("p\u{000B}q r").collect::<Vec<_>>();
        assert_eq!(tokens, vec!["p\u{000B}q", "r"]);
    }

    #[test]
    fn restart_inside_character() {
        let mut tokens = Tokenizer::at("é p", 1);
        assert_eq!(tokens.position(), 2);
        assert_eq!(tokens.next_token(), "p");
    }
}

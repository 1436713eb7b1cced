//! Splitter for `<...>` tag spans.
//!
//! Splits a raw message into alternating literal and bracket-interior pieces.

/// A piece produced by the splitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Literal text outside any span. May be empty at span boundaries.
    Literal(&'a str),
    /// The interior of a `<...>` span, delimiters removed.
    Bracketed(&'a str),
}

/// Iterator yielding the literal/bracketed alternation of a message.
///
/// The shortest run of characters between a `<` and the next `>` forms a
/// span; the interior may cross line boundaries. A `<` with no later `>` is
/// literal text. For `n` spans the splitter yields exactly `2n + 1` pieces,
/// starting and ending with a (possibly empty) literal.
///
/// # Examples
///
/// ```
/// use tint::parser::{Piece, Splitter};
///
/// let pieces: Vec<_> = Splitter::new("<cyan:hi> there").collect();
/// assert_eq!(
///     pieces,
///     vec![
///         Piece::Literal(""),
///         Piece::Bracketed("cyan:hi"),
///         Piece::Literal(" there"),
///     ],
/// );
/// ```
pub struct Splitter<'a> {
    input: &'a str,
    pos: usize,
    /// Interior of a span found while scanning the preceding literal.
    pending: Option<&'a str>,
    done: bool,
}

impl<'a> Splitter<'a> {
    /// Create a new splitter over the given message.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: None,
            done: false,
        }
    }
}

impl<'a> Iterator for Splitter<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(interior) = self.pending.take() {
            return Some(Piece::Bracketed(interior));
        }
        if self.done {
            return None;
        }

        let rest = &self.input[self.pos..];
        match find_span(rest) {
            Some((open, close)) => {
                self.pending = Some(&rest[open + 1..close]);
                self.pos += close + 1;
                Some(Piece::Literal(&rest[..open]))
            }
            None => {
                self.done = true;
                Some(Piece::Literal(rest))
            }
        }
    }
}

/// Find the next span in `rest`: the byte offsets of its `<` and of the
/// first `>` after it. Once the first `<` has no closing `>`, no later one
/// can either.
fn find_span(rest: &str) -> Option<(usize, usize)> {
    let open = rest.find('<')?;
    let close = open + 1 + rest[open + 1..].find('>')?;
    Some((open, close))
}

//! Operator input parsing and selection classification
//!
//! Nothing here touches the console, so every decision the session makes
//! about a line of input can be tested directly.

/// Value a selection takes when the line is not an integer.
pub const MALFORMED_SELECTION: i64 = -1;

/// What a menu selection asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Document the catalogue entry with this 1-based index
    Type(usize),
    /// Document every type
    All,
    /// A number past the "print all" entry
    OutOfRange,
    /// Not a number, zero or negative
    Malformed,
}

/// Answer to the `Continue? (Y/N)` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueAnswer {
    Continue,
    Stop,
}

/// Parse a menu line as an integer, mapping anything else to [`MALFORMED_SELECTION`].
pub fn parse_selection(line: &str) -> i64 {
    line.trim().parse().unwrap_or(MALFORMED_SELECTION)
}

/// Decide what a parsed selection means for a catalogue of `type_count` types.
pub fn classify_selection(input: i64, type_count: usize) -> Selection {
    let print_all = type_count as i64 + 1;
    match input {
        n if n >= 1 && n < print_all => Selection::Type(n as usize),
        n if n == print_all => Selection::All,
        n if n > print_all => Selection::OutOfRange,
        _ => Selection::Malformed,
    }
}

/// `Y` or `N` in either case; `None` for anything else.
pub fn parse_continue_answer(line: &str) -> Option<ContinueAnswer> {
    match line.trim() {
        a if a.eq_ignore_ascii_case("y") => Some(ContinueAnswer::Continue),
        a if a.eq_ignore_ascii_case("n") => Some(ContinueAnswer::Stop),
        _ => None,
    }
}

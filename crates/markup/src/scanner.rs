//! Cloze marker scanner.
//!
//! Grammar, byte-exact:
//! - opener: `{{c` + one or more ASCII digits + `::`
//! - content: arbitrary text, possibly containing nested markers
//! - optional hint: first `::` seen at the marker's own depth, running to
//!   the closer
//! - closer: `}}` at matching depth
//!
//! An opener with no matching closer is not a marker; it passes through as
//! plain text, though complete markers nested inside it still match. All
//! marker tokens are ASCII, so scanning works on bytes and every span bound
//! lands on a char boundary.

/// Byte bounds of one complete cloze marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClozeSpan {
    /// Start of the `{{c` opener.
    pub open_start: usize,
    /// First content byte, just past the opener's `::`.
    pub text_start: usize,
    /// One past the last content byte: the hint separator when a hint is
    /// present, otherwise the closer.
    pub text_end: usize,
    /// One past the closing `}}`.
    pub close_end: usize,
    /// The `N` in `{{cN::`.
    pub ordinal: u32,
}

impl ClozeSpan {
    /// The clozed content, hint excluded.
    pub fn content<'a>(&self, text: &'a str) -> &'a str {
        &text[self.text_start..self.text_end]
    }
}

/// Match an opener `{{cN::` starting exactly at byte `at`.
///
/// Returns the content start and the ordinal. Positions that are not char
/// boundaries simply fail the prefix match.
fn opener_at(text: &str, at: usize) -> Option<(usize, u32)> {
    let rest = text.as_bytes().get(at..)?;
    let digits = rest.strip_prefix(b"{{c")?;
    let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 || !digits[len..].starts_with(b"::") {
        return None;
    }
    let ordinal = std::str::from_utf8(&digits[..len]).ok()?.parse().ok()?;
    Some((at + 3 + len + 2, ordinal))
}

/// Scan forward from an opener for its matching closer, tracking nested
/// markers and the depth-1 hint separator.
fn close_of(text: &str, open_start: usize, text_start: usize, ordinal: u32) -> Option<ClozeSpan> {
    let bytes = text.as_bytes();
    let mut depth = 1usize;
    let mut hint_start: Option<usize> = None;
    let mut i = text_start;
    while i < bytes.len() {
        if let Some((content_start, _)) = opener_at(text, i) {
            depth += 1;
            i = content_start;
            continue;
        }
        if depth == 1 && hint_start.is_none() && bytes[i..].starts_with(b"::") {
            hint_start = Some(i);
            i += 2;
            continue;
        }
        if bytes[i..].starts_with(b"}}") {
            depth -= 1;
            if depth == 0 {
                return Some(ClozeSpan {
                    open_start,
                    text_start,
                    text_end: hint_start.unwrap_or(i),
                    close_end: i + 2,
                    ordinal,
                });
            }
            i += 2;
            continue;
        }
        i += 1;
    }
    None
}

/// Leftmost complete marker starting at or after byte offset `from`.
pub fn find_cloze(text: &str, from: usize) -> Option<ClozeSpan> {
    let mut search = from.min(text.len());
    while let Some(rel) = text.get(search..)?.find("{{c") {
        let open_start = search + rel;
        if let Some((text_start, ordinal)) = opener_at(text, open_start)
            && let Some(span) = close_of(text, open_start, text_start, ordinal)
        {
            return Some(span);
        }
        search = open_start + 3;
    }
    None
}

/// Replace every complete marker with its content, discarding ordinal,
/// delimiters, and hint. Content is stripped recursively, so markers nested
/// inside it are removed too; everything else passes through byte-for-byte.
pub fn strip_clozes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(span) = find_cloze(text, pos) {
        out.push_str(&text[pos..span.open_start]);
        out.push_str(&strip_clozes(span.content(text)));
        pos = span.close_end;
    }
    out.push_str(&text[pos..]);
    out
}

/// Innermost marker whose span contains byte position `pos`, opener and
/// closer included.
///
/// Candidate openers at or before `pos` are tested inner-to-outer, so a
/// position inside a nested marker selects the nested one, and a position
/// inside an opener selects that marker rather than its parent.
pub fn cloze_at(text: &str, pos: usize) -> Option<ClozeSpan> {
    if pos > text.len() {
        return None;
    }

    let mut candidates = Vec::new();
    let mut search = 0;
    while let Some(rel) = text.get(search..)?.find("{{c") {
        let open_start = search + rel;
        if open_start > pos {
            break;
        }
        match opener_at(text, open_start) {
            Some((text_start, ordinal)) => {
                candidates.push((open_start, text_start, ordinal));
                search = text_start;
            },
            None => search = open_start + 3,
        }
    }

    for &(open_start, text_start, ordinal) in candidates.iter().rev() {
        if let Some(span) = close_of(text, open_start, text_start, ordinal)
            && pos <= span.close_end
        {
            return Some(span);
        }
    }
    None
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("The capital of {{c1::France::country}} is Paris.", "The capital of France is Paris.")]
    #[case("{{c1::Paris}} is in {{c2::France::country}}", "Paris is in France")]
    #[case("{{c1::Paris", "{{c1::Paris")]
    #[case("no markers here", "no markers here")]
    #[case("{{c1::foo {{c2::bar}} baz}}", "foo bar baz")]
    #[case("{{c1::Paris::capital {{c2::x}}}}", "Paris")]
    #[case("{{c1::a {{c2::b}}::hint}}", "a b")]
    #[case("{{c1::x::h1::h2}}", "x")]
    #[case("{{c1::}}", "")]
    #[case("{{c1::a}}{{c2::b}}", "ab")]
    #[case("<b>{{c1::bold}}</b>", "<b>bold</b>")]
    #[case("{{c::no ordinal}}", "{{c::no ordinal}}")]
    #[case("{{C1::wrong case}}", "{{C1::wrong case}}")]
    #[case("}}{{c1::x}}", "}}x")]
    fn strip_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_clozes(input), expected);
    }

    #[rstest]
    #[case("The capital of {{c1::France::country}} is Paris.")]
    #[case("{{c1::foo {{c2::bar}} baz}} and {{c3::x::y}}")]
    #[case("{{c1::Paris")]
    #[case("plain text")]
    fn strip_is_idempotent(#[case] input: &str) {
        let once = strip_clozes(input);
        assert_eq!(strip_clozes(&once), once);
    }

    #[test]
    fn span_bounds_and_ordinal() {
        let text = "ab {{c3::cd::ef}} gh";
        let span = find_cloze(text, 0).unwrap();
        assert_eq!(span.open_start, 3);
        assert_eq!(span.ordinal, 3);
        assert_eq!(span.content(text), "cd");
        assert_eq!(&text[span.close_end..], " gh");
    }

    #[test]
    fn find_from_offset_skips_earlier_markers() {
        let text = "{{c1::a}} {{c2::b}}";
        let span = find_cloze(text, 1).unwrap();
        assert_eq!(span.ordinal, 2);
    }

    #[test]
    fn unterminated_outer_still_matches_complete_inner() {
        let text = "{{c1::a {{c2::b}}";
        let span = find_cloze(text, 0).unwrap();
        assert_eq!(span.ordinal, 2);
        assert_eq!(strip_clozes(text), "{{c1::a b");
    }

    #[test]
    fn cloze_at_prefers_innermost() {
        let text = "{{c1::foo {{c2::bar}} baz}}";
        let caret = text.find("bar").unwrap();
        assert_eq!(cloze_at(text, caret).unwrap().ordinal, 2);
        let outer = text.find("foo").unwrap();
        assert_eq!(cloze_at(text, outer).unwrap().ordinal, 1);
    }

    #[test]
    fn caret_inside_opener_selects_that_marker() {
        let text = "{{c1::foo {{c2::bar}} baz}}";
        let inside_inner_opener = text.find("{{c2").unwrap() + 2;
        assert_eq!(cloze_at(text, inside_inner_opener).unwrap().ordinal, 2);
    }

    #[test]
    fn caret_outside_any_marker() {
        let text = "abc {{c1::x}} def";
        assert!(cloze_at(text, 1).is_none());
        assert!(cloze_at(text, text.len()).is_none());
        assert!(cloze_at(text, text.len() + 10).is_none());
    }

    #[test]
    fn caret_just_past_closer_still_counts() {
        let text = "{{c1::x}}";
        assert_eq!(cloze_at(text, text.len()).unwrap().ordinal, 1);
    }

    #[test]
    fn unterminated_marker_never_encloses() {
        assert!(cloze_at("{{c1::open ended", 8).is_none());
    }

    #[test]
    fn multibyte_text_survives() {
        let text = "Grüße {{c1::schön::hübsch}}!";
        assert_eq!(strip_clozes(text), "Grüße schön!");
    }
}

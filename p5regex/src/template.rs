use std::mem;

use crate::matches::Captures;

/// A parsed replacement template.
///
/// `$N` and `${N}` substitute the text of capture group `N` (`$0` is the
/// whole match, digits only, longest run wins); `$$` is a literal `$`; a `$`
/// followed by anything else is literal. A group that did not participate in
/// the match, or a number with no such group, substitutes the empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Template {
    segments: Vec<Segment>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Group(usize),
}

impl Template {
    pub fn parse(template: &str) -> Template {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;
        while let Some(dollar) = rest.find('$') {
            literal.push_str(&rest[..dollar]);
            rest = &rest[dollar + 1..];
            match rest.as_bytes().first() {
                Some(b'$') => {
                    literal.push('$');
                    rest = &rest[1..];
                }
                Some(b'{') => match parse_braced(&rest[1..]) {
                    Some((group, consumed)) => {
                        flush(&mut literal, &mut segments);
                        segments.push(Segment::Group(group));
                        rest = &rest[1 + consumed..];
                    }
                    None => literal.push('$'),
                },
                Some(byte) if byte.is_ascii_digit() => {
                    let len = rest
                        .bytes()
                        .take_while(u8::is_ascii_digit)
                        .count();
                    flush(&mut literal, &mut segments);
                    segments.push(Segment::Group(parse_group(&rest[..len])));
                    rest = &rest[len..];
                }
                _ => literal.push('$'),
            }
        }
        literal.push_str(rest);
        flush(&mut literal, &mut segments);
        Template { segments }
    }

    /// True if expansion needs a group other than the whole match.
    pub fn needs_submatches(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Group(n) if *n > 0))
    }

    pub fn expand(&self, caps: &Captures, haystack: &str, dst: &mut String) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => dst.push_str(literal),
                Segment::Group(n) => {
                    if let Some(span) = caps.get(*n) {
                        dst.push_str(&haystack[span]);
                    }
                }
            }
        }
    }
}

fn flush(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(mem::take(literal)));
    }
}

/// `digits}` after a `${`, or `None` to treat the `$` as literal.
fn parse_braced(rest: &str) -> Option<(usize, usize)> {
    let end = rest.find('}')?;
    let digits = &rest[..end];
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some((parse_group(digits), end + 1))
}

/// A digit run too large for `usize` still parses, to a group number that
/// exists in no pattern.
fn parse_group(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

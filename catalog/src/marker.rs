//! Course variants encoded in course codes.
//!
//! Two conventions show up in the catalog:
//! - a trailing single-letter segment, `GE-1A-H`
//! - a letter two characters before the first hyphen, `KINH1-01`
//!
//! The positional letter wins when it names a variant. The trailing segment is
//! only consulted when it does not. Codes with no hyphen, or a hyphen within
//! the first two characters, carry no positional marker and are
//! [`CourseMarker::Malformed`] unless their trailing segment names a variant.

const LANGUAGES: [&str; 4] = ["chinese", "french", "spanish", "german"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseMarker {
    Standard,
    Honors,
    Lab,
    Activity,
    Malformed,
}

impl CourseMarker {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'h' => Some(Self::Honors),
            'l' => Some(Self::Lab),
            'a' => Some(Self::Activity),
            _ => None,
        }
    }
}

pub fn classify_marker(course_code: &str) -> CourseMarker {
    let code = course_code.to_lowercase();

    match positional_marker(&code) {
        marker @ (CourseMarker::Standard | CourseMarker::Malformed) => {
            suffix_marker(&code).unwrap_or(marker)
        }
        marker => marker,
    }
}

fn positional_marker(code: &str) -> CourseMarker {
    let chars: Vec<char> = code.chars().collect();

    match chars.iter().position(|&c| c == '-') {
        Some(hyphen) if hyphen >= 2 => {
            CourseMarker::from_char(chars[hyphen - 2]).unwrap_or(CourseMarker::Standard)
        }
        _ => CourseMarker::Malformed,
    }
}

fn suffix_marker(code: &str) -> Option<CourseMarker> {
    let (_, suffix) = code.rsplit_once('-')?;
    let mut chars = suffix.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => CourseMarker::from_char(c),
        _ => None,
    }
}

/// Plain substring match, so `"spanish"` anywhere in the code counts.
pub fn is_language_course(course_code: &str) -> bool {
    let code = course_code.to_lowercase();

    LANGUAGES.iter().any(|language| code.contains(language))
}

pub(crate) const START_MARKER: &str = "Started";
pub(crate) const END_MARKER: &str = "Completed";
const ASSET_PATH: &str = "/assets/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Start { id: &'a str },
    End { id: &'a str },
    Irrelevant,
}

/// Returns the text between a leading `[` and the first `]`.
pub fn correlation_id(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let (id, _) = rest.split_once(']')?;
    Some(id)
}

/// Classifies a single log line. Pure: the same line always yields the same kind.
///
/// Static asset requests are dropped at the start line only; a completion line
/// is recognized regardless of what it mentions.
pub fn classify(line: &str) -> LineKind<'_> {
    let Some(id) = correlation_id(line) else {
        return LineKind::Irrelevant;
    };

    if line.contains(START_MARKER) && !line.contains(ASSET_PATH) {
        LineKind::Start { id }
    } else if line.contains(END_MARKER) {
        LineKind::End { id }
    } else {
        LineKind::Irrelevant
    }
}

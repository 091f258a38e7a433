//! Marker-based line selection.

/// Byte offset of the first occurrence of `marker` in `line`, if any.
///
/// Case-sensitive substring search. An absent marker is a normal outcome,
/// not an error.
pub fn find_marker(line: &str, marker: &str) -> Option<usize> {
    line.find(marker)
}

/// Keep the lines that contain `marker`, in their original order.
pub fn filter_lines<'a, I>(lines: I, marker: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| find_marker(line, marker).is_some())
        .collect()
}

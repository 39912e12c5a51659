/// Normalizes a free-text label: strips any BOM, collapses whitespace, and
/// lowercases for lookup.
pub(crate) fn normalize_label(value: &str) -> String {
    value
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize_label(value)
}

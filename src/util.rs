/// Splits a comma-separated option value, trimming each element and dropping
/// the ones that are empty after the trim.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Boolean option parsing: only a case-insensitive `true` is true, every
/// other value (including garbage) is false.
pub(crate) fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

pub(crate) fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

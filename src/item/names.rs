//! Splitting member names into named properties and integer indices.
//!
//! A name made only of ASCII digits is an index. It is reported by index
//! enumeration (when it fits an `i32`) and never by name enumeration.

pub fn is_index_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

pub fn index_from_name(name: &str) -> Option<i32> {
    if is_index_name(name) {
        name.parse::<i32>().ok()
    } else {
        None
    }
}

/// The invariant decimal form used to address an index by name.
pub fn index_to_name(index: i32) -> String {
    index.to_string()
}

pub fn exclude_indices<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| !is_index_name(name))
        .map(|name| name.to_string())
        .collect()
}

pub fn get_indices<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<i32> {
    names.into_iter().filter_map(index_from_name).collect()
}

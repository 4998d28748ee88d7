//! Title formatting for table headers.

/// Turn a category into a header title.
///
/// Splits on `_`, uppercases the first character of each segment, and joins
/// the segments with spaces. Spaces inside a segment are left alone, so a
/// title that is already capitalized comes back unchanged.
///
/// # Examples
///
/// ```
/// use shotgrid::table::format_title;
///
/// assert_eq!(format_title("login_page"), "Login Page");
/// assert_eq!(format_title("settings menu"), "Settings menu");
/// assert_eq!(format_title("Feature 12"), "Feature 12");
/// ```
pub fn format_title(category: &str) -> String {
    category
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

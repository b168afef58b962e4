/// Turns root-relative path segments into C identifiers.
use crate::types::Identifier;

/// Uppercase the first char, lowercase the rest.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Build the identifier for a file from its path segments (relative to the
/// web root). The first segment is kept as is, the others are capitalized,
/// everything is glued together and anything a C compiler would choke on
/// (periods included) becomes an underscore.
///
/// Different paths can still end up with the same identifier; the driver
/// checks for that once the walk is done.
pub fn synthesize<S: AsRef<str>>(segments: &[S]) -> Identifier {
    let mut code = String::new();
    for (n, segment) in segments.iter().enumerate() {
        if n == 0 {
            code.push_str(segment.as_ref());
        } else {
            code.push_str(&capitalize(segment.as_ref()));
        }
    }

    let mut code: String = code
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if code.starts_with(|c: char| c.is_ascii_digit()) {
        code.insert(0, '_');
    }

    Identifier::new(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_page() {
        assert_eq!(synthesize(&["a", "sub", "page.html"]).as_str(), "aSubPage_html");
    }

    #[test]
    fn test_top_level_file() {
        assert_eq!(synthesize(&["index.html"]).as_str(), "index_html");
        assert_eq!(synthesize(&["Index.HTML"]).as_str(), "Index_HTML");
    }

    #[test]
    fn test_capitalize_lowercases_tail() {
        assert_eq!(synthesize(&["css", "Site.CSS"]).as_str(), "cssSite_css");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn test_invalid_chars_replaced() {
        assert_eq!(synthesize(&["js", "jquery-3.7.min.js"]).as_str(), "jsJquery_3_7_min_js");
        assert_eq!(synthesize(&["my page.htm"]).as_str(), "my_page_htm");
        assert_eq!(synthesize(&["404.html"]).as_str(), "_404_html");
    }

    #[test]
    fn test_known_collision() {
        // Segment boundaries vanish after capitalization.
        assert_eq!(synthesize(&["a", "bc.js"]), synthesize(&["a", "Bc.js"]));
        assert_eq!(synthesize(&["a.b"]), synthesize(&["a_b"]));
    }
}

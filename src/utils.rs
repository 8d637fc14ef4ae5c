//! Small string helpers used at the input boundary.

/// Title-case a string: first letter of each whitespace-separated word
/// uppercased, the rest lowercased.
///
/// Used to normalize the requested news category before registry
/// lookup, so `technology` and `TECHNOLOGY` both resolve the
/// `Technology` key.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("technology"), "Technology");
        assert_eq!(title_case("TECHNOLOGY"), "Technology");
        assert_eq!(title_case("general"), "General");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("two words"), "Two Words");
        assert_eq!(title_case("  padded  "), "Padded");
    }
}

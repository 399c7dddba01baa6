//! Word-style normalization for enum-like string values.

/// Normalize an enum-like token to its camel-case word form.
///
/// Words are split on any non-alphanumeric character and on case
/// boundaries (`PhoneNumber`, `HTTPServer`). The first word is lower-cased
/// and every following word is capitalized. A value with no alphanumeric
/// characters is returned unchanged.
///
/// ```
/// use rulediff_core::decode::enum_case::to_camel_case;
///
/// assert_eq!(to_camel_case("EMAIL_ADDRESS"), "emailAddress");
/// assert_eq!(to_camel_case("Phone Number"), "phoneNumber");
/// ```
pub fn to_camel_case(value: &str) -> String {
    let words = split_words(value);
    if words.is_empty() {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len());
    for (i, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

fn split_words(value: &str) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_numeric()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screaming_snake_case() {
        assert_eq!(to_camel_case("EMAIL_ADDRESS"), "emailAddress");
    }

    #[test]
    fn test_pascal_and_acronyms() {
        assert_eq!(to_camel_case("PhoneNumber"), "phoneNumber");
        assert_eq!(to_camel_case("HTTPServer"), "httpServer");
        assert_eq!(to_camel_case("URL"), "url");
    }

    #[test]
    fn test_separators_and_padding() {
        assert_eq!(to_camel_case("  postal-code "), "postalCode");
        assert_eq!(to_camel_case("Required"), "required");
    }

    #[test]
    fn test_already_camel_case_is_stable() {
        assert_eq!(to_camel_case("emailAddress"), "emailAddress");
    }

    #[test]
    fn test_no_alphanumerics_unchanged() {
        assert_eq!(to_camel_case("  "), "  ");
        assert_eq!(to_camel_case(""), "");
    }
}

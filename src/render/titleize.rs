//! Column name to caption conversion

/// Human-readable caption for a column name.
///
/// `last_name` becomes `Last Name`, `createdAt` becomes `Created At`, and a
/// trailing `_id` is dropped (`user_id` becomes `User`).
pub fn titleize(column: &str) -> String {
    let underscored = underscore(column);
    let humanized = match underscored.strip_suffix("_id") {
        Some(stem) if !stem.is_empty() => stem,
        _ => underscored.as_str(),
    };

    humanized
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// camelCase / kebab-case to lowercase snake_case
fn underscore(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        if c == '-' {
            out.push('_');
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(titleize("last_name"), "Last Name");
        assert_eq!(titleize("phone"), "Phone");
        assert_eq!(titleize("id"), "Id");
    }

    #[test]
    fn test_trailing_id_dropped() {
        assert_eq!(titleize("user_id"), "User");
        assert_eq!(titleize("_id"), "Id");
    }

    #[test]
    fn test_camel_and_kebab_case() {
        assert_eq!(titleize("createdAt"), "Created At");
        assert_eq!(titleize("HTTPStatus"), "Http Status");
        assert_eq!(titleize("zip-code"), "Zip Code");
    }

    #[test]
    fn test_extra_separators_collapse() {
        assert_eq!(titleize("__home__phone"), "Home Phone");
        assert_eq!(titleize(""), "");
    }
}

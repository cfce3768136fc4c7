/// Turn an allergen key or user-entered name into a display label:
/// underscores become spaces and each word is title-cased.
pub fn format_allergen_name(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a probability in [0, 1] as a rounded percentage string.
pub fn format_probability(probability: f64) -> String {
    format!("{}%", (probability * 100.0).round() as i64)
}

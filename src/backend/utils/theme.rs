//! Category display colors and labels.

/// Palette for the categories the app knows about.
const PALETTE: &[(&str, &str)] = &[
    ("groceries", "4CAF50"),
    ("dining", "FF8C42"),
    ("transport", "4A90D9"),
    ("housing", "8E6CEF"),
    ("utilities", "00B8A9"),
    ("health", "F15BB5"),
    ("entertainment", "F9C846"),
    ("shopping", "E76F51"),
    ("income", "38B000"),
    ("savings", "2D6A4F"),
];

/// Fallback colors for categories outside the palette; picked by a stable
/// hash so the same name always renders the same color.
const FALLBACK: &[&str] = &["6C757D", "B08968", "5C677D", "7F96A8"];

/// Hex color (no leading `#`) for a category.
pub fn category_color(category: &str) -> &'static str {
    for (name, color) in PALETTE {
        if category.eq_ignore_ascii_case(name) {
            return color;
        }
    }
    FALLBACK[stable_hash(category) % FALLBACK.len()]
}

/// Display label for a category: first letter up, rest as stored.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Categories offered by the entry form, in display order.
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    PALETTE.iter().map(|(name, _)| *name)
}

fn stable_hash(s: &str) -> usize {
    s.bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize))
}

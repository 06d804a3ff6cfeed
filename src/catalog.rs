//! The fixed feature catalog and its substring filter.
//!
//! Pure data and pure functions: no terminal, no I/O.

// ============================================================================
// CATALOG
// ============================================================================

/// Feature names shown on the Search screen, in display order.
pub const FEATURES: [&str; 7] = [
    "Multi-screen Navigation",
    "Progress Bar with Ticks",
    "Search & Filter",
    "Responsive Layout",
    "Styled Components (Ratatui)",
    "Keyboard Shortcuts",
    "State Management",
];

/// The catalog as owned strings, ready to live in the app state.
pub fn feature_catalog() -> Vec<String> {
    FEATURES.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// FILTERING
// ============================================================================

/// Case-insensitive substring filter.
///
/// Returns the items whose lowercase form contains the lowercase query,
/// in their original order. An empty query matches everything.
pub fn filter_items(items: &[String], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

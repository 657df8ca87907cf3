/// Filter and hint name constants to ensure consistency across the codebase.
/// These constants define the log-view filter keywords accepted by the CLI
/// and the discipline substring that switches grade interpretation.

// Log-view filter keywords (used in CLI)
pub const ALL_FILTER: &str = "All";
pub const FAVORITES_FILTER: &str = "Favorites";
pub const INDOOR_FILTER: &str = "Indoor";
pub const OUTDOOR_FILTER: &str = "Outdoor";

/// The discipline-hint substring that selects the Fontainebleau (bouldering)
/// reading of an ambiguous French-style grade label. Matched case-insensitively.
pub const BOULDERING_HINT: &str = "bouldering";

/// Get all view filter keywords that are not discipline names
pub fn get_filter_keywords() -> Vec<&'static str> {
    vec![ALL_FILTER, FAVORITES_FILTER, INDOOR_FILTER, OUTDOOR_FILTER]
}

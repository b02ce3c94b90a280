//! Location resolution
//!
//! Two static tables map user-facing names to OpenWeatherMap query
//! strings: one for cities, one for states (each state resolving to a
//! representative city). Matching is exact and case-sensitive.

/// City name -> provider query string
pub const CITIES: &[(&str, &str)] = &[
    ("Chennai", "Chennai,IN"),
    ("Coimbatore", "Coimbatore,IN"),
    ("Madurai", "Madurai,IN"),
    ("Tiruchirappalli", "Tiruchirappalli,IN"),
    ("Salem", "Salem,IN"),
    ("Vellore", "Vellore,IN"),
    ("Erode", "Erode,IN"),
    ("Tirunelveli", "Tirunelveli,IN"),
    ("Thanjavur", "Thanjavur,IN"),
    ("Mumbai", "Mumbai,IN"),
    ("Delhi", "Delhi,IN"),
    ("Bangalore", "Bangalore,IN"),
    ("Hyderabad", "Hyderabad,IN"),
    ("Pune", "Pune,IN"),
    ("Ahmedabad", "Ahmedabad,IN"),
];

/// State name -> provider query string for its representative city
pub const STATES: &[(&str, &str)] = &[
    ("Punjab", "Ludhiana,IN"),
    ("Haryana", "Chandigarh,IN"),
    ("Uttar Pradesh", "Lucknow,IN"),
    ("Madhya Pradesh", "Bhopal,IN"),
    ("Rajasthan", "Jaipur,IN"),
    ("Maharashtra", "Mumbai,IN"),
    ("Gujarat", "Ahmedabad,IN"),
    ("Andhra Pradesh", "Vijayawada,IN"),
    ("Karnataka", "Bangalore,IN"),
    ("Tamil Nadu", "Chennai,IN"),
];

/// Resolve a location name to a provider query string. Cities take
/// precedence over states.
pub fn resolve(location: &str) -> Option<&'static str> {
    lookup(CITIES, location).or_else(|| lookup(STATES, location))
}

/// All valid city names, in table order
pub fn city_names() -> Vec<&'static str> {
    CITIES.iter().map(|(name, _)| *name).collect()
}

/// All valid state names, in table order
pub fn state_names() -> Vec<&'static str> {
    STATES.iter().map(|(name, _)| *name).collect()
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, query)| *query)
}

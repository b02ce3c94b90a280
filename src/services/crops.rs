//! Crop normalization and irrigation thresholds

use crate::models::{CropThreshold, WaterPriority};

/// Common crop names -> internal category keys. Not every category has an
/// alias; "vegetables" and "fruits" are reachable only by exact lowercase
/// input.
pub const CROP_ALIASES: &[(&str, &str)] = &[
    ("Wheat", "wheat"),
    ("Rice", "rice"),
    ("Maize", "millets"),
    ("Sugarcane", "sugarcane"),
    ("Cotton", "cotton"),
    ("Soybean", "pulses"),
    ("Mustard", "pulses"),
    ("Jowar", "millets"),
];

/// Per-category irrigation reference values
pub const CROP_THRESHOLDS: &[(&str, CropThreshold)] = &[
    (
        "rice",
        CropThreshold {
            moisture_min: 60.0,
            temp_max: 32.0,
            humidity_min: 70.0,
            priority: WaterPriority::High,
        },
    ),
    (
        "wheat",
        CropThreshold {
            moisture_min: 45.0,
            temp_max: 28.0,
            humidity_min: 50.0,
            priority: WaterPriority::Medium,
        },
    ),
    (
        "cotton",
        CropThreshold {
            moisture_min: 50.0,
            temp_max: 35.0,
            humidity_min: 60.0,
            priority: WaterPriority::Medium,
        },
    ),
    (
        "sugarcane",
        CropThreshold {
            moisture_min: 70.0,
            temp_max: 33.0,
            humidity_min: 65.0,
            priority: WaterPriority::High,
        },
    ),
    (
        "millets",
        CropThreshold {
            moisture_min: 35.0,
            temp_max: 38.0,
            humidity_min: 45.0,
            priority: WaterPriority::Low,
        },
    ),
    (
        "pulses",
        CropThreshold {
            moisture_min: 40.0,
            temp_max: 34.0,
            humidity_min: 55.0,
            priority: WaterPriority::Low,
        },
    ),
    (
        "vegetables",
        CropThreshold {
            moisture_min: 55.0,
            temp_max: 30.0,
            humidity_min: 65.0,
            priority: WaterPriority::Medium,
        },
    ),
    (
        "fruits",
        CropThreshold {
            moisture_min: 50.0,
            temp_max: 32.0,
            humidity_min: 60.0,
            priority: WaterPriority::Medium,
        },
    ),
];

/// Normalize a user-facing crop name to a category key. Unrecognized
/// names pass through lower-cased; threshold lookup handles categories
/// that do not exist.
pub fn normalize(raw: &str) -> String {
    CROP_ALIASES
        .iter()
        .find(|(name, _)| *name == raw)
        .map(|(_, category)| category.to_string())
        .unwrap_or_else(|| raw.to_lowercase())
}

/// Threshold for a category, defaulting to rice when the category is
/// unknown.
pub fn threshold_for(category: &str) -> &'static CropThreshold {
    CROP_THRESHOLDS
        .iter()
        .find(|(name, _)| *name == category)
        .or_else(|| CROP_THRESHOLDS.iter().find(|(name, _)| *name == "rice"))
        .map(|(_, threshold)| threshold)
        .unwrap_or(&CROP_THRESHOLDS[0].1)
}

/// All category keys, in table order
pub fn categories() -> Vec<&'static str> {
    CROP_THRESHOLDS.iter().map(|(name, _)| *name).collect()
}

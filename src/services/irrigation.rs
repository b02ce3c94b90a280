//! Irrigation decision engine
//!
//! Pure scoring heuristic over one weather observation and one crop
//! category. The only non-determinism is the reported confidence, drawn
//! from the injected RNG so tests can seed it.

use rand::Rng;

use crate::models::{IrrigationDecision, WeatherObservation};
use crate::services::crops;

/// Scores above this trigger an irrigation recommendation; a score of
/// exactly 65 does not.
const IRRIGATE_ABOVE: f64 = 65.0;

/// Compute the irrigation decision for an observation and crop category.
/// Unknown categories use the rice thresholds.
pub fn decide<R: Rng + ?Sized>(
    observation: &WeatherObservation,
    category: &str,
    rng: &mut R,
) -> IrrigationDecision {
    let threshold = crops::threshold_for(category);

    let moisture_need = 50.0 + (threshold.moisture_min - 40.0) * 0.8;
    let temp_penalty = ((observation.temperature - threshold.temp_max) * 2.0).max(0.0);
    let humidity_penalty =
        ((threshold.humidity_min - observation.humidity as f64) * 1.5).max(0.0);
    let rain_bonus = if observation.rainfall_mm > 2.0 {
        observation.rainfall_mm * 10.0
    } else {
        0.0
    };

    let score_raw = moisture_need + humidity_penalty - rain_bonus - temp_penalty;
    let irrigation_score = score_raw.round().clamp(0.0, 100.0) as u8;

    let irrigate = f64::from(irrigation_score) > IRRIGATE_ABOVE;
    // Truncation toward zero is intentional
    let confidence_percent = (75.0_f64 + rng.gen_range(0.0..25.0)).min(98.0) as u8;

    let recommendation_text = if irrigate {
        format!("Irrigate {}L/acre", irrigation_score / 10)
    } else {
        "Skip irrigation – sufficient moisture".to_string()
    };

    IrrigationDecision {
        irrigate,
        confidence_percent,
        water_priority: threshold.priority,
        irrigation_score,
        recommendation_text,
    }
}

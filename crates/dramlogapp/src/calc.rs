//! Pure-alcohol math.
//!
//! One drink's pure-alcohol quantity is `volume_ml × strength_percent / 100 ×
//! absorption_factor`, rounded to one decimal place. With the default factor
//! of 0.8 the result is grams of ethanol; a factor of 1.0 yields plain
//! milliliters of ethanol instead.

/// Default fraction applied when converting milliliters of ethanol into the
/// displayed quantity. 0.8 is the standard health-guidance coefficient that
/// turns ml of ethanol into grams.
pub const DEFAULT_ABSORPTION_FACTOR: f64 = 0.8;

/// Computes the pure-alcohol quantity for one drink.
///
/// Rounds to one decimal place, half away from zero (`f64::round` semantics).
/// Inputs are assumed already validated: this function does not check ranges,
/// and non-finite values (NaN, infinity) propagate into the result rather
/// than being guarded here. The validator is the sole gate against bad input
/// reaching this function.
pub fn pure_alcohol(volume_ml: f64, strength_percent: f64, absorption_factor: f64) -> f64 {
    let raw = volume_ml * strength_percent / 100.0 * absorption_factor;
    (raw * 10.0).round() / 10.0
}

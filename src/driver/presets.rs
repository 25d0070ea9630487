//! Preset sweep
//!
//! Samples one knob linearly across its domain, endpoints included.

use super::DriverError;
use crate::config::SweepConfig;
use crate::data::Preset;

/// Build `count` presets along `sweep`.
///
/// The first preset sits on `sweep.start` and the last on `sweep.end`. A
/// single preset sits on `sweep.start`.
pub fn build_presets(count: usize, sweep: &SweepConfig) -> Result<Vec<Preset>, DriverError> {
    if count == 0 {
        return Err(DriverError::InvalidConfiguration(
            "preset count must be at least 1".to_string(),
        ));
    }
    if !sweep.start.is_finite() || !sweep.end.is_finite() {
        return Err(DriverError::InvalidConfiguration(format!(
            "sweep bounds must be finite, got [{}, {}]",
            sweep.start, sweep.end
        )));
    }
    if count > 1 && sweep.start == sweep.end {
        return Err(DriverError::InvalidConfiguration(format!(
            "cannot sample {} distinct presets from the single point {}",
            count, sweep.start
        )));
    }

    let values: Vec<f32> = (0..count).map(|k| sample(sweep.start, sweep.end, k, count)).collect();

    // a domain narrower than `count` f32 steps collapses neighbouring samples
    if let Some(w) = values.windows(2).find(|w| w[0] == w[1]) {
        return Err(DriverError::InvalidConfiguration(format!(
            "[{}, {}] is too narrow for {} distinct presets ({} repeats)",
            sweep.start, sweep.end, count, w[0]
        )));
    }

    let presets = values
        .into_iter()
        .map(|value| {
            let parameters = sweep.fixed.with(sweep.knob, value);
            Preset::new(format!("{}={}", sweep.knob, value), parameters)
        })
        .collect();

    Ok(presets)
}

fn sample(start: f32, end: f32, k: usize, count: usize) -> f32 {
    if count == 1 {
        return start;
    }
    if k == count - 1 {
        return end;
    }
    // f64 keeps interior points from drifting before the final f32 cast
    let t = k as f64 / (count - 1) as f64;
    (start as f64 + (end as f64 - start as f64) * t) as f32
}

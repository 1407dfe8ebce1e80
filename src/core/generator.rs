use crate::domain::model::{CodeList, Route};
use crate::utils::error::{Result, RouteGenError};
use rand::Rng;
use std::ops::RangeInclusive;

/// Stops per route when nothing else is configured.
pub const DEFAULT_STOP_RANGE: RangeInclusive<usize> = 2..=5;

/// Builds a route of `num_stops` codes picked uniformly, with replacement.
pub fn random_route<R: Rng + ?Sized>(
    codes: &CodeList,
    num_stops: usize,
    rng: &mut R,
) -> Result<Route> {
    if num_stops == 0 {
        return Ok(Route::default());
    }
    if codes.is_empty() {
        return Err(RouteGenError::EmptyCodeList);
    }

    let stops = (0..num_stops)
        .map(|_| codes.as_slice()[rng.gen_range(0..codes.len())].clone())
        .collect();

    Ok(Route { stops })
}

pub fn random_stop_count<R: Rng + ?Sized>(
    rng: &mut R,
    range: &RangeInclusive<usize>,
) -> Result<usize> {
    if range.is_empty() {
        return Err(RouteGenError::ConfigValidationError {
            field: "generation.stop_range".to_string(),
            message: format!("empty stop range {}..={}", range.start(), range.end()),
        });
    }
    Ok(rng.gen_range(range.clone()))
}

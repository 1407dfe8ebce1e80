use crate::domain::model::BatchSpec;
use crate::utils::error::{Result, RouteGenError};
use std::collections::HashSet;

/// Upper bound for a single `[[batches]] count`.
pub const MAX_ROUTES_PER_BATCH: usize = 1_000_000;

/// Upper bound for `generation.max_stops`.
pub const MAX_STOPS_PER_ROUTE: usize = 1_000;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RouteGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RouteGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(RouteGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RouteGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 最少一站，且 min 不可大於 max
pub fn validate_stop_range(min_stops: usize, max_stops: usize) -> Result<()> {
    validate_positive_number("generation.min_stops", min_stops, 1)?;
    if min_stops > max_stops {
        return Err(RouteGenError::ConfigValidationError {
            field: "generation.max_stops".to_string(),
            message: format!(
                "max_stops ({}) must not be smaller than min_stops ({})",
                max_stops, min_stops
            ),
        });
    }
    if max_stops > MAX_STOPS_PER_ROUTE {
        return Err(RouteGenError::InvalidConfigValueError {
            field: "generation.max_stops".to_string(),
            value: max_stops.to_string(),
            reason: format!("At most {} stops per route", MAX_STOPS_PER_ROUTE),
        });
    }
    Ok(())
}

pub fn validate_plan(field_name: &str, batches: &[BatchSpec]) -> Result<()> {
    if batches.is_empty() {
        return Err(RouteGenError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for batch in batches {
        validate_non_empty_string(&format!("{}.origin", field_name), &batch.origin)?;
        if batch.origin.chars().any(char::is_whitespace) {
            return Err(RouteGenError::InvalidConfigValueError {
                field: format!("{}.origin", field_name),
                value: batch.origin.clone(),
                reason: "Origin cannot contain whitespace".to_string(),
            });
        }
        if batch.count > MAX_ROUTES_PER_BATCH {
            return Err(RouteGenError::InvalidConfigValueError {
                field: format!("{}.count", field_name),
                value: batch.count.to_string(),
                reason: format!("At most {} routes per batch", MAX_ROUTES_PER_BATCH),
            });
        }
        if !seen.insert(batch.origin.as_str()) {
            tracing::warn!("Origin {} appears more than once in the plan", batch.origin);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "routes.txt").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_stop_range() {
        assert!(validate_stop_range(2, 5).is_ok());
        assert!(validate_stop_range(3, 3).is_ok());
        assert!(validate_stop_range(0, 5).is_err());
        assert!(validate_stop_range(5, 2).is_err());
        assert!(validate_stop_range(2, MAX_STOPS_PER_ROUTE).is_ok());
        assert!(validate_stop_range(2, usize::MAX).is_err());
    }

    #[test]
    fn test_validate_plan() {
        assert!(validate_plan("batches", &crate::domain::model::default_plan()).is_ok());
        assert!(validate_plan("batches", &[]).is_err());
        assert!(validate_plan("batches", &[BatchSpec::new("  ", 3)]).is_err());
        assert!(validate_plan("batches", &[BatchSpec::new("L AX", 3)]).is_err());
    }

    #[test]
    fn test_validate_plan_bounds_count() {
        let at_limit = [BatchSpec::new("LAX", MAX_ROUTES_PER_BATCH)];
        assert!(validate_plan("batches", &at_limit).is_ok());

        let huge = [BatchSpec::new("LAX", usize::MAX)];
        assert!(matches!(
            validate_plan("batches", &huge),
            Err(RouteGenError::InvalidConfigValueError { .. })
        ));
    }
}

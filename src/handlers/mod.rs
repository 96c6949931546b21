pub mod checklists;
pub mod goals;
pub mod pages;
pub mod read_only;
pub mod streaks;
pub mod super_sets;
pub mod tracked_values;

use crate::contributions::is_date_key;
use crate::errors::AppError;

fn require_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid("name is required"));
    }
    Ok(trimmed.to_string())
}

fn require_id(id: Option<String>, what: &str) -> Result<String, AppError> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(AppError::invalid(format!("{what} id is required"))),
    }
}

fn require_body_id(id: String, what: &str) -> Result<String, AppError> {
    if id.is_empty() {
        return Err(AppError::invalid(format!("{what} id is required")));
    }
    Ok(id)
}

fn require_date(date: &str) -> Result<(), AppError> {
    if !is_date_key(date) {
        return Err(AppError::invalid("date must be in YYYY-MM-DD format"));
    }
    Ok(())
}

fn require_finite(value: f64, what: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::invalid(format!("{what} must be a finite number")));
    }
    Ok(())
}

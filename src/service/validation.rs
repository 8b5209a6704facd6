use crate::service::error::ApiError;
use validator::{Validate, ValidationErrors};

pub fn validate_one<T: Validate>(item: T) -> Result<T, ApiError> {
    item.validate()
        .map_err(|errors| ApiError::Validation(describe(&errors)))?;
    Ok(item)
}

/// Checks a bulk payload: non-empty, at most `max_rows` items, and every item
/// valid. Errors name the index of the first bad item.
pub fn validate_bulk<T: Validate>(items: Vec<T>, max_rows: usize) -> Result<Vec<T>, ApiError> {
    if items.is_empty() {
        return Err(ApiError::Validation(
            "Bulk request must contain at least one item".to_string(),
        ));
    }
    if items.len() > max_rows {
        return Err(ApiError::Validation(format!(
            "Bulk request may contain at most {max_rows} items, got {}",
            items.len()
        )));
    }
    for (index, item) in items.iter().enumerate() {
        item.validate().map_err(|errors| {
            ApiError::Validation(format!("item {index}: {}", describe(&errors)))
        })?;
    }
    Ok(items)
}

fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                if field == "__all__" {
                    message
                } else {
                    format!("{field}: {message}")
                }
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

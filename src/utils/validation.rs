use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(describe)
}

fn describe(err: ValidationErrors) -> AppError {
    let details = err
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let codes = errs.iter().map(|e| e.code.to_string()).collect::<Vec<_>>().join(", ");
            format!("{}: [{}]", field, codes)
        })
        .collect::<Vec<_>>()
        .join("; ");
    AppError::Validation(format!("Validation failed: {}", details))
}

use regex::Regex;

use shared_models::error::AppError;

use crate::models::CreateInquiryRequest;

const MAX_MESSAGE_LENGTH: usize = 5000;

pub fn validate_email(email: &str) -> Result<bool, AppError> {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(email_regex.is_match(email) && email.len() <= 254)
}

pub fn validate_inquiry(request: &CreateInquiryRequest) -> Result<(), AppError> {
    let required = [
        ("name", &request.name),
        ("email", &request.email),
        ("subject", &request.subject),
        ("message", &request.message),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!("{} is required", field)));
        }
    }

    if !validate_email(request.email.trim())? {
        return Err(AppError::ValidationError("email is not valid".to_string()));
    }

    if request.message.len() > MAX_MESSAGE_LENGTH {
        return Err(AppError::ValidationError(format!(
            "message must be at most {} characters",
            MAX_MESSAGE_LENGTH
        )));
    }

    Ok(())
}

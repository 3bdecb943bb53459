use serde::{Deserialize, Serialize};
use validator::Validate;

// Fields default to empty so an omitted field reads as a validation
// failure rather than a deserialization one.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Number is required"))]
    pub number: String,
}

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_enquiry_needs_name_email_and_number() {
        let missing_number = CreateUserDto {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            number: String::new(),
        };
        assert!(missing_number.validate().is_err());

        let complete = CreateUserDto {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            number: "+91 98200 00000".to_string(),
        };
        assert!(complete.validate().is_ok());
    }

    #[test]
    fn a_malformed_email_is_rejected() {
        let bad_email = CreateUserDto {
            name: "Asha Rao".to_string(),
            email: "not-an-email".to_string(),
            number: "+91 98200 00000".to_string(),
        };
        assert!(bad_email.validate().is_err());
    }
}

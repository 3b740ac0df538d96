//! Unit tests for domain errors

use super::*;

#[test]
fn test_token_errors_collapse_to_unauthorized() {
    let errors = [
        TokenError::MissingToken,
        TokenError::Malformed,
        TokenError::InvalidSignature,
        TokenError::Expired,
    ];
    for error in errors {
        let domain: DomainError = error.clone().into();
        assert!(domain.is_unauthorized(), "{error:?} should be unauthorized");
        assert!(!domain.is_not_found());
    }
}

#[test]
fn test_expired_stays_distinguishable() {
    let domain: DomainError = TokenError::Expired.into();
    assert!(matches!(domain, DomainError::Token(TokenError::Expired)));
    assert_eq!(domain.to_string(), "Token expired");
}

#[test]
fn test_not_found_helpers() {
    assert!(DomainError::not_found("Favorite").is_not_found());
    assert!(DomainError::from(AuthError::UserNotFound).is_not_found());
    assert_eq!(DomainError::not_found("Favorite").to_string(), "Favorite not found");
}

#[test]
fn test_validation_messages_name_the_field() {
    let error = ValidationError::TooLong {
        field: "description".to_string(),
        max: 250,
        actual: 300,
    };
    assert!(error.to_string().contains("description"));
    assert!(DomainError::from(error).is_invalid_input());
    assert_eq!(
        ValidationError::required("title").to_string(),
        "Field required: title"
    );
}

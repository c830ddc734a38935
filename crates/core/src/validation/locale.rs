use serde::Deserialize;
use validator::Validate;

use super::Payload;

/// Body of `PUT /i18n/locale`. Whether the code is supported is decided by
/// the handler.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetLocaleRequest {
    #[validate(length(min = 1, message = "Locale is required"))]
    pub locale: String,
}

impl Payload for SetLocaleRequest {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn locale_must_be_a_string() {
        assert!(serde_json::from_value::<SetLocaleRequest>(json!({ "locale": 5 })).is_err());
        let ok: SetLocaleRequest = serde_json::from_value(json!({ "locale": "en" })).unwrap();
        assert!(ok.check().is_ok());
    }

    #[test]
    fn empty_locale_fails() {
        let empty = SetLocaleRequest {
            locale: String::new(),
        };
        assert!(empty.check().is_err());
    }
}

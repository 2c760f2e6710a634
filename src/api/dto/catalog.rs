//! Query parameters for the catalog endpoints.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

/// Accepts a two-letter storefront code. Blank values pass and fall back
/// to the configured country.
fn validate_country(country: &str) -> Result<(), ValidationError> {
    let code = country.trim();
    if code.is_empty()
        || (code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()))
    {
        Ok(())
    } else {
        Err(ValidationError::new("country")
            .with_message("country must be a two-letter storefront code".into()))
    }
}

/// Query parameters for `GET /api/search`.
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search term (required, surrounding whitespace is ignored)
    #[param(example = "photo editor")]
    pub keyword: Option<String>,

    /// Two-letter storefront country code (defaults to the configured country)
    #[validate(custom(function = "validate_country"))]
    #[param(example = "cn")]
    pub country: Option<String>,

    /// Maximum number of results (1-200, defaults to 50)
    #[validate(range(min = 1, max = 200, message = "limit must be between 1 and 200"))]
    #[param(minimum = 1, maximum = 200, example = 50)]
    pub limit: Option<u32>,
}

/// Query parameters for `GET /api/app/{appId}`.
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct AppQuery {
    #[validate(custom(function = "validate_country"))]
    #[param(example = "cn")]
    pub country: Option<String>,
}

/// Query parameters for `GET /api/rankings`.
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct RankingsQuery {
    #[validate(custom(function = "validate_country"))]
    #[param(example = "us")]
    pub country: Option<String>,

    #[validate(range(min = 1, max = 200, message = "limit must be between 1 and 200"))]
    #[param(minimum = 1, maximum = 200, example = 50)]
    pub limit: Option<u32>,
}

use bizerr_core::{BusinessError, Catalog, CatalogError};
use http::StatusCode;
use serde::Deserialize;

/// Error catalog section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Code reported when no layer classified a failure
    pub fallback: String,
    /// Declared descriptors
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

/// One descriptor as written in the configuration file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorEntry {
    /// Stable machine-readable code
    pub code: String,
    /// HTTP status; omitted means the boundary reports 500
    #[serde(default)]
    pub status: Option<u16>,
    /// Client-facing message
    pub message: String,
}

impl ErrorEntry {
    /// Convert into a descriptor, validating the status code
    ///
    /// # Errors
    ///
    /// Returns an error if `status` is outside the valid HTTP range
    pub fn to_business_error(&self) -> Result<BusinessError, CatalogError> {
        let status = self
            .status
            .map(|status| {
                StatusCode::from_u16(status).map_err(|_| CatalogError::InvalidStatus {
                    code: self.code.clone(),
                    status,
                })
            })
            .transpose()?;

        Ok(BusinessError::owned(status, self.code.as_str(), self.message.as_str()))
    }
}

impl CatalogConfig {
    /// Build the runtime catalog
    ///
    /// # Errors
    ///
    /// Returns an error if an entry has an invalid status, a code is empty or
    /// duplicated, or the fallback is not declared
    pub fn build(&self) -> Result<Catalog, CatalogError> {
        let errors = self
            .errors
            .iter()
            .map(ErrorEntry::to_business_error)
            .collect::<Result<Vec<_>, _>>()?;

        Catalog::builder().errors(errors).fallback(self.fallback.as_str()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
        fallback = "USER-10000010"

        [[errors]]
        code = "USER-00010020"
        status = 400
        message = "missing username"

        [[errors]]
        code = "USER-10000010"
        message = "unknown error"
    "#;

    #[test]
    fn builds_catalog_from_entries() {
        let config: CatalogConfig = toml::from_str(CATALOG).unwrap();
        let catalog = config.build().unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("USER-00010020").unwrap().status(),
            Some(StatusCode::BAD_REQUEST)
        );
        assert_eq!(catalog.fallback().code(), "USER-10000010");
        assert_eq!(catalog.fallback().status(), None);
    }

    #[test]
    fn rejects_out_of_range_status() {
        let config: CatalogConfig = toml::from_str(
            r#"
            fallback = "E-1"

            [[errors]]
            code = "E-1"
            status = 42
            message = "nope"
        "#,
        )
        .unwrap();

        assert_eq!(
            config.build().unwrap_err(),
            CatalogError::InvalidStatus {
                code: "E-1".to_owned(),
                status: 42
            }
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = toml::from_str::<CatalogConfig>(
            r#"
            fallback = "E-1"

            [[errors]]
            code = "E-1"
            message = "x"
            severity = "high"
        "#,
        );

        assert!(result.is_err());
    }
}

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::{BusinessError, CatalogError, Cause, ErrorResponse, ResponseError, resolve};

/// Closed set of descriptors known to a service
///
/// Built once at startup and read-only afterwards. Codes are unique and the
/// catalog always holds the fallback used for unclassified failures.
#[derive(Debug, Clone)]
pub struct Catalog {
    errors: IndexMap<String, BusinessError>,
    fallback: BusinessError,
}

impl Catalog {
    /// Start building a catalog
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Look up a descriptor by code
    pub fn get(&self, code: &str) -> Option<&BusinessError> {
        self.errors.get(code)
    }

    /// Whether `code` is part of the catalog
    pub fn contains(&self, code: &str) -> bool {
        self.errors.contains_key(code)
    }

    /// Descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &BusinessError> {
        self.errors.values()
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the catalog has no descriptors (never true once built)
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Descriptor reported when no layer classified a failure
    pub const fn fallback(&self) -> &BusinessError {
        &self.fallback
    }

    /// [`resolve`] against this catalog's fallback
    pub fn resolve(&self, err: Option<Cause>) -> ResponseError {
        resolve(err, self.fallback())
    }

    /// Boundary response for `err`, using this catalog's fallback
    pub fn respond(&self, err: Option<Cause>) -> ErrorResponse {
        ErrorResponse::from_error(err, self.fallback())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BusinessError;
    type IntoIter = indexmap::map::Values<'a, String, BusinessError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.values()
    }
}

/// Collects descriptors and validates them into a [`Catalog`]
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    errors: Vec<BusinessError>,
    fallback: Option<String>,
}

impl CatalogBuilder {
    /// Register one descriptor
    #[must_use]
    pub fn error(mut self, error: BusinessError) -> Self {
        self.errors.push(error);
        self
    }

    /// Register several descriptors
    #[must_use]
    pub fn errors(mut self, errors: impl IntoIterator<Item = BusinessError>) -> Self {
        self.errors.extend(errors);
        self
    }

    /// Choose the fallback descriptor by code
    #[must_use]
    pub fn fallback(mut self, code: impl Into<String>) -> Self {
        self.fallback = Some(code.into());
        self
    }

    /// Validate and freeze the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if a code is empty or duplicated, or if the fallback
    /// is missing or not registered
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut errors = IndexMap::with_capacity(self.errors.len());

        for error in self.errors {
            if error.code().is_empty() {
                return Err(CatalogError::EmptyCode {
                    message: error.message().to_owned(),
                });
            }

            match errors.entry(error.code().to_owned()) {
                Entry::Occupied(entry) => {
                    return Err(CatalogError::DuplicateCode {
                        code: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(error);
                }
            }
        }

        let fallback = self.fallback.ok_or(CatalogError::MissingFallback)?;

        let Some(fallback) = errors.get(&fallback).cloned() else {
            return Err(CatalogError::UnknownFallback { code: fallback });
        };

        tracing::debug!(errors = errors.len(), fallback = fallback.code(), "error catalog built");

        Ok(Catalog { errors, fallback })
    }
}

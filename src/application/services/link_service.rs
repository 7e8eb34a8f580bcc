//! Link creation, deletion and resolution service.

use std::sync::Arc;

use crate::domain::entities::Entry;
use crate::domain::registry::{RedirectRegistry, RegistryError};
use crate::utils::add_request::{validate_add_parts, validate_add_request};
use crate::utils::path_resolver::resolve_request_path;

/// Outcome of a successful redirect lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The matched entry, with its counter already incremented.
    pub entry: Entry,
    /// Final redirect location: target plus forwarded remainder.
    pub location: String,
    /// Remainder path forwarded to the target, if any.
    pub remainder_path: Option<String>,
}

/// Service translating raw request input into registry operations.
///
/// Handles validation of add requests and splitting of redirect paths so
/// HTTP handlers only deal with rendering.
pub struct LinkService {
    registry: Arc<RedirectRegistry>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(registry: Arc<RedirectRegistry>) -> Self {
        Self { registry }
    }

    /// Underlying registry.
    pub fn registry(&self) -> &Arc<RedirectRegistry> {
        &self.registry
    }

    /// Adds a link from a raw `{protocol}/{shortname}/{target-path}` path.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the path is malformed; the
    /// registry is not touched.
    ///
    /// Returns [`RegistryError::DuplicateShortname`] or
    /// [`RegistryError::Persistence`] as described on
    /// [`RedirectRegistry::add`].
    pub async fn add_link(&self, raw_path: &str) -> Result<Entry, RegistryError> {
        let request = validate_add_request(raw_path)?;
        self.registry
            .add(&request.shortname, &request.target())
            .await
    }

    /// Adds a link from already separated fields.
    ///
    /// # Errors
    ///
    /// See [`Self::add_link`].
    pub async fn add_link_parts(
        &self,
        protocol: &str,
        shortname: &str,
        target_path: &str,
    ) -> Result<Entry, RegistryError> {
        let request = validate_add_parts(protocol, shortname, target_path)?;
        self.registry
            .add(&request.shortname, &request.target())
            .await
    }

    /// Deletes a link. The shortname is trimmed first.
    ///
    /// Returns `Ok(false)` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Persistence`] if the removal could not be saved.
    pub async fn delete_link(&self, shortname: &str) -> Result<bool, RegistryError> {
        self.registry.delete(shortname.trim()).await
    }

    /// Resolves a request path to its redirect location.
    ///
    /// Returns `None` when the first path segment is not a known shortname.
    pub async fn resolve_link(&self, raw_path: &str) -> Option<Resolution> {
        let path = resolve_request_path(raw_path);
        let entry = self.registry.resolve(&path.shortname).await?;

        Some(Resolution {
            location: path.redirect_target(&entry.target),
            remainder_path: path.remainder_path(),
            entry,
        })
    }

    /// Looks up a link by shortname without counting a request.
    pub async fn get_link(&self, shortname: &str) -> Option<Entry> {
        self.registry.get(shortname.trim()).await
    }

    /// Lists all links in insertion order.
    pub async fn list_links(&self) -> Vec<Entry> {
        self.registry.list().await
    }
}

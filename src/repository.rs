//! Collaborator trait the workflow is built against. The real implementation
//! is `api::HttpCategoryRepository`; tests inject in-memory stand-ins.

use crate::error::RepositoryError;
use crate::models::{Category, CategoryData};

/// Remote category store. Both calls are synchronous facades; the HTTP
/// implementation does its awaiting internally.
pub trait CategoryRepository {
    /// Fetch all categories visible to the current owner.
    fn list(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Create a category; the backend echoes the created row.
    fn create(&self, data: &CategoryData) -> Result<Category, RepositoryError>;
}

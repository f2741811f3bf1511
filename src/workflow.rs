//! Category creation: fetch existing names, validate a proposed name, submit.
//! Owns the session's existing-name set; everything else is injected.

use crate::core_log;
use crate::error::{RepositoryError, SubmissionError, ValidationError};
use crate::models::{Category, CategoryData};
use crate::notify::{Notification, NotificationSink};
use crate::repository::CategoryRepository;

/// Maximum category name length, counted in Unicode scalar values.
pub const MAX_NAME_LEN: usize = 50;

/// Where the host should go after a successful submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// The destination list screen must re-fetch its categories.
    pub dirty: bool,
}

/// Outcome of a successful submission.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub category: Category,
    pub navigation: Navigation,
}

/// Fetch-validate-submit orchestration for creating a category, independent
/// of its visual presentation.
pub struct CategoryCreationWorkflow<R, N> {
    repository: R,
    sink: N,
    existing_names: Vec<String>,
}

impl<R: CategoryRepository, N: NotificationSink> CategoryCreationWorkflow<R, N> {
    /// Build the workflow and fetch existing category names once. A failed
    /// fetch degrades validation (no uniqueness check) instead of blocking
    /// the form.
    pub fn start(repository: R, sink: N) -> Self {
        let mut workflow = Self {
            repository,
            sink,
            existing_names: Vec::new(),
        };
        workflow.load_existing_categories();
        workflow
    }

    /// Populate the existing-name set from the repository. On failure the set
    /// stays empty and the user is told; no retry.
    pub fn load_existing_categories(&mut self) {
        match self.repository.list() {
            Ok(categories) => {
                self.existing_names = categories.into_iter().map(|c| c.name).collect();
                core_log!(
                    "[deliverus_rs] load_categories ok ({} existing)",
                    self.existing_names.len()
                );
            }
            Err(e) => {
                core_log!("[deliverus_rs] load_categories failed: {}", e);
                self.sink.notify(Notification::error(format!(
                    "There was an error while retrieving restaurant categories. {}",
                    e
                )));
                self.existing_names.clear();
            }
        }
    }

    /// Names fetched at workflow start (empty after a failed fetch).
    pub fn existing_names(&self) -> &[String] {
        &self.existing_names
    }

    /// Required, then length, then uniqueness (case-sensitive exact match).
    /// Only the empty string is Required; whitespace-only names go through
    /// and the backend rules on them.
    pub fn validate(&self, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::Required);
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ValidationError::TooLong { len });
        }
        if self.existing_names.iter().any(|n| n == name) {
            return Err(ValidationError::Duplicate {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Validate and create. Success notifies the user and signals navigation
    /// back to the category list with the dirty flag set; a backend rejection
    /// notifies and keeps the form, with the field-level errors available for
    /// inline display.
    pub fn submit(&self, name: &str) -> Result<Submission, SubmissionError> {
        self.validate(name)?;
        let data = CategoryData {
            name: name.to_string(),
        };
        match self.repository.create(&data) {
            Ok(category) => {
                core_log!("[deliverus_rs] create_category ok name={}", category.name);
                self.sink.notify(Notification::success(format!(
                    "Restaurant category {} successfully created.",
                    category.name
                )));
                Ok(Submission {
                    category,
                    navigation: Navigation { dirty: true },
                })
            }
            Err(e) => {
                core_log!("[deliverus_rs] create_category failed: {}", e);
                let (message, field_errors) = match e {
                    RepositoryError::Backend {
                        message, errors, ..
                    } => (message, errors),
                    other => (other.to_string(), Vec::new()),
                };
                self.sink.notify(Notification::error(format!(
                    "Restaurant category {} could not be created. {}",
                    name, message
                )));
                Err(SubmissionError::Backend {
                    message,
                    field_errors,
                })
            }
        }
    }
}

//! Shared test doubles: in-memory category repository and recording sink.

use std::cell::RefCell;
use std::rc::Rc;

use deliverus_client_core::{
    Category, CategoryData, CategoryId, CategoryRepository, Notification, NotificationKind,
    NotificationSink, RepositoryError,
};

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId::new(id).expect("valid id"),
        name: name.to_string(),
        created_at: None,
        updated_at: None,
    }
}

fn categories_from(names: &[&str]) -> Vec<Category> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| category(i as i64 + 1, n))
        .collect()
}

/// Repository with canned responses. `list` works through a queue so a test
/// can make a reload see different data; the last queued response repeats.
/// Records every create payload so tests can assert what reached the backend.
pub struct StubRepository {
    list_responses: RefCell<Vec<Result<Vec<Category>, RepositoryError>>>,
    pub create_response: Result<Category, RepositoryError>,
    pub created: Rc<RefCell<Vec<CategoryData>>>,
}

impl StubRepository {
    fn with_list_response(response: Result<Vec<Category>, RepositoryError>) -> Self {
        Self {
            list_responses: RefCell::new(vec![response]),
            create_response: Err(RepositoryError::Transport(
                "create_response not configured".to_string(),
            )),
            created: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_names(names: &[&str]) -> Self {
        Self::with_list_response(Ok(categories_from(names)))
    }

    pub fn failing_list(message: &str) -> Self {
        Self::with_list_response(Err(RepositoryError::Transport(message.to_string())))
    }

    /// Queue what the next `list` call after the already-queued ones returns.
    pub fn then_listing(self, names: &[&str]) -> Self {
        self.list_responses
            .borrow_mut()
            .push(Ok(categories_from(names)));
        self
    }

    pub fn creating(mut self, response: Result<Category, RepositoryError>) -> Self {
        self.create_response = response;
        self
    }
}

impl CategoryRepository for StubRepository {
    fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut queue = self.list_responses.borrow_mut();
        if queue.len() > 1 {
            queue.remove(0)
        } else {
            queue[0].clone()
        }
    }

    fn create(&self, data: &CategoryData) -> Result<Category, RepositoryError> {
        self.created.borrow_mut().push(data.clone());
        self.create_response.clone()
    }
}

/// Sink that records every notification; clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub notifications: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages_of_kind(&self, kind: NotificationKind) -> Vec<String> {
        self.notifications
            .borrow()
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

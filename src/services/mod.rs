//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::{clock::Clock, id::IdGenerator, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookshelfService,
}

impl Services {
    /// Create all services with the given repository and collaborators
    pub fn new(
        repository: Repository,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            books: books::BookshelfService::new(repository, clock, ids),
        }
    }
}

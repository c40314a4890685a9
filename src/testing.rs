//! In-memory `CollectionApi` used by unit tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::api::{CollectionApi, Identity};
use crate::error::{DiscogsError, DiscogsResult};
use crate::models::{CollectionPage, PaginationState, ReleaseId, ReleaseRecord};

/// A release whose display fields are derived from its id
pub fn release(id: u64) -> ReleaseRecord {
    ReleaseRecord::new(
        id,
        format!("Title {}", id),
        2000,
        &["Artist"],
        format!("2020-01-01T00:00:{:02}-08:00", id % 60),
    )
}

/// Fake API serving a fixed set of pages for one user
pub struct FakeApi {
    username: String,
    pages: RefCell<Vec<Vec<ReleaseRecord>>>,
    reported_pages: Cell<Option<u32>>,
    pending_growth: RefCell<Option<Vec<ReleaseRecord>>>,
    page_failures: RefCell<HashMap<u32, (u16, String)>>,
    add_failures: RefCell<HashMap<ReleaseId, (u16, String)>>,
    add_to_collection: Cell<bool>,
    page_requests: RefCell<Vec<u32>>,
    add_attempts: RefCell<Vec<ReleaseId>>,
    added: RefCell<Vec<ReleaseId>>,
}

impl FakeApi {
    pub fn with_pages(username: &str, pages: &[&[u64]]) -> Self {
        Self {
            username: username.to_string(),
            pages: RefCell::new(
                pages
                    .iter()
                    .map(|ids| ids.iter().map(|id| release(*id)).collect())
                    .collect(),
            ),
            reported_pages: Cell::new(None),
            pending_growth: RefCell::new(None),
            page_failures: RefCell::new(HashMap::new()),
            add_failures: RefCell::new(HashMap::new()),
            add_to_collection: Cell::new(false),
            page_requests: RefCell::new(Vec::new()),
            add_attempts: RefCell::new(Vec::new()),
            added: RefCell::new(Vec::new()),
        }
    }

    /// Report this page count instead of the real one
    pub fn set_reported_pages(&self, pages: Option<u32>) {
        self.reported_pages.set(pages);
    }

    /// Append a page right after the first page request is answered
    pub fn grow_after_first_request(&self, ids: &[u64]) {
        *self.pending_growth.borrow_mut() = Some(ids.iter().map(|id| release(*id)).collect());
    }

    pub fn fail_page(&self, page: u32, status: u16, message: &str) {
        self.page_failures
            .borrow_mut()
            .insert(page, (status, message.to_string()));
    }

    pub fn fail_add(&self, id: ReleaseId, status: u16, message: &str) {
        self.add_failures
            .borrow_mut()
            .insert(id, (status, message.to_string()));
    }

    /// Make successful adds visible to later collection fetches
    pub fn add_to_collection_on_success(&self, enabled: bool) {
        self.add_to_collection.set(enabled);
    }

    pub fn page_requests(&self) -> Vec<u32> {
        self.page_requests.borrow().clone()
    }

    pub fn add_attempts(&self) -> Vec<ReleaseId> {
        self.add_attempts.borrow().clone()
    }

    pub fn added(&self) -> Vec<ReleaseId> {
        self.added.borrow().clone()
    }
}

impl CollectionApi for FakeApi {
    fn identity(&self) -> DiscogsResult<Identity> {
        Ok(Identity {
            username: self.username.clone(),
        })
    }

    fn collection_page(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> DiscogsResult<CollectionPage> {
        self.page_requests.borrow_mut().push(page);

        if username != self.username {
            return Err(DiscogsError::api(
                404,
                "User does not exist or may have been deleted.",
            ));
        }
        if let Some((status, message)) = self.page_failures.borrow().get(&page) {
            return Err(DiscogsError::api(*status, message.clone()));
        }

        let response = {
            let pages = self.pages.borrow();
            let items = pages.iter().map(|p| p.len() as u64).sum();
            CollectionPage {
                pagination: PaginationState {
                    page,
                    pages: self.reported_pages.get().unwrap_or(pages.len() as u32),
                    per_page,
                    items,
                    urls: Default::default(),
                },
                releases: pages
                    .get(page as usize - 1)
                    .cloned()
                    .unwrap_or_default(),
            }
        };

        if let Some(growth) = self.pending_growth.borrow_mut().take() {
            self.pages.borrow_mut().push(growth);
        }

        Ok(response)
    }

    fn add_release(&self, _username: &str, release_id: ReleaseId) -> DiscogsResult<()> {
        self.add_attempts.borrow_mut().push(release_id);

        if let Some((status, message)) = self.add_failures.borrow().get(&release_id) {
            return Err(DiscogsError::api(*status, message.clone()));
        }

        self.added.borrow_mut().push(release_id);
        if self.add_to_collection.get() {
            let mut pages = self.pages.borrow_mut();
            let record = release(release_id.get());
            match pages.last_mut() {
                Some(last) => last.push(record),
                None => pages.push(vec![record]),
            }
        }
        Ok(())
    }
}

//! Shared helpers for integration tests.
//!
//! The client under test is blocking, so the mock server is driven from a
//! private tokio runtime and every client call happens outside of it.

#![allow(dead_code)]

use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TOKEN: &str = "secret";

pub struct MockApi {
    server: MockServer,
    rt: Runtime,
}

impl MockApi {
    pub fn start() -> Self {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    pub fn verify(&self) {
        self.rt.block_on(self.server.verify());
    }

    /// Serve `pages` for `username`, one mock per page number
    pub fn mount_collection(&self, username: &str, pages: &[&[u64]]) {
        let total_items: u64 = pages.iter().map(|p| p.len() as u64).sum();
        for (index, ids) in pages.iter().enumerate() {
            let page = index as u32 + 1;
            self.mount(
                Mock::given(method("GET"))
                    .and(path(format!("/users/{}/collection/folders/0/releases", username)))
                    .and(query_param("page", page.to_string()))
                    .and(query_param("per_page", "10"))
                    .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                        page,
                        pages.len() as u32,
                        total_items,
                        ids,
                    ))),
            );
        }
    }

    /// Answer the identity endpoint for requests carrying [`TOKEN`]
    pub fn mount_identity(&self, username: &str) {
        self.mount(
            Mock::given(method("GET"))
                .and(path("/oauth/identity"))
                .and(header("Authorization", "Discogs token=secret"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "id": 1,
                    "username": username,
                    "resource_url": format!("https://api.discogs.com/users/{}", username),
                    "consumer_name": "discogs-cli"
                }))),
        );
    }

    pub fn post_paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.method.to_string() == "POST")
            .map(|r| r.url.path().to_string())
            .collect()
    }

    pub fn page_numbers(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.url.path().ends_with("/folders/0/releases"))
            .filter_map(|r| {
                r.url
                    .query_pairs()
                    .find(|(k, _)| k == "page")
                    .map(|(_, v)| v.to_string())
            })
            .collect()
    }
}

/// A release as the API returns it; newer ids were added earlier
pub fn api_release(id: u64) -> Value {
    json!({
        "id": id,
        "instance_id": id * 100,
        "folder_id": 1,
        "rating": 0,
        "date_added": format!("2020-01-{:02}T10:00:00-08:00", 28 - (id % 28)),
        "basic_information": {
            "id": id,
            "title": format!("Title {}", id),
            "year": 1990 + id,
            "thumb": "",
            "formats": [{"name": "Vinyl", "qty": "1"}],
            "artists": [{"name": format!("Artist {}", id), "anv": "", "id": id + 1000}]
        }
    })
}

pub fn page_body(page: u32, pages: u32, items: u64, ids: &[u64]) -> Value {
    json!({
        "pagination": {
            "page": page,
            "pages": pages,
            "per_page": 10,
            "items": items,
            "urls": {}
        },
        "releases": ids.iter().map(|id| api_release(*id)).collect::<Vec<_>>()
    })
}

/// A backup document containing `ids`, in order
pub fn backup_body(ids: &[u64]) -> Value {
    page_body(1, 1, ids.len() as u64, ids)
}

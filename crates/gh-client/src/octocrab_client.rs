//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.

use crate::client::GitHubClient;
use crate::types::{convert_pull_request, RawPullRequest};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use pr_limits::PullRequest;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Largest page size the pulls endpoint accepts
pub const MAX_PAGE_SIZE: u8 = 100;

#[derive(Debug, Serialize)]
struct ListPullsParams {
    state: &'static str,
    per_page: u8,
    page: u32,
}

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
    page_size: u8,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self {
            octocrab,
            page_size: MAX_PAGE_SIZE,
        }
    }

    /// Use a different page size when listing pull requests
    pub fn with_page_size(mut self, page_size: u8) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_open_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<PullRequest>> {
        debug!("Fetching open PRs for {}/{}", owner, repo);

        let route = format!("/repos/{}/{}/pulls", owner, repo);
        let mut prs = Vec::new();
        let mut seen = HashSet::new();
        let mut page = 1u32;

        loop {
            let params = ListPullsParams {
                state: "open",
                per_page: self.page_size,
                page,
            };
            let items: Vec<RawPullRequest> = self
                .octocrab
                .get(&route, Some(&params))
                .await
                .with_context(|| format!("Failed to list open PRs of {}/{}", owner, repo))?;
            let page_len = items.len();

            // The listing shifts when PRs open or close between pages
            for raw in items {
                let pr = convert_pull_request(raw)?;
                if seen.insert(pr.number()) {
                    prs.push(pr);
                } else {
                    debug!("Skipping PR #{} listed on more than one page", pr.number());
                }
            }

            if page_len < usize::from(self.page_size) {
                break;
            }
            page += 1;
        }

        debug!("Fetched {} open PRs for {}/{}", prs.len(), owner, repo);
        Ok(prs)
    }

    async fn close_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        comment: &str,
    ) -> anyhow::Result<()> {
        debug!("Commenting on PR #{} in {}/{}", pr_number, owner, repo);
        let comments_route = format!("/repos/{}/{}/issues/{}/comments", owner, repo, pr_number);
        let _: serde_json::Value = self
            .octocrab
            .post(comments_route, Some(&serde_json::json!({ "body": comment })))
            .await
            .with_context(|| format!("Failed to comment on PR #{}", pr_number))?;

        debug!("Closing PR #{} in {}/{}", pr_number, owner, repo);
        let pull_route = format!("/repos/{}/{}/pulls/{}", owner, repo, pr_number);
        let _: serde_json::Value = self
            .octocrab
            .patch(pull_route, Some(&serde_json::json!({ "state": "closed" })))
            .await
            .with_context(|| format!("Failed to close PR #{}", pr_number))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pr_json(number: u64, author: &str) -> serde_json::Value {
        json!({
            "id": number * 100,
            "number": number,
            "user": { "login": author },
            "draft": false,
            "head": { "ref": format!("topic-{}", number) },
            "base": { "ref": "main" },
            "labels": []
        })
    }

    fn client_for(server: &MockServer) -> OctocrabClient {
        let octocrab = Octocrab::builder()
            .base_uri(server.uri())
            .unwrap()
            .build()
            .unwrap();
        OctocrabClient::new(Arc::new(octocrab))
    }

    #[tokio::test]
    async fn test_fetch_open_pull_requests_follows_pages() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/pulls"))
            .and(query_param("state", "open"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([pr_json(1, "alice"), pr_json(2, "bob")])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/pulls"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([pr_json(3, "alice")])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).with_page_size(2);
        let prs = client
            .fetch_open_pull_requests("owner", "repo")
            .await
            .unwrap();

        let numbers: Vec<u64> = prs.iter().map(|pr| pr.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(prs[2].author(), "alice");
    }

    #[tokio::test]
    async fn test_fetch_open_pull_requests_skips_repeated_numbers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/pulls"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([pr_json(3, "carol"), pr_json(2, "bob")])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/pulls"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([pr_json(2, "bob"), pr_json(1, "alice")])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/pulls"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let prs = client_for(&server)
            .with_page_size(2)
            .fetch_open_pull_requests("owner", "repo")
            .await
            .unwrap();

        let numbers: Vec<u64> = prs.iter().map(|pr| pr.number()).collect();
        assert_eq!(numbers, vec![3, 2, 1]);

        let limits = pr_limits::Limits {
            repo_limit: Some(3),
            ..Default::default()
        };
        assert_eq!(
            pr_limits::enforce_limits(&prs, &limits, 3),
            pr_limits::Decision::NoAction
        );
    }

    #[tokio::test]
    async fn test_fetch_open_pull_requests_rejects_malformed_payload() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/pulls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 1,
                "number": 8,
                "user": { "login": "alice" },
                "base": { "ref": "main" }
            }])))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_open_pull_requests("owner", "repo")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "pull request #8 has no head ref");
    }

    #[tokio::test]
    async fn test_close_pull_request_comments_then_closes() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/issues/5/comments"))
            .and(body_json(json!({ "body": "too many PRs" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/repos/owner/repo/pulls/5"))
            .and(body_json(json!({ "state": "closed" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "number": 5, "state": "closed" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .close_pull_request("owner", "repo", 5, "too many PRs")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_page_size_is_clamped() {
        let octocrab = Arc::new(Octocrab::builder().build().unwrap());
        assert_eq!(OctocrabClient::new(octocrab.clone()).page_size, MAX_PAGE_SIZE);
        assert_eq!(
            OctocrabClient::new(octocrab.clone()).with_page_size(0).page_size,
            1
        );
        assert_eq!(
            OctocrabClient::new(octocrab).with_page_size(255).page_size,
            MAX_PAGE_SIZE
        );
    }
}

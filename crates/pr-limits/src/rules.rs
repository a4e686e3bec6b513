//! Limit rules
//!
//! Each rule is a pure function of the open pull requests, the limits and
//! the triggering pull request. A rule either passes or returns a
//! [`Violation`] describing why the trigger has to be closed.

use crate::{Limits, PullRequest};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const CLOSING_NOTICE: &str = "Sorry, this pull request will be closed.";

/// A limit rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Total open pull requests in the repository
    RepoLimit,
    /// Open pull requests by the trigger's author
    AuthorLimit,
    /// Open pull requests sharing a limited label with the trigger
    LabelLimit,
}

impl Rule {
    /// Evaluation order, highest priority first
    pub const PRIORITY: [Rule; 3] = [Rule::RepoLimit, Rule::AuthorLimit, Rule::LabelLimit];

    /// Evaluate this rule for the triggering pull request
    ///
    /// `open_prs` is the full snapshot and may contain the trigger itself.
    pub fn evaluate<'a>(
        &self,
        open_prs: &'a [PullRequest],
        limits: &Limits,
        trigger: &'a PullRequest,
    ) -> Option<Violation<'a>> {
        match self {
            Rule::RepoLimit => repo_limit(open_prs, limits),
            Rule::AuthorLimit => author_limit(open_prs, limits, trigger),
            Rule::LabelLimit => label_limit(open_prs, limits, trigger),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::RepoLimit => "repo limit",
            Rule::AuthorLimit => "author limit",
            Rule::LabelLimit => "label limit",
        };
        f.write_str(name)
    }
}

/// Why a rule tripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation<'a> {
    RepoLimit {
        limit: u64,
        open: usize,
    },
    AuthorLimit {
        limit: u64,
        author: &'a str,
        /// The author's other open pull requests, ascending by number
        others: Vec<&'a PullRequest>,
    },
    LabelLimit {
        limit: u64,
        /// Open pull requests per limited label on the trigger, trigger included
        counts: BTreeMap<&'a str, u64>,
    },
}

impl Violation<'_> {
    pub fn rule(&self) -> Rule {
        match self {
            Violation::RepoLimit { .. } => Rule::RepoLimit,
            Violation::AuthorLimit { .. } => Rule::AuthorLimit,
            Violation::LabelLimit { .. } => Rule::LabelLimit,
        }
    }

    /// Comment posted on the pull request when it is closed
    pub fn message(&self) -> String {
        match self {
            Violation::RepoLimit { .. } => format!(
                "{} The limit for open pull requests was exceeded.",
                CLOSING_NOTICE
            ),
            Violation::AuthorLimit {
                limit,
                author,
                others,
            } => {
                let header = format!(
                    "{} You have too many open PRs (limit: {}).",
                    CLOSING_NOTICE, limit
                );

                if others.is_empty() {
                    return format!(
                        "{}\n\nNo other open PRs were found for @{} (unexpected if limit exceeded).",
                        header, author
                    );
                }

                let numbers = others
                    .iter()
                    .map(|pr| format!("#{}", pr.number()))
                    .collect::<Vec<_>>()
                    .join(", ");
                let details = others
                    .iter()
                    .map(|pr| format!("- {}", pr.summary()))
                    .collect::<Vec<_>>()
                    .join("\n");

                format!(
                    "{}\n\nOther open PRs counted for @{}: {}\n{}",
                    header, author, numbers, details
                )
            }
            Violation::LabelLimit { .. } => format!(
                "{} The limit for open PRs with these labels was exceeded.",
                CLOSING_NOTICE
            ),
        }
    }
}

fn repo_limit<'a>(open_prs: &'a [PullRequest], limits: &Limits) -> Option<Violation<'a>> {
    let Some(limit) = limits.repo() else {
        debug!("There is no repo PR limit set");
        return None;
    };

    let open = open_prs.len();
    debug!("Current number of open PRs in the repo is {}", open);

    if open as u64 > limit {
        debug!("There are more PRs open in this repo than the limit allows");
        return Some(Violation::RepoLimit { limit, open });
    }

    debug!("This PR has not been limited by the amount of PRs currently open in this repo");
    None
}

fn author_limit<'a>(
    open_prs: &'a [PullRequest],
    limits: &Limits,
    trigger: &'a PullRequest,
) -> Option<Violation<'a>> {
    let Some(limit) = limits.per_author() else {
        debug!("There is no author PR limit set");
        return None;
    };

    let author = trigger.author();
    let by_author: Vec<&PullRequest> = open_prs
        .iter()
        .filter(|pr| pr.author() == author)
        .collect();
    debug!(
        "Current number of open PRs for {} is {}",
        author,
        by_author.len()
    );

    if by_author.len() as u64 <= limit {
        debug!("This PR has not been limited by the amount of PRs the author has open");
        return None;
    }

    debug!("The author of this PR has more PRs open than the limit allows");
    let mut others: Vec<&PullRequest> = by_author
        .into_iter()
        .filter(|pr| pr.number() != trigger.number())
        .collect();
    others.sort_by_key(|pr| pr.number());

    Some(Violation::AuthorLimit {
        limit,
        author,
        others,
    })
}

fn label_limit<'a>(
    open_prs: &'a [PullRequest],
    limits: &Limits,
    trigger: &'a PullRequest,
) -> Option<Violation<'a>> {
    let Some(limit) = limits.per_label() else {
        debug!("There are no label PR limits set");
        return None;
    };

    if limits.limited_labels.is_empty() {
        debug!("There are no labels specified to be limited");
        return None;
    }

    let limited_on_trigger: Vec<&str> = trigger
        .labels()
        .iter()
        .map(String::as_str)
        .filter(|label| limits.is_limited_label(label))
        .collect();
    if limited_on_trigger.is_empty() {
        debug!("This PR does not have any labels that need to be limited");
        return None;
    }
    debug!(
        "This PR has the following limited labels: {}",
        limited_on_trigger.join(", ")
    );

    let others_with_limited_labels: Vec<&PullRequest> = open_prs
        .iter()
        .filter(|pr| pr.number() != trigger.number())
        .filter(|pr| pr.labels().iter().any(|l| limits.is_limited_label(l)))
        .collect();
    if others_with_limited_labels.is_empty() {
        debug!("There are no other open PRs that have limited labels");
        return None;
    }

    let counts: BTreeMap<&str, u64> = limited_on_trigger
        .iter()
        .map(|label| {
            let others = others_with_limited_labels
                .iter()
                .filter(|pr| pr.has_label(label))
                .count() as u64;
            (*label, 1 + others)
        })
        .collect();
    debug!("Open PRs per limited label: {:?}", counts);

    if counts.values().all(|count| *count <= limit) {
        debug!("This PR has not been limited by its labels");
        return None;
    }

    debug!("There are too many open PRs with these labels");
    Some(Violation::LabelLimit { limit, counts })
}

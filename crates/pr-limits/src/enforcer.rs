//! The enforcer
//!
//! Runs the rules in priority order against one snapshot of open pull
//! requests and stops at the first violation.

use crate::rules::Rule;
use crate::{Limits, PullRequest};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Outcome of one enforcement run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Decision {
    /// Leave the triggering pull request alone
    NoAction,
    /// Close the triggering pull request with a comment
    Close {
        number: u64,
        rule: Rule,
        message: String,
    },
}

/// Ordered list of rules to evaluate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enforcer {
    rules: Vec<Rule>,
}

impl Default for Enforcer {
    fn default() -> Self {
        Self {
            rules: Rule::PRIORITY.to_vec(),
        }
    }
}

impl Enforcer {
    /// Create an enforcer evaluating `rules` in the given order
    pub fn with_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Decide what to do with the triggering pull request
    ///
    /// Returns [`Decision::NoAction`] when `triggering_number` is not among
    /// `open_prs`, i.e. the pull request was closed in the meantime.
    pub fn evaluate(
        &self,
        open_prs: &[PullRequest],
        limits: &Limits,
        triggering_number: u64,
    ) -> Decision {
        info!("Using the following limits: {}", limits);
        if limits.is_unrestricted() {
            info!("No limits are configured, no action will be taken.");
            return Decision::NoAction;
        }

        let Some(trigger) = open_prs.iter().find(|pr| pr.number() == triggering_number) else {
            info!("The triggering PR is closed, no action will be taken.");
            return Decision::NoAction;
        };

        for rule in &self.rules {
            if let Some(violation) = rule.evaluate(open_prs, limits, trigger) {
                info!(
                    "Closing PR #{}: {} exceeded",
                    trigger.number(),
                    violation.rule()
                );
                return Decision::Close {
                    number: trigger.number(),
                    rule: violation.rule(),
                    message: violation.message(),
                };
            }
        }

        debug!("PR #{} is within all limits", trigger.number());
        Decision::NoAction
    }
}

/// Evaluate the default rule order against the triggering pull request
pub fn enforce_limits(
    open_prs: &[PullRequest],
    limits: &Limits,
    triggering_number: u64,
) -> Decision {
    Enforcer::default().evaluate(open_prs, limits, triggering_number)
}

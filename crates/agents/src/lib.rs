use std::sync::Arc;
use std::time::Instant;

use paisa_core::{normalize, MatchOutcome, RuleSet};
use paisa_observability::AppMetrics;
use tracing::{info, instrument};

/// Runs one normalize-then-match pass per call over the immutable rule table.
///
/// Holds no per-call state: the token sequence and score board live and die
/// inside [`respond`](ResponderAgent::respond), so one agent can serve any
/// number of concurrent callers.
#[derive(Clone)]
pub struct ResponderAgent {
    rules: Arc<RuleSet>,
    metrics: Arc<AppMetrics>,
}

impl ResponderAgent {
    pub fn new(rules: Arc<RuleSet>, metrics: Arc<AppMetrics>) -> Self {
        Self { rules, metrics }
    }

    #[instrument(skip(self, text))]
    pub fn respond(&self, text: &str) -> MatchOutcome {
        let started = Instant::now();
        self.metrics.inc_request();

        let tokens = normalize(text);
        let outcome = self.rules.evaluate(&tokens);

        if outcome.matched {
            self.metrics.inc_matched();
        } else {
            self.metrics.inc_fallback();
        }

        self.metrics.observe_latency(started.elapsed());
        info!(
            tokens = tokens.len(),
            score = outcome.score,
            matched = outcome.matched,
            "respond handled"
        );

        outcome
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

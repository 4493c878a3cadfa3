//! Guidance resolution: ask the advisory model, fall back to the local catalog.
//!
//! Every path ends in text for the user. Advisory failures (including a
//! timeout) are logged and replaced by the catalog answer, and catalog read
//! errors are treated as "no match".

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::llm::prompts::{guidance_prompt, ADVISORY_MAX_TOKENS, ADVISORY_TEMPERATURE, SYSTEM_PROMPT};
use crate::llm::{AdvisoryError, AdvisoryService};
use crate::models::EmergencyEntry;
use crate::repository::StoreError;

/// Returned for an empty or whitespace-only query.
pub const EMPTY_QUERY_MESSAGE: &str = "Please provide an emergency scenario.";

/// Reminders appended after the catalog steps, numbered from 2.
const GENERAL_SAFETY_STEPS: [&str; 5] = [
    "Ensure your own safety before helping others.",
    "If available, use protective equipment (like gloves).",
    "Reassure the person, keep them calm, and monitor their breathing and pulse.",
    "Do not leave the person unattended until professional help arrives.",
    "If their condition worsens, call emergency services again and update them.",
];

/// Default upper bound on a single advisory call.
pub const DEFAULT_ADVISORY_TIMEOUT: Duration = Duration::from_secs(10);

/// Lookup of first-aid entries by substring.
#[async_trait]
pub trait EmergencyCatalog: Send + Sync {
    /// First entry in catalog order whose name or steps contain `query` (case-sensitive).
    async fn find_first(&self, query: &str) -> Result<Option<EmergencyEntry>, StoreError>;
}

#[async_trait]
impl EmergencyCatalog for Vec<EmergencyEntry> {
    async fn find_first(&self, query: &str) -> Result<Option<EmergencyEntry>, StoreError> {
        Ok(self.iter().find(|entry| entry.mentions(query)).cloned())
    }
}

/// Where a piece of guidance came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidanceSource {
    /// The query was blank.
    Prompt,
    /// The advisory model answered.
    Advisory,
    /// Built from a matching catalog entry.
    Catalog,
    /// Nothing matched.
    NotFound,
}

/// Text to show the user, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidance {
    pub source: GuidanceSource,
    pub text: String,
}

impl Guidance {
    fn prompt() -> Self {
        Self {
            source: GuidanceSource::Prompt,
            text: EMPTY_QUERY_MESSAGE.to_string(),
        }
    }

    fn not_found(query: &str) -> Self {
        Self {
            source: GuidanceSource::NotFound,
            text: format!("Sorry, no guidance found for '{}'.", query),
        }
    }

    fn from_entry(entry: &EmergencyEntry) -> Self {
        Self {
            source: GuidanceSource::Catalog,
            text: format_catalog_guidance(entry),
        }
    }
}

impl fmt::Display for Guidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Six-step script around a catalog entry: its own steps first, then the general reminders.
pub fn format_catalog_guidance(entry: &EmergencyEntry) -> String {
    let mut text = format!(
        "Emergency: {}\n\nStep-by-Step Guidance:\n1. {}",
        entry.name, entry.steps
    );
    for (i, step) in GENERAL_SAFETY_STEPS.iter().enumerate() {
        text.push_str(&format!("\n{}. {}", i + 2, step));
    }
    text.trim().to_string()
}

/// Produces guidance for a free-text emergency description.
pub struct GuidanceResolver {
    advisory: Arc<dyn AdvisoryService>,
    catalog: Arc<dyn EmergencyCatalog>,
    timeout: Duration,
}

impl GuidanceResolver {
    pub fn new(advisory: Arc<dyn AdvisoryService>, catalog: Arc<dyn EmergencyCatalog>) -> Self {
        Self {
            advisory,
            catalog,
            timeout: DEFAULT_ADVISORY_TIMEOUT,
        }
    }

    /// Bound the advisory call; expiry counts as a failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ask the advisory service, falling back to the catalog on any failure.
    pub async fn resolve(&self, query: &str) -> Guidance {
        if query.trim().is_empty() {
            return Guidance::prompt();
        }

        match self.ask_advisory(query).await {
            Ok(text) => {
                debug!("Advisory guidance received ({} chars)", text.len());
                Guidance {
                    source: GuidanceSource::Advisory,
                    text: text.trim().to_string(),
                }
            }
            Err(e) => {
                warn!("Advisory service unavailable, using offline catalog: {}", e);
                self.fallback(query).await
            }
        }
    }

    /// Skip the advisory service and answer from the catalog only.
    pub async fn resolve_offline(&self, query: &str) -> Guidance {
        if query.trim().is_empty() {
            return Guidance::prompt();
        }
        self.fallback(query).await
    }

    async fn ask_advisory(&self, query: &str) -> Result<String, AdvisoryError> {
        let user_prompt = guidance_prompt(query);
        let call = self.advisory.complete(
            SYSTEM_PROMPT,
            &user_prompt,
            ADVISORY_MAX_TOKENS,
            ADVISORY_TEMPERATURE,
        );
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(AdvisoryError::Timeout(self.timeout)),
        }
    }

    async fn fallback(&self, query: &str) -> Guidance {
        match self.catalog.find_first(query).await {
            Ok(Some(entry)) => Guidance::from_entry(&entry),
            Ok(None) => Guidance::not_found(query),
            Err(e) => {
                warn!("Emergency catalog lookup failed: {}", e);
                Guidance::not_found(query)
            }
        }
    }
}

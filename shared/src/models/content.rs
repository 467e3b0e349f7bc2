//! Admin-edited marketing content (popups, site copy)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::serde_helpers::timestamp_opt;

/// Content key holding the popup list
pub const POPUPS_KEY: &str = "cafe1973_admin_popups";
/// Content key holding editable site copy
pub const SITE_CONTENT_KEY: &str = "cafe1973_site_content";

/// Promotional popup shown on the public site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub cta_label: Option<String>,
    #[serde(default)]
    pub cta_url: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, with = "timestamp_opt")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp_opt")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl Popup {
    /// Enabled and inside its (optional) display window
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.enabled
            && self.starts_at.is_none_or(|s| now >= s)
            && self.ends_at.is_none_or(|e| now < e)
    }
}

/// Editable site copy, grouped by section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub announcement: Option<String>,
    /// Free-form section → text overrides
    #[serde(default)]
    pub sections: BTreeMap<String, String>,
}

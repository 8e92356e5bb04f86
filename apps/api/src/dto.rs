use hearth_domain::{Module, NavigationEntry};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Incoming payload for email/password sign-in.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/sign-in-request.ts"
)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// One visible menu entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/navigation-entry-response.ts"
)]
pub struct NavigationEntryResponse {
    pub key: String,
    pub label: String,
    pub href: String,
    pub module: Option<String>,
    pub requires_auth: bool,
}

impl From<&NavigationEntry> for NavigationEntryResponse {
    fn from(entry: &NavigationEntry) -> Self {
        Self {
            key: entry.key().to_owned(),
            label: entry.label().to_owned(),
            href: entry.href().to_owned(),
            module: entry.module().map(|module| module.as_str().to_owned()),
            requires_auth: entry.requires_auth(),
        }
    }
}

/// Menu visible to the current session.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/navigation-response.ts"
)]
pub struct NavigationResponse {
    pub entries: Vec<NavigationEntryResponse>,
}

impl NavigationResponse {
    #[must_use]
    pub fn from_entries(entries: &[NavigationEntry]) -> Self {
        Self {
            entries: entries.iter().map(NavigationEntryResponse::from).collect(),
        }
    }
}

/// API representation of the signed-in session.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/session-response.ts"
)]
pub struct SessionResponse {
    pub subject: String,
    pub display_name: String,
    pub email: Option<String>,
    /// Raw role value; may be a value the server no longer recognizes.
    pub role: String,
    pub allowed_modules: Vec<String>,
    pub landing_route: String,
    pub navigation: Vec<NavigationEntryResponse>,
}

/// Stored interface preference.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/preference-response.ts"
)]
pub struct PreferenceResponse {
    pub key: String,
    pub value: String,
}

/// Incoming payload for a preference update.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-preference-request.ts"
)]
pub struct UpdatePreferenceRequest {
    pub value: String,
}

/// Descriptor of a rendered page.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/page-response.ts"
)]
pub struct PageResponse {
    pub path: String,
    pub title: String,
    pub module: Option<String>,
}

impl PageResponse {
    #[must_use]
    pub fn new(path: &str, title: &str, module: Option<Module>) -> Self {
        Self {
            path: path.to_owned(),
            title: title.to_owned(),
            module: module.map(|module| module.as_str().to_owned()),
        }
    }
}

/// Inline access-denied view.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-denied-response.ts"
)]
pub struct AccessDeniedResponse {
    pub message: String,
    /// Where the user is invited to go instead.
    pub destination: String,
}

/// Neutral placeholder while the session resolves.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/pending-response.ts"
)]
pub struct PendingResponse {
    pub status: &'static str,
}

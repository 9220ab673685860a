//! Setup-path resolution: free-text remediation guidance to an administrative console deep link.
//!
//! Remediation text embeds breadcrumbs such as `Setup > Security > Remote Site Settings.`. The
//! breadcrumb is extracted, split into segments, and looked up against [`SETUP_URLS`] using three
//! candidates in priority order:
//!
//! 1. every segment after `Setup`, joined with `" > "`;
//! 2. the last segment;
//! 3. the second-to-last segment (breadcrumbs ending in a record name, e.g. `Users > John Doe`).
//!
//! A breadcrumb that matches nothing still resolves to [`SETUP_HOME_URL`].
//!
//! Known edge case: the breadcrumb stops at the first period, so `Setup > Auth. Providers` is cut
//! to `Setup > Auth`. The period-free spelling is in the table; the abbreviated one cannot match.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Generic Setup landing page.
pub const SETUP_HOME_URL: &str = "/lightning/setup/SetupOneHome/home";

/// Lower-cased Setup page names to deep-link paths.
pub const SETUP_URLS: &[(&str, &str)] = &[
    // Users and access
    ("users", "/lightning/setup/ManageUsers/home"),
    ("profiles", "/lightning/setup/EnhancedProfiles/home"),
    ("permission sets", "/lightning/setup/PermSets/home"),
    ("permission set groups", "/lightning/setup/PermSetGroups/home"),
    ("public groups", "/lightning/setup/PublicGroups/home"),
    ("roles", "/lightning/setup/Roles/home"),
    ("login history", "/lightning/setup/OrgLoginHistory/home"),
    ("login flows", "/lightning/setup/LoginFlow/home"),
    // Security
    ("security", "/lightning/setup/SecurityCenter/home"),
    ("health check", "/lightning/setup/HealthCheck/home"),
    ("session settings", "/lightning/setup/SecuritySession/home"),
    ("security > session settings", "/lightning/setup/SecuritySession/home"),
    ("password policies", "/lightning/setup/SecurityPolicies/home"),
    ("security > password policies", "/lightning/setup/SecurityPolicies/home"),
    ("network access", "/lightning/setup/NetworkAccess/home"),
    ("security > network access", "/lightning/setup/NetworkAccess/home"),
    ("remote site settings", "/lightning/setup/SecurityRemoteProxy/home"),
    ("security > remote site settings", "/lightning/setup/SecurityRemoteProxy/home"),
    ("csp trusted sites", "/lightning/setup/SecurityCspTrustedSite/home"),
    ("cors", "/lightning/setup/CorsWhitelistEntries/home"),
    ("sharing settings", "/lightning/setup/SecuritySharing/home"),
    ("certificate and key management", "/lightning/setup/CertificatesAndKeysManagement/home"),
    ("view setup audit trail", "/lightning/setup/SecurityEvents/home"),
    ("file upload and download security", "/lightning/setup/FileTypeSetting/home"),
    ("event monitoring settings", "/lightning/setup/EventMonitoringSetup/home"),
    // Identity
    ("my domain", "/lightning/setup/OrgDomain/home"),
    ("single sign-on settings", "/lightning/setup/SingleSignOn/home"),
    ("identity provider", "/lightning/setup/IdpPage/home"),
    ("auth providers", "/lightning/setup/AuthProviders/home"),
    ("identity verification", "/lightning/setup/IdentityVerification/home"),
    // Integrations
    ("connected apps", "/lightning/setup/ConnectedApplication/home"),
    ("manage connected apps", "/lightning/setup/ConnectedApplication/home"),
    ("connected apps oauth usage", "/lightning/setup/ConnectedAppsUsage/home"),
    ("named credentials", "/lightning/setup/NamedCredential/home"),
    ("external credentials", "/lightning/setup/NamedCredential/home"),
    ("api", "/lightning/setup/WebServices/home"),
    // Platform
    ("apex classes", "/lightning/setup/ApexClasses/home"),
    ("sites", "/lightning/setup/CustomDomain/home"),
    ("company information", "/lightning/setup/CompanyProfileInfo/home"),
    ("deliverability", "/lightning/setup/OrgEmailSettings/home"),
    ("critical updates", "/lightning/setup/CriticalUpdates/home"),
    ("release updates", "/lightning/setup/ReleaseUpdates/home"),
];

// Breadcrumb: "Setup", optional whitespace, ">", then everything up to the next period.
static SETUP_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)setup\s*>[^.]+").expect("valid regex literal"));

/// Look up an exact (lower-cased) key in [`SETUP_URLS`].
pub fn lookup(key: &str) -> Option<&'static str> {
    SETUP_URLS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, url)| *url)
}

/// Extract the cleaned breadcrumb (e.g. `Setup > Users > Permission Sets`) from free text.
pub fn extract_setup_path(text: &str) -> Option<&str> {
    let m = SETUP_PATH.find(text)?;
    let clean = m
        .as_str()
        .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':') || c.is_whitespace())
        .trim();
    Some(clean)
}

/// Resolve remediation text to a deep link.
///
/// `None` when the text is empty or contains no `Setup >` breadcrumb; otherwise always a URL.
pub fn resolve_setup_url(remediation: Option<&str>) -> Option<&'static str> {
    let text = remediation.filter(|t| !t.is_empty())?;
    let path = extract_setup_path(text)?;

    let lower = path.to_lowercase();
    // The match always contains a '>' right after the leading "setup" token.
    let rest = lower.split_once('>').map(|(_, rest)| rest).unwrap_or("");
    let segments: Vec<&str> = rest
        .split('>')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let joined = segments.join(" > ");
    let mut candidates: Vec<&str> = Vec::with_capacity(3);
    if !joined.is_empty() {
        candidates.push(&joined);
    }
    if let Some(last) = segments.last() {
        candidates.push(last);
    }
    if segments.len() >= 2 {
        candidates.push(segments[segments.len() - 2]);
    }

    if let Some(url) = candidates.iter().find_map(|c| lookup(c)) {
        return Some(url);
    }

    debug!(path = %path, "setup path not in table; using setup home");
    Some(SETUP_HOME_URL)
}

//! Backend connection settings
//!
//! Values are baked in at build time from `HIRESYNC_SUPABASE_URL` and
//! `HIRESYNC_SUPABASE_ANON_KEY` (e.g. `HIRESYNC_SUPABASE_URL=... trunk build`).

use contracts::shared::rest::RestConfig;

/// Backend settings of this build
///
/// # Example
/// ```rust,ignore
/// let url = rest_config().jobs_url(&query);
/// ```
pub fn rest_config() -> RestConfig {
    let url = option_env!("HIRESYNC_SUPABASE_URL").unwrap_or_default();
    let anon_key = option_env!("HIRESYNC_SUPABASE_ANON_KEY").unwrap_or_default();
    let config = RestConfig::new(url, anon_key);
    if !config.is_configured() {
        log::warn!("HIRESYNC_SUPABASE_URL / HIRESYNC_SUPABASE_ANON_KEY were not set at build time");
    }
    config
}

/// Origin of the running page, used for auth redirect links
pub fn app_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

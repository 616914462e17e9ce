use std::fmt::Debug;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "hiresync_access_token";
const REFRESH_TOKEN_KEY: &str = "hiresync_refresh_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Logs a failed localStorage call; returns whether it succeeded
fn check<E: Debug>(action: &str, key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to {} {}: {:?}", action, key, e);
            false
        }
    }
}

/// Save both session tokens to localStorage
pub fn save_tokens(access_token: &str, refresh_token: &str) {
    let Some(storage) = get_local_storage() else {
        log::warn!("localStorage unavailable, session will not survive a reload");
        return;
    };
    check("store", ACCESS_TOKEN_KEY, storage.set_item(ACCESS_TOKEN_KEY, access_token));
    check("store", REFRESH_TOKEN_KEY, storage.set_item(REFRESH_TOKEN_KEY, refresh_token));
}

pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn get_refresh_token() -> Option<String> {
    get_local_storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        check("remove", ACCESS_TOKEN_KEY, storage.remove_item(ACCESS_TOKEN_KEY));
        check("remove", REFRESH_TOKEN_KEY, storage.remove_item(REFRESH_TOKEN_KEY));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_failure() {
        assert!(check::<&str>("store", ACCESS_TOKEN_KEY, Ok(())));
        assert!(!check("store", ACCESS_TOKEN_KEY, Err("QuotaExceededError")));
    }
}

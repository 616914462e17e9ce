pub mod api;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod handles;
pub mod icons;
pub mod storage;
pub mod toast;

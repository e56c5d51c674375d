pub mod search_page;

/// Target of the settings button. Nothing is registered here yet, so following it
/// renders an empty page.
pub const SETTINGS_PATH: &str = "/home";

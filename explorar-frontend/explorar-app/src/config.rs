use crate::global_state::wallet::{AppInfo, Permission, WalletConfig};

pub const DEFAULT_GRAPHQL_URI: &str = "https://127.0.0.1/graphql";
pub const DEFAULT_APP_NAME: &str = "Explorar";

/// Build time settings. Values are baked in with `option_env!` since the app has no
/// runtime environment of its own once it is running in the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub graphql_uri: String,
    /// Send queries to the GraphQL endpoint instead of only showing the bundled fixture.
    pub live_search: bool,
    pub wallet: WalletConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_uri: DEFAULT_GRAPHQL_URI.to_string(),
            live_search: false,
            wallet: WalletConfig {
                permissions: vec![Permission::AccessAddress, Permission::SignTransaction],
                ensure_permissions: true,
                app_info: AppInfo {
                    name: DEFAULT_APP_NAME.to_string(),
                },
            },
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("EXPLORAR_GRAPHQL_URI"),
            option_env!("EXPLORAR_LIVE_SEARCH"),
            option_env!("EXPLORAR_APP_NAME"),
        )
    }

    fn with_overrides(
        mut self,
        graphql_uri: Option<&str>,
        live_search: Option<&str>,
        app_name: Option<&str>,
    ) -> Self {
        if let Some(uri) = graphql_uri.filter(|uri| !uri.trim().is_empty()) {
            self.graphql_uri = uri.trim().to_string();
        }
        if let Some(flag) = live_search {
            self.live_search = parse_flag(flag);
        }
        if let Some(name) = app_name.filter(|name| !name.trim().is_empty()) {
            self.wallet.app_info.name = name.trim().to_string();
        }
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

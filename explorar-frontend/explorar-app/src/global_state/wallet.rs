use std::str::FromStr;

use leptos::prelude::*;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Capabilities the Arweave wallet can grant to an app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    AccessAddress,
    AccessPublicKey,
    AccessAllAddresses,
    SignTransaction,
    Encrypt,
    Decrypt,
    Signature,
    AccessArweaveConfig,
    Dispatch,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::AccessAddress => "ACCESS_ADDRESS",
            Permission::AccessPublicKey => "ACCESS_PUBLIC_KEY",
            Permission::AccessAllAddresses => "ACCESS_ALL_ADDRESSES",
            Permission::SignTransaction => "SIGN_TRANSACTION",
            Permission::Encrypt => "ENCRYPT",
            Permission::Decrypt => "DECRYPT",
            Permission::Signature => "SIGNATURE",
            Permission::AccessArweaveConfig => "ACCESS_ARWEAVE_CONFIG",
            Permission::Dispatch => "DISPATCH",
        }
    }
}

impl FromStr for Permission {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ACCESS_ADDRESS" => Permission::AccessAddress,
            "ACCESS_PUBLIC_KEY" => Permission::AccessPublicKey,
            "ACCESS_ALL_ADDRESSES" => Permission::AccessAllAddresses,
            "SIGN_TRANSACTION" => Permission::SignTransaction,
            "ENCRYPT" => Permission::Encrypt,
            "DECRYPT" => Permission::Decrypt,
            "SIGNATURE" => Permission::Signature,
            "ACCESS_ARWEAVE_CONFIG" => Permission::AccessArweaveConfig,
            "DISPATCH" => Permission::Dispatch,
            _ => return Err(()),
        })
    }
}

/// Identity shown by the wallet's consent prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConfig {
    pub permissions: Vec<Permission>,
    /// Only treat the session as connected once every permission above is granted.
    pub ensure_permissions: bool,
    pub app_info: AppInfo,
}

impl WalletConfig {
    pub fn missing_permissions(&self, granted: &[Permission]) -> Vec<Permission> {
        self.permissions
            .iter()
            .filter(|p| !granted.contains(p))
            .copied()
            .collect()
    }

    /// Whether an existing grant is enough to resume a session without prompting.
    pub fn grants_session(&self, granted: &[Permission]) -> bool {
        if self.ensure_permissions {
            self.missing_permissions(granted).is_empty()
        } else {
            !granted.is_empty()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletStatus {
    Disconnected,
    Connecting,
    Connected { address: String },
    /// No wallet extension is injected into the page.
    Unavailable,
    Failed(String),
}

impl WalletStatus {
    fn from_result(result: AppResult<String>) -> Self {
        match result {
            Ok(address) => WalletStatus::Connected { address },
            Err(AppError::WalletUnavailable) => WalletStatus::Unavailable,
            Err(e) => WalletStatus::Failed(e.to_string()),
        }
    }
}

/// `abcdef…wxyz` for anything long enough to be worth shortening.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

/// Process wide wallet session.
#[derive(Clone, Copy)]
pub struct Wallet {
    config: StoredValue<WalletConfig>,
    pub status: RwSignal<WalletStatus>,
}

impl Wallet {
    pub fn new(config: WalletConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            status: RwSignal::new(WalletStatus::Disconnected),
        }
    }

    pub fn config(&self) -> WalletConfig {
        self.config.get_value()
    }

    pub fn connect(&self) {
        let status = self.status;
        let config = self.config();
        status.set(WalletStatus::Connecting);
        leptos::task::spawn_local(async move {
            let result = bridge::connect(&config).await;
            match &result {
                Ok(address) => info!("wallet connected {address}"),
                Err(e) => warn!("wallet connect failed {e}"),
            }
            status.set(WalletStatus::from_result(result));
        });
    }

    pub fn disconnect(&self) {
        let status = self.status;
        leptos::task::spawn_local(async move {
            if let Err(e) = bridge::disconnect().await {
                warn!("wallet disconnect failed {e}");
            }
            info!("wallet disconnected");
            status.set(WalletStatus::Disconnected);
        });
    }

    /// Resume a session the user already granted on a previous visit.
    pub fn restore(&self) {
        let status = self.status;
        let config = self.config();
        leptos::task::spawn_local(async move {
            let granted = match bridge::granted_permissions().await {
                Ok(granted) => granted,
                Err(AppError::WalletUnavailable) => {
                    status.set(WalletStatus::Unavailable);
                    return;
                }
                Err(e) => {
                    warn!("unable to read wallet permissions {e}");
                    return;
                }
            };
            if !config.grants_session(&granted) {
                info!(
                    "wallet session not restored, missing {:?}",
                    config.missing_permissions(&granted)
                );
                return;
            }
            status.set(WalletStatus::from_result(bridge::active_address().await));
        });
    }
}

pub fn provide_wallet(config: WalletConfig) -> Wallet {
    let wallet = Wallet::new(config);
    provide_context(wallet);
    #[cfg(feature = "csr")]
    wallet.restore();
    wallet
}

pub fn use_wallet() -> Option<Wallet> {
    use_context::<Wallet>()
}

#[cfg(feature = "csr")]
mod bridge {
    use js_sys::{Array, Function, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{Permission, WalletConfig};
    use crate::error::{AppError, AppResult};

    fn js_error(value: JsValue) -> AppError {
        let message = value
            .as_string()
            .or_else(|| {
                Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        AppError::Wallet(message)
    }

    fn wallet() -> AppResult<JsValue> {
        let window = web_sys::window().ok_or(AppError::WalletUnavailable)?;
        let wallet = Reflect::get(&window, &JsValue::from_str("arweaveWallet"))
            .map_err(|_| AppError::WalletUnavailable)?;
        if wallet.is_undefined() || wallet.is_null() {
            return Err(AppError::WalletUnavailable);
        }
        Ok(wallet)
    }

    async fn call(method: &str, args: &[JsValue]) -> AppResult<JsValue> {
        let wallet = wallet()?;
        let function: Function = Reflect::get(&wallet, &JsValue::from_str(method))
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| AppError::Wallet(format!("arweaveWallet.{method} is not a function")))?;
        let args: Array = args.iter().collect();
        let promise: Promise = function
            .apply(&wallet, &args)
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| AppError::Wallet(format!("arweaveWallet.{method} did not return a promise")))?;
        JsFuture::from(promise).await.map_err(js_error)
    }

    fn to_js<T: serde::Serialize>(value: &T) -> AppResult<JsValue> {
        serde_wasm_bindgen::to_value(value).map_err(|e| AppError::Json(e.to_string()))
    }

    pub(super) async fn connect(config: &WalletConfig) -> AppResult<String> {
        call(
            "connect",
            &[to_js(&config.permissions)?, to_js(&config.app_info)?],
        )
        .await?;
        active_address().await
    }

    pub(super) async fn disconnect() -> AppResult<()> {
        call("disconnect", &[]).await.map(|_| ())
    }

    pub(super) async fn active_address() -> AppResult<String> {
        call("getActiveAddress", &[])
            .await?
            .as_string()
            .ok_or_else(|| AppError::Wallet("active address was not a string".to_string()))
    }

    pub(super) async fn granted_permissions() -> AppResult<Vec<Permission>> {
        let granted = call("getPermissions", &[]).await?;
        let names: Vec<String> =
            serde_wasm_bindgen::from_value(granted).map_err(|e| AppError::Json(e.to_string()))?;
        Ok(names.iter().filter_map(|name| name.parse().ok()).collect())
    }
}

/// Outside the browser there is never an injected wallet.
#[cfg(not(feature = "csr"))]
mod bridge {
    use super::{Permission, WalletConfig};
    use crate::error::{AppError, AppResult};

    pub(super) async fn connect(_config: &WalletConfig) -> AppResult<String> {
        Err(AppError::WalletUnavailable)
    }

    pub(super) async fn disconnect() -> AppResult<()> {
        Err(AppError::WalletUnavailable)
    }

    pub(super) async fn active_address() -> AppResult<String> {
        Err(AppError::WalletUnavailable)
    }

    pub(super) async fn granted_permissions() -> AppResult<Vec<Permission>> {
        Err(AppError::WalletUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn permissions_use_wallet_names() {
        let json = serde_json::to_string(&[Permission::AccessAddress, Permission::SignTransaction])
            .unwrap();
        assert_eq!(json, r#"["ACCESS_ADDRESS","SIGN_TRANSACTION"]"#);
        for permission in [
            Permission::AccessAddress,
            Permission::AccessPublicKey,
            Permission::AccessAllAddresses,
            Permission::SignTransaction,
            Permission::Encrypt,
            Permission::Decrypt,
            Permission::Signature,
            Permission::AccessArweaveConfig,
            Permission::Dispatch,
        ] {
            let serialized = serde_json::to_value(permission).unwrap();
            assert_eq!(serialized, permission.as_str());
            assert_eq!(permission.as_str().parse(), Ok(permission));
        }
        assert_eq!("ACCESS_EVERYTHING".parse::<Permission>(), Err(()));
    }

    #[test]
    fn config_serializes_like_the_wallet_kit() {
        let json = serde_json::to_value(AppConfig::default().wallet).unwrap();
        assert_eq!(json["ensurePermissions"], true);
        assert_eq!(json["appInfo"]["name"], "Explorar");
        assert_eq!(json["permissions"][1], "SIGN_TRANSACTION");
    }

    #[test]
    fn ensure_permissions_requires_every_grant() {
        let config = AppConfig::default().wallet;
        assert!(!config.grants_session(&[]));
        assert!(!config.grants_session(&[Permission::AccessAddress]));
        assert_eq!(
            config.missing_permissions(&[Permission::AccessAddress]),
            [Permission::SignTransaction]
        );
        let granted = [
            Permission::SignTransaction,
            Permission::Dispatch,
            Permission::AccessAddress,
        ];
        assert!(config.missing_permissions(&granted).is_empty());
        assert!(config.grants_session(&granted));
    }

    #[test]
    fn relaxed_config_accepts_any_grant() {
        let mut config = AppConfig::default().wallet;
        config.ensure_permissions = false;
        assert!(!config.grants_session(&[]));
        assert!(config.grants_session(&[Permission::AccessAddress]));
    }

    #[test]
    fn addresses_are_shortened() {
        assert_eq!(
            short_address("Z3n1pNM9rC7dWk4sXqL0aHbYvE2tGfUoJi8mRcPz5yA"),
            "Z3n1pN…z5yA"
        );
        assert_eq!(short_address("abc"), "abc");
        assert_eq!(short_address("123456789012"), "123456789012");
    }

    #[test]
    fn status_from_bridge_results() {
        assert_eq!(
            WalletStatus::from_result(Ok("addr".to_string())),
            WalletStatus::Connected {
                address: "addr".to_string()
            }
        );
        assert_eq!(
            WalletStatus::from_result(Err(AppError::WalletUnavailable)),
            WalletStatus::Unavailable
        );
        assert_eq!(
            WalletStatus::from_result(Err(AppError::Wallet("User cancelled".to_string()))),
            WalletStatus::Failed("Wallet User cancelled".to_string())
        );
    }
}

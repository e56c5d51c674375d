use icondata as i;
use leptos::prelude::*;
use leptos_icons::*;

use crate::global_state::wallet::{short_address, use_wallet, WalletStatus};

#[component]
pub fn ConnectButton() -> impl IntoView {
    let Some(wallet) = use_wallet() else {
        return view! { <button class="btn" disabled=true>"Connect"</button> }.into_any();
    };
    let status = wallet.status;

    view! {
        {move || match status.get() {
            WalletStatus::Connected { address } => {
                let label = short_address(&address);
                view! {
                    <button
                        class="btn btn-wallet"
                        title=format!("{address} (click to disconnect)")
                        on:click=move |_| wallet.disconnect()
                    >
                        <Icon icon=i::BsWallet2 />
                        {label}
                    </button>
                }
                    .into_any()
            }
            WalletStatus::Connecting => {
                view! { <button class="btn" disabled=true>"Connecting…"</button> }.into_any()
            }
            WalletStatus::Unavailable => {
                view! {
                    <button
                        class="btn btn-muted"
                        title="Install an Arweave wallet extension, then try again"
                        on:click=move |_| wallet.connect()
                    >
                        "No wallet found"
                    </button>
                }
                    .into_any()
            }
            WalletStatus::Failed(message) => {
                view! {
                    <button class="btn btn-error" title=message on:click=move |_| wallet.connect()>
                        "Retry connect"
                    </button>
                }
                    .into_any()
            }
            WalletStatus::Disconnected => {
                view! {
                    <button class="btn btn-primary" on:click=move |_| wallet.connect()>
                        "Connect"
                    </button>
                }
                    .into_any()
            }
        }}
    }
    .into_any()
}

use icondata as i;
use leptos::prelude::*;
use leptos_icons::*;

use crate::global_state::theme::{use_theme_settings, ThemeMode};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let Some(theme) = use_theme_settings() else {
        return ().into_any();
    };
    let icon = move || match theme.mode.get() {
        ThemeMode::Dark => i::BsMoon,
        ThemeMode::Light => i::BsSun,
        ThemeMode::System => i::BsCircleHalf,
    };
    view! {
        <button
            class="icon-button"
            aria-label="Toggle color mode"
            title=move || format!("Color mode: {}", theme.mode.get().as_str())
            on:click=move |_| theme.set_mode(theme.mode.get_untracked().cycle())
        >
            <Icon icon=Signal::derive(icon) />
        </button>
    }
    .into_any()
}

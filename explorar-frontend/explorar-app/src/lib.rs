pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod global_state;
pub mod routes;

use crate::api::provide_graphql_client;
use crate::config::AppConfig;
use crate::global_state::{theme::provide_theme_settings, wallet::provide_wallet};
use crate::routes::search_page::SearchPage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = AppConfig::from_build_env();
    provide_wallet(config.wallet.clone());
    let client = provide_graphql_client(&config.graphql_uri);
    log::info!(
        "starting {} against {} (live search: {})",
        config.wallet.app_info.name,
        client.uri(),
        config.live_search
    );
    provide_theme_settings();
    let title = config.wallet.app_info.name.clone();
    provide_context(config);

    view! {
        <Title text=title />
        <Router>
            <Routes fallback=|| ()>
                <Route path=path!("/") view=SearchPage />
            </Routes>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::routes::SETTINGS_PATH;
    use leptos::tachys::view::RenderHtml;
    use leptos_router::location::RequestUrl;

    fn render_at(path: &str) -> String {
        Owner::new().with(|| {
            provide_context(RequestUrl::new(path));
            view! { <App /> }.to_html()
        })
    }

    #[test]
    fn root_renders_the_search_page() {
        let html = render_at("/");
        assert!(html.contains("search-header"));
        assert_eq!(html.matches(r#"class="result-card""#).count(), 5);
        assert!(html.contains(r#"href="/home""#));
    }

    #[test]
    fn settings_path_renders_nothing() {
        let html = render_at(SETTINGS_PATH);
        assert!(!html.contains("search-header"));
        assert!(!html.contains("result-card"));
    }

    #[test]
    fn unknown_paths_render_nothing() {
        for path in ["/search", "/tx/abc123"] {
            let html = render_at(path);
            assert!(!html.contains("search-header"), "{path} rendered the search page");
        }
    }
}

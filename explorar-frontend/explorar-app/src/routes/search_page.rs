use explorar_api_types::{SearchResult, SearchResults};
use icondata as i;
use leptos::{prelude::*, task::spawn_local};
use leptos_icons::*;
use leptos_router::components::A;
use log::{debug, error};

use crate::{
    api::use_graphql_client,
    components::{
        connect_button::ConnectButton,
        result_card::ResultList,
        search_bar::SearchBar,
        theme_toggle::ThemeToggle,
    },
    config::AppConfig,
    error::AppResult,
    routes::SETTINGS_PATH,
};

static FIXTURE: &str = include_str!("../../data/dummy.json");

pub fn parse_fixture(json: &str) -> AppResult<Vec<SearchResult>> {
    Ok(serde_json::from_str::<SearchResults>(json)?.results)
}

/// Results bundled with the app, shown until a live query replaces them.
pub fn load_fixture() -> AppResult<Vec<SearchResult>> {
    parse_fixture(FIXTURE)
}

/// `None` until a live query has answered, meaning "show the fixture".
type LiveResults = Option<Result<Vec<SearchResult>, String>>;

/// The query to send to the endpoint, or `None` when the field is blank.
fn live_query(query: &str) -> Option<String> {
    let query = query.trim();
    (!query.is_empty()).then(|| query.to_string())
}

/// Update to apply once `sent` answers. Responses for anything but the latest
/// query are dropped.
fn settle_response(
    latest: &str,
    sent: &str,
    result: Result<Vec<SearchResult>, String>,
) -> Option<LiveResults> {
    (latest.trim() == sent).then_some(Some(result))
}

/// The cards to show and an inline error, if any. A failed query keeps the fixture.
fn displayed_results(
    fixture: &[SearchResult],
    live: LiveResults,
) -> (Vec<SearchResult>, Option<String>) {
    match live {
        Some(Ok(results)) => (results, None),
        Some(Err(e)) => (fixture.to_vec(), Some(e)),
        None => (fixture.to_vec(), None),
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let (fixture, fixture_error) = match load_fixture() {
        Ok(results) => (results, None),
        Err(e) => {
            error!("unable to load bundled results {e}");
            (vec![], Some(e.to_string()))
        }
    };

    let (query, set_query) = signal(String::new());
    // None means "show the fixture"
    let (live_results, set_live_results) = signal(LiveResults::None);
    let live_search = config.live_search;

    let on_search = Callback::new(move |q: String| {
        debug!("search {q:?}");
        if live_search {
            set_query.set(q);
        }
    });

    if live_search {
        let client = use_graphql_client();
        Effect::new(move |_| {
            let Some(q) = live_query(&query.get()) else {
                set_live_results.set(None);
                return;
            };
            let client = client.clone();
            spawn_local(async move {
                let Some(client) = client else {
                    error!("no GraphQL client provided");
                    return;
                };
                let result = client.search(&q).await.map_err(|e| {
                    error!("Search failed: {}", e);
                    e.to_string()
                });
                if let Some(update) = settle_response(&query.get_untracked(), &q, result) {
                    set_live_results.set(update);
                }
            });
        });
    }

    let results = move || {
        let (results, search_error) = displayed_results(&fixture, live_results.get());
        view! {
            {search_error.map(|e| view! { <p class="search-error" role="alert">{e}</p> })}
            <ResultList results />
        }
    };

    view! {
        <header class="search-header">
            <div class="search-header-bar">
                <SearchBar on_search />
            </div>
            <div class="search-header-actions">
                <ConnectButton />
                <ThemeToggle />
                <A href=SETTINGS_PATH attr:class="icon-button" attr:aria-label="Settings">
                    <Icon icon=i::BsGear />
                </A>
            </div>
        </header>
        <main class="search-results">
            {match fixture_error {
                Some(e) => {
                    view! {
                        <p class="search-error" role="alert">
                            "Unable to load results: " {e}
                        </p>
                    }
                        .into_any()
                }
                None => results.into_any(),
            }}
        </main>
    }
}

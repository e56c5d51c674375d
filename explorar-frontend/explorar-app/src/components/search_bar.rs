use icondata as i;
use leptos::{ev, prelude::*};
use leptos_icons::*;

/// State behind [`SearchBar`]. Every transition hands back the query that should be
/// emitted, if any, so the component only has to forward it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchInput {
    query: String,
}

impl SearchInput {
    pub fn value(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn input(&mut self, value: String) -> String {
        self.query = value;
        self.query.clone()
    }

    /// Enter re-sends the current value, other keys are ignored.
    pub fn key_down(&self, key: &str) -> Option<String> {
        (key == "Enter").then(|| self.query.clone())
    }

    /// Clearing is reported like any other change so listeners can reset.
    pub fn clear(&mut self) -> String {
        self.query.clear();
        String::new()
    }
}

#[component]
pub fn SearchBar(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let input = RwSignal::new(SearchInput::default());

    let on_input = move |ev| {
        if let Some(query) = input.try_update(|i| i.input(event_target_value(&ev))) {
            on_search.run(query);
        }
    };
    let keydown = move |ev: ev::KeyboardEvent| {
        if let Some(query) = input.with_untracked(|i| i.key_down(&ev.key())) {
            on_search.run(query);
        }
    };
    let clear = move |_| {
        if let Some(query) = input.try_update(|i| i.clear()) {
            on_search.run(query);
        }
    };

    view! {
        <div class="search-bar">
            <span class="search-bar-icon">
                <Icon icon=i::AiSearchOutlined />
            </span>
            <input
                class="search-input"
                type="text"
                placeholder="Search"
                prop:value=move || input.with(|i| i.value().to_string())
                on:input=on_input
                on:keydown=keydown
            />
            <Show when=move || !input.with(|i| i.is_empty())>
                <button class="search-clear" aria-label="Clear search" on:click=clear>
                    <Icon icon=i::BsX />
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displayed_value_tracks_last_input() {
        let mut input = SearchInput::default();
        let mut emitted = vec![];
        for value in ["r", "re", "red", "re", "rea"] {
            emitted.push(input.input(value.to_string()));
            assert_eq!(input.value(), value);
        }
        assert_eq!(emitted, ["r", "re", "red", "re", "rea"]);
    }

    #[test]
    fn enter_resends_current_value() {
        let mut input = SearchInput::default();
        input.input("arweave".to_string());
        assert_eq!(input.key_down("Enter"), Some("arweave".to_string()));
        assert_eq!(input.key_down("a"), None);
        assert_eq!(input.key_down("Escape"), None);
        assert_eq!(input.value(), "arweave");
    }

    #[test]
    fn enter_on_empty_field_sends_empty_query() {
        let input = SearchInput::default();
        assert_eq!(input.key_down("Enter"), Some(String::new()));
    }

    #[test]
    fn clear_resets_and_reports_empty_query() {
        let mut input = SearchInput::default();
        input.input("nft".to_string());
        assert!(!input.is_empty());
        assert_eq!(input.clear(), "");
        assert!(input.is_empty());
        assert_eq!(input.value(), "");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_empty_input_without_clear_button() {
        use leptos::tachys::view::RenderHtml;

        let html = Owner::new().with(|| {
            view! { <SearchBar on_search=|_: String| {} /> }.to_html()
        });
        assert!(html.contains(r#"placeholder="Search""#));
        assert!(!html.contains("search-clear"));
    }
}

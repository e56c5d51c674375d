use explorar_api_types::SearchResult;
use icondata as i;
use leptos::prelude::*;
use leptos_icons::*;

pub const EXPLORER_TX_URL: &str = "https://viewblock.io/arweave/tx/";

/// Viewblock page for a transaction. The txid is not validated.
pub fn explorer_link(txid: &str) -> String {
    format!("{EXPLORER_TX_URL}{txid}")
}

#[component]
pub fn ResultCard(result: SearchResult) -> impl IntoView {
    let href = explorer_link(&result.txid);
    let result_type = result.has_known_type().then_some(result.result_type);
    let markers = result.markers;

    view! {
        <article class="result-card">
            <header class="result-card-header">
                <h2 class="result-title">{result.title}</h2>
                {result_type.map(|t| view! { <span class="result-type">{t}</span> })}
            </header>
            <p class="result-description">{result.description}</p>
            {(!markers.is_empty())
                .then(|| {
                    view! {
                        <div class="result-markers">
                            {markers
                                .into_iter()
                                .map(|marker| view! { <span class="result-marker">{marker}</span> })
                                .collect_view()}
                        </div>
                    }
                })}
            <a class="result-link" href=href target="_blank" rel="noopener noreferrer">
                "Viewblock"
                <Icon icon=i::BsBoxArrowUpRight />
            </a>
        </article>
    }
}

/// One card per result, in order.
#[component]
pub fn ResultList(results: Vec<SearchResult>) -> impl IntoView {
    view! {
        <div class="result-list">
            {results
                .into_iter()
                .map(|result| view! { <ResultCard result /> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_embeds_txid() {
        assert_eq!(
            explorer_link("abc123"),
            "https://viewblock.io/arweave/tx/abc123"
        );
        // malformed ids are passed through as is
        assert_eq!(explorer_link(""), "https://viewblock.io/arweave/tx/");
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::super::*;
        use explorar_api_types::SearchResults;
        use leptos::tachys::view::RenderHtml;

        fn results(json: &str) -> Vec<SearchResult> {
            serde_json::from_str::<SearchResults>(json).unwrap().results
        }

        #[test]
        fn single_card() {
            let results =
                results(r#"{"results":[{"title":"A","description":"d1","txid":"abc123"}]}"#);
            let html = Owner::new().with(|| view! { <ResultList results /> }.to_html());
            assert_eq!(html.matches(r#"class="result-card""#).count(), 1);
            assert!(html.contains("https://viewblock.io/arweave/tx/abc123"));
            assert!(html.contains(">A<"));
            assert!(html.contains(">d1<"));
            // unknown type and empty markers render nothing extra
            assert!(!html.contains("result-type"));
            assert!(!html.contains("result-markers"));
        }

        #[test]
        fn one_card_per_result_in_order() {
            let results = results(
                r#"{"results":[
                    {"title":"First","description":"one","txid":"tx-1"},
                    {"title":"Second","description":"two","txid":"tx-2"},
                    {"title":"Third","description":"three","txid":"tx-3"}
                ]}"#,
            );
            let html = Owner::new().with(|| view! { <ResultList results /> }.to_html());
            assert_eq!(html.matches(r#"class="result-card""#).count(), 3);
            let first = html.find("tx/tx-1").unwrap();
            let second = html.find("tx/tx-2").unwrap();
            let third = html.find("tx/tx-3").unwrap();
            assert!(first < second && second < third);
        }

        #[test]
        fn empty_list_has_no_cards() {
            let html = Owner::new().with(|| view! { <ResultList results=vec![] /> }.to_html());
            assert!(!html.contains("result-card"));
        }

        #[test]
        fn type_and_markers() {
            let result: SearchResult = serde_json::from_str(
                r#"{"txid":"x","title":"Pic","type":"image/png","markers":["NFT","Atomic"]}"#,
            )
            .unwrap();
            let html = Owner::new().with(|| view! { <ResultCard result /> }.to_html());
            assert!(html.contains("image/png"));
            assert_eq!(html.matches(r#"class="result-marker""#).count(), 2);
            assert!(html.contains("Description unavailable"));
        }
    }
}

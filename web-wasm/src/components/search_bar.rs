//! 検索欄コンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBar<F>(on_query: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="search-bar">
            <input
                type="search"
                id="searchInput"
                placeholder="Search word, reading or translation..."
                on:input=move |ev| on_query(event_target_value(&ev))
            />
        </div>
    }
}

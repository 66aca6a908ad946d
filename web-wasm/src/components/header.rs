//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header<F>(on_logout: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <h1>"Japanese Vocabulary"</h1>
            <button
                class="btn btn-tertiary btn-small"
                on:click=move |_| on_logout(())
            >
                "Log out"
            </button>
        </header>
    }
}

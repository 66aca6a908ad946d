//! カード一覧コンポーネント

use leptos::prelude::*;
use vocab_dashboard_common::Card;

#[component]
pub fn CardGrid<F>(cards: ReadSignal<Vec<Card>>, on_open: F) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    view! {
        <Show
            when=move || !cards.get().is_empty()
            fallback=|| view! { <p class="text-muted">"No matching words."</p> }
        >
            <div class="cards">
                <For
                    each=move || cards.get()
                    key=|card: &Card| card.index
                    children={
                        let on_open = on_open.clone();
                        move |card: Card| {
                            let on_open = on_open.clone();
                            let index = card.index;
                            view! {
                                <div class="card" on:click=move |_| on_open(index)>
                                    <div class="card-title">{card.word}</div>
                                    <div class="card-subtitle">{card.translation}</div>
                                    <div class="card-category">{card.category}</div>
                                </div>
                            }
                        }
                    }
                />
            </div>
        </Show>
    }
}

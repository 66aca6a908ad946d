//! カテゴリ選択コンポーネント

use leptos::prelude::*;

#[component]
pub fn CategoryBar<F>(
    categories: Vec<String>,
    active: ReadSignal<String>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="category-bar">
            {categories
                .into_iter()
                .map(|category| {
                    let on_select = on_select.clone();
                    let is_active = {
                        let category = category.clone();
                        move || active.get() == category
                    };
                    let label = category.clone();
                    let data_category = category.clone();
                    view! {
                        <button
                            class="category-btn"
                            class:active=is_active
                            data-category=data_category
                            on:click=move |_| on_select(category.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

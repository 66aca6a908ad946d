//! 詳細モーダルコンポーネント
//!
//! 外側（背景）のクリックで閉じる。内側のクリックは背景へ伝えない。

use leptos::prelude::*;
use vocab_dashboard_common::DetailView;

#[component]
pub fn DetailsModal<FP, FC, FO>(
    details: ReadSignal<Option<DetailView>>,
    on_play: FP,
    on_close: FC,
    on_outside: FO,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FO: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_open = move || details.with(Option::is_some);

    view! {
        <div
            id="detailsModal"
            class="modal"
            style:display=move || if is_open() { "block" } else { "none" }
            aria-hidden=move || if is_open() { "false" } else { "true" }
            on:click=move |_| on_outside(())
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button
                    id="closeModal"
                    class="close"
                    on:click=move |_| on_close(())
                >
                    "×"
                </button>
                {move || {
                    let on_play = on_play.clone();
                    details.get().map(|d| {
                        view! {
                            <h2 id="detailWord">{d.word}</h2>
                            <p id="detailReading" class="reading">{d.reading}</p>
                            <p id="detailTranslation">{d.translation}</p>
                            <p id="detailPart" class="part">{d.part}</p>
                            <h3>"Collocations"</h3>
                            <ul id="detailCollocations">
                                {d.collocations
                                    .into_iter()
                                    .map(|c| view! { <li>{c}</li> })
                                    .collect_view()}
                            </ul>
                            <h3>"Example"</h3>
                            <p id="detailExample">{d.example}</p>
                            <button
                                id="playAudio"
                                class="btn btn-primary"
                                on:click=move |_| on_play(())
                            >
                                "🔊 Play"
                            </button>
                        }
                    })
                }}
            </div>
        </div>
    }
}

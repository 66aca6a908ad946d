//! アクセスフォームコンポーネント
//!
//! ユーザー名と購入コードを入力してダッシュボードへ入る。

use leptos::prelude::*;
use vocab_dashboard_common::AccessForm;

#[component]
pub fn LoginForm<F>(error: ReadSignal<Option<String>>, on_login: F) -> impl IntoView
where
    F: Fn(AccessForm) + 'static + Clone + Send + Sync,
{
    let (username, set_username) = signal(String::new());
    let (code, set_code) = signal(String::new());

    view! {
        <div class="login-panel">
            <h2>"Welcome"</h2>
            <div class="form-group">
                <label for="username">"Username"</label>
                <input
                    type="text"
                    id="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="code">"Purchase code"</label>
                <input
                    type="text"
                    id="code"
                    placeholder="Code from your purchase receipt"
                    prop:value=move || code.get()
                    on:input=move |ev| set_code.set(event_target_value(&ev))
                />
            </div>
            <button
                class="btn btn-primary"
                on:click=move |_| on_login(AccessForm::new(&username.get(), &code.get()))
            >
                "Enter"
            </button>
            {move || error.get().map(|message| view! { <p class="flash danger">{message}</p> })}
        </div>
    }
}

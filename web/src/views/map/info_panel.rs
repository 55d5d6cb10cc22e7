use leptos::prelude::*;

#[component]
pub fn InfoPanel(region: String, text: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="info-panel">
            <button
                class="info-panel__close"
                aria-label=format!("Close {} details", region)
                on:click=move |_| on_close.run(())
            >
                "×"
            </button>
            <pre class="info-panel__stats">{text}</pre>
        </div>
    }
}

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFound() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"There is no map at this address."</p>
            <button
                class="not-found__home"
                on:click=move |_| navigate("/", Default::default())
            >
                "Back to the map"
            </button>
        </div>
    }
}

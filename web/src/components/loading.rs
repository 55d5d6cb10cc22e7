use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn LoadingView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner size=SpinnerSize::Medium />
            <p class="loading-message">
                {message.unwrap_or_else(|| "Loading map...".to_string())}
            </p>
        </div>
    }
}

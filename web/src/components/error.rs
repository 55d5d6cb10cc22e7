use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(#[prop(into)] title: String, message: Option<String>) -> impl IntoView {
    view! {
        <div class="error-banner">
            <MessageBar intent=MessageBarIntent::Error>
                <strong>{title}</strong>
                " "
                {message.unwrap_or_else(|| "Please try again later.".to_string())}
            </MessageBar>
        </div>
    }
}

use leptos::prelude::*;
use leptos_router::components::A;

/// Top bar shown by profiles with chrome. "Login" leads nowhere.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Malaria Map"
                    </A>
                </div>

                <div class="navbar__links">
                    <a href="#" class="navbar__link navbar__link--cta" aria-disabled="true">
                        "Login"
                    </a>
                </div>
            </div>
        </nav>
    }
}

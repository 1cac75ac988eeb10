use crate::icons::{ICON_VIDEO, Icon};
use leptos::prelude::*;
use reelforge_core::session::EntryPoint;

#[component]
pub fn Nav(brand: String, on_start: Callback<EntryPoint>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href="#" class="nav-brand">
                    <BrandMark />
                    <span class="nav-title">{brand}</span>
                </a>
                <button
                    class="nav-menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    <a href="#features" class="nav-link">"Features"</a>
                    <a href="#showcase" class="nav-link">"Showcase"</a>
                    <a href="#pricing" class="nav-link">"Pricing"</a>
                    <button class="btn btn-outline">"Sign In"</button>
                    <button class="btn btn-gradient" on:click=move |_| on_start.run(EntryPoint::Nav)>
                        "Start Creating"
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Gradient square with the camera glyph, shared by nav and footer.
#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <div class="brand-mark">
            <Icon path=ICON_VIDEO class="brand-mark-icon" />
        </div>
    }
}

use crate::icons::{ICON_CHEVRON_RIGHT, Icon};
use leptos::prelude::*;
use reelforge_core::session::EntryPoint;

#[component]
pub fn CallToAction(on_start: Callback<EntryPoint>) -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container cta-inner">
                <h2 class="cta-title">"Ready to Replace Your Creative Agency?"</h2>
                <p class="cta-description">"Join thousands of brands creating professional videos with AI"</p>
                <button class="btn btn-light btn-lg" on:click=move |_| on_start.run(EntryPoint::CallToAction)>
                    "Start Your First Project"
                    <Icon path=ICON_CHEVRON_RIGHT />
                </button>
            </div>
        </section>
    }
}

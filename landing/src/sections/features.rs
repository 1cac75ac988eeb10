use crate::icons::{Icon, feature_icon};
use leptos::prelude::*;
use reelforge_core::catalog::FEATURES;
use reelforge_core::types::FeatureHighlight;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section section-dim">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Complete AI Production Pipeline"</h2>
                    <p class="section-description">
                        "From brief to broadcast-ready video in one seamless workflow"
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: FeatureHighlight) -> impl IntoView {
    view! {
        <article class="card feature-card">
            <div class=format!("feature-icon {}", feature.accent)>
                <Icon path=feature_icon(feature.icon) size="40" />
            </div>
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-description">{feature.description}</p>
        </article>
    }
}

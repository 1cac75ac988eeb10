use crate::icons::{ICON_CHEVRON_RIGHT, ICON_PLAY, ICON_SPARKLES, Icon};
use leptos::prelude::*;
use reelforge_core::catalog::HERO_STATS;
use reelforge_core::session::EntryPoint;

#[component]
pub fn Hero(on_start: Callback<EntryPoint>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-content">
                <div class="badge badge-purple">
                    <Icon path=ICON_SPARKLES size="16" />
                    "AI Video Production Studio"
                </div>
                <h1 class="hero-title">
                    "Instant Cinematic Video"
                    <span class="hero-title-accent">"No Camera, No Crew"</span>
                </h1>
                <p class="hero-description">
                    "Transform your ideas into professional marketing videos in minutes. "
                    "Our AI handles script writing, visual generation, voiceovers, and editing, "
                    "delivering studio-quality results at scale."
                </p>
                <div class="hero-actions">
                    <button class="btn btn-gradient btn-lg" on:click=move |_| on_start.run(EntryPoint::Hero)>
                        <Icon path=ICON_PLAY />
                        "Create Your First Video"
                    </button>
                    <button class="btn btn-outline btn-lg">
                        "Watch Demo"
                        <Icon path=ICON_CHEVRON_RIGHT />
                    </button>
                </div>
                <div class="hero-stats">
                    {HERO_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="hero-stat">
                                    <div class="hero-stat-value">{stat.value}</div>
                                    <div class="hero-stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

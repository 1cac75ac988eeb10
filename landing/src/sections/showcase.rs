use crate::icons::{ICON_GLOBE, ICON_PLAY, ICON_TARGET, Icon};
use leptos::prelude::*;
use reelforge_core::catalog::SHOWCASE_VIDEOS;
use reelforge_core::types::ShowcaseVideo;

#[component]
pub fn VideoShowcase(brand: String) -> impl IntoView {
    let description = format!("See how brands across industries are creating stunning videos with {}", brand);

    view! {
        <section id="showcase" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"AI-Generated Video Showcase"</h2>
                    <p class="section-description">{description}</p>
                </div>
                <div class="showcase-grid">
                    {SHOWCASE_VIDEOS
                        .iter()
                        .map(|video| view! { <ShowcaseCard video=*video /> })
                        .collect_view()}
                </div>
                <div class="section-footer">
                    <button class="btn btn-gradient btn-lg">"View All Case Studies"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ShowcaseCard(video: ShowcaseVideo) -> impl IntoView {
    view! {
        <article class="card showcase-card" data-video-id=video.id.to_string()>
            <div class=format!("showcase-thumb {}", video.thumbnail.css_class())>
                <button class="showcase-play" aria-label="Play video">
                    <Icon path=ICON_PLAY size="24" />
                </button>
                <span class="badge badge-dark showcase-platform">{video.platform}</span>
                <span class="showcase-duration">{video.duration}</span>
            </div>
            <div class="showcase-body">
                <div class="showcase-heading">
                    <div>
                        <h3 class="card-title">{video.title}</h3>
                        <p class="card-description">{video.description}</p>
                    </div>
                    <span class="badge badge-outline">{video.industry}</span>
                </div>
                <div class="showcase-metrics">
                    <span class="metric">
                        <Icon path=ICON_TARGET size="16" />
                        {format!("{} views", video.metrics.views)}
                    </span>
                    <span class="metric">
                        <Icon path=ICON_GLOBE size="16" />
                        {format!("{} engagement", video.metrics.engagement)}
                    </span>
                    <button class="btn btn-ghost btn-sm">"View Details"</button>
                </div>
            </div>
        </article>
    }
}

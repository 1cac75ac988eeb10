use super::WizardVm;
use crate::icons::{ICON_CLOCK, ICON_WAND, Icon};
use leptos::prelude::*;
use reelforge_core::wizard::GenerationPreview;

#[component]
pub fn GenerationStep(vm: WizardVm) -> impl IntoView {
    let preview = move || vm.with(|w| w.generation_preview());

    view! {
        <section class="card creator-card">
            <header class="creator-header">
                <h2 class="card-title">
                    <Icon path=ICON_WAND class="accent-green" />
                    "AI Generation in Progress"
                </h2>
                <p class="card-description">"Creating your professional video with AI"</p>
            </header>
            {move || preview().map(|preview| view! { <PreviewBody preview=preview /> })}
        </section>
    }
}

#[component]
fn PreviewBody(preview: GenerationPreview) -> impl IntoView {
    view! {
        <div class="creator-body">
            <ul class="stages">
                {preview
                    .stages
                    .iter()
                    .map(|stage| {
                        view! {
                            <li class=format!("stage {}", stage.state.css_class())>
                                <span class="stage-dot"></span>
                                <span class="stage-label">{stage.label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="script-preview">
                <h4>"Generated Script Preview:"</h4>
                <p>{format!("\"{}\"", preview.script)}</p>
            </div>

            <p class="estimate">
                <Icon path=ICON_CLOCK size="16" />
                {format!("Estimated completion: {}", preview.estimated_completion)}
            </p>
        </div>
    }
}

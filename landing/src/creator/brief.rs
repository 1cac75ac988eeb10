use super::WizardVm;
use crate::icons::{ICON_SPARKLES, ICON_TARGET, Icon};
use leptos::prelude::*;
use reelforge_core::wizard::FieldEdit;

#[component]
pub fn BriefStep(vm: WizardVm) -> impl IntoView {
    let suggestions = move || vm.with(|w| w.suggestions().to_vec());

    view! {
        <section class="card creator-card">
            <header class="creator-header">
                <h2 class="card-title">
                    <Icon path=ICON_TARGET class="accent-purple" />
                    "Project Brief"
                </h2>
                <p class="card-description">
                    "Tell us about your video project and we'll create the perfect content strategy"
                </p>
            </header>
            <div class="creator-body">
                <div class="field">
                    <label for="projectName">"Project Name"</label>
                    <input
                        id="projectName"
                        type="text"
                        placeholder="e.g., Product Launch Campaign"
                        prop:value=move || vm.with(|w| w.draft().project_name.clone())
                        on:input=move |ev| vm.set_field(FieldEdit::ProjectName(event_target_value(&ev)))
                    />
                </div>

                <div class="field">
                    <label for="description">"Product/Service Description"</label>
                    <textarea
                        id="description"
                        class="textarea-tall"
                        placeholder="Describe what you're promoting, key features, and unique selling points..."
                        prop:value=move || vm.with(|w| w.draft().description.clone())
                        on:input=move |ev| vm.set_field(FieldEdit::Description(event_target_value(&ev)))
                    ></textarea>
                    <Show when=move || !suggestions().is_empty()>
                        <ul class="suggestions">
                            {move || {
                                suggestions()
                                    .into_iter()
                                    .map(|suggestion| {
                                        view! {
                                            <li class="badge badge-outline">
                                                <Icon path=ICON_SPARKLES size="12" />
                                                {suggestion}
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>

                <div class="field">
                    <label for="targetAudience">"Target Audience"</label>
                    <input
                        id="targetAudience"
                        type="text"
                        placeholder="e.g., Small business owners, 25-45, tech-savvy"
                        prop:value=move || vm.with(|w| w.draft().target_audience.clone())
                        on:input=move |ev| vm.set_field(FieldEdit::TargetAudience(event_target_value(&ev)))
                    />
                </div>

                <div class="field">
                    <label for="goals">"Video Goals"</label>
                    <textarea
                        id="goals"
                        placeholder="What action do you want viewers to take? (e.g., sign up, purchase, learn more)"
                        prop:value=move || vm.with(|w| w.draft().goals.clone())
                        on:input=move |ev| vm.set_field(FieldEdit::Goals(event_target_value(&ev)))
                    ></textarea>
                </div>

                <button
                    class="btn btn-gradient btn-block"
                    disabled=move || !vm.with(|w| w.can_advance_to_style())
                    on:click=move |_| vm.advance_to_style()
                >
                    "Continue to Style & Format"
                </button>
            </div>
        </section>
    }
}

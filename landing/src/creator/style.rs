use super::WizardVm;
use crate::icons::{ICON_PALETTE, Icon};
use leptos::prelude::*;
use reelforge_core::wizard::{FieldEdit, Platform, SelectOption, VideoDuration, VideoTone};

#[component]
pub fn StyleStep(vm: WizardVm) -> impl IntoView {
    view! {
        <section class="card creator-card">
            <header class="creator-header">
                <h2 class="card-title">
                    <Icon path=ICON_PALETTE class="accent-blue" />
                    "Style & Format"
                </h2>
                <p class="card-description">"Choose the perfect style and format for your video"</p>
            </header>
            <div class="creator-body">
                <div class="field-row">
                    <OptionSelect
                        id="duration"
                        label="Video Duration"
                        placeholder="Select duration"
                        selected=Signal::derive(move || vm.with(|w| w.draft().duration))
                        on_pick=Callback::new(move |d: VideoDuration| vm.set_field(FieldEdit::Duration(d)))
                    />
                    <OptionSelect
                        id="platform"
                        label="Primary Platform"
                        placeholder="Select platform"
                        selected=Signal::derive(move || vm.with(|w| w.draft().platform))
                        on_pick=Callback::new(move |p: Platform| vm.set_field(FieldEdit::Platform(p)))
                    />
                </div>
                <OptionSelect
                    id="tone"
                    label="Video Tone"
                    placeholder="Select tone"
                    selected=Signal::derive(move || vm.with(|w| w.draft().tone))
                    on_pick=Callback::new(move |t: VideoTone| vm.set_field(FieldEdit::Tone(t)))
                />

                <div class="button-row">
                    <button class="btn btn-outline" on:click=move |_| vm.return_to_brief()>
                        "Back"
                    </button>
                    <button
                        class="btn btn-gradient btn-grow"
                        disabled=move || !vm.with(|w| w.can_advance_to_generation())
                        on:click=move |_| vm.advance_to_generation()
                    >
                        "Generate Video"
                    </button>
                </div>
            </div>
        </section>
    }
}

/// `<select>` over every choice of `T`, with a disabled placeholder until
/// something is picked.
#[component]
fn OptionSelect<T>(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    selected: Signal<Option<T>>,
    on_pick: Callback<T>,
) -> impl IntoView
where
    T: SelectOption + Send + Sync,
{
    let on_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match T::from_value(&raw) {
            Ok(option) => on_pick.run(option),
            Err(e) => tracing::warn!(error = %e, "[reelforge][wizard] ignored select value"),
        }
    };

    view! {
        <div class="field">
            <label for=id>{label}</label>
            <select id=id on:change=on_change>
                <option value="" disabled=true prop:selected=move || selected.get().is_none()>
                    {placeholder}
                </option>
                {T::ALL
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option.value() prop:selected=move || is_selected(selected.get(), option)>
                                {option.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

fn is_selected<T: SelectOption>(selected: Option<T>, option: T) -> bool {
    selected == Some(option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_selected_initially() {
        assert!(!is_selected(None, VideoTone::Friendly));
    }

    #[test]
    fn only_matching_option_is_selected() {
        let picked = Some(Platform::LinkedIn);
        assert!(is_selected(picked, Platform::LinkedIn));
        assert!(!is_selected(picked, Platform::YouTube));
        assert!(!is_selected(Some(VideoDuration::OneMinute), VideoDuration::TwoToThreeMinutes));
    }
}

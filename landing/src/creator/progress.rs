use crate::icons::{ICON_PALETTE, ICON_TARGET, ICON_WAND, Icon};
use leptos::prelude::*;
use reelforge_core::wizard::{StepIndicator, WizardStep};

#[component]
pub fn StepProgress(step: Memo<WizardStep>) -> impl IntoView {
    view! {
        <ol class="step-progress">
            {move || {
                step.get()
                    .indicators()
                    .into_iter()
                    .map(|indicator| view! { <StepBadge indicator=indicator /> })
                    .collect_view()
            }}
        </ol>
    }
}

#[component]
fn StepBadge(indicator: StepIndicator) -> impl IntoView {
    view! {
        <li class="step">
            <div class=badge_class(indicator.reached)>
                <Icon path=step_icon(indicator.step) />
            </div>
            <span class=label_class(indicator.reached)>{indicator.step.title()}</span>
            {indicator.has_connector.then(|| view! { <div class=connector_class(indicator.connector_filled)></div> })}
        </li>
    }
}

fn step_icon(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Brief => ICON_TARGET,
        WizardStep::StyleFormat => ICON_PALETTE,
        WizardStep::Generation => ICON_WAND,
    }
}

fn badge_class(reached: bool) -> &'static str {
    if reached { "step-badge reached" } else { "step-badge" }
}

fn label_class(reached: bool) -> &'static str {
    if reached { "step-label reached" } else { "step-label" }
}

fn connector_class(filled: bool) -> &'static str {
    if filled { "step-connector filled" } else { "step-connector" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_step_classes() {
        let [brief, style, generation] = WizardStep::StyleFormat.indicators();
        assert_eq!(badge_class(brief.reached), "step-badge reached");
        assert_eq!(connector_class(brief.connector_filled), "step-connector filled");
        assert_eq!(connector_class(style.connector_filled), "step-connector");
        assert_eq!(label_class(generation.reached), "step-label");
    }

    #[test]
    fn each_step_has_its_own_icon() {
        let icons: Vec<_> = WizardStep::ALL.iter().map(|s| step_icon(*s)).collect();
        assert_eq!(icons, vec![ICON_TARGET, ICON_PALETTE, ICON_WAND]);
    }
}

// Project creation wizard
// Developed with 🎬 by The ReelForge Team (c)2025

mod brief;
mod generation;
mod progress;
mod style;

use crate::icons::{ICON_ARROW_LEFT, Icon};
use brief::BriefStep;
use generation::GenerationStep;
use leptos::prelude::*;
use progress::StepProgress;
use reelforge_core::session::SiteSession;
use reelforge_core::wizard::{FieldEdit, ProjectWizard, WizardStep};
use style::StyleStep;

/// Reactive handle on the wizard held inside the session signal.
///
/// Reads fall back to `Default` once the wizard has been closed, which can
/// happen while the last closures of an unmounting view still run.
#[derive(Clone, Copy)]
pub struct WizardVm {
    session: RwSignal<SiteSession>,
}

impl WizardVm {
    pub fn new(session: RwSignal<SiteSession>) -> Self {
        Self { session }
    }

    pub fn with<T: Default>(&self, f: impl FnOnce(&ProjectWizard) -> T) -> T {
        self.session.with(|s| s.wizard().map(f).unwrap_or_default())
    }

    fn update(&self, f: impl FnOnce(&mut ProjectWizard)) {
        self.session.update(|s| {
            if let Some(wizard) = s.wizard_mut() {
                f(wizard);
            }
        });
    }

    pub fn step(&self) -> WizardStep {
        self.with(|w| w.step())
    }

    pub fn set_field(&self, edit: FieldEdit) {
        self.update(|w| w.set_field(edit));
    }

    pub fn advance_to_style(&self) {
        self.update(|w| {
            w.advance_to_style();
        });
    }

    pub fn return_to_brief(&self) {
        self.update(|w| {
            w.return_to_brief();
        });
    }

    pub fn advance_to_generation(&self) {
        self.update(|w| {
            w.advance_to_generation();
        });
    }
}

#[component]
pub fn ProjectCreator(
    session: RwSignal<SiteSession>,
    /// Invoked by the Back button; the host unmounts the wizard.
    on_exit: Callback<()>,
) -> impl IntoView {
    let vm = WizardVm::new(session);
    // Memoised so keystrokes do not rebuild the active step's form.
    let step = Memo::new(move |_| vm.step());

    view! {
        <div class="page">
            <nav class="nav">
                <div class="container nav-inner nav-inner-start">
                    <button class="btn btn-ghost" on:click=move |_| on_exit.run(())>
                        <Icon path=ICON_ARROW_LEFT size="16" />
                        "Back"
                    </button>
                    <span class="nav-title">"Create New Video Project"</span>
                </div>
            </nav>
            <div class="container creator">
                <StepProgress step=step />
                {move || match step.get() {
                    WizardStep::Brief => view! { <BriefStep vm=vm /> }.into_any(),
                    WizardStep::StyleFormat => view! { <StyleStep vm=vm /> }.into_any(),
                    WizardStep::Generation => view! { <GenerationStep vm=vm /> }.into_any(),
                }}
            </div>
        </div>
    }
}

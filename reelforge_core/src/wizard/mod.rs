//! Project creation wizard.
//!
//! Three linear steps: the brief, style and format, then a cosmetic
//! generation screen. Forward moves are gated on the draft; a gated move is
//! a silent no-op because the UI disables the button instead of reporting
//! an error.
//!
//! ```text
//!   Brief ──advance_to_style──▶ StyleFormat ──advance_to_generation──▶ Generation
//!     ▲                              │
//!     └────────return_to_brief───────┘
//! ```
//!
//! Developed with 🎬 by The ReelForge Team (c)2025

mod draft;
mod generation;
mod options;
mod step;
mod suggestions;

pub use draft::{Field, FieldEdit, ProjectDraft};
pub use generation::{
    ESTIMATED_COMPLETION, GENERATION_STAGES, GenerationPreview, GenerationStage, StageState,
    leading_words, script_preview,
};
pub use options::{Platform, SelectOption, VideoDuration, VideoTone};
pub use step::{StepIndicator, WizardStep};
pub use suggestions::{ADVISORY_SUGGESTIONS, SuggestionList, StalePolicy};

use crate::config::WizardConfig;

/// One live wizard: draft, current step and suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectWizard {
    draft: ProjectDraft,
    step: WizardStep,
    suggestions: SuggestionList,
    preview_word_count: usize,
}

impl Default for ProjectWizard {
    fn default() -> Self {
        Self::new(&WizardConfig::default())
    }
}

impl ProjectWizard {
    /// Fresh wizard: empty draft on the brief step.
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            draft: ProjectDraft::default(),
            step: WizardStep::Brief,
            suggestions: SuggestionList::new(
                config.suggestion_threshold,
                StalePolicy::from(config.clear_stale_suggestions),
            ),
            preview_word_count: config.preview_word_count,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn suggestions(&self) -> &[String] {
        self.suggestions.items()
    }

    /// Apply one field edit. Description edits also refresh suggestions.
    pub fn set_field(&mut self, edit: FieldEdit) {
        let field = edit.field();
        self.draft.apply(edit);

        if field == Field::Description && self.suggestions.refresh(&self.draft.description) {
            tracing::trace!(
                field = field.as_str(),
                count = self.suggestions.len(),
                "[reelforge][wizard] suggestions refreshed"
            );
        }
    }

    pub fn can_advance_to_style(&self) -> bool {
        self.step == WizardStep::Brief && self.draft.brief_complete()
    }

    pub fn can_advance_to_generation(&self) -> bool {
        self.step == WizardStep::StyleFormat && self.draft.format_complete()
    }

    /// Brief → Style & Format. Returns `false` when the brief is incomplete
    /// or the wizard is on another step.
    pub fn advance_to_style(&mut self) -> bool {
        if !self.can_advance_to_style() {
            tracing::debug!(step = self.step.number(), "[reelforge][wizard] style step gated");
            return false;
        }
        self.go_to(WizardStep::StyleFormat);
        true
    }

    /// Style & Format → Brief. Only valid from the middle step.
    pub fn return_to_brief(&mut self) -> bool {
        if self.step != WizardStep::StyleFormat {
            return false;
        }
        self.go_to(WizardStep::Brief);
        true
    }

    /// Style & Format → Generation. Returns `false` until duration,
    /// platform and tone are all chosen.
    pub fn advance_to_generation(&mut self) -> bool {
        if !self.can_advance_to_generation() {
            tracing::debug!(
                step = self.step.number(),
                "[reelforge][wizard] generation step gated"
            );
            return false;
        }
        self.go_to(WizardStep::Generation);
        true
    }

    /// The generation screen, once the wizard has reached it.
    pub fn generation_preview(&self) -> Option<GenerationPreview> {
        (self.step == WizardStep::Generation)
            .then(|| GenerationPreview::from_draft(&self.draft, self.preview_word_count))
    }

    fn go_to(&mut self, next: WizardStep) {
        tracing::debug!(
            from = self.step.number(),
            to = next.number(),
            "[reelforge][wizard] step changed"
        );
        self.step = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_brief() -> ProjectWizard {
        let mut wizard = ProjectWizard::default();
        wizard.set_field(FieldEdit::ProjectName("Launch".into()));
        wizard.set_field(FieldEdit::Description("New product release campaign".into()));
        wizard
    }

    #[test]
    fn starts_empty_on_brief() {
        let wizard = ProjectWizard::default();
        assert_eq!(wizard.step(), WizardStep::Brief);
        assert!(wizard.draft().is_empty());
        assert!(wizard.suggestions().is_empty());
        assert!(wizard.generation_preview().is_none());
    }

    #[test]
    fn style_gated_until_name_and_description() {
        let mut wizard = ProjectWizard::default();
        assert!(!wizard.advance_to_style());

        wizard.set_field(FieldEdit::ProjectName("Launch".into()));
        assert!(!wizard.can_advance_to_style());
        assert!(!wizard.advance_to_style());
        assert_eq!(wizard.step(), WizardStep::Brief);

        wizard.set_field(FieldEdit::Description("x".into()));
        assert!(wizard.advance_to_style());
        assert_eq!(wizard.step(), WizardStep::StyleFormat);
    }

    #[test]
    fn clearing_a_required_field_regates() {
        let mut wizard = with_brief();
        assert!(wizard.can_advance_to_style());
        wizard.set_field(FieldEdit::ProjectName(String::new()));
        assert!(!wizard.can_advance_to_style());
    }

    #[test]
    fn generation_needs_all_three_selections() {
        let mut wizard = with_brief();
        wizard.advance_to_style();

        wizard.set_field(FieldEdit::Duration(VideoDuration::ThirtySeconds));
        wizard.set_field(FieldEdit::Platform(Platform::TikTok));
        assert!(!wizard.advance_to_generation());

        wizard.set_field(FieldEdit::Tone(VideoTone::Energetic));
        assert!(wizard.advance_to_generation());
        assert_eq!(wizard.step(), WizardStep::Generation);
    }

    #[test]
    fn selections_made_early_do_not_skip_style_step() {
        let mut wizard = with_brief();
        wizard.set_field(FieldEdit::Duration(VideoDuration::FifteenSeconds));
        wizard.set_field(FieldEdit::Platform(Platform::YouTube));
        wizard.set_field(FieldEdit::Tone(VideoTone::Dramatic));
        assert!(!wizard.advance_to_generation());
        assert_eq!(wizard.step(), WizardStep::Brief);
    }

    #[test]
    fn no_backward_move_from_generation() {
        let mut wizard = with_brief();
        wizard.advance_to_style();
        wizard.set_field(FieldEdit::Duration(VideoDuration::OneMinute));
        wizard.set_field(FieldEdit::Platform(Platform::Facebook));
        wizard.set_field(FieldEdit::Tone(VideoTone::Friendly));
        wizard.advance_to_generation();

        assert!(!wizard.return_to_brief());
        assert!(!wizard.advance_to_style());
        assert_eq!(wizard.step(), WizardStep::Generation);
    }

    #[test]
    fn return_to_brief_is_noop_on_brief() {
        let mut wizard = with_brief();
        assert!(!wizard.return_to_brief());
        assert_eq!(wizard.step(), WizardStep::Brief);
    }

    #[test]
    fn only_description_edits_touch_suggestions() {
        let mut wizard = ProjectWizard::default();
        wizard.set_field(FieldEdit::Goals("a very long goal statement".into()));
        wizard.set_field(FieldEdit::ProjectName("a very long project name".into()));
        assert!(wizard.suggestions().is_empty());

        wizard.set_field(FieldEdit::Description("long enough text".into()));
        assert_eq!(wizard.suggestions().len(), 3);
    }

    #[test]
    fn config_controls_threshold_and_preview_words() {
        let config = WizardConfig {
            suggestion_threshold: 3,
            clear_stale_suggestions: true,
            preview_word_count: 2,
        };
        let mut wizard = ProjectWizard::new(&config);
        wizard.set_field(FieldEdit::ProjectName("P".into()));
        wizard.set_field(FieldEdit::Description("one two three".into()));
        assert_eq!(wizard.suggestions().len(), 3);

        wizard.advance_to_style();
        wizard.set_field(FieldEdit::Duration(VideoDuration::ThirtySeconds));
        wizard.set_field(FieldEdit::Platform(Platform::Instagram));
        wizard.set_field(FieldEdit::Tone(VideoTone::Humorous));
        wizard.advance_to_generation();

        let preview = wizard.generation_preview().expect("on generation step");
        assert!(preview.script.contains("transforms your one two..."));
    }
}

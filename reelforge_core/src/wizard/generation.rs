//! The cosmetic "AI Generation in Progress" step.
//!
//! Nothing runs here. Stage states are fixed and the script preview is a
//! template filled from the draft.

use super::draft::ProjectDraft;

pub const ESTIMATED_COMPLETION: &str = "3-5 minutes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Completed,
    Current,
    Pending,
}

impl StageState {
    /// CSS modifier for the status dot and label.
    pub fn css_class(self) -> &'static str {
        match self {
            StageState::Completed => "stage-completed",
            StageState::Current => "stage-current",
            StageState::Pending => "stage-pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStage {
    pub label: &'static str,
    pub state: StageState,
}

pub const GENERATION_STAGES: [GenerationStage; 5] = [
    GenerationStage {
        label: "Analyzing brief & generating script",
        state: StageState::Completed,
    },
    GenerationStage {
        label: "Creating visual storyboard",
        state: StageState::Completed,
    },
    GenerationStage {
        label: "Generating video scenes",
        state: StageState::Current,
    },
    GenerationStage {
        label: "Adding voiceover & music",
        state: StageState::Pending,
    },
    GenerationStage {
        label: "Final editing & export",
        state: StageState::Pending,
    },
];

/// Everything the generation step renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPreview {
    pub stages: &'static [GenerationStage],
    pub script: String,
    pub estimated_completion: &'static str,
}

impl GenerationPreview {
    pub fn from_draft(draft: &ProjectDraft, word_count: usize) -> Self {
        Self {
            stages: &GENERATION_STAGES,
            script: script_preview(draft, word_count),
            estimated_completion: ESTIMATED_COMPLETION,
        }
    }
}

/// First `count` words of `text`, split on single spaces.
///
/// Consecutive spaces yield empty words, so `"a  b"` keeps its double space.
pub fn leading_words(text: &str, count: usize) -> String {
    text.split(' ').take(count).collect::<Vec<_>>().join(" ")
}

pub fn script_preview(draft: &ProjectDraft, word_count: usize) -> String {
    format!(
        "Tired of spending weeks on video production? Introducing {} - \
         the game-changing solution that transforms your {}... \
         Perfect for {}, this innovative approach delivers results in minutes, not months.",
        draft.project_name,
        leading_words(&draft.description, word_count),
        draft.target_audience,
    )
}

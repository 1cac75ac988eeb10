use super::options::{Platform, VideoDuration, VideoTone};

/// In-progress, unsaved brief for one video.
///
/// Lives only as long as its wizard; dropping the wizard discards it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub project_name: String,
    pub description: String,
    pub target_audience: String,
    pub duration: Option<VideoDuration>,
    pub tone: Option<VideoTone>,
    pub platform: Option<Platform>,
    pub goals: String,
}

/// Name of a draft field, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProjectName,
    Description,
    TargetAudience,
    Duration,
    Tone,
    Platform,
    Goals,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::ProjectName => "project_name",
            Field::Description => "description",
            Field::TargetAudience => "target_audience",
            Field::Duration => "duration",
            Field::Tone => "tone",
            Field::Platform => "platform",
            Field::Goals => "goals",
        }
    }
}

/// A single-field edit. Selections carry an already-parsed option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    ProjectName(String),
    Description(String),
    TargetAudience(String),
    Goals(String),
    Duration(VideoDuration),
    Tone(VideoTone),
    Platform(Platform),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::ProjectName(_) => Field::ProjectName,
            FieldEdit::Description(_) => Field::Description,
            FieldEdit::TargetAudience(_) => Field::TargetAudience,
            FieldEdit::Goals(_) => Field::Goals,
            FieldEdit::Duration(_) => Field::Duration,
            FieldEdit::Tone(_) => Field::Tone,
            FieldEdit::Platform(_) => Field::Platform,
        }
    }
}

impl ProjectDraft {
    /// Overwrite one field, leaving the rest untouched.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::ProjectName(value) => self.project_name = value,
            FieldEdit::Description(value) => self.description = value,
            FieldEdit::TargetAudience(value) => self.target_audience = value,
            FieldEdit::Goals(value) => self.goals = value,
            FieldEdit::Duration(value) => self.duration = Some(value),
            FieldEdit::Tone(value) => self.tone = Some(value),
            FieldEdit::Platform(value) => self.platform = Some(value),
        }
    }

    /// Name and description are both filled in.
    pub fn brief_complete(&self) -> bool {
        !self.project_name.is_empty() && !self.description.is_empty()
    }

    /// Duration, platform and tone are all selected.
    pub fn format_complete(&self) -> bool {
        self.duration.is_some() && self.platform.is_some() && self.tone.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == ProjectDraft::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_preserves_other_fields() {
        let mut draft = ProjectDraft::default();
        draft.apply(FieldEdit::ProjectName("Launch".into()));
        draft.apply(FieldEdit::Tone(VideoTone::Friendly));
        draft.apply(FieldEdit::Goals("sign up".into()));

        assert_eq!(draft.project_name, "Launch");
        assert_eq!(draft.tone, Some(VideoTone::Friendly));
        assert_eq!(draft.goals, "sign up");
        assert!(draft.description.is_empty());
        assert_eq!(draft.duration, None);
    }

    #[test]
    fn apply_overwrites_previous_value() {
        let mut draft = ProjectDraft::default();
        draft.apply(FieldEdit::Platform(Platform::YouTube));
        draft.apply(FieldEdit::Platform(Platform::LinkedIn));
        assert_eq!(draft.platform, Some(Platform::LinkedIn));
    }

    #[test]
    fn whitespace_counts_as_filled() {
        // Only an empty string disables the button; no trimming.
        let mut draft = ProjectDraft::default();
        draft.apply(FieldEdit::ProjectName(" ".into()));
        draft.apply(FieldEdit::Description(" ".into()));
        assert!(draft.brief_complete());
    }

    #[test]
    fn optional_fields_do_not_gate() {
        let mut draft = ProjectDraft::default();
        draft.apply(FieldEdit::TargetAudience("founders".into()));
        draft.apply(FieldEdit::Goals("learn more".into()));
        assert!(!draft.brief_complete());
        assert!(!draft.format_complete());
    }

    #[test]
    fn edit_reports_its_field() {
        assert_eq!(FieldEdit::Description(String::new()).field(), Field::Description);
        assert_eq!(FieldEdit::Duration(VideoDuration::OneMinute).field().as_str(), "duration");
    }

    #[test]
    fn default_draft_is_empty() {
        let mut draft = ProjectDraft::default();
        assert!(draft.is_empty());
        draft.apply(FieldEdit::Goals("x".into()));
        assert!(!draft.is_empty());
    }
}

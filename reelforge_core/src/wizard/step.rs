/// Position within the creation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WizardStep {
    #[default]
    Brief,
    StyleFormat,
    Generation,
}

/// How a step is drawn in the progress header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepIndicator {
    pub step: WizardStep,
    /// The current step is this one or later.
    pub reached: bool,
    /// The connector after this step is filled (current step is later).
    /// Always `false` for the last step, which has no connector.
    pub connector_filled: bool,
    pub has_connector: bool,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Brief,
        WizardStep::StyleFormat,
        WizardStep::Generation,
    ];

    /// 1-based position.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Brief => 1,
            WizardStep::StyleFormat => 2,
            WizardStep::Generation => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Brief => "Project Brief",
            WizardStep::StyleFormat => "Style & Format",
            WizardStep::Generation => "AI Generation",
        }
    }

    /// Progress header entries as seen from `self`.
    pub fn indicators(self) -> [StepIndicator; 3] {
        Self::ALL.map(|step| {
            let has_connector = step != WizardStep::Generation;
            StepIndicator {
                step,
                reached: self.number() >= step.number(),
                connector_filled: has_connector && self.number() > step.number(),
                has_connector,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_one_based_and_ordered() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(WizardStep::Brief < WizardStep::Generation);
        assert_eq!(WizardStep::default(), WizardStep::Brief);
    }

    #[test]
    fn indicators_on_first_step() {
        let [brief, style, generation] = WizardStep::Brief.indicators();
        assert!(brief.reached);
        assert!(!brief.connector_filled);
        assert!(!style.reached);
        assert!(!generation.reached);
        assert!(!generation.has_connector);
    }

    #[test]
    fn indicators_on_middle_step() {
        let [brief, style, generation] = WizardStep::StyleFormat.indicators();
        assert!(brief.reached && brief.connector_filled);
        assert!(style.reached && !style.connector_filled);
        assert!(!generation.reached);
    }

    #[test]
    fn indicators_on_last_step() {
        let indicators = WizardStep::Generation.indicators();
        assert!(indicators.iter().all(|i| i.reached));
        assert!(indicators[0].connector_filled && indicators[1].connector_filled);
        assert!(!indicators[2].connector_filled);
    }
}

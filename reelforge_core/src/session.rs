//! Host switch between the landing page and the wizard.
//!
//! Only one screen is mounted at a time. Opening the wizard always builds a
//! fresh [`ProjectWizard`]; closing it drops the wizard and its draft.

use crate::config::SiteConfig;
use crate::wizard::ProjectWizard;

/// Call-to-action that opened the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// "Start Creating" in the nav bar
    Nav,
    /// "Create Your First Video" in the hero
    Hero,
    /// "Start Your First Project" in the closing banner
    CallToAction,
}

impl EntryPoint {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryPoint::Nav => "nav",
            EntryPoint::Hero => "hero",
            EntryPoint::CallToAction => "cta",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Wizard {
        wizard: ProjectWizard,
        entry: EntryPoint,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSession {
    config: SiteConfig,
    screen: Screen,
}

impl SiteSession {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            screen: Screen::Landing,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_wizard_open(&self) -> bool {
        matches!(self.screen, Screen::Wizard { .. })
    }

    /// Mount a fresh wizard, replacing any open one.
    pub fn start_creating(&mut self, entry: EntryPoint) {
        if self.is_wizard_open() {
            tracing::debug!("[reelforge][session] discarding open wizard before restart");
        }
        tracing::info!(entry = entry.as_str(), "[reelforge][session] wizard opened");

        self.screen = Screen::Wizard {
            wizard: ProjectWizard::new(&self.config.wizard),
            entry,
        };
    }

    /// Drop the wizard and its draft, back to the landing page.
    pub fn exit_wizard(&mut self) {
        if let Screen::Wizard { wizard, entry } = std::mem::take(&mut self.screen) {
            tracing::info!(
                step = wizard.step().number(),
                entry = entry.as_str(),
                "[reelforge][session] wizard closed, draft discarded"
            );
        }
    }

    /// Call-to-action that opened the current wizard.
    pub fn entry(&self) -> Option<EntryPoint> {
        match self.screen {
            Screen::Wizard { entry, .. } => Some(entry),
            Screen::Landing => None,
        }
    }

    pub fn wizard(&self) -> Option<&ProjectWizard> {
        match &self.screen {
            Screen::Wizard { wizard, .. } => Some(wizard),
            Screen::Landing => None,
        }
    }

    pub fn wizard_mut(&mut self) -> Option<&mut ProjectWizard> {
        match &mut self.screen {
            Screen::Wizard { wizard, .. } => Some(wizard),
            Screen::Landing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{FieldEdit, WizardStep};

    #[test]
    fn starts_on_landing() {
        let session = SiteSession::new(SiteConfig::default());
        assert_eq!(session.screen(), &Screen::Landing);
        assert!(session.wizard().is_none());
        assert_eq!(session.entry(), None);
    }

    #[test]
    fn remembers_entry_point_until_exit() {
        let mut session = SiteSession::new(SiteConfig::default());
        session.start_creating(EntryPoint::Hero);
        assert_eq!(session.entry(), Some(EntryPoint::Hero));

        session.start_creating(EntryPoint::CallToAction);
        assert_eq!(session.entry(), Some(EntryPoint::CallToAction));

        session.exit_wizard();
        assert_eq!(session.entry(), None);
    }

    #[test]
    fn exit_on_landing_is_harmless() {
        let mut session = SiteSession::new(SiteConfig::default());
        session.exit_wizard();
        assert!(!session.is_wizard_open());
    }

    #[test]
    fn restart_replaces_open_wizard() {
        let mut session = SiteSession::new(SiteConfig::default());
        session.start_creating(EntryPoint::Nav);
        let wizard = session.wizard_mut().expect("wizard open");
        wizard.set_field(FieldEdit::ProjectName("Old".into()));

        session.start_creating(EntryPoint::CallToAction);
        let wizard = session.wizard().expect("wizard open");
        assert!(wizard.draft().is_empty());
        assert_eq!(wizard.step(), WizardStep::Brief);
    }

    #[test]
    fn wizard_uses_session_config() {
        let mut config = SiteConfig::default();
        config.wizard.suggestion_threshold = 0;
        let mut session = SiteSession::new(config);

        session.start_creating(EntryPoint::Hero);
        let wizard = session.wizard_mut().expect("wizard open");
        wizard.set_field(FieldEdit::Description("a".into()));
        assert_eq!(wizard.suggestions().len(), 3);
    }
}

//! # reelforge-core
//!
//! Framework-free model behind the ReelForge marketing site.
//!
//! The site itself is a Leptos app (see the `landing` crate); everything that
//! holds state or data lives here so it can be tested without a browser:
//!
//! - [`catalog`] - the fixed lists rendered by the landing page (plans,
//!   showcase videos, feature cards, hero stats)
//! - [`wizard`] - the three-step project creation flow: draft, step gating,
//!   suggestions and the generation preview
//! - [`session`] - the host switch between landing page and wizard
//! - [`config`] - optional TOML site configuration
//! - [`error`] - parse errors at the UI and config boundaries
//!
//! ## Quick Start
//!
//! ```rust
//! use reelforge_core::session::{EntryPoint, SiteSession};
//! use reelforge_core::wizard::{FieldEdit, WizardStep};
//! use reelforge_core::SiteConfig;
//!
//! let mut session = SiteSession::new(SiteConfig::default());
//! session.start_creating(EntryPoint::Hero);
//!
//! let wizard = session.wizard_mut().expect("wizard is open");
//! wizard.set_field(FieldEdit::ProjectName("Launch".into()));
//! wizard.set_field(FieldEdit::Description("New product release campaign".into()));
//! assert!(wizard.advance_to_style());
//! assert_eq!(wizard.step(), WizardStep::StyleFormat);
//!
//! session.exit_wizard();
//! assert!(session.wizard().is_none());
//! ```
//!
//! ---
//!
//! Developed with 🎬 by The ReelForge Team (c)2025

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod types;
pub mod wizard;

pub use config::SiteConfig;
pub use error::{ConfigError, ParseOptionError};

// ReelForge Landing Page — Leptos 0.8 Edition
// Developed with 🎬 by The ReelForge Team (c)2025

mod creator;
mod icons;
mod logging;
mod pages;
mod sections;

use creator::ProjectCreator;
use leptos::prelude::*;
use pages::HomePage;
use reelforge_core::SiteConfig;
use reelforge_core::session::{EntryPoint, SiteSession};

/// Site configuration, embedded at build time.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    logging::init(config.log_level);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "[reelforge][config] falling back to defaults");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let brand = config.brand.name.clone();
    let copyright = config.copyright_line();
    let session = RwSignal::new(SiteSession::new(config));

    let start = Callback::new(move |entry: EntryPoint| session.update(|s| s.start_creating(entry)));
    let exit = Callback::new(move |_: ()| session.update(|s| s.exit_wizard()));

    view! {
        <Show
            when=move || session.with(|s| s.is_wizard_open())
            fallback=move || {
                view! { <HomePage brand=brand.clone() copyright=copyright.clone() on_start=start /> }
            }
        >
            <ProjectCreator session=session on_exit=exit />
        </Show>
    }
}

// Home page - every marketing section, top to bottom
use crate::sections::{CallToAction, Features, Footer, Hero, Nav, PricingSection, VideoShowcase};
use leptos::prelude::*;
use reelforge_core::session::EntryPoint;

#[component]
pub fn HomePage(
    brand: String,
    copyright: String,
    /// Opens the project wizard
    on_start: Callback<EntryPoint>,
) -> impl IntoView {
    view! {
        <div class="page">
            <Nav brand=brand.clone() on_start=on_start />
            <main>
                <Hero on_start=on_start />
                <Features />
                <VideoShowcase brand=brand.clone() />
                <PricingSection />
                <CallToAction on_start=on_start />
            </main>
            <Footer brand=brand copyright=copyright />
        </div>
    }
}

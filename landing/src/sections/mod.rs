// Landing page sections
// Developed with 🎬 by The ReelForge Team (c)2025

mod cta;
mod features;
mod footer;
mod hero;
mod nav;
mod pricing;
mod showcase;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use pricing::PricingSection;
pub use showcase::VideoShowcase;

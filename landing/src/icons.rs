//! Inline SVG icon components.
//!
//! Stroke icons on a 24x24 grid in the style of [Lucide](https://lucide.dev/).

use leptos::prelude::*;
use reelforge_core::types::{FeatureIcon, PlanIcon};

/// Renders an inline stroke icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_PLAY size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

pub const ICON_ARROW_LEFT: &str = "M19 12H5M12 19l-7-7 7-7";
pub const ICON_CHECK: &str = "M20 6 9 17l-5-5";
pub const ICON_CHEVRON_RIGHT: &str = "m9 18 6-6-6-6";
pub const ICON_CLOCK: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM12 6v6l4 2";
pub const ICON_CROWN: &str = "m2 4 3 12h14l3-12-6 7-4-7-4 7-6-7zM5 20h14";
pub const ICON_GLOBE: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";
pub const ICON_PALETTE: &str = "M12 2a10 10 0 0 0 0 20c1.1 0 2-.9 2-2 0-.5-.2-1-.5-1.3-.3-.4-.5-.8-.5-1.3 0-1.1.9-2 2-2h2.4c3 0 5.6-2.5 5.6-5.6C23 5.5 18 2 12 2zM7.5 10.5h.01M10.5 7.5h.01M15.5 7.5h.01";
pub const ICON_PLAY: &str = "M6 3l14 9-14 9V3z";
pub const ICON_SPARKLES: &str = "M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.5l-1.9-5.9L4 10.7l6.1-1.9L12 3zM5 3v4M3 5h4M19 17v4M17 19h4";
pub const ICON_TARGET: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12zM12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4z";
pub const ICON_USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8zM22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";
pub const ICON_VIDEO: &str = "M4 6h10a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2zM22 8l-6 4 6 4V8z";
pub const ICON_WAND: &str = "m21.64 3.64-1.28-1.28a1.21 1.21 0 0 0-1.72 0L2.36 18.64a1.21 1.21 0 0 0 0 1.72l1.28 1.28a1.2 1.2 0 0 0 1.72 0L21.64 5.36a1.2 1.2 0 0 0 0-1.72zM14 7l3 3M5 6v4M19 14v4M10 2v2M7 8H3M21 16h-4M11 3H9";
pub const ICON_ZAP: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8z";

pub fn feature_icon(icon: FeatureIcon) -> &'static str {
    match icon {
        FeatureIcon::Target => ICON_TARGET,
        FeatureIcon::Zap => ICON_ZAP,
        FeatureIcon::Video => ICON_VIDEO,
        FeatureIcon::Users => ICON_USERS,
        FeatureIcon::Clock => ICON_CLOCK,
        FeatureIcon::Globe => ICON_GLOBE,
    }
}

pub fn plan_icon(icon: PlanIcon) -> &'static str {
    match icon {
        PlanIcon::Zap => ICON_ZAP,
        PlanIcon::Sparkles => ICON_SPARKLES,
        PlanIcon::Crown => ICON_CROWN,
    }
}

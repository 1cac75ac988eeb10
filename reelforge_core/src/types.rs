//! Descriptor types for the static landing page content.
//!
//! All content is compiled in, so descriptors borrow `'static` strings and
//! are `Copy`. Components iterate over the slices in [`crate::catalog`].

/// Icon shown on a pricing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanIcon {
    /// Lightning bolt
    Zap,
    /// Sparkles
    Sparkles,
    /// Crown
    Crown,
}

/// Icon shown on a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    /// Target
    Target,
    /// Lightning bolt
    Zap,
    /// Video camera
    Video,
    /// People
    Users,
    /// Clock
    Clock,
    /// Globe
    Globe,
}

/// One subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    /// Tier name, e.g. "Starter".
    pub name: &'static str,
    /// Monthly price in whole US dollars.
    pub monthly_price_usd: u32,
    /// One-line pitch under the name.
    pub description: &'static str,
    /// Card icon.
    pub icon: PlanIcon,
    /// Highlighted as "Most Popular".
    pub popular: bool,
    /// Bullet list of inclusions.
    pub features: &'static [&'static str],
}

impl PricingPlan {
    /// Price as displayed, e.g. `$29`.
    pub fn price_label(&self) -> String {
        format!("${}", self.monthly_price_usd)
    }
}

/// Audience numbers printed under a showcase card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMetrics {
    /// Formatted view count, e.g. "2.3M".
    pub views: &'static str,
    /// Formatted engagement rate, e.g. "8.2%".
    pub engagement: &'static str,
}

/// A sample video in the showcase grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseVideo {
    /// Stable id used as the list key.
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Running time as displayed, e.g. "1m 30s".
    pub duration: &'static str,
    pub platform: &'static str,
    pub industry: &'static str,
    /// CSS modifier for the thumbnail gradient.
    pub thumbnail: ThumbnailGradient,
    pub metrics: VideoMetrics,
}

/// Thumbnail background for a showcase card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailGradient {
    /// Blue to purple
    BluePurple,
    /// Green to teal
    GreenTeal,
    /// Orange to red
    OrangeRed,
    /// Yellow to orange
    YellowOrange,
}

impl ThumbnailGradient {
    /// CSS class applied to the thumbnail block.
    pub fn css_class(self) -> &'static str {
        match self {
            ThumbnailGradient::BluePurple => "thumb-blue-purple",
            ThumbnailGradient::GreenTeal => "thumb-green-teal",
            ThumbnailGradient::OrangeRed => "thumb-orange-red",
            ThumbnailGradient::YellowOrange => "thumb-yellow-orange",
        }
    }
}

/// A card in the "Complete AI Production Pipeline" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureHighlight {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
    /// CSS modifier for the icon colour.
    pub accent: &'static str,
}

/// A headline number under the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

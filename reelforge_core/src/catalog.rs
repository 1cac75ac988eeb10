//! Fixed content rendered by the landing page.

use crate::types::{
    FeatureHighlight, FeatureIcon, HeroStat, PlanIcon, PricingPlan, ShowcaseVideo,
    ThumbnailGradient, VideoMetrics,
};

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat {
        value: "5min",
        label: "Average Production Time",
    },
    HeroStat {
        value: "20+",
        label: "Languages Supported",
    },
    HeroStat {
        value: "95%",
        label: "Client Satisfaction",
    },
    HeroStat {
        value: "10K+",
        label: "Videos Created",
    },
];

pub const FEATURES: &[FeatureHighlight] = &[
    FeatureHighlight {
        icon: FeatureIcon::Target,
        title: "Smart Brief Analysis",
        description: "AI analyzes your goals, audience, and brand to craft the perfect video concept",
        accent: "accent-purple",
    },
    FeatureHighlight {
        icon: FeatureIcon::Zap,
        title: "Instant Script Generation",
        description: "Professional scripts with hooks, storytelling, and compelling CTAs",
        accent: "accent-blue",
    },
    FeatureHighlight {
        icon: FeatureIcon::Video,
        title: "AI Visual Creation",
        description: "Generate stunning visuals, scenes, and animations from text descriptions",
        accent: "accent-green",
    },
    FeatureHighlight {
        icon: FeatureIcon::Users,
        title: "Voice & Avatar Engine",
        description: "Realistic AI voices and optional AI presenters in multiple languages",
        accent: "accent-orange",
    },
    FeatureHighlight {
        icon: FeatureIcon::Clock,
        title: "Auto-Editing Suite",
        description: "Professional cuts, transitions, music sync, and subtitle generation",
        accent: "accent-pink",
    },
    FeatureHighlight {
        icon: FeatureIcon::Globe,
        title: "Multi-Platform Export",
        description: "Optimized formats for YouTube, TikTok, Instagram, and more",
        accent: "accent-cyan",
    },
];

pub const SHOWCASE_VIDEOS: &[ShowcaseVideo] = &[
    ShowcaseVideo {
        id: 1,
        title: "SaaS Product Launch",
        description: "AI-generated launch video for a productivity app",
        duration: "45s",
        platform: "YouTube",
        industry: "Technology",
        thumbnail: ThumbnailGradient::BluePurple,
        metrics: VideoMetrics {
            views: "2.3M",
            engagement: "8.2%",
        },
    },
    ShowcaseVideo {
        id: 2,
        title: "E-commerce Brand Story",
        description: "Emotional brand video for sustainable fashion",
        duration: "1m 30s",
        platform: "Instagram",
        industry: "Fashion",
        thumbnail: ThumbnailGradient::GreenTeal,
        metrics: VideoMetrics {
            views: "1.8M",
            engagement: "12.1%",
        },
    },
    ShowcaseVideo {
        id: 3,
        title: "Course Promotion",
        description: "Educational content marketing for online course",
        duration: "2m",
        platform: "TikTok",
        industry: "Education",
        thumbnail: ThumbnailGradient::OrangeRed,
        metrics: VideoMetrics {
            views: "5.7M",
            engagement: "15.3%",
        },
    },
    ShowcaseVideo {
        id: 4,
        title: "Restaurant Opening",
        description: "Local business promotional video",
        duration: "30s",
        platform: "Facebook",
        industry: "Food & Beverage",
        thumbnail: ThumbnailGradient::YellowOrange,
        metrics: VideoMetrics {
            views: "890K",
            engagement: "9.8%",
        },
    },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        monthly_price_usd: 29,
        description: "Perfect for small businesses and solopreneurs",
        icon: PlanIcon::Zap,
        popular: false,
        features: &[
            "5 videos per month",
            "Up to 60 seconds duration",
            "HD quality (1080p)",
            "Basic AI voices",
            "Standard templates",
            "Social media formats",
            "Email support",
        ],
    },
    PricingPlan {
        name: "Professional",
        monthly_price_usd: 99,
        description: "Ideal for growing businesses and content creators",
        icon: PlanIcon::Sparkles,
        popular: true,
        features: &[
            "25 videos per month",
            "Up to 3 minutes duration",
            "4K quality export",
            "Premium AI voices & avatars",
            "Custom brand templates",
            "All platform formats",
            "Priority support",
            "A/B testing variants",
            "Analytics dashboard",
        ],
    },
    PricingPlan {
        name: "Enterprise",
        monthly_price_usd: 299,
        description: "For agencies and large organizations",
        icon: PlanIcon::Crown,
        popular: false,
        features: &[
            "Unlimited videos",
            "Unlimited duration",
            "8K quality available",
            "White-label option",
            "Team collaboration",
            "API access",
            "Dedicated account manager",
            "Custom AI training",
            "Multi-language support",
            "Advanced analytics",
        ],
    },
];

/// Line under the pricing grid.
pub const PRICING_PERKS: &[&str] = &["All plans include free trial", "No setup fees", "Cancel anytime"];

pub const TRUST_BADGES: &[&str] = &["99.9% Uptime SLA", "Enterprise Security", "GDPR Compliant"];

/// The plan rendered with the "Most Popular" ribbon.
pub fn most_popular_plan() -> Option<&'static PricingPlan> {
    PRICING_PLANS.iter().find(|plan| plan.popular)
}

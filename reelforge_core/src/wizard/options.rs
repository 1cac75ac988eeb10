//! Enumerated choices offered on the "Style & Format" step.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseOptionError;

/// A closed set of `<select>` choices.
///
/// `value` is what the DOM reports back; `label` is what the user reads.
pub trait SelectOption: Copy + PartialEq + 'static {
    /// Option family, used in error messages and log fields.
    const KIND: &'static str;
    /// Every choice, in menu order.
    const ALL: &'static [Self];

    fn value(self) -> &'static str;
    fn label(self) -> &'static str;

    /// Look up a choice by its DOM value.
    fn from_value(value: &str) -> Result<Self, ParseOptionError> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.value() == value)
            .ok_or_else(|| ParseOptionError::new(Self::KIND, value))
    }
}

/// Target running time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoDuration {
    FifteenSeconds,
    ThirtySeconds,
    OneMinute,
    TwoToThreeMinutes,
}

impl SelectOption for VideoDuration {
    const KIND: &'static str = "duration";
    const ALL: &'static [Self] = &[
        VideoDuration::FifteenSeconds,
        VideoDuration::ThirtySeconds,
        VideoDuration::OneMinute,
        VideoDuration::TwoToThreeMinutes,
    ];

    fn value(self) -> &'static str {
        match self {
            VideoDuration::FifteenSeconds => "15s",
            VideoDuration::ThirtySeconds => "30s",
            VideoDuration::OneMinute => "60s",
            VideoDuration::TwoToThreeMinutes => "2-3min",
        }
    }

    fn label(self) -> &'static str {
        match self {
            VideoDuration::FifteenSeconds => "15 seconds (Ads)",
            VideoDuration::ThirtySeconds => "30 seconds (Social)",
            VideoDuration::OneMinute => "1 minute (Explainer)",
            VideoDuration::TwoToThreeMinutes => "2-3 minutes (Tutorial)",
        }
    }
}

/// Where the video will mainly be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    YouTube,
    TikTok,
    Instagram,
    Facebook,
    LinkedIn,
}

impl Platform {
    /// Frame aspect ratio the platform favours.
    pub fn aspect_ratio(self) -> &'static str {
        match self {
            Platform::YouTube | Platform::LinkedIn => "16:9",
            Platform::TikTok | Platform::Instagram => "9:16",
            Platform::Facebook => "1:1",
        }
    }
}

impl SelectOption for Platform {
    const KIND: &'static str = "platform";
    const ALL: &'static [Self] = &[
        Platform::YouTube,
        Platform::TikTok,
        Platform::Instagram,
        Platform::Facebook,
        Platform::LinkedIn,
    ];

    fn value(self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::TikTok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::LinkedIn => "linkedin",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube (16:9)",
            Platform::TikTok => "TikTok (9:16)",
            Platform::Instagram => "Instagram (9:16)",
            Platform::Facebook => "Facebook (1:1)",
            Platform::LinkedIn => "LinkedIn (16:9)",
        }
    }
}

/// Voice and mood of the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoTone {
    Professional,
    Energetic,
    Friendly,
    Dramatic,
    Educational,
    Humorous,
}

impl SelectOption for VideoTone {
    const KIND: &'static str = "tone";
    const ALL: &'static [Self] = &[
        VideoTone::Professional,
        VideoTone::Energetic,
        VideoTone::Friendly,
        VideoTone::Dramatic,
        VideoTone::Educational,
        VideoTone::Humorous,
    ];

    fn value(self) -> &'static str {
        match self {
            VideoTone::Professional => "professional",
            VideoTone::Energetic => "energetic",
            VideoTone::Friendly => "friendly",
            VideoTone::Dramatic => "dramatic",
            VideoTone::Educational => "educational",
            VideoTone::Humorous => "humorous",
        }
    }

    fn label(self) -> &'static str {
        match self {
            VideoTone::Professional => "Professional & Trustworthy",
            VideoTone::Energetic => "Energetic & Exciting",
            VideoTone::Friendly => "Friendly & Conversational",
            VideoTone::Dramatic => "Dramatic & Cinematic",
            VideoTone::Educational => "Educational & Informative",
            VideoTone::Humorous => "Fun & Humorous",
        }
    }
}

impl FromStr for VideoDuration {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl FromStr for Platform {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl FromStr for VideoTone {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl fmt::Display for VideoTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_values_parse_back<T: SelectOption + fmt::Debug>() {
        for option in T::ALL {
            assert_eq!(T::from_value(option.value()), Ok(*option));
        }
    }

    #[test]
    fn every_value_parses_back() {
        assert_values_parse_back::<VideoDuration>();
        assert_values_parse_back::<Platform>();
        assert_values_parse_back::<VideoTone>();
    }

    #[test]
    fn menu_sizes() {
        assert_eq!(VideoDuration::ALL.len(), 4);
        assert_eq!(Platform::ALL.len(), 5);
        assert_eq!(VideoTone::ALL.len(), 6);
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = "vimeo".parse::<Platform>().unwrap_err();
        assert_eq!(err.kind, "platform");
        assert_eq!(err.value, "vimeo");
        assert!("".parse::<VideoTone>().is_err());
        assert!("30 seconds (Social)".parse::<VideoDuration>().is_err());
    }

    #[test]
    fn values_are_case_sensitive() {
        assert!("TikTok".parse::<Platform>().is_err());
        assert_eq!("tiktok".parse::<Platform>(), Ok(Platform::TikTok));
    }

    #[test]
    fn platform_label_mentions_aspect_ratio() {
        for platform in Platform::ALL {
            assert!(platform.label().contains(platform.aspect_ratio()));
        }
    }

    #[test]
    fn display_uses_dom_value() {
        assert_eq!(VideoDuration::TwoToThreeMinutes.to_string(), "2-3min");
        assert_eq!(VideoTone::Humorous.to_string(), "humorous");
    }
}

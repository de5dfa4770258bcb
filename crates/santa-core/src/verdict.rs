//! Canned outcomes: score tiers, Santa's messages, pictures and backgrounds.
//!
//! The tier depends only on the score and the portrait only on the approval
//! flag, so a wish can be approved with a "Low" tier and vice versa.

use serde::{Deserialize, Serialize};

/// Score at or above which a wish is [`Tier::High`].
pub const HIGH_THRESHOLD: f64 = 70.0;
/// Score at or above which a wish is at least [`Tier::Borderline`].
pub const BORDERLINE_THRESHOLD: f64 = 40.0;

pub const APPROVED_MESSAGE: &str = "Approved. Let's deliver – then go to après.";
pub const REJECTED_MESSAGE: &str =
    "👎 Santa thinks that's out of scope. The AI model agrees… mostly.";

pub const APPROVED_BACKGROUND: &str = "Apres.png";
pub const DEFAULT_BACKGROUND: &str = "Snow.png";

/// Score bucket driving the commentary under the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    High,
    Borderline,
    Low,
}

/// Visual tone of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Info,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl Tier {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= BORDERLINE_THRESHOLD {
            Self::Borderline
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Borderline => "borderline",
            Self::Low => "low",
        }
    }

    pub fn commentary(&self) -> &'static str {
        match self {
            Self::High => "Model verdict: High likelihood of Advisory delivery.",
            Self::Borderline => "Model verdict: Borderline – expect a few governance boards.",
            Self::Low => "Model verdict: Ambitious. Recommend a different approach.",
        }
    }

    /// Tone of the banner carrying Santa's message.
    pub fn message_tone(&self) -> Tone {
        match self {
            Self::High => Tone::Success,
            Self::Borderline => Tone::Warning,
            Self::Low => Tone::Error,
        }
    }

    /// Tone of the model commentary. Low scores are informational here.
    pub fn commentary_tone(&self) -> Tone {
        match self {
            Self::High => Tone::Success,
            Self::Borderline => Tone::Warning,
            Self::Low => Tone::Info,
        }
    }
}

/// Santa's message for an approval outcome.
pub fn santa_message(approved: bool) -> &'static str {
    if approved {
        APPROVED_MESSAGE
    } else {
        REJECTED_MESSAGE
    }
}

/// Page background for the last outcome; `None` means no wish yet.
pub fn background_for(approved: Option<bool>) -> &'static str {
    match approved {
        Some(true) => APPROVED_BACKGROUND,
        _ => DEFAULT_BACKGROUND,
    }
}

/// Picture of Santa shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portrait {
    pub image: &'static str,
    pub caption: &'static str,
}

impl Portrait {
    pub const APPROVING: Portrait = Portrait {
        image: "santa_thumbs_up.png",
        caption: "Santa approves the business case – see you at après! 🎁",
    };

    pub const REVIEWING: Portrait = Portrait {
        image: "santa_ok.png",
        caption: "Santa (Advisory Edition) – calmly reviewing your scope.",
    };

    pub fn for_outcome(approved: Option<bool>) -> Self {
        match approved {
            Some(true) => Self::APPROVING,
            _ => Self::REVIEWING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(Tier::from_score(100.0), Tier::High);
        assert_eq!(Tier::from_score(70.0), Tier::High);
        assert_eq!(Tier::from_score(69.9), Tier::Borderline);
        assert_eq!(Tier::from_score(40.0), Tier::Borderline);
        assert_eq!(Tier::from_score(39.9), Tier::Low);
        assert_eq!(Tier::from_score(0.0), Tier::Low);
    }

    #[test]
    fn low_tier_tones_differ_between_banner_and_commentary() {
        assert_eq!(Tier::Low.message_tone(), Tone::Error);
        assert_eq!(Tier::Low.commentary_tone(), Tone::Info);
        assert_eq!(Tier::High.message_tone(), Tier::High.commentary_tone());
    }

    #[test]
    fn borderline_tones_are_warnings() {
        assert_eq!(Tier::Borderline.message_tone(), Tone::Warning);
        assert_eq!(Tier::Borderline.commentary_tone(), Tone::Warning);
        assert_eq!(Tier::Borderline.as_str(), "borderline");
        assert_eq!(
            Tier::Borderline.commentary(),
            "Model verdict: Borderline – expect a few governance boards."
        );
    }

    #[test]
    fn outcome_assets() {
        assert_eq!(background_for(Some(true)), "Apres.png");
        assert_eq!(background_for(Some(false)), "Snow.png");
        assert_eq!(background_for(None), "Snow.png");
        assert_eq!(Portrait::for_outcome(Some(true)).image, "santa_thumbs_up.png");
        assert_eq!(Portrait::for_outcome(None), Portrait::REVIEWING);
    }

    #[test]
    fn messages_follow_approval() {
        assert!(santa_message(true).starts_with("Approved."));
        assert!(santa_message(false).contains("out of scope"));
    }
}

//! The per-submission record shown back to the user.

use serde::{Deserialize, Serialize};

use crate::approval::is_approved;
use crate::features::{WishFeatures, extract_features};
use crate::model::FeasibilityModel;
use crate::verdict::{Tier, santa_message};

/// Outcome of asking Santa about one wish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub wish: String,
    pub approved: bool,
    pub message: String,
    pub features: WishFeatures,
    pub score: f64,
    pub tier: Tier,
}

/// Assess a wish with the default model.
pub fn assess(wish: &str) -> Assessment {
    Assessment::with_model(wish, &FeasibilityModel::default())
}

impl Assessment {
    pub fn with_model(wish: &str, model: &FeasibilityModel) -> Self {
        let features = extract_features(wish);
        let score = model.score(&features);
        let approved = is_approved(wish);

        Self {
            wish: wish.to_string(),
            approved,
            message: santa_message(approved).to_string(),
            features,
            score,
            tier: Tier::from_score(score),
        }
    }
}

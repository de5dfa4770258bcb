//! Fixed-weight logistic model behind the feasibility score.
//!
//! There is no training: the weights are constants, and a score is
//! `sigmoid(w · [1, words, buzzwords, fun words, avg word length]) * 100`
//! rounded to one decimal place.

use crate::features::WishFeatures;

/// Default weights, bias first.
pub const DEFAULT_WEIGHTS: [f64; 5] = [-2.0, -0.08, 0.9, -1.1, 0.4];

const TERM_NAMES: [&str; 5] = [
    "bias",
    "word_count",
    "buzzword_count",
    "fun_word_count",
    "avg_word_length",
];

/// A linear classifier squashed through the logistic function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityModel {
    weights: [f64; 5],
}

/// One term of the dot product, as reported by [`FeasibilityModel::explain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermContribution {
    pub name: &'static str,
    pub value: f64,
    pub weight: f64,
}

impl TermContribution {
    pub fn contribution(&self) -> f64 {
        self.value * self.weight
    }
}

impl Default for FeasibilityModel {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHTS)
    }
}

impl FeasibilityModel {
    pub fn new(weights: [f64; 5]) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &[f64; 5] {
        &self.weights
    }

    /// Raw linear response `w · x`.
    pub fn logit(&self, features: &WishFeatures) -> f64 {
        self.explain(features)
            .iter()
            .map(TermContribution::contribution)
            .sum()
    }

    /// Feasibility score in `[0, 100]`, rounded to one decimal.
    pub fn score(&self, features: &WishFeatures) -> f64 {
        let z = self.logit(features);
        let p = sigmoid(z);
        // Half away from zero; ties to even would only differ on exact binary ties.
        let score = (p * 1000.0).round() / 10.0;
        tracing::debug!(z, score, "scored wish");
        score
    }

    /// Per-term breakdown of the linear response.
    pub fn explain(&self, features: &WishFeatures) -> [TermContribution; 5] {
        let x = input_vector(features);
        std::array::from_fn(|i| TermContribution {
            name: TERM_NAMES[i],
            value: x[i],
            weight: self.weights[i],
        })
    }
}

fn input_vector(features: &WishFeatures) -> [f64; 5] {
    [
        1.0,
        features.word_count as f64,
        features.buzzword_count as f64,
        features.fun_word_count as f64,
        features.avg_word_length,
    ]
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

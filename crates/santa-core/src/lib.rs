pub mod approval;
pub mod assessment;
pub mod features;
pub mod model;
pub mod verdict;

pub use approval::{CORRECT_ANSWER, is_approved};
pub use assessment::{Assessment, assess};
pub use features::{WishFeatures, extract_features};
pub use model::{FeasibilityModel, TermContribution};
pub use verdict::{Portrait, Tier, Tone};

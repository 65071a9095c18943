//! Identifiers of the built-in metrics.

pub const COUNT: &str = "count";
pub const NULL_COUNT: &str = "nullCount";
pub const LIKE_COUNT: &str = "likeCount";
pub const ILIKE_COUNT: &str = "iLikeCount";
pub const UNIQUE_COUNT: &str = "uniqueCount";
pub const DISTINCT_COUNT: &str = "distinctCount";
pub const MIN: &str = "min";
pub const MAX: &str = "max";
pub const MEAN: &str = "mean";

pub const LIKE_RATIO: &str = "likeRatio";
pub const ILIKE_RATIO: &str = "iLikeRatio";
pub const UNIQUE_RATIO: &str = "uniqueRatio";
pub const DISTINCT_RATIO: &str = "distinctRatio";
pub const NULL_RATIO: &str = "nullRatio";
pub const DUPLICATE_COUNT: &str = "duplicateCount";

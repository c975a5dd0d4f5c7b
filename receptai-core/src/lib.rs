pub mod ai;
pub mod catalog;
pub mod detection;
pub mod error;
pub mod image;
pub mod matcher;
pub mod types;

pub use error::{CatalogError, ImageError};
pub use image::{is_allowed_content_type, validate_image, ALLOWED_CONTENT_TYPES, MAX_FILE_SIZE};
pub use matcher::{difficulty_rank, find_matches, DEFAULT_MAX_MISSING, UNKNOWN_DIFFICULTY_RANK};
pub use types::{DetectedProduct, Difficulty, Dish, GeneratedRecipe, MatchResult};

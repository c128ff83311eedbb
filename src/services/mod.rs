pub mod providers;
pub mod recommendations;
pub mod relevance;

pub use recommendations::Recommender;

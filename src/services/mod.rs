pub mod providers;
pub mod render;
pub mod watchlists;

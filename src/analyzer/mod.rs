pub mod analysis_model;
pub mod element_analyzer;
pub mod error;
pub mod website_analyzer;

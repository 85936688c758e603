//! Text processing and analysis module

pub mod document;
pub mod text_processor;
pub mod skill_matcher;
pub mod experience;
pub mod education;
pub mod similarity;
pub mod recommendations;
pub mod analyzer;

pub mod health;
pub mod navigation;
pub mod pages;
pub mod preferences;

pub mod add;
pub mod config;
pub mod form;
pub mod reset;
pub mod show;

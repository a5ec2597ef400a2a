pub mod actions;
pub mod form;
pub mod messages;

pub mod form;
pub mod greeting;
pub mod messages;

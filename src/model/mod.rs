pub mod action;
pub mod decode;
pub mod person;

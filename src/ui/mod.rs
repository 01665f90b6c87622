pub mod form;
pub mod keypad;
pub mod session;

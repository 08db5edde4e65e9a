mod reset_password_form;

pub use reset_password_form::*;

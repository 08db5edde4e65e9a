// Standalone components
pub mod alert;
pub mod button;
pub mod form;
pub mod input;

// Primitive wrappers
pub mod label;

// Depends on input and label
pub mod field;

pub use alert::*;
pub use button::*;
pub use field::*;
pub use form::*;
pub use input::*;
pub use label::*;

pub mod error;
pub mod reset_password;
pub mod settings;
pub mod validation;

pub use error::*;
pub use reset_password::*;
pub use settings::*;
pub use validation::*;

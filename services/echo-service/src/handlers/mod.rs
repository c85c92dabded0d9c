pub mod auth_info;
pub mod echo;
pub mod health;

pub use auth_info::*;
pub use echo::*;
pub use health::*;

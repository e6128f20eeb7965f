//! Authentication: register, login, JWT.

mod handlers;
mod jwt;
mod service;

pub use handlers::{login, protected, register};
pub use jwt::{Claims, JwtSecret};
pub use service::AuthAppService;

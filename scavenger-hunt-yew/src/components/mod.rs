mod admin_login;
mod admin_only;

pub use admin_login::{AdminLogin, AdminLoginProps};
pub use admin_only::{AdminOnly, AdminOnlyProps};

mod jwt;
mod password;

pub use jwt::{create_access_token, decode_access_token, Claims};
pub use password::{hash_password, verify_password};

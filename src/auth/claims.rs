use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload used for authentication. Expense ownership always keys off
/// `sub`; email and username ride along so profile reads skip a query on the
/// client side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,        // user ID
    pub email: String,    // user email
    pub username: String, // display name
    pub iat: usize,       // issued at (unix timestamp)
    pub exp: usize,       // expires at (unix timestamp)
}

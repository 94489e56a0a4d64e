use serde::{Deserialize, Serialize};

/// Request body for user registration. Fields default to empty so a missing
/// field validates the same way as a blank one.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub username: String,
}

/// Public part of the user returned by GET /user.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert!(req.username.is_empty());
        assert!(req.password.is_empty());
        assert_eq!(req.email, "a@b.c");
    }

    #[test]
    fn login_response_shape() {
        let json = serde_json::to_value(LoginResponse {
            message: "Login successful",
            token: "t".into(),
            username: "aswin".into(),
        })
        .unwrap();
        assert_eq!(json["message"], "Login successful");
        assert_eq!(json["token"], "t");
        assert_eq!(json["username"], "aswin");
    }
}

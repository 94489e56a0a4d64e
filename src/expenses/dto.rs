use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body for POST /add-expense and PUT /update-expense/:id. Title and amount
/// are required; quantity is optional and defaults to absent.
#[derive(Debug, Deserialize)]
pub struct ExpenseInput {
    #[serde(default)]
    pub title: String,
    pub amount: Option<f64>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ExpenseCreated {
    pub message: &'static str,
    #[serde(rename = "insertId")]
    pub insert_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ExpenseMessage {
    pub message: &'static str,
}

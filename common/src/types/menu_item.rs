use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    /// Whole PKR.
    pub price: u32,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub is_popular: bool,
}

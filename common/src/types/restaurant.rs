use serde::{Deserialize, Serialize};

/// Restaurant snapshot as served by the catalog. Never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    pub image: String,
    pub is_open: bool,
    /// Free-form label, e.g. "25-35 min".
    pub delivery_time: String,
    /// Whole PKR.
    pub delivery_fee: u32,
    /// Free-form label, e.g. "1.2 km".
    pub distance: String,
    /// Whole PKR.
    pub minimum_order: u32,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<String>,
}

const DELIVERY_WORD: &str = "delivery";

impl Restaurant {
    /// Case-insensitive substring match on name or cuisine. An empty query matches.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.cuisine.to_lowercase().contains(&needle)
    }

    /// Label shown to takeaway customers for how long until pickup.
    ///
    /// Uses `preparation_time` when the catalog provides it. Otherwise the
    /// delivery label is reused with its first standalone "delivery" word
    /// swapped for "preparation"; labels without that word pass through.
    pub fn pickup_time(&self) -> String {
        match &self.preparation_time {
            Some(label) => label.clone(),
            None => replace_delivery_word(&self.delivery_time),
        }
    }
}

fn replace_delivery_word(label: &str) -> String {
    let bytes = label.as_bytes();
    let width = DELIVERY_WORD.len();

    for (start, _) in label.char_indices() {
        if start + width > label.len() {
            break;
        }
        let Some(candidate) = label.get(start..start + width) else {
            continue;
        };
        if !candidate.eq_ignore_ascii_case(DELIVERY_WORD) {
            continue;
        }
        let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let after_ok = bytes
            .get(start + width)
            .is_none_or(|b| !b.is_ascii_alphanumeric());
        if before_ok && after_ok {
            let replacement = if candidate.starts_with('D') {
                "Preparation"
            } else {
                "preparation"
            };
            return format!("{}{}{}", &label[..start], replacement, &label[start + width..]);
        }
    }
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: &str, cuisine: &str, delivery_time: &str) -> Restaurant {
        Restaurant {
            id: "r1".to_string(),
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            rating: 4.5,
            image: String::new(),
            is_open: true,
            delivery_time: delivery_time.to_string(),
            delivery_fee: 99,
            distance: "1.2 km".to_string(),
            minimum_order: 500,
            address: "Main Boulevard".to_string(),
            preparation_time: None,
        }
    }

    #[test]
    fn test_matches_search_on_name_or_cuisine() {
        let r = restaurant("Pizza Hut", "Italian", "25-35 min");
        assert!(r.matches_search("piz"));
        assert!(r.matches_search("ITAL"));
        assert!(r.matches_search(""));
        assert!(!r.matches_search("burger"));
    }

    #[test]
    fn test_pickup_time_prefers_preparation_time() {
        let mut r = restaurant("Pizza Hut", "Italian", "30 min delivery");
        r.preparation_time = Some("15 min".to_string());
        assert_eq!(r.pickup_time(), "15 min");
    }

    #[test]
    fn test_pickup_time_replaces_standalone_word_only() {
        assert_eq!(
            restaurant("a", "b", "30 min delivery").pickup_time(),
            "30 min preparation"
        );
        assert_eq!(
            restaurant("a", "b", "Delivery: 30 min").pickup_time(),
            "Preparation: 30 min"
        );
        assert_eq!(
            restaurant("a", "b", "nodeliveryzone 20 min").pickup_time(),
            "nodeliveryzone 20 min"
        );
        assert_eq!(restaurant("a", "b", "25-35 min").pickup_time(), "25-35 min");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let r = restaurant("KFC", "Fast Food", "20 min");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["isOpen"], true);
        assert_eq!(json["minimumOrder"], 500);
        assert!(json.get("preparationTime").is_none());
    }
}

use crate::store::{AppState, SelectionStore};
use crate::views;

#[derive(Debug, Clone, Copy)]
pub struct HomePage;

impl HomePage {
    pub fn render(&self, state: &AppState) -> String {
        let mut lines = vec![
            views::heading("Welcome", "How would you like to get your food today?"),
            views::rule(),
            "  go delivery   Food Delivery: order from restaurants in your area".to_string(),
            "  go takeaway   Take Away: pick up your order from restaurants near you".to_string(),
        ];
        if let Some(restaurant) = state.selected_restaurant() {
            lines.push(format!("  go menu       Continue ordering from {}", restaurant.name));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::restaurant;
    use common::types::service_type::ServiceType;

    #[test]
    fn test_home_offers_menu_shortcut_only_with_selection() {
        colored::control::set_override(false);
        let mut state = AppState::new();
        assert!(!HomePage.render(&state).contains("go menu"));

        state.select_restaurant(
            restaurant("kfc", "KFC", "Fast Food", true),
            ServiceType::Takeaway,
        );
        assert!(HomePage.render(&state).contains("Continue ordering from KFC"));
    }
}

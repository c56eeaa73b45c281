use crate::pages::listing::ListingPage;
use crate::store::AppState;
use crate::views;
use colored::*;
use common::types::restaurant::Restaurant;
use common::types::service_type::ServiceType;
use common::utils::format_pkr;

pub fn render(page: &ListingPage, state: &AppState) -> String {
    [
        views::heading("Food Delivery", "Order from restaurants in your area"),
        format!("  📍 Delivering to: {}", state.delivery_location.cyan()),
        format!("  🔎 Search: {}", search_label(page.search_query())),
        views::rule(),
        page.render_results(card),
    ]
    .join("\n")
}

pub(crate) fn search_label(query: &str) -> String {
    if query.is_empty() {
        "(restaurants or cuisines)".dimmed().to_string()
    } else {
        query.to_string()
    }
}

fn card(position: usize, restaurant: &Restaurant) -> String {
    let mut title = format!(
        "{}. {} {}  {}",
        position,
        restaurant.name.bold(),
        views::badge(&restaurant.cuisine),
        views::rating(restaurant.rating)
    );
    if !restaurant.is_open {
        title = format!("{title} {}", views::closed_badge());
    }
    [
        title,
        format!(
            "   {} · {} · Delivery Fee: {}",
            views::badge(ServiceType::Delivery.badge()),
            restaurant.delivery_time,
            format_pkr(restaurant.delivery_fee)
        ),
        format!(
            "   {} away · Min order: {}",
            restaurant.distance,
            format_pkr(restaurant.minimum_order)
        ),
        format!("   ➜ {}  (select {})", views::action(restaurant.is_open), restaurant.id),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::listing::ListingKind;
    use crate::test_support::pizza_and_kfc;
    use std::sync::Arc;

    #[test]
    fn test_delivery_cards_show_fees_and_actions() {
        colored::control::set_override(false);
        let mut page = ListingPage::new(ListingKind::Delivery);
        page.set_restaurants(Ok(Arc::new(pizza_and_kfc())));
        let mut state = AppState::new();
        state.delivery_location = "Gulberg".to_string();

        let screen = render(&page, &state);

        assert!(screen.contains("Food Delivery"));
        assert!(screen.contains("Delivering to: Gulberg"));
        assert!(screen.contains("Delivery Fee: PKR 99"));
        assert!(screen.contains("1.2 km away"));
        assert!(screen.contains("Min order: PKR 800"));
        assert!(screen.contains("Order Now"));
        assert!(screen.contains("[Closed]"));
    }
}

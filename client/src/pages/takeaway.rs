use crate::pages::delivery::search_label;
use crate::pages::listing::ListingPage;
use crate::views;
use colored::*;
use common::types::restaurant::Restaurant;
use common::types::service_type::ServiceType;

pub fn render(page: &ListingPage) -> String {
    [
        views::heading("Take Away Orders", "Pick up your order from restaurants near you"),
        format!("  🔎 Search: {}", search_label(page.search_query())),
        views::rule(),
        page.render_results(card),
    ]
    .join("\n")
}

fn card(position: usize, restaurant: &Restaurant) -> String {
    let mut title = format!(
        "{}. {} {}",
        position,
        restaurant.name.bold(),
        views::badge(ServiceType::Takeaway.badge()).green()
    );
    if !restaurant.is_open {
        title = format!("{title} {}", views::closed_badge());
    }
    [
        title,
        format!("   {}  {}", restaurant.cuisine, views::rating(restaurant.rating)),
        format!("   ⏱ Ready in {}", restaurant.pickup_time()),
        format!("   Pickup Address: {}", restaurant.address),
        format!("   ➜ {}  (select {})", views::action(restaurant.is_open), restaurant.id),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::listing::ListingKind;
    use crate::test_support::restaurant;
    use std::sync::Arc;

    #[test]
    fn test_takeaway_cards_show_pickup_details() {
        colored::control::set_override(false);
        let mut savour = restaurant("savour-foods", "Savour Foods", "Pakistani", true);
        savour.delivery_time = "30-40 min delivery".to_string();
        let mut page = ListingPage::new(ListingKind::Takeaway);
        page.set_restaurants(Ok(Arc::new(vec![savour])));

        let screen = render(&page);

        assert!(screen.contains("Take Away Orders"));
        assert!(screen.contains("[Take Away]"));
        assert!(screen.contains("Ready in 30-40 min preparation"));
        assert!(screen.contains("Pickup Address: 12 Main Boulevard"));
        assert!(!screen.contains("Delivery Fee"));
    }

    #[test]
    fn test_takeaway_shows_placeholders_while_loading() {
        colored::control::set_override(false);
        let screen = render(&ListingPage::new(ListingKind::Takeaway));
        assert!(screen.contains('░'));
    }
}

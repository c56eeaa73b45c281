use crate::query::QueryState;
use crate::router::Route;
use crate::store::SelectionStore;
use crate::views;
use common::constants::LISTING_PLACEHOLDERS;
use common::error::FetchError;
use common::types::restaurant::Restaurant;
use common::types::service_type::ServiceType;
use std::sync::Arc;

/// Which listing screen this is. Each maps to exactly one service type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Delivery,
    Takeaway,
}

impl ListingKind {
    pub fn service_type(&self) -> ServiceType {
        match self {
            ListingKind::Delivery => ServiceType::Delivery,
            ListingKind::Takeaway => ServiceType::Takeaway,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ListingKind::Delivery => Route::Delivery,
            ListingKind::Takeaway => Route::Takeaway,
        }
    }
}

/// How the user points at a restaurant card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// 1-based position in the filtered list.
    Position(usize),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Navigate(Route),
    /// Closed restaurants cannot be ordered from; nothing was changed.
    Closed(String),
    NotFound,
}

/// Restaurants whose name or cuisine contains `query`, ignoring case, in catalog order.
pub fn filter_restaurants<'a>(restaurants: &'a [Restaurant], query: &str) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|restaurant| restaurant.matches_search(query))
        .collect()
}

#[derive(Debug, Clone)]
pub struct ListingPage {
    kind: ListingKind,
    search_query: String,
    restaurants: QueryState<Restaurant>,
}

impl ListingPage {
    pub fn new(kind: ListingKind) -> Self {
        Self {
            kind,
            search_query: String::new(),
            restaurants: QueryState::Loading,
        }
    }

    pub fn kind(&self) -> ListingKind {
        self.kind
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_restaurants(&mut self, result: Result<Arc<Vec<Restaurant>>, FetchError>) {
        self.restaurants = match result {
            Ok(restaurants) => QueryState::Ready(restaurants),
            Err(e) => QueryState::Failed(e),
        };
    }

    pub fn is_loading(&self) -> bool {
        self.restaurants.is_loading()
    }

    pub fn visible(&self) -> Vec<&Restaurant> {
        filter_restaurants(self.restaurants.items(), &self.search_query)
    }

    /// Writes the selection for an open restaurant and asks to open its menu.
    /// Closed or unknown restaurants leave `store` untouched.
    pub fn select<S: SelectionStore>(&self, selector: &Selector, store: &mut S) -> SelectOutcome {
        let visible = self.visible();
        let found = match selector {
            Selector::Position(n) => n.checked_sub(1).and_then(|i| visible.get(i).copied()),
            Selector::Id(id) => visible.iter().copied().find(|r| &r.id == id),
        };
        match found {
            None => SelectOutcome::NotFound,
            Some(restaurant) if !restaurant.is_open => SelectOutcome::Closed(restaurant.name.clone()),
            Some(restaurant) => {
                store.select_restaurant(restaurant.clone(), self.kind.service_type());
                SelectOutcome::Navigate(Route::RestaurantMenu)
            }
        }
    }

    /// Placeholders while loading, the "no results" line when empty, cards otherwise.
    pub fn render_results(&self, card: fn(usize, &Restaurant) -> String) -> String {
        if self.is_loading() {
            return views::placeholder_cards(LISTING_PLACEHOLDERS);
        }
        let visible = self.visible();
        if visible.is_empty() {
            return views::empty_message("No restaurants found matching your search.");
        }
        visible
            .iter()
            .enumerate()
            .map(|(i, restaurant)| card(i + 1, restaurant))
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", views::rule()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppState;
    use crate::test_support::{pizza_and_kfc, restaurant};

    fn ready(kind: ListingKind, restaurants: Vec<Restaurant>) -> ListingPage {
        let mut page = ListingPage::new(kind);
        page.set_restaurants(Ok(Arc::new(restaurants)));
        page
    }

    fn names(restaurants: Vec<&Restaurant>) -> Vec<&str> {
        restaurants.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_filter_matches_name_or_cuisine_in_order() {
        let restaurants = vec![
            restaurant("a", "Burger Lab", "Fast Food", true),
            restaurant("b", "Pizza Hut", "Italian", true),
            restaurant("c", "Ginyaki", "Chinese", true),
            restaurant("d", "Fasta Pasta", "Italian", true),
        ];
        assert_eq!(
            names(filter_restaurants(&restaurants, "ital")),
            vec!["Pizza Hut", "Fasta Pasta"]
        );
        assert_eq!(
            names(filter_restaurants(&restaurants, "FAST")),
            vec!["Burger Lab", "Fasta Pasta"]
        );
        assert_eq!(filter_restaurants(&restaurants, "").len(), 4);
        assert!(filter_restaurants(&restaurants, "sushi").is_empty());
    }

    #[test]
    fn test_search_piz_shows_only_pizza_hut() {
        let mut page = ready(ListingKind::Delivery, pizza_and_kfc());
        page.set_search("piz");
        assert_eq!(names(page.visible()), vec!["Pizza Hut"]);
    }

    #[test]
    fn test_selecting_closed_restaurant_is_a_no_op() {
        let page = ready(ListingKind::Delivery, pizza_and_kfc());
        let mut state = AppState::new();

        let outcome = page.select(&Selector::Id("kfc".to_string()), &mut state);

        assert_eq!(outcome, SelectOutcome::Closed("KFC".to_string()));
        assert!(state.selected_restaurant().is_none());
        assert!(state.service_type().is_none());
    }

    #[test]
    fn test_selecting_open_restaurant_sets_delivery() {
        let page = ready(ListingKind::Delivery, pizza_and_kfc());
        let mut state = AppState::new();

        let outcome = page.select(&Selector::Position(1), &mut state);

        assert_eq!(outcome, SelectOutcome::Navigate(Route::RestaurantMenu));
        assert_eq!(state.selected_restaurant().unwrap().name, "Pizza Hut");
        assert_eq!(state.service_type(), Some(ServiceType::Delivery));
    }

    #[test]
    fn test_selecting_on_takeaway_sets_takeaway() {
        let page = ready(ListingKind::Takeaway, pizza_and_kfc());
        let mut state = AppState::new();

        page.select(&Selector::Id("pizza-hut".to_string()), &mut state);

        assert_eq!(state.service_type(), Some(ServiceType::Takeaway));
    }

    #[test]
    fn test_position_counts_within_filtered_list() {
        let mut page = ready(ListingKind::Delivery, pizza_and_kfc());
        page.set_search("fast");
        let mut state = AppState::new();

        assert_eq!(
            page.select(&Selector::Position(1), &mut state),
            SelectOutcome::Closed("KFC".to_string())
        );
        assert_eq!(page.select(&Selector::Position(2), &mut state), SelectOutcome::NotFound);
        assert_eq!(page.select(&Selector::Position(0), &mut state), SelectOutcome::NotFound);
    }

    #[test]
    fn test_loading_and_empty_states() {
        colored::control::set_override(false);
        let loading = ListingPage::new(ListingKind::Delivery);
        let rendered = loading.render_results(|_, r| r.name.clone());
        assert!(rendered.contains('░'));
        assert!(!rendered.contains("No restaurants found"));

        let mut page = ready(ListingKind::Delivery, pizza_and_kfc());
        page.set_search("sushi");
        assert!(
            page.render_results(|_, r| r.name.clone())
                .contains("No restaurants found matching your search.")
        );
    }

    #[test]
    fn test_failed_fetch_renders_empty_state() {
        colored::control::set_override(false);
        let mut page = ListingPage::new(ListingKind::Takeaway);
        page.set_restaurants(Err(FetchError::ConnectionLost));
        assert!(!page.is_loading());
        assert!(
            page.render_results(|_, r| r.name.clone())
                .contains("No restaurants found")
        );
    }
}

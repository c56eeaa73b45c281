use crate::modals::render_modal;
use crate::query::QueryState;
use crate::router::{guard_menu, menu_back_target, MenuGuard};
use crate::store::{AppState, SelectionStore};
use crate::views;
use colored::*;
use common::constants::{ALL_CATEGORIES, MENU_PLACEHOLDERS};
use common::error::FetchError;
use common::types::menu_item::MenuItem;
use common::types::restaurant::Restaurant;
use common::types::service_type::ServiceType;
use common::utils::format_pkr;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl CategoryFilter {
    /// `all` (any case) selects everything; any other text names one category.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(name.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

/// `all` followed by each distinct category in first-appearance order.
pub fn categories(items: &[MenuItem]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !out[1..].contains(&item.category) {
            out.push(item.category.clone());
        }
    }
    out
}

pub fn filter_items<'a>(items: &'a [MenuItem], filter: &CategoryFilter) -> Vec<&'a MenuItem> {
    match filter {
        CategoryFilter::All => items.iter().collect(),
        CategoryFilter::Named(category) => items.iter().filter(|i| &i.category == category).collect(),
    }
}

/// Informational lines that depend on how the order will be fulfilled.
pub fn service_info(service: Option<ServiceType>, restaurant: &Restaurant) -> Vec<String> {
    match service {
        Some(ServiceType::Delivery) => vec![
            format!(
                "🛵 Delivery Fee: {} · {} · {} away",
                format_pkr(restaurant.delivery_fee),
                restaurant.delivery_time,
                restaurant.distance
            ),
            format!("Minimum Order: {}", format_pkr(restaurant.minimum_order)),
        ],
        Some(ServiceType::Takeaway) => vec![
            format!("🏪 Pickup Address: {}", restaurant.address),
            format!("Ready in {}", restaurant.pickup_time()),
        ],
        Some(ServiceType::DineIn) | None => Vec::new(),
    }
}

#[derive(Debug, Clone)]
pub struct MenuPage {
    selected_category: CategoryFilter,
    menu_items: QueryState<MenuItem>,
}

impl Default for MenuPage {
    fn default() -> Self {
        Self {
            selected_category: CategoryFilter::All,
            menu_items: QueryState::Loading,
        }
    }
}

impl MenuPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.selected_category = filter;
    }

    pub fn set_menu_items(&mut self, result: Result<Arc<Vec<MenuItem>>, FetchError>) {
        self.menu_items = match result {
            Ok(items) => QueryState::Ready(items),
            Err(e) => QueryState::Failed(e),
        };
    }

    pub fn visible(&self) -> Vec<&MenuItem> {
        filter_items(self.menu_items.items(), &self.selected_category)
    }

    /// Item shown at 1-based `position` under the current category.
    pub fn item_at(&self, position: usize) -> Option<&MenuItem> {
        position
            .checked_sub(1)
            .and_then(|i| self.visible().get(i).copied())
    }

    pub fn render(&self, state: &AppState) -> String {
        let restaurant = match guard_menu(state) {
            MenuGuard::Render(restaurant) => restaurant,
            MenuGuard::RedirectHome => return String::new(),
        };
        let service = state.service_type();
        let back = menu_back_target(service);

        let mut title = format!("{}  {}", restaurant.name.bold(), views::rating(restaurant.rating));
        if let Some(service) = service {
            title = format!("{title}  {}", views::badge(service.badge()).green());
        }
        let mut lines = vec![
            format!("← back to {back}").dimmed().to_string(),
            title,
            restaurant.cuisine.dimmed().to_string(),
        ];
        lines.extend(service_info(service, restaurant).into_iter().map(|l| format!("  {l}")));
        lines.push(views::rule());

        if self.menu_items.is_loading() {
            lines.push(views::placeholder_cards(MENU_PLACEHOLDERS));
        } else {
            lines.push(self.render_categories());
            lines.push(self.render_items());
        }

        let count = state.cart_count();
        if count > 0 {
            lines.push(views::rule());
            lines.push(
                format!("🛒 {count} item(s) · {}  (cart)", format_pkr(state.cart.subtotal()))
                    .cyan()
                    .to_string(),
            );
        }
        if let Some(modal) = &state.modal {
            lines.push(String::new());
            lines.push(render_modal(modal, state));
        }
        lines.join("\n")
    }

    fn render_categories(&self) -> String {
        let labels = categories(self.menu_items.items())
            .into_iter()
            .map(|c| {
                if c == self.selected_category.label() {
                    format!("[{c}]").bold().to_string()
                } else {
                    c
                }
            })
            .collect::<Vec<_>>();
        format!("  Categories: {}", labels.join("  "))
    }

    fn render_items(&self) -> String {
        let visible = self.visible();
        if visible.is_empty() {
            return views::empty_message("No items found in this category.");
        }
        visible
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let popular = if item.is_popular {
                    format!(" {}", views::badge("Popular").yellow())
                } else {
                    String::new()
                };
                format!(
                    "{}. {}{}  {}\n   {}",
                    i + 1,
                    item.name.bold(),
                    popular,
                    format_pkr(item.price),
                    item.description.dimmed()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

use crate::store::SelectionStore;
use common::types::restaurant::Restaurant;
use common::types::service_type::ServiceType;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Delivery,
    Takeaway,
    RestaurantMenu,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Delivery => "/delivery",
            Route::Takeaway => "/takeaway",
            Route::RestaurantMenu => "/restaurant-menu",
        }
    }

    /// Accepts a path or a short screen name. Anything unknown lands on Home.
    pub fn from_path(path: &str) -> Route {
        match path.trim().trim_start_matches('/').to_ascii_lowercase().as_str() {
            "delivery" => Route::Delivery,
            "takeaway" | "take-away" => Route::Takeaway,
            "restaurant-menu" | "menu" => Route::RestaurantMenu,
            _ => Route::Home,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Outcome of the menu screen's guard.
#[derive(Debug, PartialEq)]
pub enum MenuGuard<'a> {
    RedirectHome,
    Render(&'a Restaurant),
}

pub fn guard_menu<S: SelectionStore>(store: &S) -> MenuGuard<'_> {
    match store.selected_restaurant() {
        Some(restaurant) => MenuGuard::Render(restaurant),
        None => MenuGuard::RedirectHome,
    }
}

/// Where the menu's back action leads for the current service type.
pub fn menu_back_target(service: Option<ServiceType>) -> Route {
    match service {
        Some(ServiceType::Delivery) => Route::Delivery,
        Some(ServiceType::Takeaway) => Route::Takeaway,
        Some(ServiceType::DineIn) | None => Route::Home,
    }
}

/// Current route plus the history of visited routes.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: Route::Home,
            history: Vec::new(),
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Applies route guards before anything is mounted.
    pub fn resolve<S: SelectionStore>(target: Route, store: &S) -> Route {
        match target {
            Route::RestaurantMenu => match guard_menu(store) {
                MenuGuard::Render(_) => Route::RestaurantMenu,
                MenuGuard::RedirectHome => Route::Home,
            },
            other => other,
        }
    }

    /// Moves to `target` after guarding it and returns the route actually landed on.
    pub fn navigate<S: SelectionStore>(&mut self, target: Route, store: &S) -> Route {
        let resolved = Self::resolve(target, store);
        if resolved != self.current {
            self.history.push(self.current);
            self.current = resolved;
        }
        resolved
    }

    /// Target of the `back` action from the current screen.
    pub fn back_target(&self, service: Option<ServiceType>) -> Route {
        match self.current {
            Route::RestaurantMenu => menu_back_target(service),
            Route::Delivery | Route::Takeaway | Route::Home => Route::Home,
        }
    }
}

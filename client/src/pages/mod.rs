pub mod delivery;
pub mod home;
pub mod listing;
pub mod restaurant_menu;
pub mod takeaway;

use crate::pages::home::HomePage;
use crate::pages::listing::{ListingKind, ListingPage};
use crate::pages::restaurant_menu::MenuPage;
use crate::query::Collection;
use crate::router::Route;
use crate::store::{AppState, SelectionStore};
use common::error::FetchError;
use common::messages::Resource;

/// The screen currently mounted. Built only for routes that passed their guard.
#[derive(Debug, Clone)]
pub enum Page {
    Home(HomePage),
    Listing(ListingPage),
    Menu(MenuPage),
}

impl Page {
    pub fn mount(route: Route) -> Page {
        match route {
            Route::Home => Page::Home(HomePage),
            Route::Delivery => Page::Listing(ListingPage::new(ListingKind::Delivery)),
            Route::Takeaway => Page::Listing(ListingPage::new(ListingKind::Takeaway)),
            Route::RestaurantMenu => Page::Menu(MenuPage::new()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::Home(_) => Route::Home,
            Page::Listing(listing) => listing.kind().route(),
            Page::Menu(_) => Route::RestaurantMenu,
        }
    }

    /// Collection this page needs once mounted.
    pub fn query(&self, state: &AppState) -> Option<Resource> {
        match self {
            Page::Home(_) => None,
            Page::Listing(_) => Some(Resource::Restaurants),
            Page::Menu(_) => Some(Resource::MenuItems {
                restaurant_id: state.selected_restaurant().map(|r| r.id.clone()),
            }),
        }
    }

    /// Feeds a resolved query into the page. Returns `false` if the page did not want it.
    pub fn apply(&mut self, result: Result<Collection, FetchError>) -> bool {
        match (self, result) {
            (Page::Listing(listing), Ok(Collection::Restaurants(restaurants))) => {
                listing.set_restaurants(Ok(restaurants));
                true
            }
            (Page::Listing(listing), Err(e)) => {
                listing.set_restaurants(Err(e));
                true
            }
            (Page::Menu(menu), Ok(Collection::MenuItems(items))) => {
                menu.set_menu_items(Ok(items));
                true
            }
            (Page::Menu(menu), Err(e)) => {
                menu.set_menu_items(Err(e));
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, state: &AppState) -> String {
        match self {
            Page::Home(home) => home.render(state),
            Page::Listing(listing) => match listing.kind() {
                ListingKind::Delivery => delivery::render(listing, state),
                ListingKind::Takeaway => takeaway::render(listing),
            },
            Page::Menu(menu) => menu.render(state),
        }
    }
}

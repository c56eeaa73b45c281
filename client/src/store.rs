use crate::modals::{Modal, Review};
use common::constants::DEFAULT_DELIVERY_LOCATION;
use common::types::cart::Cart;
use common::types::restaurant::Restaurant;
use common::types::service_type::ServiceType;

/// Read/write surface of the shared selection state used by the pages.
pub trait SelectionStore {
    fn selected_restaurant(&self) -> Option<&Restaurant>;
    fn service_type(&self) -> Option<ServiceType>;
    fn cart_count(&self) -> u32;
    fn is_cart_open(&self) -> bool;

    fn set_selected_restaurant(&mut self, restaurant: Option<Restaurant>);
    fn set_service_type(&mut self, service: Option<ServiceType>);
    fn set_cart_open(&mut self, open: bool);

    /// Restaurant and service are always written together before the menu is entered.
    fn select_restaurant(&mut self, restaurant: Restaurant, service: ServiceType) {
        self.set_selected_restaurant(Some(restaurant));
        self.set_service_type(Some(service));
    }
}

/// Session-wide client state. Owned by the `App` actor, which is its only writer.
#[derive(Debug, Clone)]
pub struct AppState {
    selected_restaurant: Option<Restaurant>,
    service_type: Option<ServiceType>,
    pub cart: Cart,
    /// At most one dialog is open; `Modal::Cart` doubles as the cart visibility flag.
    pub modal: Option<Modal>,
    pub delivery_location: String,
    pub last_review: Option<Review>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected_restaurant: None,
            service_type: None,
            cart: Cart::new(),
            modal: None,
            delivery_location: DEFAULT_DELIVERY_LOCATION.to_string(),
            last_review: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for AppState {
    fn selected_restaurant(&self) -> Option<&Restaurant> {
        self.selected_restaurant.as_ref()
    }

    fn service_type(&self) -> Option<ServiceType> {
        self.service_type
    }

    fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    fn is_cart_open(&self) -> bool {
        matches!(self.modal, Some(Modal::Cart))
    }

    /// A cart only ever holds dishes from one restaurant: switching to a
    /// different one empties it and closes any open dialog.
    fn set_selected_restaurant(&mut self, restaurant: Option<Restaurant>) {
        let current = self.selected_restaurant.as_ref().map(|r| r.id.as_str());
        let next = restaurant.as_ref().map(|r| r.id.as_str());
        if current.is_some() && current != next {
            self.cart.clear();
            self.modal = None;
        }
        self.selected_restaurant = restaurant;
    }

    fn set_service_type(&mut self, service: Option<ServiceType>) {
        self.service_type = service;
    }

    fn set_cart_open(&mut self, open: bool) {
        if open {
            self.modal = Some(Modal::Cart);
        } else if self.is_cart_open() {
            self.modal = None;
        }
    }
}

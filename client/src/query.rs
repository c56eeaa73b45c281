use common::error::FetchError;
use common::messages::Resource;
use common::types::menu_item::MenuItem;
use common::types::restaurant::Restaurant;
use std::sync::Arc;

/// A fetched, immutable collection as cached by the fetch layer.
#[derive(Debug, Clone)]
pub enum Collection {
    Restaurants(Arc<Vec<Restaurant>>),
    MenuItems(Arc<Vec<MenuItem>>),
}

impl Collection {
    pub fn len(&self) -> usize {
        match self {
            Collection::Restaurants(r) => r.len(),
            Collection::MenuItems(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this collection is the kind `resource` asked for.
    pub fn answers(&self, resource: &Resource) -> bool {
        matches!(
            (self, resource),
            (Collection::Restaurants(_), Resource::Restaurants)
                | (Collection::MenuItems(_), Resource::MenuItems { .. })
        )
    }
}

/// Per-page view of one query.
#[derive(Debug, Clone)]
pub enum QueryState<T> {
    Loading,
    Ready(Arc<Vec<T>>),
    Failed(FetchError),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// Fetched items, or nothing while loading or after a failure.
    pub fn items(&self) -> &[T] {
        match self {
            QueryState::Ready(items) => items.as_slice(),
            QueryState::Loading | QueryState::Failed(_) => &[],
        }
    }
}

use crate::commands::Command;
use crate::messages::internal_messages::{
    AppSnapshot, FetchQuery, Inspect, QueryResolved, UIMessage, UserCommand,
};
use crate::modals;
use crate::pages::Page;
use crate::pages::listing::{ListingKind, SelectOutcome};
use crate::pages::restaurant_menu::CategoryFilter;
use crate::router::{Route, Router};
use crate::store::{AppState, SelectionStore};
use crate::views;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;

/// Owns every piece of client state and is its only writer. Pages are
/// mounted here after the router's guards ran, and re-rendered after each
/// change.
pub struct App {
    pub state: AppState,
    pub router: Router,
    pub page: Page,
    /// Bumped on every mount so late query results can be told apart.
    pub mount_id: u64,
    pub fetcher: Recipient<FetchQuery>,
    pub view: Recipient<UIMessage>,
    pub logger: Logger,
}

impl App {
    pub fn new(fetcher: Recipient<FetchQuery>, view: Recipient<UIMessage>) -> Self {
        Self {
            state: AppState::new(),
            router: Router::new(),
            page: Page::mount(Route::Home),
            mount_id: 0,
            fetcher,
            view,
            logger: Logger::new("App", Color::Green),
        }
    }

    fn render(&self) {
        self.view
            .do_send(UIMessage::ShowScreen(self.page.render(&self.state)));
    }

    fn hint(&self, text: impl Into<String>) {
        self.view.do_send(UIMessage::ShowHint(text.into()));
    }

    /// Mounts the guarded target. Returns a hint when the guard redirected.
    fn go(&mut self, target: Route, ctx: &mut Context<Self>) -> Option<String> {
        let landed = self.router.navigate(target, &self.state);
        self.mount(landed, ctx);
        if landed == target {
            return None;
        }
        self.logger
            .debug(format!("{target} needs a selected restaurant, redirected to {landed}"));
        Some("Pick a restaurant first (`go delivery` or `go takeaway`).".into())
    }

    fn mount(&mut self, route: Route, ctx: &mut Context<Self>) {
        if route != Route::RestaurantMenu {
            self.state.modal = None;
        }
        self.mount_id += 1;
        self.page = Page::mount(route);
        self.logger
            .debug(format!("Mounted {route} (#{})", self.mount_id));

        if let Some(resource) = self.page.query(&self.state) {
            self.fetcher.do_send(FetchQuery {
                resource,
                mount_id: self.mount_id,
                reply_to: ctx.address().recipient(),
            });
        }
    }

    /// Runs one command against the current page. Returns feedback for the user.
    fn execute(&mut self, command: Command, ctx: &mut Context<Self>) -> Option<String> {
        if command.needs_menu() && !matches!(self.page, Page::Menu(_)) {
            return Some("Open a restaurant menu first (`go delivery`, then `select <n>`).".into());
        }

        match command {
            Command::Help => Some(views::help_text().to_string()),
            Command::Go(route) => self.go(route, ctx),
            Command::Back => {
                let target = self.router.back_target(self.state.service_type());
                self.go(target, ctx)
            }
            Command::Search(query) => match &mut self.page {
                Page::Listing(listing) => {
                    listing.set_search(query);
                    None
                }
                _ => Some("Search is available on the Delivery and Take Away screens.".into()),
            },
            Command::Location(location) => match &self.page {
                Page::Listing(listing) if listing.kind() == ListingKind::Delivery => {
                    self.state.delivery_location = location;
                    None
                }
                _ => Some("The delivery location is set on the Delivery screen.".into()),
            },
            Command::Select(selector) => {
                let Page::Listing(listing) = &self.page else {
                    return Some("Pick a restaurant from the Delivery or Take Away screen.".into());
                };
                match listing.select(&selector, &mut self.state) {
                    SelectOutcome::Navigate(route) => self.go(route, ctx),
                    SelectOutcome::Closed(name) => Some(format!("{name} is closed right now.")),
                    SelectOutcome::NotFound => Some("No such restaurant in the list.".into()),
                }
            }
            Command::Category(name) => {
                if let Page::Menu(menu) = &mut self.page {
                    menu.set_category(CategoryFilter::parse(&name));
                }
                None
            }
            Command::Add {
                position,
                quantity,
                note,
            } => {
                let item = match &self.page {
                    Page::Menu(menu) => menu.item_at(position).cloned(),
                    _ => None,
                };
                match item {
                    Some(item) => {
                        modals::open_add_to_cart(&mut self.state, item, quantity, note).err()
                    }
                    None => Some(format!("No item #{position} in this category.")),
                }
            }
            Command::Confirm => Some(modals::confirm_add_to_cart(&mut self.state).unwrap_or_else(|e| e)),
            Command::Cart => {
                self.state.set_cart_open(true);
                None
            }
            Command::Close => {
                self.state.modal = None;
                None
            }
            Command::Remove(item_id) => (!self.state.cart.remove(&item_id))
                .then(|| format!("`{item_id}` is not in your cart.")),
            Command::Quantity { item_id, quantity } => self
                .state
                .cart
                .set_quantity(&item_id, quantity)
                .err()
                .map(|e| e.to_string()),
            Command::Checkout => modals::checkout(&mut self.state).err(),
            Command::Next => modals::next(&mut self.state).err(),
            Command::Split(people) => modals::split(&mut self.state, people).err(),
            Command::Review { rating, comment } => {
                Some(modals::review(&mut self.state, rating, comment).unwrap_or_else(|e| e))
            }
            // The terminal handles quitting before commands reach the app.
            Command::Quit => None,
        }
    }
}

impl Actor for App {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.logger.info("App started");
        self.mount(Route::Home, ctx);
        self.render();
    }
}

impl Handler<UserCommand> for App {
    type Result = ();

    fn handle(&mut self, msg: UserCommand, ctx: &mut Self::Context) -> Self::Result {
        self.logger.debug(format!("Command: {:?}", msg.0));
        let hint = self.execute(msg.0, ctx);
        self.render();
        if let Some(hint) = hint {
            self.hint(hint);
        }
    }
}

impl Handler<QueryResolved> for App {
    type Result = ();

    fn handle(&mut self, msg: QueryResolved, _ctx: &mut Self::Context) -> Self::Result {
        if msg.mount_id != self.mount_id {
            self.logger.debug(format!(
                "Dropping {} for unmounted page #{}",
                msg.resource, msg.mount_id
            ));
            return;
        }
        if let Err(e) = &msg.result {
            if e.is_unauthorized() {
                self.logger.error(format!("{}: {e}", msg.resource));
                self.view.do_send(UIMessage::Fatal(e.to_string()));
                return;
            }
            self.logger.warn(format!("{} could not be loaded: {e}", msg.resource));
        }
        if self.page.apply(msg.result) {
            self.render();
        }
    }
}

impl Handler<Inspect> for App {
    type Result = MessageResult<Inspect>;

    fn handle(&mut self, _msg: Inspect, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(AppSnapshot {
            route: self.page.route(),
            mount_id: self.mount_id,
            state: self.state.clone(),
        })
    }
}

use colored::*;

const WIDTH: usize = 60;

pub fn welcome_banner() -> String {
    [
        "═".repeat(WIDTH),
        format!("{:^WIDTH$}", "🍕  FOOD ORDERING  🍕"),
        format!("{:^WIDTH$}", "type `help` for commands"),
        "═".repeat(WIDTH),
    ]
    .join("\n")
}

pub fn help_text() -> &'static str {
    "Commands:
  go <home|delivery|takeaway|menu>   open a screen
  back                               leave the current screen
  search [text]                      filter restaurants by name or cuisine
  location <text>                    set the delivery location
  select <n|id>                      order from a restaurant
  category <name|all>                filter the menu
  add <n> [qty] [note...]            add a menu item to the cart
  confirm | close                    confirm or close the open dialog
  cart                               open the cart
  remove <id> | qty <id> <n>         edit the cart
  checkout | next | split <n>        go through checkout
  review <1-5> [comment]             rate your order
  quit"
}

pub fn heading(title: &str, subtitle: &str) -> String {
    format!("{}\n{}", title.bold(), subtitle.dimmed())
}

pub fn rule() -> String {
    "─".repeat(WIDTH).dimmed().to_string()
}

pub fn modal_title(title: &str) -> String {
    format!("┌─ {} ─", title).bold().to_string()
}

pub fn badge(text: &str) -> String {
    format!("[{text}]")
}

pub fn closed_badge() -> String {
    badge("Closed").red().to_string()
}

pub fn rating(value: f32) -> String {
    format!("★ {value:.1}").yellow().to_string()
}

/// Grey stand-ins shown while a collection is loading.
pub fn placeholder_cards(count: usize) -> String {
    (0..count)
        .map(|_| format!("  {}\n  {}", "░".repeat(24), "░".repeat(16)).dimmed().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn empty_message(text: &str) -> String {
    format!("\n{:^WIDTH$}\n", text).dimmed().to_string()
}

pub fn action(is_open: bool) -> &'static str {
    if is_open { "Order Now" } else { "Closed" }
}

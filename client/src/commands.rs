use crate::pages::listing::Selector;
use crate::router::Route;

/// One line typed by the user, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Go(Route),
    Back,
    Search(String),
    Location(String),
    Select(Selector),
    Category(String),
    Add {
        position: usize,
        quantity: u32,
        note: Option<String>,
    },
    Confirm,
    Cart,
    Close,
    Remove(String),
    Quantity { item_id: String, quantity: u32 },
    Checkout,
    Next,
    Split(u32),
    Review { rating: u8, comment: Option<String> },
    Quit,
}

impl Command {
    /// Commands that act on the menu screen or the dialogs it hosts.
    pub fn needs_menu(&self) -> bool {
        matches!(
            self,
            Command::Category(_)
                | Command::Add { .. }
                | Command::Confirm
                | Command::Cart
                | Command::Close
                | Command::Remove(_)
                | Command::Quantity { .. }
                | Command::Checkout
                | Command::Next
                | Command::Split(_)
                | Command::Review { .. }
        )
    }
}

fn rest(words: &[&str]) -> Option<String> {
    let text = words.join(" ");
    if text.is_empty() { None } else { Some(text) }
}

fn number<T: std::str::FromStr>(word: Option<&&str>, what: &str) -> Result<T, String> {
    let word = word.ok_or_else(|| format!("Missing {what}."))?;
    word.parse()
        .map_err(|_| format!("`{word}` is not a valid {what}."))
}

pub fn parse(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((head, args)) = words.split_first() else {
        return Err("Type `help` to see the available commands.".to_string());
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "go" => {
            let target = args.first().ok_or("Usage: go <home|delivery|takeaway|menu>")?;
            Command::Go(Route::from_path(target))
        }
        "back" => Command::Back,
        "search" => Command::Search(rest(args).unwrap_or_default()),
        "location" => Command::Location(rest(args).ok_or("Usage: location <text>")?),
        "select" => {
            let target = args.first().ok_or("Usage: select <n|id>")?;
            match target.parse::<usize>() {
                Ok(position) => Command::Select(Selector::Position(position)),
                Err(_) => Command::Select(Selector::Id(target.to_string())),
            }
        }
        "category" => Command::Category(rest(args).ok_or("Usage: category <name|all>")?),
        "add" => {
            let position = number(args.first(), "item number")?;
            let (quantity, note_start) = match args.get(1).map(|w| w.parse::<u32>()) {
                Some(Ok(0)) => return Err("Quantity must be at least 1.".to_string()),
                Some(Ok(quantity)) => (quantity, 2),
                _ => (1, 1),
            };
            Command::Add {
                position,
                quantity,
                note: rest(args.get(note_start..).unwrap_or_default()),
            }
        }
        "confirm" => Command::Confirm,
        "cart" => Command::Cart,
        "close" => Command::Close,
        "remove" => Command::Remove(args.first().ok_or("Usage: remove <item-id>")?.to_string()),
        "qty" => Command::Quantity {
            item_id: args.first().ok_or("Usage: qty <item-id> <n>")?.to_string(),
            quantity: number(args.get(1), "quantity")?,
        },
        "checkout" => Command::Checkout,
        "next" => Command::Next,
        "split" => Command::Split(number(args.first(), "number of people")?),
        "review" => Command::Review {
            rating: number(args.first(), "rating")?,
            comment: rest(args.get(1..).unwrap_or_default()),
        },
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command `{other}`. Type `help`.")),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_navigation() {
        assert_eq!(parse("go delivery"), Ok(Command::Go(Route::Delivery)));
        assert_eq!(parse("  GO   menu "), Ok(Command::Go(Route::RestaurantMenu)));
        assert_eq!(parse("go nowhere"), Ok(Command::Go(Route::Home)));
        assert!(parse("go").is_err());
        assert_eq!(parse("back"), Ok(Command::Back));
    }

    #[test]
    fn test_search_keeps_spaces_and_allows_clearing() {
        assert_eq!(parse("search pizza hut"), Ok(Command::Search("pizza hut".to_string())));
        assert_eq!(parse("search"), Ok(Command::Search(String::new())));
    }

    #[test]
    fn test_select_by_position_or_id() {
        assert_eq!(parse("select 2"), Ok(Command::Select(Selector::Position(2))));
        assert_eq!(
            parse("select pizza-hut"),
            Ok(Command::Select(Selector::Id("pizza-hut".to_string())))
        );
    }

    #[test]
    fn test_add_with_optional_quantity_and_note() {
        assert_eq!(
            parse("add 3"),
            Ok(Command::Add { position: 3, quantity: 1, note: None })
        );
        assert_eq!(
            parse("add 1 2 extra cheese"),
            Ok(Command::Add {
                position: 1,
                quantity: 2,
                note: Some("extra cheese".to_string())
            })
        );
        assert_eq!(
            parse("add 1 no onions"),
            Ok(Command::Add {
                position: 1,
                quantity: 1,
                note: Some("no onions".to_string())
            })
        );
        assert!(parse("add 1 0").is_err());
        assert!(parse("add x").is_err());
    }

    #[test]
    fn test_checkout_commands() {
        assert_eq!(parse("split 3"), Ok(Command::Split(3)));
        assert!(parse("split many").is_err());
        assert_eq!(
            parse("qty m1 4"),
            Ok(Command::Quantity { item_id: "m1".to_string(), quantity: 4 })
        );
        assert_eq!(
            parse("review 5 lovely"),
            Ok(Command::Review { rating: 5, comment: Some("lovely".to_string()) })
        );
    }

    #[test]
    fn test_unknown_and_empty_lines() {
        assert!(parse("").is_err());
        assert!(parse("dance").unwrap_err().contains("Unknown command"));
    }
}

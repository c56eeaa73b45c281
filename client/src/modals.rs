use crate::store::{AppState, SelectionStore};
use crate::views;
use common::constants::{MAX_QUANTITY_PER_LINE, MAX_SPLIT_PEOPLE};
use common::types::menu_item::MenuItem;
use common::types::service_type::ServiceType;
use common::utils::format_pkr;
use uuid::Uuid;

/// Dialogs hosted by the menu screen. Only one is open at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Cart,
    AddToCart(AddToCartDraft),
    DeliveryDetails,
    Payment,
    SplitBill { people: u32 },
    OrderConfirmation { reference: String },
    Review { reference: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddToCartDraft {
    pub item: MenuItem,
    pub quantity: u32,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub order_reference: String,
    pub rating: u8,
    pub comment: Option<String>,
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self {
            Modal::Cart => "Your Cart",
            Modal::AddToCart(_) => "Add to Cart",
            Modal::DeliveryDetails => "Delivery Details",
            Modal::Payment => "Payment",
            Modal::SplitBill { .. } => "Split Bill",
            Modal::OrderConfirmation { .. } => "Order Confirmed",
            Modal::Review { .. } => "Rate your order",
        }
    }
}

/// Cart subtotal plus the delivery fee when the order is delivered.
pub fn payable_total(state: &AppState) -> u64 {
    let subtotal = state.cart.subtotal();
    match (state.service_type(), state.selected_restaurant()) {
        (Some(ServiceType::Delivery), Some(restaurant)) => {
            subtotal + u64::from(restaurant.delivery_fee)
        }
        _ => subtotal,
    }
}

/// Even shares; the first share absorbs the remainder. `people` is clamped
/// to `1..=MAX_SPLIT_PEOPLE`.
pub fn split_evenly(total: u64, people: u32) -> Vec<u64> {
    let people = people.clamp(1, MAX_SPLIT_PEOPLE);
    let share = total / u64::from(people);
    let mut shares = vec![share; people as usize];
    shares[0] += total % u64::from(people);
    shares
}

fn order_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("ORD-{}", id[..8].to_uppercase())
}

pub fn open_add_to_cart(
    state: &mut AppState,
    item: MenuItem,
    quantity: u32,
    special_instructions: Option<String>,
) -> Result<(), String> {
    if quantity > MAX_QUANTITY_PER_LINE {
        return Err(format!("At most {MAX_QUANTITY_PER_LINE} of one item per order."));
    }
    state.modal = Some(Modal::AddToCart(AddToCartDraft {
        item,
        quantity: quantity.max(1),
        special_instructions,
    }));
    Ok(())
}

/// Commits an open add-to-cart draft. Returns a confirmation line.
pub fn confirm_add_to_cart(state: &mut AppState) -> Result<String, String> {
    match state.modal.take() {
        Some(Modal::AddToCart(draft)) => {
            let added = state.cart.add(
                draft.item.clone(),
                draft.quantity,
                draft.special_instructions.clone(),
            );
            match added {
                Ok(()) => Ok(format!(
                    "Added {} × {} to your cart",
                    draft.quantity, draft.item.name
                )),
                Err(e) => {
                    state.modal = Some(Modal::AddToCart(draft));
                    Err(e.to_string())
                }
            }
        }
        other => {
            state.modal = other;
            Err("Nothing to confirm. Use `add <n>` on a menu item first.".to_string())
        }
    }
}

pub fn checkout(state: &mut AppState) -> Result<(), String> {
    if state.cart.is_empty() {
        return Err("Your cart is empty.".to_string());
    }
    state.modal = Some(match state.service_type() {
        Some(ServiceType::Delivery) => Modal::DeliveryDetails,
        _ => Modal::Payment,
    });
    Ok(())
}

/// Moves the checkout flow one step forward.
pub fn next(state: &mut AppState) -> Result<(), String> {
    let next = match state.modal.take() {
        Some(Modal::Cart) => {
            return checkout(state).inspect_err(|_| state.modal = Some(Modal::Cart));
        }
        Some(Modal::DeliveryDetails) => Some(Modal::Payment),
        Some(Modal::Payment) | Some(Modal::SplitBill { .. }) => {
            state.cart.clear();
            Some(Modal::OrderConfirmation {
                reference: order_reference(),
            })
        }
        Some(Modal::OrderConfirmation { reference }) => Some(Modal::Review { reference }),
        Some(Modal::Review { .. }) => None,
        other @ (Some(Modal::AddToCart(_)) | None) => {
            state.modal = other;
            return Err("Nothing to continue.".to_string());
        }
    };
    state.modal = next;
    Ok(())
}

pub fn split(state: &mut AppState, people: u32) -> Result<(), String> {
    if !(1..=MAX_SPLIT_PEOPLE).contains(&people) {
        return Err(format!(
            "Split between 1 and {MAX_SPLIT_PEOPLE} people."
        ));
    }
    match state.modal {
        Some(Modal::Payment) | Some(Modal::SplitBill { .. }) => {
            state.modal = Some(Modal::SplitBill { people });
            Ok(())
        }
        _ => Err("The bill can only be split during payment.".to_string()),
    }
}

pub fn review(state: &mut AppState, rating: u8, comment: Option<String>) -> Result<String, String> {
    if !(1..=5).contains(&rating) {
        return Err("Rating must be between 1 and 5.".to_string());
    }
    match state.modal.take() {
        Some(Modal::Review { reference }) => {
            state.last_review = Some(Review {
                order_reference: reference,
                rating,
                comment,
            });
            Ok("Thanks for your review!".to_string())
        }
        other => {
            state.modal = other;
            Err("There is no order to review.".to_string())
        }
    }
}

pub fn render_modal(modal: &Modal, state: &AppState) -> String {
    let mut lines = vec![views::modal_title(modal.title())];
    match modal {
        Modal::Cart => {
            if state.cart.is_empty() {
                lines.push("  Your cart is empty.".to_string());
            }
            for line in state.cart.lines() {
                lines.push(format!(
                    "  [{}] {} × {}  {}",
                    line.item.id,
                    line.quantity,
                    line.item.name,
                    format_pkr(line.total())
                ));
                if let Some(note) = &line.special_instructions {
                    lines.push(format!("      note: {note}"));
                }
            }
            lines.push(format!("  Subtotal: {}", format_pkr(state.cart.subtotal())));
            lines.push("  remove <id> · qty <id> <n> · checkout · close".to_string());
        }
        Modal::AddToCart(draft) => {
            lines.push(format!("  {}: {}", draft.item.name, draft.item.description));
            lines.push(format!(
                "  Quantity: {}  Total: {}",
                draft.quantity,
                format_pkr(u64::from(draft.item.price) * u64::from(draft.quantity))
            ));
            if let Some(note) = &draft.special_instructions {
                lines.push(format!("  Special instructions: {note}"));
            }
            lines.push("  confirm · close".to_string());
        }
        Modal::DeliveryDetails => {
            lines.push(format!("  Deliver to: {}", state.delivery_location));
            if let Some(restaurant) = state.selected_restaurant() {
                lines.push(format!("  Estimated time: {}", restaurant.delivery_time));
            }
            lines.push("  next · close".to_string());
        }
        Modal::Payment => {
            lines.push(format!("  Subtotal: {}", format_pkr(state.cart.subtotal())));
            if let (Some(ServiceType::Delivery), Some(restaurant)) =
                (state.service_type(), state.selected_restaurant())
            {
                lines.push(format!("  Delivery Fee: {}", format_pkr(restaurant.delivery_fee)));
            }
            lines.push(format!("  Total: {}", format_pkr(payable_total(state))));
            lines.push("  next (pay) · split <n> · close".to_string());
        }
        Modal::SplitBill { people } => {
            let shares = split_evenly(payable_total(state), *people);
            for (i, share) in shares.iter().enumerate() {
                lines.push(format!("  Person {}: {}", i + 1, format_pkr(*share)));
            }
            lines.push("  next (pay) · split <n> · close".to_string());
        }
        Modal::OrderConfirmation { reference } => {
            lines.push(format!("  Order reference: {reference}"));
            lines.push("  next (review) · close".to_string());
        }
        Modal::Review { reference } => {
            lines.push(format!("  How was order {reference}?"));
            lines.push("  review <1-5> [comment] · next (skip)".to_string());
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{menu_item, restaurant};

    fn delivery_state() -> AppState {
        let mut state = AppState::new();
        state.select_restaurant(
            restaurant("pizza-hut", "Pizza Hut", "Italian", true),
            ServiceType::Delivery,
        );
        state
    }

    #[test]
    fn test_split_evenly_gives_remainder_to_first() {
        assert_eq!(split_evenly(1000, 3), vec![334, 333, 333]);
        assert_eq!(split_evenly(500, 0), vec![500]);
    }

    #[test]
    fn test_payable_total_adds_fee_only_for_delivery() {
        let mut state = delivery_state();
        state.cart.add(menu_item("m1", "Pizza", 1000), 1, None).unwrap();
        assert_eq!(payable_total(&state), 1099);

        state.set_service_type(Some(ServiceType::Takeaway));
        assert_eq!(payable_total(&state), 1000);
    }

    #[test]
    fn test_add_to_cart_draft_is_committed_on_confirm() {
        let mut state = delivery_state();
        open_add_to_cart(&mut state, menu_item("m1", "Pizza", 1000), 2, None).unwrap();
        assert_eq!(state.cart_count(), 0);

        let hint = confirm_add_to_cart(&mut state).unwrap();
        assert!(hint.contains("2 × Dish m1"));
        assert_eq!(state.cart_count(), 2);
        assert!(state.modal.is_none());
        assert!(confirm_add_to_cart(&mut state).is_err());
    }

    #[test]
    fn test_delivery_checkout_walks_every_step() {
        let mut state = delivery_state();
        assert!(checkout(&mut state).is_err());

        state.cart.add(menu_item("m1", "Pizza", 1000), 1, None).unwrap();
        state.set_cart_open(true);
        next(&mut state).unwrap();
        assert_eq!(state.modal, Some(Modal::DeliveryDetails));
        next(&mut state).unwrap();
        assert_eq!(state.modal, Some(Modal::Payment));
        split(&mut state, 2).unwrap();
        assert_eq!(state.modal, Some(Modal::SplitBill { people: 2 }));
        next(&mut state).unwrap();

        let reference = match &state.modal {
            Some(Modal::OrderConfirmation { reference }) => reference.clone(),
            other => panic!("unexpected modal {other:?}"),
        };
        assert!(reference.starts_with("ORD-"));
        assert!(state.cart.is_empty());

        next(&mut state).unwrap();
        assert!(review(&mut state, 6, None).is_err());
        review(&mut state, 5, Some("great".to_string())).unwrap();
        assert!(state.modal.is_none());
        assert_eq!(state.last_review.as_ref().unwrap().order_reference, reference);
    }

    #[test]
    fn test_takeaway_checkout_skips_delivery_details() {
        let mut state = delivery_state();
        state.set_service_type(Some(ServiceType::Takeaway));
        state.cart.add(menu_item("m1", "Pizza", 1000), 1, None).unwrap();
        checkout(&mut state).unwrap();
        assert_eq!(state.modal, Some(Modal::Payment));
    }

    #[test]
    fn test_split_outside_payment_is_rejected() {
        let mut state = delivery_state();
        assert!(split(&mut state, 2).is_err());
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_split_is_capped_at_twenty_people() {
        let mut state = delivery_state();
        state.cart.add(menu_item("m1", "Pizza", 1000), 1, None).unwrap();
        state.modal = Some(Modal::Payment);

        assert!(split(&mut state, 4_000_000_000).is_err());
        assert!(split(&mut state, MAX_SPLIT_PEOPLE + 1).is_err());
        assert_eq!(state.modal, Some(Modal::Payment));

        split(&mut state, MAX_SPLIT_PEOPLE).unwrap();
        let rendered = render_modal(&Modal::SplitBill { people: MAX_SPLIT_PEOPLE }, &state);
        assert_eq!(rendered.matches("Person ").count(), 20);
        assert_eq!(split_evenly(1099, u32::MAX).len(), 20);
    }

    #[test]
    fn test_huge_quantities_are_refused_and_cart_still_renders() {
        colored::control::set_override(false);
        let mut state = delivery_state();
        state.cart.add(menu_item("m1", "Pizza", 1200), 1, None).unwrap();

        assert!(state.cart.set_quantity("m1", 4_000_000).is_err());
        assert!(open_add_to_cart(&mut state, menu_item("m2", "Sides", 400), u32::MAX, None).is_err());
        assert!(state.modal.is_none());

        let rendered = render_modal(&Modal::Cart, &state);
        assert!(rendered.contains("Subtotal: PKR 1200"));
    }

    #[test]
    fn test_confirm_past_the_cap_keeps_the_draft_open() {
        let mut state = delivery_state();
        state.cart.add(menu_item("m1", "Pizza", 1000), 98, None).unwrap();
        open_add_to_cart(&mut state, menu_item("m1", "Pizza", 1000), 5, None).unwrap();

        let err = confirm_add_to_cart(&mut state).unwrap_err();

        assert!(err.contains("At most 99"));
        assert!(matches!(state.modal, Some(Modal::AddToCart(_))));
        assert_eq!(state.cart_count(), 98);
    }
}

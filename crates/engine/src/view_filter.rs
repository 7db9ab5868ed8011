//! View-based row visibility and the financial gate. Both consult the
//! static view registry; neither mutates its input.

use contracts::domain::Order;
use contracts::views::{view_config, UserView};

/// Rows that a limited view gets to see (order-preserving slice, not a
/// sample).
pub const LIMITED_VIEW_ROW_CAP: usize = 10;

/// Rows that can be scoped to a single customer. The client view keeps
/// only rows whose email matches the simulated user identity.
pub trait CustomerScoped {
    fn customer_email(&self) -> Option<&str>;
}

impl CustomerScoped for Order {
    fn customer_email(&self) -> Option<&str> {
        Some(&self.customer_email)
    }
}

/// Restrict row visibility for a view.
///
/// - Client view with a known user: only rows belonging to that email
///   (exact, case-sensitive match).
/// - Views without `canViewAllOrders`: the first `LIMITED_VIEW_ROW_CAP`
///   rows.
/// - Everything else: the data unchanged.
pub fn filter_data_by_view<T: CustomerScoped + Clone>(
    data: &[T],
    view: UserView,
    user_email: Option<&str>,
) -> Vec<T> {
    if view == UserView::VistaCliente {
        if let Some(email) = user_email {
            return data
                .iter()
                .filter(|item| item.customer_email() == Some(email))
                .cloned()
                .collect();
        }
    }
    if !view_config(view).permissions.can_view_all_orders {
        return data.iter().take(LIMITED_VIEW_ROW_CAP).cloned().collect();
    }
    data.to_vec()
}

/// Whether monetary fields must be hidden for a view. Consumed by every
/// card, chart and table that shows money.
pub fn hide_financial_data(view: UserView) -> bool {
    !view_config(view).permissions.can_view_financials
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;

    /// Seed orders plus clones with shifted ids, to get past the cap.
    fn twelve_orders() -> Vec<Order> {
        let mut orders: Vec<Order> = store::orders().to_vec();
        for i in 0..4 {
            let mut o = orders[i].clone();
            o.id = format!("ORD-2024-{:03}", 100 + i);
            orders.push(o);
        }
        orders
    }

    #[test]
    fn client_view_sees_only_own_orders() {
        let result = filter_data_by_view(
            store::orders(),
            UserView::VistaCliente,
            Some("ana.ruiz@tecnomarket.es"),
        );
        assert_eq!(result.len(), 2);
        assert!(result
            .iter()
            .all(|o| o.customer_email == "ana.ruiz@tecnomarket.es"));
    }

    #[test]
    fn client_view_with_unknown_email_is_empty() {
        let result = filter_data_by_view(
            store::orders(),
            UserView::VistaCliente,
            Some("nadie@example.com"),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn email_match_is_case_sensitive() {
        let result = filter_data_by_view(
            store::orders(),
            UserView::VistaCliente,
            Some("ANA.RUIZ@TECNOMARKET.ES"),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn full_access_view_returns_data_unchanged() {
        let orders = twelve_orders();
        let result = filter_data_by_view(&orders, UserView::TorreControl, None);
        assert_eq!(result.len(), orders.len());
    }

    #[test]
    fn limited_view_truncates_to_first_ten() {
        let orders = twelve_orders();
        let result = filter_data_by_view(&orders, UserView::StockProductos, None);
        assert_eq!(result.len(), LIMITED_VIEW_ROW_CAP);
        // Order-preserving slice.
        for (got, expected) in result.iter().zip(orders.iter()) {
            assert_eq!(got.id, expected.id);
        }
    }

    #[test]
    fn financial_gate_negates_view_permission() {
        assert!(!hide_financial_data(UserView::DireccionGeneral));
        assert!(hide_financial_data(UserView::TorreControl));
        assert!(!hide_financial_data(UserView::VistaCliente));
        assert!(hide_financial_data(UserView::StockProductos));
    }
}

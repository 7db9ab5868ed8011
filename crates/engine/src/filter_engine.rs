//! The filter application engine: a pure function from (orders, filter
//! state) to the visible subset. Predicates are AND-combined; a state
//! with no active filters short-circuits to the full dataset so the
//! default date window never hides valid rows.

use contracts::domain::{Order, Product};
use contracts::filters::FilterState;

/// Apply the current filter state to an order list.
pub fn apply_filters(orders: &[Order], filters: &FilterState, products: &[Product]) -> Vec<Order> {
    if !filters.has_active_filters() {
        return orders.to_vec();
    }
    orders
        .iter()
        .filter(|o| order_matches(o, filters, products))
        .cloned()
        .collect()
}

fn order_matches(order: &Order, filters: &FilterState, products: &[Product]) -> bool {
    if !filters.date_range.contains(order.date) {
        return false;
    }
    if !filters.statuses.is_empty() && !filters.statuses.contains(&order.status) {
        return false;
    }
    if !filters.cities.is_empty() && !filters.cities.contains(&order.location.city) {
        return false;
    }
    if !filters.channels.is_empty() && !filters.channels.contains(&order.channel) {
        return false;
    }
    if !filters.categories.is_empty() && !category_matches(order, filters, products) {
        return false;
    }
    if !filters.customers.is_empty() && !filters.customers.contains(&order.customer_id) {
        return false;
    }
    if !filters.amount_range.contains(order.amount) {
        return false;
    }
    let term = filters.search_term.trim();
    if !term.is_empty() && !search_matches(order, term) {
        return false;
    }
    true
}

/// Category is a join against the product store: the order matches when
/// any of its product ids resolves to a product in one of the selected
/// categories.
fn category_matches(order: &Order, filters: &FilterState, products: &[Product]) -> bool {
    order.product_ids.iter().any(|pid| {
        products
            .iter()
            .find(|p| &p.id == pid)
            .map(|p| filters.categories.contains(&p.category))
            .unwrap_or(false)
    })
}

/// Case-insensitive substring search over the order's display fields.
/// Matches when any field matches.
fn search_matches(order: &Order, term: &str) -> bool {
    let term = term.to_lowercase();
    let hit = |s: &str| s.to_lowercase().contains(&term);
    hit(&order.customer)
        || hit(&order.customer_email)
        || hit(&order.id)
        || hit(&order.address)
        || order.products.iter().any(|p| hit(p))
        || hit(&order.sales_rep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;
    use chrono::NaiveDate;
    use contracts::enums::{OrderStatus, ProductCategory, SalesChannel};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// A filter state whose date window spans the whole seed year, so
    /// tests exercise the set predicates in isolation.
    fn wide_filters() -> FilterState {
        let mut f = FilterState::new(today());
        f.set_custom_range(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        );
        f
    }

    #[test]
    fn default_filters_return_input_unchanged() {
        let f = FilterState::new(today());
        let result = apply_filters(store::orders(), &f, store::products());
        assert_eq!(result.len(), store::orders().len());
        let ids: Vec<&str> = result.iter().map(|o| o.id.as_str()).collect();
        let expected: Vec<&str> = store::orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn pending_filter_yields_the_two_seeded_orders() {
        let mut f = wide_filters();
        f.statuses = vec![OrderStatus::Pendiente];
        let result = apply_filters(store::orders(), &f, store::products());
        let ids: Vec<&str> = result.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-2024-002", "ORD-2024-007"]);
    }

    #[test]
    fn result_is_always_a_subset() {
        let mut f = wide_filters();
        f.cities = vec!["Madrid".into()];
        f.channels = vec![SalesChannel::Online];
        let result = apply_filters(store::orders(), &f, store::products());
        for order in &result {
            assert!(store::orders().iter().any(|o| o.id == order.id));
        }
    }

    #[test]
    fn adding_a_filter_never_grows_the_result() {
        let mut f = wide_filters();
        f.statuses = vec![OrderStatus::Completado];
        let base = apply_filters(store::orders(), &f, store::products()).len();

        f.cities = vec!["Madrid".into()];
        let narrowed = apply_filters(store::orders(), &f, store::products()).len();
        assert!(narrowed <= base);

        f.channels = vec![SalesChannel::Distribuidor];
        let narrower = apply_filters(store::orders(), &f, store::products()).len();
        assert!(narrower <= narrowed);
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let mut f = FilterState::new(today());
        f.set_custom_range(
            NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
        );
        let result = apply_filters(store::orders(), &f, store::products());
        let ids: Vec<&str> = result.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-2024-002"]);
    }

    #[test]
    fn category_filter_joins_against_products() {
        let mut f = wide_filters();
        f.categories = vec![ProductCategory::Logistica];
        let result = apply_filters(store::orders(), &f, store::products());
        let ids: Vec<&str> = result.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-2024-003"]);

        // ORD-2024-006 mixes electronics and office products; either
        // category selects it.
        let mut f = wide_filters();
        f.categories = vec![ProductCategory::Oficina];
        let result = apply_filters(store::orders(), &f, store::products());
        assert!(result.iter().any(|o| o.id == "ORD-2024-006"));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let mut f = wide_filters();
        f.search_term = "ANA RUIZ".into();
        let result = apply_filters(store::orders(), &f, store::products());
        assert_eq!(result.len(), 2);

        let mut f = wide_filters();
        f.search_term = "embaladora".into();
        let result = apply_filters(store::orders(), &f, store::products());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "ORD-2024-003");

        let mut f = wide_filters();
        f.search_term = "elena prats".into();
        let result = apply_filters(store::orders(), &f, store::products());
        assert_eq!(result.len(), 3);

        let mut f = wide_filters();
        f.search_term = "no-existe".into();
        assert!(apply_filters(store::orders(), &f, store::products()).is_empty());
    }

    #[test]
    fn amount_range_narrows_the_result() {
        let mut f = wide_filters();
        f.amount_range.min = 1000.0;
        let result = apply_filters(store::orders(), &f, store::products());
        let ids: Vec<&str> = result.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-2024-001", "ORD-2024-003", "ORD-2024-006"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let before: Vec<String> = store::orders().iter().map(|o| o.id.clone()).collect();
        let mut f = wide_filters();
        f.search_term = "madrid".into();
        let _ = apply_filters(store::orders(), &f, store::products());
        let after: Vec<String> = store::orders().iter().map(|o| o.id.clone()).collect();
        assert_eq!(before, after);
    }
}

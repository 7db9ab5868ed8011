//! Compiled-in record store. The dataset is small and fixed: it is the
//! single source every dashboard derives from, and it is never mutated
//! at runtime (promotions live in their own appendable store).

use chrono::NaiveDate;
use contracts::domain::{Customer, GeoLocation, Order, Product, Promotion};
use contracts::enums::{
    CustomerSegment, CustomerStatus, OrderPriority, OrderStatus, PaymentMethod, ProductCategory,
    PromotionKind, PromotionStatus, SalesChannel,
};
use once_cell::sync::Lazy;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

pub fn customers() -> &'static [Customer] {
    &CUSTOMERS
}

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn orders() -> &'static [Order] {
    &ORDERS
}

pub fn seed_promotions() -> Vec<Promotion> {
    PROMOTIONS.clone()
}

pub fn product_by_id(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

pub fn customer_by_id(id: &str) -> Option<&'static Customer> {
    CUSTOMERS.iter().find(|c| c.id == id)
}

static CUSTOMERS: Lazy<Vec<Customer>> = Lazy::new(|| {
    vec![
        Customer {
            id: "CUST-001".into(),
            name: "María López".into(),
            email: "maria.lopez@atlantico.es".into(),
            phone: "+34 612 340 221".into(),
            company: "Comercial Atlántico SL".into(),
            segment: CustomerSegment::Corporativo,
            status: CustomerStatus::Active,
            acquisition_date: date(2022, 5, 12),
            lifetime_value: 48_200.0,
            last_order_date: Some(date(2024, 3, 12)),
        },
        Customer {
            id: "CUST-002".into(),
            name: "Carlos Vega".into(),
            email: "carlos.vega@dvega.es".into(),
            phone: "+34 699 115 480".into(),
            company: "Distribuciones Vega".into(),
            segment: CustomerSegment::Pyme,
            status: CustomerStatus::Active,
            acquisition_date: date(2023, 1, 30),
            lifetime_value: 12_650.0,
            last_order_date: Some(date(2024, 2, 10)),
        },
        Customer {
            id: "CUST-003".into(),
            name: "Ana Ruiz".into(),
            email: "ana.ruiz@tecnomarket.es".into(),
            phone: "+34 655 902 317".into(),
            company: "TecnoMarket Madrid".into(),
            segment: CustomerSegment::Premium,
            status: CustomerStatus::Active,
            acquisition_date: date(2021, 9, 3),
            lifetime_value: 87_400.0,
            last_order_date: Some(date(2024, 3, 8)),
        },
        Customer {
            id: "CUST-004".into(),
            name: "Javier Soto".into(),
            email: "javier.soto@ofimodernas.es".into(),
            phone: "+34 618 447 902".into(),
            company: "Oficinas Modernas".into(),
            segment: CustomerSegment::Pyme,
            status: CustomerStatus::Pending,
            acquisition_date: date(2024, 1, 20),
            lifetime_value: 349.0,
            last_order_date: Some(date(2024, 2, 25)),
        },
        Customer {
            id: "CUST-005".into(),
            name: "Laura Jiménez".into(),
            email: "laura.jimenez@gmail.com".into(),
            phone: "+34 677 210 064".into(),
            company: "Particular".into(),
            segment: CustomerSegment::Particular,
            status: CustomerStatus::Active,
            acquisition_date: date(2023, 11, 5),
            lifetime_value: 420.0,
            last_order_date: Some(date(2024, 2, 18)),
        },
        Customer {
            id: "CUST-006".into(),
            name: "Inés Navarro".into(),
            email: "ines.navarro@lindaro.es".into(),
            phone: "+34 634 781 553".into(),
            company: "Grupo Lindaro".into(),
            segment: CustomerSegment::Corporativo,
            status: CustomerStatus::Inactive,
            acquisition_date: date(2020, 3, 17),
            lifetime_value: 63_900.0,
            last_order_date: Some(date(2024, 3, 2)),
        },
    ]
});

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product {
            id: "PROD-001".into(),
            name: "Portátil ProBook 14".into(),
            category: ProductCategory::Electronica,
            price: 899.0,
            cost: 640.0,
            margin: 28.8,
        },
        Product {
            id: "PROD-002".into(),
            name: "Monitor 27\" QHD".into(),
            category: ProductCategory::Electronica,
            price: 259.0,
            cost: 170.0,
            margin: 34.4,
        },
        Product {
            id: "PROD-003".into(),
            name: "Silla ergonómica Nexa".into(),
            category: ProductCategory::Oficina,
            price: 189.0,
            cost: 110.0,
            margin: 41.8,
        },
        Product {
            id: "PROD-004".into(),
            name: "Escritorio elevable".into(),
            category: ProductCategory::Oficina,
            price: 349.0,
            cost: 215.0,
            margin: 38.4,
        },
        Product {
            id: "PROD-005".into(),
            name: "Cafetera de cápsulas".into(),
            category: ProductCategory::Hogar,
            price: 79.0,
            cost: 41.0,
            margin: 48.1,
        },
        Product {
            id: "PROD-006".into(),
            name: "Aspirador ciclónico".into(),
            category: ProductCategory::Hogar,
            price: 129.0,
            cost: 76.0,
            margin: 41.1,
        },
        Product {
            id: "PROD-007".into(),
            name: "Carretilla plegable".into(),
            category: ProductCategory::Logistica,
            price: 59.0,
            cost: 28.0,
            margin: 52.5,
        },
        Product {
            id: "PROD-008".into(),
            name: "Embaladora de palets".into(),
            category: ProductCategory::Logistica,
            price: 1450.0,
            cost: 980.0,
            margin: 32.4,
        },
    ]
});

static ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    vec![
        Order {
            id: "ORD-2024-001".into(),
            customer_id: "CUST-003".into(),
            customer: "Ana Ruiz".into(),
            customer_email: "ana.ruiz@tecnomarket.es".into(),
            product_ids: vec!["PROD-001".into(), "PROD-002".into()],
            products: vec!["Portátil ProBook 14".into(), "Monitor 27\" QHD".into()],
            amount: 1158.0,
            cost: 810.0,
            margin: 30.1,
            status: OrderStatus::Completado,
            date: date(2024, 1, 15),
            location: GeoLocation {
                lat: 40.4168,
                lng: -3.7038,
                city: "Madrid".into(),
                state: "Madrid".into(),
                country: "España".into(),
            },
            address: "Calle Mayor 12, 28013 Madrid".into(),
            sales_rep: "Sergio Molina".into(),
            channel: SalesChannel::Online,
            priority: OrderPriority::Media,
            category: ProductCategory::Electronica,
            customer_segment: CustomerSegment::Premium,
            payment_method: PaymentMethod::Tarjeta,
            delivery_date: Some(date(2024, 1, 18)),
            notes: None,
            discount: 50.0,
            tax: 232.7,
            net_amount: Order::net_amount_of(1158.0, 50.0, 232.7),
        },
        Order {
            id: "ORD-2024-002".into(),
            customer_id: "CUST-001".into(),
            customer: "María López".into(),
            customer_email: "maria.lopez@atlantico.es".into(),
            product_ids: vec!["PROD-003".into()],
            products: vec!["Silla ergonómica Nexa".into()],
            amount: 378.0,
            cost: 220.0,
            margin: 41.8,
            status: OrderStatus::Pendiente,
            date: date(2024, 2, 3),
            location: GeoLocation {
                lat: 41.3874,
                lng: 2.1686,
                city: "Barcelona".into(),
                state: "Cataluña".into(),
                country: "España".into(),
            },
            address: "Av. Diagonal 220, 08018 Barcelona".into(),
            sales_rep: "Elena Prats".into(),
            channel: SalesChannel::TiendaFisica,
            priority: OrderPriority::Baja,
            category: ProductCategory::Oficina,
            customer_segment: CustomerSegment::Corporativo,
            payment_method: PaymentMethod::Transferencia,
            delivery_date: None,
            notes: Some("Entregar en recepción".into()),
            discount: 0.0,
            tax: 79.4,
            net_amount: Order::net_amount_of(378.0, 0.0, 79.4),
        },
        Order {
            id: "ORD-2024-003".into(),
            customer_id: "CUST-002".into(),
            customer: "Carlos Vega".into(),
            customer_email: "carlos.vega@dvega.es".into(),
            product_ids: vec!["PROD-007".into(), "PROD-008".into()],
            products: vec!["Carretilla plegable".into(), "Embaladora de palets".into()],
            amount: 1509.0,
            cost: 1008.0,
            margin: 33.2,
            status: OrderStatus::EnProceso,
            date: date(2024, 2, 10),
            location: GeoLocation {
                lat: 39.4699,
                lng: -0.3763,
                city: "Valencia".into(),
                state: "Comunidad Valenciana".into(),
                country: "España".into(),
            },
            address: "Polígono Vara de Quart, nave 7, Valencia".into(),
            sales_rep: "Sergio Molina".into(),
            channel: SalesChannel::Distribuidor,
            priority: OrderPriority::Alta,
            category: ProductCategory::Logistica,
            customer_segment: CustomerSegment::Pyme,
            payment_method: PaymentMethod::Transferencia,
            delivery_date: Some(date(2024, 2, 20)),
            notes: None,
            discount: 75.0,
            tax: 301.1,
            net_amount: Order::net_amount_of(1509.0, 75.0, 301.1),
        },
        Order {
            id: "ORD-2024-004".into(),
            customer_id: "CUST-005".into(),
            customer: "Laura Jiménez".into(),
            customer_email: "laura.jimenez@gmail.com".into(),
            product_ids: vec!["PROD-005".into()],
            products: vec!["Cafetera de cápsulas".into()],
            amount: 79.0,
            cost: 41.0,
            margin: 48.1,
            status: OrderStatus::Completado,
            date: date(2024, 2, 18),
            location: GeoLocation {
                lat: 37.3891,
                lng: -5.9845,
                city: "Sevilla".into(),
                state: "Andalucía".into(),
                country: "España".into(),
            },
            address: "Calle Sierpes 45, 41004 Sevilla".into(),
            sales_rep: "Nuria Campos".into(),
            channel: SalesChannel::Online,
            priority: OrderPriority::Baja,
            category: ProductCategory::Hogar,
            customer_segment: CustomerSegment::Particular,
            payment_method: PaymentMethod::Paypal,
            delivery_date: Some(date(2024, 2, 21)),
            notes: None,
            discount: 0.0,
            tax: 16.6,
            net_amount: Order::net_amount_of(79.0, 0.0, 16.6),
        },
        Order {
            id: "ORD-2024-005".into(),
            customer_id: "CUST-004".into(),
            customer: "Javier Soto".into(),
            customer_email: "javier.soto@ofimodernas.es".into(),
            product_ids: vec!["PROD-004".into()],
            products: vec!["Escritorio elevable".into()],
            amount: 349.0,
            cost: 215.0,
            margin: 38.4,
            status: OrderStatus::Cancelado,
            date: date(2024, 2, 25),
            location: GeoLocation {
                lat: 40.4168,
                lng: -3.7038,
                city: "Madrid".into(),
                state: "Madrid".into(),
                country: "España".into(),
            },
            address: "Calle Alcalá 180, 28028 Madrid".into(),
            sales_rep: "Elena Prats".into(),
            channel: SalesChannel::Telefono,
            priority: OrderPriority::Media,
            category: ProductCategory::Oficina,
            customer_segment: CustomerSegment::Pyme,
            payment_method: PaymentMethod::Contrareembolso,
            delivery_date: None,
            notes: Some("Cancelado por el cliente".into()),
            discount: 0.0,
            tax: 73.3,
            net_amount: Order::net_amount_of(349.0, 0.0, 73.3),
        },
        Order {
            id: "ORD-2024-006".into(),
            customer_id: "CUST-006".into(),
            customer: "Inés Navarro".into(),
            customer_email: "ines.navarro@lindaro.es".into(),
            product_ids: vec!["PROD-001".into(), "PROD-004".into()],
            products: vec!["Portátil ProBook 14".into(), "Escritorio elevable".into()],
            amount: 1248.0,
            cost: 855.0,
            margin: 31.5,
            status: OrderStatus::Completado,
            date: date(2024, 3, 2),
            location: GeoLocation {
                lat: 43.2630,
                lng: -2.9350,
                city: "Bilbao".into(),
                state: "País Vasco".into(),
                country: "España".into(),
            },
            address: "Gran Vía 33, 48009 Bilbao".into(),
            sales_rep: "Nuria Campos".into(),
            channel: SalesChannel::Online,
            priority: OrderPriority::Alta,
            category: ProductCategory::Electronica,
            customer_segment: CustomerSegment::Corporativo,
            payment_method: PaymentMethod::Tarjeta,
            delivery_date: Some(date(2024, 3, 6)),
            notes: None,
            discount: 120.0,
            tax: 236.9,
            net_amount: Order::net_amount_of(1248.0, 120.0, 236.9),
        },
        Order {
            id: "ORD-2024-007".into(),
            customer_id: "CUST-003".into(),
            customer: "Ana Ruiz".into(),
            customer_email: "ana.ruiz@tecnomarket.es".into(),
            product_ids: vec!["PROD-002".into()],
            products: vec!["Monitor 27\" QHD".into()],
            amount: 259.0,
            cost: 170.0,
            margin: 34.4,
            status: OrderStatus::Pendiente,
            date: date(2024, 3, 8),
            location: GeoLocation {
                lat: 40.4168,
                lng: -3.7038,
                city: "Madrid".into(),
                state: "Madrid".into(),
                country: "España".into(),
            },
            address: "Paseo de la Castellana 95, 28046 Madrid".into(),
            sales_rep: "Sergio Molina".into(),
            channel: SalesChannel::Online,
            priority: OrderPriority::Media,
            category: ProductCategory::Electronica,
            customer_segment: CustomerSegment::Premium,
            payment_method: PaymentMethod::Tarjeta,
            delivery_date: None,
            notes: None,
            discount: 0.0,
            tax: 54.4,
            net_amount: Order::net_amount_of(259.0, 0.0, 54.4),
        },
        Order {
            id: "ORD-2024-008".into(),
            customer_id: "CUST-001".into(),
            customer: "María López".into(),
            customer_email: "maria.lopez@atlantico.es".into(),
            product_ids: vec!["PROD-006".into()],
            products: vec!["Aspirador ciclónico".into()],
            amount: 129.0,
            cost: 76.0,
            margin: 41.1,
            status: OrderStatus::EnProceso,
            date: date(2024, 3, 12),
            location: GeoLocation {
                lat: 41.3874,
                lng: 2.1686,
                city: "Barcelona".into(),
                state: "Cataluña".into(),
                country: "España".into(),
            },
            address: "Carrer de Mallorca 401, 08013 Barcelona".into(),
            sales_rep: "Elena Prats".into(),
            channel: SalesChannel::TiendaFisica,
            priority: OrderPriority::Baja,
            category: ProductCategory::Hogar,
            customer_segment: CustomerSegment::Corporativo,
            payment_method: PaymentMethod::Tarjeta,
            delivery_date: None,
            notes: None,
            discount: 10.0,
            tax: 27.1,
            net_amount: Order::net_amount_of(129.0, 10.0, 27.1),
        },
    ]
});

static PROMOTIONS: Lazy<Vec<Promotion>> = Lazy::new(|| {
    vec![
        Promotion {
            id: "PROMO-001".into(),
            name: "Rebajas de enero".into(),
            kind: PromotionKind::Percentage,
            value: 15.0,
            start_date: date(2024, 1, 7),
            end_date: date(2024, 1, 31),
            status: PromotionStatus::Active,
            target_products: vec!["PROD-001".into(), "PROD-002".into()],
            target_customer_segments: vec![CustomerSegment::Premium, CustomerSegment::Particular],
            constraints: contracts::domain::PromotionConstraints {
                min_order_value: Some(100.0),
                max_discount: Some(200.0),
                usage_limit: Some(500),
            },
            usage_count: 182,
            sales_before: 14_300.0,
            sales_after: 19_950.0,
            created_by: "direccion".into(),
            created_date: date(2023, 12, 20),
            last_modified: date(2024, 1, 5),
        },
        Promotion {
            id: "PROMO-002".into(),
            name: "Envío gratis oficina".into(),
            kind: PromotionKind::Fixed,
            value: 25.0,
            start_date: date(2024, 2, 1),
            end_date: date(2024, 4, 30),
            status: PromotionStatus::Active,
            target_products: vec!["PROD-003".into(), "PROD-004".into()],
            target_customer_segments: vec![CustomerSegment::Pyme, CustomerSegment::Corporativo],
            constraints: contracts::domain::PromotionConstraints {
                min_order_value: Some(150.0),
                max_discount: None,
                usage_limit: None,
            },
            usage_count: 64,
            sales_before: 8_900.0,
            sales_after: 10_050.0,
            created_by: "direccion".into(),
            created_date: date(2024, 1, 25),
            last_modified: date(2024, 1, 25),
        },
        Promotion {
            id: "PROMO-003".into(),
            name: "Pack hogar primavera".into(),
            kind: PromotionKind::Bundle,
            value: 179.0,
            start_date: date(2024, 4, 1),
            end_date: date(2024, 5, 15),
            status: PromotionStatus::Scheduled,
            target_products: vec!["PROD-005".into(), "PROD-006".into()],
            target_customer_segments: vec![CustomerSegment::Particular],
            constraints: contracts::domain::PromotionConstraints::default(),
            usage_count: 0,
            sales_before: 0.0,
            sales_after: 0.0,
            created_by: "direccion".into(),
            created_date: date(2024, 3, 10),
            last_modified: date(2024, 3, 10),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_eight_orders_with_two_pending() {
        assert_eq!(orders().len(), 8);
        let pending: Vec<&str> = orders()
            .iter()
            .filter(|o| o.status == OrderStatus::Pendiente)
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(pending, vec!["ORD-2024-002", "ORD-2024-007"]);
    }

    #[test]
    fn order_references_resolve() {
        for order in orders() {
            assert!(customer_by_id(&order.customer_id).is_some(), "{}", order.id);
            for pid in &order.product_ids {
                assert!(product_by_id(pid).is_some(), "{} -> {}", order.id, pid);
            }
        }
    }

    #[test]
    fn net_amount_matches_derivation() {
        for order in orders() {
            let expected = Order::net_amount_of(order.amount, order.discount, order.tax);
            assert!((order.net_amount - expected).abs() < f64::EPSILON, "{}", order.id);
        }
    }
}

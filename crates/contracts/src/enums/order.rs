use serde::{Deserialize, Serialize};

/// Order lifecycle status. Serialized with the labels the dataset uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Completado")]
    Completado,
    #[serde(rename = "Pendiente")]
    Pendiente,
    #[serde(rename = "En proceso")]
    EnProceso,
    #[serde(rename = "Cancelado")]
    Cancelado,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Completado => "Completado",
            OrderStatus::Pendiente => "Pendiente",
            OrderStatus::EnProceso => "En proceso",
            OrderStatus::Cancelado => "Cancelado",
        }
    }

    /// CSS modifier used by status badges.
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Completado => "badge badge--success",
            OrderStatus::Pendiente => "badge badge--warning",
            OrderStatus::EnProceso => "badge badge--info",
            OrderStatus::Cancelado => "badge badge--error",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Completado,
            OrderStatus::Pendiente,
            OrderStatus::EnProceso,
            OrderStatus::Cancelado,
        ]
    }
}

/// Sales channel the order came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SalesChannel {
    Online,
    TiendaFisica,
    Telefono,
    Distribuidor,
}

impl SalesChannel {
    pub fn display_name(&self) -> &'static str {
        match self {
            SalesChannel::Online => "Online",
            SalesChannel::TiendaFisica => "Tienda física",
            SalesChannel::Telefono => "Teléfono",
            SalesChannel::Distribuidor => "Distribuidor",
        }
    }

    pub fn all() -> Vec<SalesChannel> {
        vec![
            SalesChannel::Online,
            SalesChannel::TiendaFisica,
            SalesChannel::Telefono,
            SalesChannel::Distribuidor,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    Alta,
    Media,
    Baja,
}

impl OrderPriority {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderPriority::Alta => "Alta",
            OrderPriority::Media => "Media",
            OrderPriority::Baja => "Baja",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Tarjeta,
    Transferencia,
    Paypal,
    Contrareembolso,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Tarjeta => "Tarjeta",
            PaymentMethod::Transferencia => "Transferencia",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Contrareembolso => "Contra reembolso",
        }
    }
}

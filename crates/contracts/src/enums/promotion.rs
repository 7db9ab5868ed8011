use serde::{Deserialize, Serialize};

/// Discount mechanics of a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionKind {
    Percentage,
    Fixed,
    Bogo,
    Bundle,
}

impl PromotionKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            PromotionKind::Percentage => "Porcentaje",
            PromotionKind::Fixed => "Importe fijo",
            PromotionKind::Bogo => "2x1",
            PromotionKind::Bundle => "Pack",
        }
    }

    pub fn all() -> Vec<PromotionKind> {
        vec![
            PromotionKind::Percentage,
            PromotionKind::Fixed,
            PromotionKind::Bogo,
            PromotionKind::Bundle,
        ]
    }
}

/// Stored promotion status. The effective status shown in lists also
/// takes the date range into account, see `Promotion::effective_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionStatus {
    Active,
    Inactive,
    Scheduled,
    Expired,
}

impl PromotionStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            PromotionStatus::Active => "Activa",
            PromotionStatus::Inactive => "Inactiva",
            PromotionStatus::Scheduled => "Programada",
            PromotionStatus::Expired => "Expirada",
        }
    }
}

use serde::{Deserialize, Serialize};

/// Commercial segment a customer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerSegment {
    Premium,
    Corporativo,
    Pyme,
    Particular,
}

impl CustomerSegment {
    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerSegment::Premium => "Premium",
            CustomerSegment::Corporativo => "Corporativo",
            CustomerSegment::Pyme => "Pyme",
            CustomerSegment::Particular => "Particular",
        }
    }

    pub fn all() -> Vec<CustomerSegment> {
        vec![
            CustomerSegment::Premium,
            CustomerSegment::Corporativo,
            CustomerSegment::Pyme,
            CustomerSegment::Particular,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Pending,
}

impl CustomerStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Activo",
            CustomerStatus::Inactive => "Inactivo",
            CustomerStatus::Pending => "Pendiente",
        }
    }
}

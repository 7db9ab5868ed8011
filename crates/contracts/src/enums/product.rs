use serde::{Deserialize, Serialize};

/// Product catalogue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Electronica,
    Oficina,
    Hogar,
    Logistica,
}

impl ProductCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Electronica => "Electrónica",
            ProductCategory::Oficina => "Oficina",
            ProductCategory::Hogar => "Hogar",
            ProductCategory::Logistica => "Logística",
        }
    }

    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Electronica,
            ProductCategory::Oficina,
            ProductCategory::Hogar,
            ProductCategory::Logistica,
        ]
    }
}

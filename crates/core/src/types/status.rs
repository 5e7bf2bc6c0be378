//! Catalog status enums.

use serde::{Deserialize, Serialize};

/// Whether a food item can currently be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "item_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Listed on the menu and orderable.
    #[default]
    Available,
    /// Listed on the menu but temporarily sold out.
    OutOfStock,
    /// Hidden from the menu.
    Discontinued,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::OutOfStock => write!(f, "out_of_stock"),
            Self::Discontinued => write!(f, "discontinued"),
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "out_of_stock" => Ok(Self::OutOfStock),
            "discontinued" => Ok(Self::Discontinued),
            _ => Err(format!("invalid item status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_available() {
        assert_eq!(ItemStatus::default(), ItemStatus::Available);
    }

    #[test]
    fn test_display_matches_from_str() {
        for status in [
            ItemStatus::Available,
            ItemStatus::OutOfStock,
            ItemStatus::Discontinued,
        ] {
            assert_eq!(status.to_string().parse::<ItemStatus>().unwrap(), status);
        }
        assert!("sold".parse::<ItemStatus>().is_err());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// A categorical field used to partition rows before reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    State,
    District,
    Brand,
}

impl Dimension {
    /// The human-facing axis label for this dimension.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::State => "State",
            Dimension::District => "District",
            Dimension::Brand => "Brand",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::State => "state",
            Dimension::District => "district",
            Dimension::Brand => "brand",
        };
        f.write_str(name)
    }
}

/// A numeric field being aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureField {
    Count,
    Amount,
}

impl fmt::Display for MeasureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureField::Count => f.write_str("count"),
            MeasureField::Amount => f.write_str("amount"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first. Truncation keeps the largest-valued tail.
    Ascending,
    /// Largest first. Truncation keeps the head.
    Descending,
}

/// The chart shape handed to the rendering boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    HorizontalBar,
    Donut,
}

/// Identifies one of the three loaded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Transactions,
    Districts,
    UserDevices,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableKind::Transactions => "state transactions",
            TableKind::Districts => "district transactions",
            TableKind::UserDevices => "user devices",
        };
        f.write_str(name)
    }
}

/// The fixed set of dashboard views a user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ViewVariant {
    #[default]
    TopStates,
    Districts,
    DeviceBrands,
}

impl ViewVariant {
    pub const ALL: [ViewVariant; 3] = [
        ViewVariant::TopStates,
        ViewVariant::Districts,
        ViewVariant::DeviceBrands,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewVariant::TopStates => "Top States",
            ViewVariant::Districts => "Districts",
            ViewVariant::DeviceBrands => "Device Brands",
        }
    }
}

impl fmt::Display for ViewVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_variant_wire_names() {
        let json = serde_json::to_string(&ViewVariant::DeviceBrands).unwrap();
        assert_eq!(json, "\"device-brands\"");
        let parsed: ViewVariant = serde_json::from_str("\"top-states\"").unwrap();
        assert_eq!(parsed, ViewVariant::TopStates);
    }

    #[test]
    fn test_view_variant_labels() {
        let labels: Vec<&str> = ViewVariant::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(labels, vec!["Top States", "Districts", "Device Brands"]);
        assert_eq!(ViewVariant::default(), ViewVariant::TopStates);
    }
}

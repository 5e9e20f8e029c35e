use analytics::AggregateSpec;
use core_types::{ChartKind, Dimension, MeasureField, Period, SortOrder, TableKind, ViewVariant};
use serde::Serialize;

/// Everything a view variant binds: which table to read, how to aggregate it,
/// and how the boundary should draw the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSpec {
    pub variant: ViewVariant,
    pub source: TableKind,
    pub aggregate: AggregateSpec,
    pub chart: ChartKind,
    pub title: &'static str,
    pub value_label: &'static str,
    pub palette: &'static str,
    /// Inner radius ratio for donut charts.
    pub hole: Option<f32>,
}

impl ViewSpec {
    pub fn for_variant(variant: ViewVariant, limit: usize) -> Self {
        match variant {
            ViewVariant::TopStates => Self {
                variant,
                source: TableKind::Transactions,
                aggregate: AggregateSpec {
                    dimension: Dimension::State,
                    measure: MeasureField::Amount,
                    order: SortOrder::Ascending,
                    limit,
                },
                chart: ChartKind::HorizontalBar,
                title: "Transaction Amount by State",
                value_label: "₹ Transaction Amount",
                palette: "Viridis",
                hole: None,
            },
            ViewVariant::Districts => Self {
                variant,
                source: TableKind::Districts,
                aggregate: AggregateSpec {
                    dimension: Dimension::District,
                    measure: MeasureField::Amount,
                    order: SortOrder::Ascending,
                    limit,
                },
                chart: ChartKind::HorizontalBar,
                title: "Transaction Amount by District",
                value_label: "₹ Transaction Amount",
                palette: "Cividis",
                hole: None,
            },
            ViewVariant::DeviceBrands => Self {
                variant,
                source: TableKind::UserDevices,
                aggregate: AggregateSpec {
                    dimension: Dimension::Brand,
                    measure: MeasureField::Count,
                    order: SortOrder::Descending,
                    limit,
                },
                chart: ChartKind::Donut,
                title: "Top Device Brands (User Count)",
                value_label: "User Count",
                palette: "Plasma_r",
                hole: Some(0.4),
            },
        }
    }

    /// The section heading shown above the chart.
    pub fn heading(&self, period: Period) -> String {
        let n = self.aggregate.limit;
        match self.variant {
            ViewVariant::TopStates => {
                format!("Top {n} States by Transaction Amount ({period})")
            }
            ViewVariant::Districts => {
                format!("Top {n} Districts by Transaction Amount ({period})")
            }
            ViewVariant::DeviceBrands => format!("Top {n} Device Brands Used ({period})"),
        }
    }

    pub fn category_label(&self) -> &'static str {
        self.aggregate.dimension.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_table() {
        let states = ViewSpec::for_variant(ViewVariant::TopStates, 10);
        assert_eq!(states.source, TableKind::Transactions);
        assert_eq!(states.aggregate.dimension, Dimension::State);
        assert_eq!(states.aggregate.measure, MeasureField::Amount);
        assert_eq!(states.aggregate.order, SortOrder::Ascending);
        assert_eq!(states.chart, ChartKind::HorizontalBar);

        let districts = ViewSpec::for_variant(ViewVariant::Districts, 10);
        assert_eq!(districts.source, TableKind::Districts);
        assert_eq!(districts.aggregate.dimension, Dimension::District);
        assert_eq!(districts.aggregate.order, SortOrder::Ascending);
        assert_eq!(districts.chart, ChartKind::HorizontalBar);

        let brands = ViewSpec::for_variant(ViewVariant::DeviceBrands, 10);
        assert_eq!(brands.source, TableKind::UserDevices);
        assert_eq!(brands.aggregate.dimension, Dimension::Brand);
        assert_eq!(brands.aggregate.measure, MeasureField::Count);
        assert_eq!(brands.aggregate.order, SortOrder::Descending);
        assert_eq!(brands.chart, ChartKind::Donut);
        assert_eq!(brands.hole, Some(0.4));
    }

    #[test]
    fn test_limit_is_threaded_through() {
        for variant in ViewVariant::ALL {
            assert_eq!(ViewSpec::for_variant(variant, 7).aggregate.limit, 7);
        }
    }

    #[test]
    fn test_headings() {
        let period = Period::new(2023, 2).unwrap();
        assert_eq!(
            ViewSpec::for_variant(ViewVariant::TopStates, 10).heading(period),
            "Top 10 States by Transaction Amount (2023 Q2)"
        );
        assert_eq!(
            ViewSpec::for_variant(ViewVariant::Districts, 5).heading(period),
            "Top 5 Districts by Transaction Amount (2023 Q2)"
        );
        assert_eq!(
            ViewSpec::for_variant(ViewVariant::DeviceBrands, 10).heading(period),
            "Top 10 Device Brands Used (2023 Q2)"
        );
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ViewSpec::for_variant(ViewVariant::TopStates, 10).category_label(), "State");
        assert_eq!(ViewSpec::for_variant(ViewVariant::DeviceBrands, 10).category_label(), "Brand");
    }
}

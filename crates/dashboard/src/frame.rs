use analytics::SummaryMetrics;
use core_types::{ChartKind, Period, ViewVariant};
use rust_decimal::Decimal;
use serde::Serialize;

/// What the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub period: Period,
    pub view: ViewVariant,
}

/// The complete output of one render, ready for a rendering boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFrame {
    pub page: PageInfo,
    pub selection: Selection,
    pub summary: SummaryMetrics,
    pub cards: Vec<MetricCard>,
    pub chart: ChartData,
    /// Data-quality notes, e.g. a table with no rows for the selected period.
    pub warnings: Vec<String>,
}

/// Page-level text around the metrics and chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub title: String,
    pub caption: String,
    pub footer: Option<String>,
}

/// One headline metric with its display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub kind: ChartKind,
    pub heading: String,
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    pub palette: String,
    pub hole: Option<f32>,
    /// In display order.
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Decimal,
    pub display: String,
}

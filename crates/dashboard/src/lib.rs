//! # Pulse Dashboard
//!
//! Turns a (year, quarter, view) selection into a `DashboardFrame`: the headline
//! metrics plus one chart's data. Each render is a pure function of the loaded
//! `Datasets` and the selection, so nothing is carried between renders.

use crate::format::{format_amount, format_count, format_decimal};
use analytics::{GroupTotal, aggregate, filter_period, summarize};
use configuration::DashboardSettings;
use core_types::{MeasureField, Period, TableKind, ViewVariant};
use datasets::Datasets;
use std::sync::Arc;

pub mod error;
pub mod format;
pub mod frame;
pub mod view;

pub use analytics::{SummaryMetrics, Vocabulary};
pub use error::DashboardError;
pub use frame::{ChartData, ChartPoint, DashboardFrame, MetricCard, PageInfo, Selection};
pub use view::ViewSpec;

/// The dashboard over one immutable set of loaded tables.
#[derive(Debug, Clone)]
pub struct Dashboard {
    datasets: Arc<Datasets>,
    settings: DashboardSettings,
    vocabulary: Vocabulary,
}

impl Dashboard {
    pub fn new(datasets: Arc<Datasets>, settings: DashboardSettings) -> Self {
        // The selectors only ever offer what the transaction table contains.
        let vocabulary = Vocabulary::from_table(datasets.transactions());
        Self {
            datasets,
            settings,
            vocabulary,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Builds a selection, filling omitted parts from the defaults.
    ///
    /// Explicit quarters must be in 1..=4. Values outside the vocabulary are
    /// allowed and simply render empty.
    pub fn select(
        &self,
        year: Option<i32>,
        quarter: Option<u8>,
        view: Option<ViewVariant>,
    ) -> Result<Selection, DashboardError> {
        let period = self
            .vocabulary
            .resolve(year, quarter)
            .ok_or(DashboardError::NoPeriods)?;
        let period = match quarter {
            Some(_) => Period::new(period.year, period.quarter)?,
            None => period,
        };
        Ok(Selection {
            period,
            view: view.unwrap_or(self.settings.default_view),
        })
    }

    pub fn render(&self, selection: &Selection) -> Result<DashboardFrame, DashboardError> {
        render(&self.datasets, selection, &self.settings)
    }
}

/// Filters every table to the selected period, computes the summary metrics
/// and the selected view's chart.
#[tracing::instrument(level = "debug", skip(datasets, settings), fields(period = %selection.period, view = %selection.view))]
pub fn render(
    datasets: &Datasets,
    selection: &Selection,
    settings: &DashboardSettings,
) -> Result<DashboardFrame, DashboardError> {
    let period = selection.period;

    // 1. Filter
    let transactions = filter_period(datasets.transactions(), period);
    let districts = filter_period(datasets.districts(), period);
    let user_devices = filter_period(datasets.user_devices(), period);

    // 2. Summarize
    let summary = summarize(&transactions, &user_devices)?;

    // 3. Aggregate the selected view
    let spec = ViewSpec::for_variant(selection.view, settings.top_n);
    let totals = match spec.source {
        TableKind::Transactions => aggregate(&transactions, &spec.aggregate)?,
        TableKind::Districts => aggregate(&districts, &spec.aggregate)?,
        TableKind::UserDevices => aggregate(&user_devices, &spec.aggregate)?,
    };

    // 4. Flag tables that have nothing for a period the selectors offer.
    let mut warnings = Vec::new();
    if !transactions.is_empty() {
        for (table, empty) in [
            (TableKind::Districts, districts.is_empty()),
            (TableKind::UserDevices, user_devices.is_empty()),
        ] {
            if empty {
                tracing::warn!(%table, %period, "Table has no rows for the selected period.");
                warnings.push(format!("The {table} dataset has no rows for {period}."));
            }
        }
    }

    tracing::debug!(
        rows = transactions.len(),
        points = totals.len(),
        "Rendered dashboard frame."
    );

    Ok(DashboardFrame {
        page: PageInfo {
            title: settings.title.clone(),
            caption: settings.caption.clone(),
            footer: settings.footer.clone(),
        },
        selection: *selection,
        cards: metric_cards(&summary),
        summary,
        chart: chart_data(&spec, period, totals),
        warnings,
    })
}

fn metric_cards(summary: &SummaryMetrics) -> Vec<MetricCard> {
    vec![
        MetricCard {
            label: "Total Transactions".to_string(),
            value: format_count(summary.total_transaction_count),
        },
        MetricCard {
            label: "Total Amount (₹)".to_string(),
            value: format_amount(summary.total_transaction_amount),
        },
        MetricCard {
            label: "Unique Device Brands".to_string(),
            value: summary.unique_device_brand_count.to_string(),
        },
    ]
}

fn chart_data(spec: &ViewSpec, period: Period, totals: Vec<GroupTotal>) -> ChartData {
    let measure = spec.aggregate.measure;
    let points = totals
        .into_iter()
        .map(|t| ChartPoint {
            display: match measure {
                MeasureField::Amount => format_amount(t.value),
                MeasureField::Count => format_decimal(t.value, 0),
            },
            label: t.key,
            value: t.value,
        })
        .collect();

    ChartData {
        kind: spec.chart,
        heading: spec.heading(period),
        title: spec.title.to_string(),
        category_label: spec.category_label().to_string(),
        value_label: spec.value_label.to_string(),
        palette: spec.palette.to_string(),
        hole: spec.hole,
        points,
    }
}

//! Interactive career timeline.
//!
//! The timeline shows two bars per year (first and second half). Selecting a
//! year lifts the bars around it with a [`WeightCurve`] and resolves the
//! [`Period`] that covers the year, if any.
//!
//! Periods are not validated for overlap. When two periods share a year the
//! one listed first wins.

mod types;
mod weight;

pub use types::{Category, Period, TimelineConfig, default_periods};
pub use weight::WeightCurve;

use serde::Serialize;

/// Bars drawn per year.
pub const BARS_PER_YEAR: usize = 2;

/// Widest year range a timeline displays; longer ranges are cut at the end.
pub const MAX_SPAN_YEARS: i32 = 200;

/// One half-year bar of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Calendar year the bar belongs to
    pub year: i32,
    /// 1 for the first half of the year, 2 for the second
    pub half: u8,
    /// Display label, e.g. "2019 H2"
    pub label: String,
    /// Height computed by the weight curve
    pub weight: f64,
    /// Whether the bar is part of the visible wave
    pub emphasized: bool,
    /// Index into the timeline's periods of the period covering `year`
    pub period: Option<usize>,
}

/// Return the first period whose inclusive range contains `year`.
pub fn find_period_at_year(periods: &[Period], year: i32) -> Option<&Period> {
    periods.iter().find(|p| p.contains(year))
}

/// Timeline state: the fixed configuration plus the current selection.
#[derive(Debug, Clone)]
pub struct Timeline {
    config: TimelineConfig,
    curve: WeightCurve,
    selected_year: i32,
    selected_period: Option<usize>,
    bars: Vec<Bar>,
}

impl Timeline {
    /// Build a timeline with the default weight curve and select the
    /// configured initial year.
    pub fn new(config: TimelineConfig) -> Self {
        Self::with_curve(config, WeightCurve::default())
    }

    /// Build a timeline with a custom weight curve.
    pub fn with_curve(mut config: TimelineConfig, curve: WeightCurve) -> Self {
        if config.start_year > config.end_year {
            log::warn!(
                "Timeline range {}..={} is reversed, swapping",
                config.start_year,
                config.end_year
            );
            std::mem::swap(&mut config.start_year, &mut config.end_year);
        }

        let span = i64::from(config.end_year) - i64::from(config.start_year) + 1;
        if span > i64::from(MAX_SPAN_YEARS) {
            let end_year = config.start_year.saturating_add(MAX_SPAN_YEARS - 1);
            log::warn!(
                "Timeline range {}..={} spans {} years, cutting at {}",
                config.start_year,
                config.end_year,
                span,
                end_year
            );
            config.end_year = end_year;
        }

        let initial = config.initial_year;
        let mut timeline = Self {
            selected_year: config.start_year,
            config,
            curve,
            selected_period: None,
            bars: Vec::new(),
        };
        timeline.select_year(initial);
        timeline
    }

    /// Select a year: clamp it into range, resolve its period and recompute
    /// every bar. Returns the newly selected period.
    pub fn select_year(&mut self, year: i32) -> Option<&Period> {
        let clamped = year.clamp(self.config.start_year, self.config.end_year);
        if clamped != year {
            log::debug!("Clamped selected year {} to {}", year, clamped);
        }

        self.selected_year = clamped;
        self.selected_period = self.period_index_at(clamped);
        self.recompute_bars();

        self.selected_period()
    }

    /// Look up the period covering `year` (first match wins).
    pub fn find_period_at_year(&self, year: i32) -> Option<&Period> {
        find_period_at_year(&self.config.periods, year)
    }

    fn period_index_at(&self, year: i32) -> Option<usize> {
        self.config.periods.iter().position(|p| p.contains(year))
    }

    fn recompute_bars(&mut self) {
        let selected_position =
            ((self.selected_year - self.config.start_year) as usize * BARS_PER_YEAR) as f64;

        let bars = (0..self.bar_count())
            .map(|i| {
                let year = self.config.start_year + (i / BARS_PER_YEAR) as i32;
                let half = (i % BARS_PER_YEAR) as u8 + 1;
                let weight = self.curve.compute_bar_weight(i as f64, selected_position);

                Bar {
                    year,
                    half,
                    label: format!("{} H{}", year, half),
                    weight,
                    emphasized: self.curve.is_emphasized(weight),
                    period: self.period_index_at(year),
                }
            })
            .collect();

        self.bars = bars;
    }

    /// Number of bars in the chart.
    pub fn bar_count(&self) -> usize {
        (self.config.end_year - self.config.start_year + 1) as usize * BARS_PER_YEAR
    }

    /// All bars, in chronological order.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// The currently selected year.
    pub fn selected_year(&self) -> i32 {
        self.selected_year
    }

    /// The period covering the selected year, if any.
    pub fn selected_period(&self) -> Option<&Period> {
        self.selected_period.map(|i| &self.config.periods[i])
    }

    /// The period a bar belongs to, if any.
    pub fn bar_period(&self, bar: &Bar) -> Option<&Period> {
        bar.period.and_then(|i| self.config.periods.get(i))
    }

    /// Hover text for a bar: its label, followed by the period title when the
    /// bar is covered by one.
    pub fn tooltip(&self, bar: &Bar) -> String {
        match self.bar_period(bar) {
            Some(period) => format!("{} - {}", bar.label, period.title),
            None => bar.label.clone(),
        }
    }

    /// Configured periods in lookup order.
    pub fn periods(&self) -> &[Period] {
        &self.config.periods
    }

    /// First displayed year.
    pub fn start_year(&self) -> i32 {
        self.config.start_year
    }

    /// Last displayed year.
    pub fn end_year(&self) -> i32 {
        self.config.end_year
    }

    /// The weight curve in use.
    pub fn curve(&self) -> &WeightCurve {
        &self.curve
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}

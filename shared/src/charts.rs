//! Chart.js line-chart configurations for the interactive area.
//!
//! Values are representative figures from the paper summary; the structs
//! serialize to the exact object shape `new Chart(ctx, config)` expects.

use serde::Serialize;

use crate::colors::translucent;

const FILL_ALPHA: f64 = 0.06;
const ANIMATION_MS: u32 = 1500;
const ANIMATION_EASING: &str = "easeInOutQuart";

pub const TOP_N_LABELS: [&str; 4] = ["Top-100", "Top-500", "Top-1000", "Top-10000"];

/// Number of points on each CDF curve (rank positions 0..=100).
pub const CDF_POINTS: usize = 101;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    pub border_width: f64,
}

impl Dataset {
    /// Smoothed line with a faint fill under it.
    fn filled(label: &'static str, color: &'static str, data: Vec<f64>) -> Self {
        Self {
            label,
            data,
            border_color: color,
            background_color: Some(translucent(color, FILL_ALPHA)),
            fill: Some(true),
            tension: Some(0.3),
            point_radius: None,
            border_width: 2.0,
        }
    }

    /// Dense curve without point markers.
    fn curve(label: &'static str, color: &'static str, data: Vec<f64>) -> Self {
        Self {
            label,
            data,
            border_color: color,
            background_color: None,
            fill: None,
            tension: None,
            point_radius: Some(0.0),
            border_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub animation: Animation,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub duration: u32,
    pub easing: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Axis>,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub title: AxisTitle,
}

impl Axis {
    fn unit(title: &'static str) -> Self {
        Self {
            min: Some(0.0),
            max: Some(1.0),
            title: AxisTitle::new(title),
        }
    }

    fn titled(title: &'static str) -> Self {
        Self {
            min: None,
            max: None,
            title: AxisTitle::new(title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: &'static str,
}

impl AxisTitle {
    fn new(text: &'static str) -> Self {
        Self {
            display: true,
            text,
        }
    }
}

fn options(scales: Scales) -> ChartOptions {
    ChartOptions {
        responsive: true,
        animation: Animation {
            duration: ANIMATION_MS,
            easing: ANIMATION_EASING,
        },
        plugins: Plugins {
            legend: Legend { position: "bottom" },
        },
        scales,
    }
}

/// Overlap rate between ranking lists at increasing Top-N cutoffs.
pub fn top_n_overlap_chart() -> LineChart {
    LineChart {
        kind: "line",
        data: ChartData {
            labels: TOP_N_LABELS.iter().map(|l| (*l).to_owned()).collect(),
            datasets: vec![
                Dataset::filled(
                    "SecRank vs Umbrella",
                    "#1f77b4",
                    vec![0.96, 0.942, 0.910, 0.985],
                ),
                Dataset::filled(
                    "TrusList vs SecRank",
                    "#ff7f0e",
                    vec![0.35, 0.32, 0.30, 1.00],
                ),
                Dataset::filled(
                    "TrusList vs Umbrella",
                    "#2ca02c",
                    vec![0.34, 0.31, 0.295, 0.998],
                ),
            ],
        },
        options: options(Scales {
            x: None,
            y: Axis::unit("Overlap Rate"),
        }),
    }
}

/// Sample CDF `min(1, (x/100)^exponent)` over rank positions 0..=100.
pub fn cdf_curve(exponent: f64) -> Vec<f64> {
    (0..CDF_POINTS)
        .map(|x| (x as f64 / 100.0).powf(exponent).min(1.0))
        .collect()
}

/// Rank-position CDFs; TrusList's curve sits right of both baselines.
pub fn cdf_chart() -> LineChart {
    LineChart {
        kind: "line",
        data: ChartData {
            labels: (0..CDF_POINTS).map(|x| x.to_string()).collect(),
            datasets: vec![
                Dataset::curve("SecRank (baseline)", "#1f77b4", cdf_curve(0.9)),
                Dataset::curve("TrusList", "#d62728", cdf_curve(1.4)),
                Dataset::curve("Traffic-only baseline", "#9467bd", cdf_curve(0.8)),
            ],
        },
        options: options(Scales {
            x: Some(Axis::titled("Rank position (smaller is higher visibility)")),
            y: Axis::unit("CDF"),
        }),
    }
}

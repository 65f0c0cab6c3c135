//! Choropleth figure of World Cup wins by country
//!
//! Emitted in the Plotly figure schema so the page can hand it straight to
//! `Plotly.newPlot`.

use serde::Serialize;
use worldcup_finals::CountryWins;

pub const FIGURE_TITLE: &str = "FIFA World Cup Wins by Country";

/// Plasma sequential palette, low to high
const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    /// ISO alpha-3 codes; `None` rows are left uncoloured
    pub locations: Vec<Option<&'static str>>,
    pub z: Vec<u32>,
    pub text: Vec<&'static str>,
    pub hovertemplate: &'static str,
    pub colorscale: Vec<(f64, &'static str)>,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub margin: Margin,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Margin {
    pub r: u32,
    pub t: u32,
    pub l: u32,
    pub b: u32,
}

fn plasma_scale() -> Vec<(f64, &'static str)> {
    let last = (PLASMA.len() - 1) as f64;
    PLASMA
        .iter()
        .enumerate()
        .map(|(i, color)| (i as f64 / last, *color))
        .collect()
}

/// Build the wins choropleth from joined country rows
pub fn build_figure(rows: &[CountryWins]) -> Figure {
    let trace = ChoroplethTrace {
        trace_type: "choropleth",
        locations: rows.iter().map(|r| r.territory_code).collect(),
        z: rows.iter().map(|r| r.wins).collect(),
        text: rows.iter().map(|r| r.country).collect(),
        hovertemplate: "<b>%{text}</b><br>Wins: %{z}<extra></extra>",
        colorscale: plasma_scale(),
        colorbar: ColorBar {
            title: Title { text: "Wins" },
        },
    };

    Figure {
        data: vec![trace],
        layout: Layout {
            title: Title { text: FIGURE_TITLE },
            margin: Margin {
                r: 0,
                t: 50,
                l: 0,
                b: 0,
            },
        },
    }
}

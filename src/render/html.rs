// Static HTML page assembled from a built Page

use crate::models::PerformanceRow;
use crate::views::{Controls, Dashboard, Page, PageBody};
use std::fmt::Write;

pub const ADDED_POINTS_SVG: &str = "added_points.svg";
pub const ADDED_POPULATION_SVG: &str = "added_population.svg";
pub const MAP_SVG: &str = "map.svg";
pub const MAP_GEOJSON: &str = "map_layers.geojson";

const STYLE: &str = "body{font-family:sans-serif;margin:0;display:flex}\
aside{width:260px;padding:16px;background:#f0f2f6;min-height:100vh}\
main{flex:1;padding:16px 32px}\
.metric{display:inline-block;margin-right:48px}.metric .value{font-size:2em}\
.columns{display:flex;gap:16px}.columns>div{flex:1}\
table{border-collapse:collapse}td,th{border:1px solid #ddd;padding:4px 8px;text-align:right}\
.error{background:#ffe0e0;color:#900;padding:12px}.info{background:#e0ecff;padding:12px}";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn write_controls(out: &mut String, title: &str, controls: &Controls) -> std::fmt::Result {
    writeln!(out, "<aside>")?;
    writeln!(out, "<h3>{}</h3>", escape(title))?;
    writeln!(
        out,
        "<p>K (# new stations): <b>{}</b> <small>(range {}-{})</small></p>",
        controls.slider.value, controls.slider.min, controls.slider.max
    )?;
    let methods = controls
        .methods
        .iter()
        .map(|m| {
            if *m == controls.method {
                format!("<b>{}</b>", m)
            } else {
                m.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(out, "<p>Method: {}</p>", methods)?;
    let ks = controls
        .recommended_ks
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(
        out,
        "<p>Show recommended sites (K={}): <b>{}</b></p>",
        ks,
        if controls.show_recommended { "on" } else { "off" }
    )?;
    writeln!(out, "</aside>")
}

fn write_table(out: &mut String, rows: &[PerformanceRow]) -> std::fmt::Result {
    writeln!(
        out,
        "<table><tr><th>k</th><th>method</th><th>added_pop</th><th>added_pts</th></tr>"
    )?;
    for row in rows {
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.k,
            escape(&row.method),
            row.added_pop,
            row.added_pts
        )?;
    }
    writeln!(out, "</table>")
}

fn write_dashboard(out: &mut String, dashboard: &Dashboard) -> std::fmt::Result {
    let kpi = &dashboard.kpi;
    writeln!(
        out,
        "<div class=\"metric\"><div>Added covered population</div><div class=\"value\">{}</div></div>",
        kpi.added_pop_display()
    )?;
    writeln!(
        out,
        "<div class=\"metric\"><div>Added covered demand points</div><div class=\"value\">{}</div></div>",
        kpi.added_pts_display()
    )?;

    writeln!(out, "<h2>Performance vs K</h2>")?;
    writeln!(out, "<div class=\"columns\"><div>")?;
    write_table(out, &dashboard.comparison.table)?;
    writeln!(
        out,
        "</div><div><img src=\"{}\" alt=\"{}\" width=\"100%\"></div><div><img src=\"{}\" alt=\"{}\" width=\"100%\"></div></div>",
        ADDED_POINTS_SVG,
        escape(dashboard.comparison.added_points.title),
        ADDED_POPULATION_SVG,
        escape(dashboard.comparison.added_population.title)
    )?;

    let map = &dashboard.map;
    if let Some(notice) = &map.notice {
        writeln!(out, "<div class=\"info\">{}</div>", escape(notice))?;
    }
    writeln!(out, "<h2>Map: Existing / Demand / Candidate Points</h2>")?;
    writeln!(out, "<p><b>Legend</b></p><ul>")?;
    for entry in &map.legend {
        writeln!(
            out,
            "<li>{} <b>{}</b>: {}</li>",
            entry.symbol,
            escape(entry.name),
            escape(entry.description)
        )?;
    }
    writeln!(out, "</ul>")?;
    writeln!(
        out,
        "<img src=\"{}\" alt=\"map\" width=\"100%\"><p><small>Layers as GeoJSON: <a href=\"{}\">{}</a></small></p>",
        MAP_SVG, MAP_GEOJSON, MAP_GEOJSON
    )
}

/// Renders the page. A halted page shows the title and the error banner only.
pub fn render_html(page: &Page) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_page(&mut out, page);
    out
}

fn write_page(out: &mut String, page: &Page) -> std::fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(
        out,
        "<html><head><meta charset=\"utf-8\"><title>SF EV Charging Station Optimization</title><style>{}</style></head><body>",
        STYLE
    )?;
    write_controls(out, "Controls", &page.controls)?;
    writeln!(out, "<main><h1>{}</h1>", escape(&page.title))?;
    match &page.body {
        PageBody::Ready(dashboard) => write_dashboard(out, dashboard)?,
        PageBody::Halted { banner } => {
            writeln!(out, "<div class=\"error\">{}</div>", escape(banner))?
        }
    }
    writeln!(out, "</main></body></html>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }
}

//! Server-side HTML for the dashboards
//!
//! Pages are plain HTML with inline SVG charts; no scripts are served. All
//! text from a data source goes through `html_escape` before it is written.

use std::fmt::Write;

use civic_core::charts::{Chart, ChartKind, Slice};
use civic_core::models::{format_number, TableRow};
use civic_core::{MunicipalDashboard, OutlookDashboard};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN: f64 = 48.0;

const PALETTE: [&str; 6] = [
    "#2f6fb0", "#e08a2c", "#3a9a5b", "#c44e52", "#8172b2", "#937860",
];

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;color:#222}\
nav a{margin-right:1rem}\
table{border-collapse:collapse;margin:1rem 0}\
th,td{border:1px solid #ccc;padding:.3rem .6rem;text-align:left}\
th{background:#f3f3f3}\
section{margin-bottom:2rem}\
svg text{font-size:11px}";

fn esc(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn esc_attr(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

fn color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

/// Municipal dashboard page
pub fn municipal_page(dashboard: &MunicipalDashboard) -> String {
    let mut body = String::new();
    section(
        &mut body,
        "Annual Revenue vs Expenses",
        &chart_svg(&dashboard.revenue_expense_chart),
    );
    section(
        &mut body,
        "Budget Allocation by Sector",
        &pie_svg("Budget Allocation by Sector", &dashboard.budget_chart),
    );
    section(
        &mut body,
        "Key Economic Indicators",
        &table(&dashboard.indicators),
    );
    section(
        &mut body,
        "Sustainability Trends",
        &chart_svg(&dashboard.sustainability_chart),
    );
    section(
        &mut body,
        "Sustainability AI Insights",
        &table(&dashboard.sustainability),
    );

    page(&dashboard.title, &dashboard.generated_at.to_rfc3339(), &body)
}

/// Outlook dashboard page
pub fn outlook_page(dashboard: &OutlookDashboard) -> String {
    let mut body = String::new();
    section(
        &mut body,
        "Emissions and Renewables",
        &chart_svg(&dashboard.emissions_chart),
    );
    section(
        &mut body,
        "Economic Indicators",
        &chart_svg(&dashboard.economy_chart),
    );
    section(&mut body, "Insights", &table(&dashboard.records));

    page(&dashboard.title, &dashboard.generated_at.to_rfc3339(), &body)
}

fn page(title: &str, generated_at: &str, body: &str) -> String {
    let title = esc(title);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Municipal</a><a href=\"/outlook\">Outlook</a></nav>\n\
         <h1>{title}</h1>\n{body}<footer>Generated {generated}</footer>\n</body>\n</html>\n",
        generated = esc(generated_at),
    )
}

fn section(out: &mut String, heading: &str, content: &str) {
    let _ = write!(
        out,
        "<section>\n<h2>{}</h2>\n{}\n</section>\n",
        esc(heading),
        content
    );
}

/// Render rows as an HTML table
pub fn table<R: TableRow>(rows: &[R]) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for header in R::headers() {
        let _ = write!(html, "<th>{}</th>", esc(header));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in row.cells() {
            let _ = write!(html, "<td>{}</td>", esc(&cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");
    html
}

/// Draw a chart as inline SVG
pub fn chart_svg(chart: &Chart) -> String {
    match chart.kind {
        ChartKind::GroupedBar => bar_svg(chart),
        ChartKind::Line => line_svg(chart),
    }
}

fn svg_open(title: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" \
         width=\"{WIDTH}\" height=\"{HEIGHT}\" role=\"img\" aria-label=\"{label}\">\n\
         <title>{title}</title>\n",
        label = esc_attr(title),
        title = esc(title),
    )
}

fn axes(svg: &mut String, baseline: f64) {
    let bottom = HEIGHT - MARGIN;
    let right = WIDTH - MARGIN;
    let _ = writeln!(
        svg,
        "<line x1=\"{MARGIN}\" y1=\"{MARGIN}\" x2=\"{MARGIN}\" y2=\"{bottom}\" stroke=\"#888\"/>\
         <line x1=\"{MARGIN}\" y1=\"{baseline:.1}\" x2=\"{right}\" y2=\"{baseline:.1}\" stroke=\"#888\"/>"
    );
}

fn legend(svg: &mut String, names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        let x = MARGIN + i as f64 * 180.0;
        let _ = writeln!(
            svg,
            "<rect x=\"{x}\" y=\"12\" width=\"10\" height=\"10\" fill=\"{}\"/>\
             <text x=\"{:.1}\" y=\"21\">{}</text>",
            color(i),
            x + 14.0,
            esc(name)
        );
    }
}

/// Maps values to SVG y; the range always includes 0, so negative values
/// fall below the zero line
struct YAxis {
    lo: f64,
    scale: f64,
}

impl YAxis {
    fn for_chart(chart: &Chart) -> Self {
        let lo = chart.min_value();
        let span = chart.max_value() - lo;
        let scale = if span > 0.0 {
            (HEIGHT - 2.0 * MARGIN) / span
        } else {
            0.0
        };
        Self { lo, scale }
    }

    fn y(&self, value: f64) -> f64 {
        HEIGHT - MARGIN - (value - self.lo) * self.scale
    }
}

fn bar_svg(chart: &Chart) -> String {
    let mut svg = svg_open(&chart.title);
    let axis = YAxis::for_chart(chart);
    let zero = axis.y(0.0);
    axes(&mut svg, zero);

    let bottom = HEIGHT - MARGIN;
    let groups = chart.categories.len().max(1) as f64;
    let group_width = (WIDTH - 2.0 * MARGIN) / groups;
    let bar_width = group_width * 0.8 / chart.series.len().max(1) as f64;

    for (c, category) in chart.categories.iter().enumerate() {
        let group_x = MARGIN + c as f64 * group_width + group_width * 0.1;
        for (s, series) in chart.series.iter().enumerate() {
            let value = series.values.get(c).copied().unwrap_or(0.0);
            let top = axis.y(value);
            let _ = writeln!(
                svg,
                "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\">\
                 <title>{} {}: {}</title></rect>",
                group_x + s as f64 * bar_width,
                top.min(zero),
                bar_width,
                (top - zero).abs(),
                color(s),
                esc(&series.name),
                esc(category),
                format_number(value)
            );
        }
        let _ = writeln!(
            svg,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{}</text>",
            MARGIN + (c as f64 + 0.5) * group_width,
            bottom + 16.0,
            esc(category)
        );
    }

    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    legend(&mut svg, &names);
    svg.push_str("</svg>");
    svg
}

fn line_svg(chart: &Chart) -> String {
    let mut svg = svg_open(&chart.title);
    let axis = YAxis::for_chart(chart);
    axes(&mut svg, axis.y(0.0));

    let bottom = HEIGHT - MARGIN;
    let n = chart.categories.len();
    let plot_width = WIDTH - 2.0 * MARGIN;
    let x_at = |i: usize| {
        if n <= 1 {
            MARGIN + plot_width / 2.0
        } else {
            MARGIN + plot_width * i as f64 / (n - 1) as f64
        }
    };

    for (s, series) in chart.series.iter().enumerate() {
        let points: Vec<String> = series
            .values
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, v)| format!("{:.1},{:.1}", x_at(i), axis.y(*v)))
            .collect();
        let _ = writeln!(
            svg,
            "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>",
            color(s),
            points.join(" ")
        );
        for (i, v) in series.values.iter().take(n).enumerate() {
            let _ = writeln!(
                svg,
                "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"{}\">\
                 <title>{} {}: {}</title></circle>",
                x_at(i),
                axis.y(*v),
                color(s),
                esc(&series.name),
                esc(&chart.categories[i]),
                format_number(*v)
            );
        }
    }

    for (i, category) in chart.categories.iter().enumerate() {
        let _ = writeln!(
            svg,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{}</text>",
            x_at(i),
            bottom + 16.0,
            esc(category)
        );
    }

    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    legend(&mut svg, &names);
    svg.push_str("</svg>");
    svg
}

/// Draw slices as a pie with a labelled legend
pub fn pie_svg(title: &str, slices: &[Slice]) -> String {
    let mut svg = svg_open(title);
    let (cx, cy, r) = (HEIGHT / 2.0, HEIGHT / 2.0, HEIGHT / 2.0 - MARGIN / 2.0);
    let mut angle = -std::f64::consts::FRAC_PI_2;

    for (i, slice) in slices.iter().enumerate() {
        let label = format!(
            "{}: {} ({:.1}%)",
            slice.label,
            format_number(slice.value),
            slice.share_pct
        );
        if slice.share_pct >= 100.0 {
            let _ = writeln!(
                svg,
                "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{}\"><title>{}</title></circle>",
                color(i),
                esc(&label)
            );
        } else if slice.share_pct > 0.0 {
            let sweep = slice.share_pct / 100.0 * std::f64::consts::TAU;
            let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
            let end = angle + sweep;
            let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
            let large = if sweep > std::f64::consts::PI { 1 } else { 0 };
            let _ = writeln!(
                svg,
                "<path d=\"M{cx:.1},{cy:.1} L{x1:.1},{y1:.1} A{r:.1},{r:.1} 0 {large} 1 {x2:.1},{y2:.1} Z\" \
                 fill=\"{}\"><title>{}</title></path>",
                color(i),
                esc(&label)
            );
            angle = end;
        }

        let _ = writeln!(
            svg,
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"10\" height=\"10\" fill=\"{}\"/>\
             <text x=\"{:.1}\" y=\"{:.1}\">{}</text>",
            HEIGHT + 16.0,
            MARGIN + i as f64 * 20.0,
            color(i),
            HEIGHT + 32.0,
            MARGIN + i as f64 * 20.0 + 9.0,
            esc(&label)
        );
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_core::charts::{budget_slices, revenue_expense_chart, Series};
    use civic_core::datasets::{budget_sample, municipal_sample, outlook_sample};
    use civic_core::InsightEngine;

    #[test]
    fn test_municipal_page_contents() {
        let engine = InsightEngine::default();
        let dashboard = MunicipalDashboard::build("Springfield", municipal_sample(), &engine);
        let html = municipal_page(&dashboard);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Springfield</h1>"));
        assert!(html.contains("<th>AI Insight</th>"));
        assert!(html.contains("<td>On track</td>"));
        assert!(html.contains("<td>Moderate progress</td>"));
        assert!(html.contains("<td>Unemployment Rate</td>"));
        assert_eq!(html.matches("<svg").count(), 3);
    }

    #[test]
    fn test_municipal_page_headings() {
        let engine = InsightEngine::default();
        let dashboard = MunicipalDashboard::build("Town", municipal_sample(), &engine);
        let html = municipal_page(&dashboard);

        let headings = [
            "<h2>Annual Revenue vs Expenses</h2>",
            "<h2>Budget Allocation by Sector</h2>",
            "<h2>Key Economic Indicators</h2>",
            "<h2>Sustainability Trends</h2>",
            "<h2>Sustainability AI Insights</h2>",
        ];
        let positions: Vec<usize> = headings.iter().map(|h| html.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        // The insight table sits under its own heading, after the trend chart
        let insights = html.find("<h2>Sustainability AI Insights</h2>").unwrap();
        assert!(html[insights..].contains("<td>On track</td>"));
        assert!(!html[..insights].contains("<td>On track</td>"));
    }

    #[test]
    fn test_outlook_page_contents() {
        let engine = InsightEngine::default();
        let dashboard = OutlookDashboard::build("Outlook", outlook_sample(), &engine);
        let html = outlook_page(&dashboard);

        assert!(html.contains("Debt ratio above safe threshold"));
        assert!(html.contains("<th>Debt Ratio %</th>"));
        assert_eq!(html.matches("<polyline").count(), 4);
    }

    #[test]
    fn test_text_is_escaped() {
        let engine = InsightEngine::default();
        let mut dataset = municipal_sample();
        dataset.budget[0].sector = "<script>alert(1)</script>".to_string();
        let dashboard = MunicipalDashboard::build("A & B", dataset, &engine);
        let html = municipal_page(&dashboard);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<h1>A &amp; B</h1>"));
    }

    #[test]
    fn test_bar_chart_draws_every_value() {
        let chart = revenue_expense_chart(&civic_core::datasets::revenue_expense_sample());
        let svg = chart_svg(&chart);
        // 3 years x 2 series plus 2 legend swatches
        assert_eq!(svg.matches("<rect").count(), 8);
        assert!(svg.contains("Expenses 2022: 660"));
    }

    #[test]
    fn test_line_chart_plots_negative_values_below_zero() {
        let chart = Chart {
            kind: ChartKind::Line,
            title: "GDP Growth".to_string(),
            categories: vec!["2021".to_string(), "2022".to_string()],
            series: vec![Series {
                name: "GDP Growth %".to_string(),
                values: vec![2.0, -1.0],
            }],
        };
        let svg = chart_svg(&chart);

        // Zero line sits a third of the way up the plot
        assert!(svg.contains("y1=\"197.3\" x2=\"592\" y2=\"197.3\""));
        assert!(svg.contains("cy=\"272.0\""));
        assert!(svg.contains("cy=\"48.0\""));
        assert!(svg.contains("GDP Growth % 2022: -1"));
    }

    #[test]
    fn test_bar_chart_draws_negative_bars_down_from_zero() {
        let chart = Chart {
            kind: ChartKind::GroupedBar,
            title: "Balance".to_string(),
            categories: vec!["2021".to_string(), "2022".to_string()],
            series: vec![Series {
                name: "Balance".to_string(),
                values: vec![10.0, -5.0],
            }],
        };
        let svg = chart_svg(&chart);

        assert!(svg.contains("y=\"197.3\" width=\"217.6\" height=\"74.7\""));
        assert!(svg.contains("y=\"48.0\" width=\"217.6\" height=\"149.3\""));
    }

    #[test]
    fn test_empty_chart_renders() {
        let chart = Chart {
            kind: ChartKind::Line,
            title: "Empty".to_string(),
            categories: vec![],
            series: vec![Series {
                name: "Nothing".to_string(),
                values: vec![],
            }],
        };
        let svg = chart_svg(&chart);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_pie_slices() {
        let svg = pie_svg("Budget", &budget_slices(&budget_sample()));
        assert_eq!(svg.matches("<path").count(), 5);
        assert!(svg.contains("Infrastructure: 200 ("));

        let whole = pie_svg(
            "One",
            &[Slice {
                label: "All".to_string(),
                value: 5.0,
                share_pct: 100.0,
            }],
        );
        assert!(whole.contains("<circle"));
    }

    #[test]
    fn test_table_rows_in_order() {
        let html = table(&municipal_sample().revenue_expense);
        let first = html.find("<td>2021</td>").unwrap();
        let last = html.find("<td>2023</td>").unwrap();
        assert!(first < last);
    }
}

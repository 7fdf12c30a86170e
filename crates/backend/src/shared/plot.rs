//! SVG rendering for the dashboard
//!
//! Tree plots for the company hierarchy plus the bar and pie charts used
//! by the reports and analytics panes. Output is standalone SVG markup
//! that the page injects verbatim.

const PLOT_WIDTH: f64 = 1200.0;
const PLOT_HEIGHT: f64 = 600.0;
const PLOT_MARGIN: f64 = 40.0;

const CHART_HEIGHT: f64 = 420.0;
const CHART_MARGIN: f64 = 48.0;

/// Categorical color cycle for chart series
const PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// One bar of a bar chart
#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Escape text for inclusion in SVG markup
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Tidy tree layout rooted at vertex 0
///
/// Leaves take successive x slots, parents are centered over their
/// children, y is the depth below the root. Vertices unreachable from the
/// root start new trees to the right of the previous one.
pub fn tree_layout(vertex_count: usize, edges: &[(usize, usize)]) -> Vec<(f64, f64)> {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
    let mut has_parent = vec![false; vertex_count];
    for &(from, to) in edges {
        children[from].push(to);
        has_parent[to] = true;
    }

    fn place(
        vertex: usize,
        depth: usize,
        children: &[Vec<usize>],
        visited: &mut [bool],
        positions: &mut [(f64, f64)],
        next_slot: &mut f64,
    ) -> f64 {
        visited[vertex] = true;
        let mut child_xs = Vec::new();
        for &child in &children[vertex] {
            if !visited[child] {
                child_xs.push(place(
                    child,
                    depth + 1,
                    children,
                    visited,
                    positions,
                    next_slot,
                ));
            }
        }
        let x = if child_xs.is_empty() {
            let x = *next_slot;
            *next_slot += 1.0;
            x
        } else {
            child_xs.iter().sum::<f64>() / child_xs.len() as f64
        };
        positions[vertex] = (x, depth as f64);
        x
    }

    let mut positions = vec![(0.0, 0.0); vertex_count];
    let mut visited = vec![false; vertex_count];
    let mut next_slot = 0.0;

    if vertex_count > 0 {
        place(0, 0, &children, &mut visited, &mut positions, &mut next_slot);
    }
    // Remaining roots: category filtering can disconnect the tree
    for vertex in 0..vertex_count {
        if !visited[vertex] && !has_parent[vertex] {
            place(
                vertex,
                0,
                &children,
                &mut visited,
                &mut positions,
                &mut next_slot,
            );
        }
    }
    for vertex in 0..vertex_count {
        if !visited[vertex] {
            place(
                vertex,
                0,
                &children,
                &mut visited,
                &mut positions,
                &mut next_slot,
            );
        }
    }

    positions
}

/// Render the company hierarchy as an SVG tree, root at the top
pub fn render_tree_plot(vertices: &[String], edges: &[(usize, usize)]) -> String {
    let positions = tree_layout(vertices.len(), edges);

    let max_x = positions.iter().map(|p| p.0).fold(0.0, f64::max);
    let max_y = positions.iter().map(|p| p.1).fold(0.0, f64::max);

    let inner_width = PLOT_WIDTH - 2.0 * PLOT_MARGIN;
    let inner_height = PLOT_HEIGHT - 2.0 * PLOT_MARGIN;
    let to_px = |(x, y): (f64, f64)| -> (f64, f64) {
        let px = if max_x > 0.0 {
            PLOT_MARGIN + x / max_x * inner_width
        } else {
            PLOT_WIDTH / 2.0
        };
        let py = if max_y > 0.0 {
            PLOT_MARGIN + y / max_y * inner_height
        } else {
            PLOT_HEIGHT / 2.0
        };
        (px, py)
    };

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = PLOT_WIDTH,
        h = PLOT_HEIGHT
    ));
    svg.push_str(&format!(
        r##"<rect width="{w}" height="{h}" fill="#fdfdfd"/>"##,
        w = PLOT_WIDTH,
        h = PLOT_HEIGHT
    ));

    for &(from, to) in edges {
        let (x1, y1) = to_px(positions[from]);
        let (x2, y2) = to_px(positions[to]);
        svg.push_str(&format!(
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="black" stroke-width="1"/>"#
        ));
    }

    for (vertex, &position) in positions.iter().enumerate() {
        let (x, y) = to_px(position);
        svg.push_str(&format!(
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="5" fill="blue"/>"#
        ));
        svg.push_str(&format!(
            r##"<text x="{x:.1}" y="{ty:.1}" text-anchor="middle" font-size="12" fill="#333">{label}</text>"##,
            ty = y - 10.0,
            label = escape_xml(&vertices[vertex])
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Render a vertical bar chart with per-bar colors
pub fn render_colored_bar_chart(bars: &[Bar], title: &str, title_color: &str) -> String {
    // Widen the canvas when there are many bars so labels stay readable
    let width = f64::max(640.0, bars.len() as f64 * 40.0 + 2.0 * CHART_MARGIN);
    let inner_width = width - 2.0 * CHART_MARGIN;
    let inner_height = CHART_HEIGHT - 2.0 * CHART_MARGIN - 40.0;
    let base_y = CHART_HEIGHT - CHART_MARGIN - 40.0;

    let max_value = bars.iter().map(|b| b.value).fold(0.0, f64::max);

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{h}" viewBox="0 0 {width} {h}">"#,
        h = CHART_HEIGHT
    ));
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{h}" fill="white"/>"#,
        h = CHART_HEIGHT
    ));
    svg.push_str(&format!(
        r#"<text x="{tx:.1}" y="24" text-anchor="middle" font-size="18" fill="{title_color}">{title}</text>"#,
        tx = width / 2.0,
        title = escape_xml(title)
    ));
    svg.push_str(&format!(
        r##"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="#999" stroke-width="1"/>"##,
        x1 = CHART_MARGIN,
        x2 = width - CHART_MARGIN,
        y = base_y
    ));

    if !bars.is_empty() && max_value > 0.0 {
        let slot = inner_width / bars.len() as f64;
        let bar_width = slot * 0.6;

        for (index, bar) in bars.iter().enumerate() {
            let x = CHART_MARGIN + index as f64 * slot + (slot - bar_width) / 2.0;
            let height = bar.value / max_value * inner_height;
            let y = base_y - height;
            let center = x + bar_width / 2.0;

            svg.push_str(&format!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{height:.1}" fill="{color}"/>"#,
                color = bar.color
            ));
            svg.push_str(&format!(
                r##"<text x="{center:.1}" y="{vy:.1}" text-anchor="middle" font-size="10" fill="#333">{value}</text>"##,
                vy = y - 4.0,
                value = format_value(bar.value)
            ));
            svg.push_str(&format!(
                r##"<text x="{center:.1}" y="{ly:.1}" text-anchor="end" font-size="10" fill="#333" transform="rotate(-35 {center:.1} {ly:.1})">{label}</text>"##,
                ly = base_y + 14.0,
                label = escape_xml(&bar.label)
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Render a vertical bar chart with the default color cycle
pub fn render_vertical_bar_chart(rows: &[(String, f64)], title: &str) -> String {
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(index, (label, value))| Bar {
            label: label.clone(),
            value: *value,
            color: PALETTE[index % PALETTE.len()].to_string(),
        })
        .collect();
    render_colored_bar_chart(&bars, title, "#333")
}

/// Render a pie chart with a legend on the right
pub fn render_pie_chart(rows: &[(String, f64)], title: &str) -> String {
    let width = 640.0;
    let cx = 200.0;
    let cy = 230.0;
    let radius = 140.0;

    let total: f64 = rows.iter().map(|(_, value)| value.max(0.0)).sum();

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{h}" viewBox="0 0 {width} {h}">"#,
        h = CHART_HEIGHT
    ));
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{h}" fill="white"/>"#,
        h = CHART_HEIGHT
    ));
    svg.push_str(&format!(
        r##"<text x="{tx:.1}" y="24" text-anchor="middle" font-size="18" fill="#333">{title}</text>"##,
        tx = width / 2.0,
        title = escape_xml(title)
    ));

    if total > 0.0 {
        let point = |angle: f64| -> (f64, f64) { (cx + radius * angle.cos(), cy + radius * angle.sin()) };
        let mut start_angle = -std::f64::consts::FRAC_PI_2;

        for (index, (_, value)) in rows.iter().enumerate() {
            if *value <= 0.0 {
                continue;
            }
            let fraction = value / total;
            let color = PALETTE[index % PALETTE.len()];

            if fraction >= 0.999 {
                // A single slice degenerates as an arc, draw the full disc
                svg.push_str(&format!(
                    r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{radius:.1}" fill="{color}"/>"#
                ));
                break;
            }

            let end_angle = start_angle + fraction * std::f64::consts::TAU;
            let (x1, y1) = point(start_angle);
            let (x2, y2) = point(end_angle);
            let large_arc = i32::from(end_angle - start_angle > std::f64::consts::PI);

            svg.push_str(&format!(
                r#"<path d="M {cx:.1} {cy:.1} L {x1:.1} {y1:.1} A {radius:.1} {radius:.1} 0 {large_arc} 1 {x2:.1} {y2:.1} Z" fill="{color}"/>"#
            ));
            start_angle = end_angle;
        }

        // Legend
        for (index, (label, value)) in rows.iter().enumerate() {
            let color = PALETTE[index % PALETTE.len()];
            let y = 80.0 + index as f64 * 22.0;
            svg.push_str(&format!(
                r#"<rect x="380" y="{ry:.1}" width="12" height="12" fill="{color}"/>"#,
                ry = y - 10.0
            ));
            svg.push_str(&format!(
                r##"<text x="398" y="{y:.1}" font-size="12" fill="#333">{label} ({value})</text>"##,
                label = escape_xml(label),
                value = format_value(*value)
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Trim trailing zeros off chart value labels
fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_layout_increases_depth() {
        let positions = tree_layout(3, &[(0, 1), (1, 2)]);
        assert_eq!(positions[0].1, 0.0);
        assert_eq!(positions[1].1, 1.0);
        assert_eq!(positions[2].1, 2.0);
    }

    #[test]
    fn parent_is_centered_over_children() {
        let positions = tree_layout(3, &[(0, 1), (0, 2)]);
        let mid = (positions[1].0 + positions[2].0) / 2.0;
        assert!((positions[0].0 - mid).abs() < 1e-9);
        assert!((positions[1].0 - positions[2].0).abs() > 0.5);
    }

    #[test]
    fn disconnected_vertices_get_their_own_slots() {
        // Vertex 2 has no edges at all
        let positions = tree_layout(3, &[(0, 1)]);
        assert_eq!(positions[2].1, 0.0);
        assert!(positions[2].0 > positions[1].0);
    }

    #[test]
    fn tree_plot_draws_every_vertex_and_edge() {
        let vertices = vec![
            "Root Ltd".to_string(),
            "Child A".to_string(),
            "Child B".to_string(),
        ];
        let edges = vec![(0, 1), (0, 2)];
        let svg = render_tree_plot(&vertices, &edges);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("<line").count(), 2);
        assert!(svg.contains("Root Ltd"));
    }

    #[test]
    fn tree_plot_escapes_labels() {
        let vertices = vec!["A & B <Ltd>".to_string()];
        let svg = render_tree_plot(&vertices, &[]);
        assert!(svg.contains("A &amp; B &lt;Ltd&gt;"));
        assert!(!svg.contains("A & B"));
    }

    #[test]
    fn bar_chart_draws_one_bar_per_row() {
        let rows = vec![
            ("Good".to_string(), 40.0),
            ("Outstanding".to_string(), 25.0),
        ];
        let svg = render_vertical_bar_chart(&rows, "Full Inspection Outcomes");
        // Background rect plus one per bar
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains("Full Inspection Outcomes"));
    }

    #[test]
    fn pie_chart_draws_one_slice_per_positive_row() {
        let rows = vec![
            ("London".to_string(), 30.0),
            ("South East".to_string(), 20.0),
            ("Empty".to_string(), 0.0),
        ];
        let svg = render_pie_chart(&rows, "Providers by Region");
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn pie_chart_single_slice_is_a_full_disc() {
        let rows = vec![("London".to_string(), 55.5)];
        let svg = render_pie_chart(&rows, "Providers by Region");
        assert_eq!(svg.matches("<path").count(), 0);
        // Disc plus the legend swatch
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn value_labels_drop_trailing_zeros() {
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(12.34), "12.3");
    }
}

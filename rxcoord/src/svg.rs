use std::fmt::Display;

use crate::config::Layout;
use crate::curve::CurveDescription;
use crate::scene::Scene;

pub mod palette {
    use crate::model::Color;

    pub const BACKGROUND: Color = Color::rgb(0x0b, 0x0f, 0x14);
    pub const GRID: Color = Color::rgb(0x26, 0x30, 0x42);
    pub const AXIS: Color = Color::rgb(0xe8, 0xef, 0xf8);
    pub const MUTED: Color = Color::rgb(0xa8, 0xb3, 0xc4);
    pub const BASE_CURVE: Color = Color::rgb(0x66, 0xd9, 0xef);
    pub const ENDPOINT: Color = Color::rgb(0xa6, 0xe2, 0x2e);
    pub const TRANSITION: Color = Color::rgb(0xff, 0x61, 0x88);
    pub const ACCENT: Color = Color::rgb(0xe5, 0xc0, 0x7b);
    pub const HEAT_SHADE: Color = Color::rgb(0x6f, 0xa8, 0xdc);
    pub const LEGEND_FILL: Color = Color::rgb(0x12, 0x18, 0x22);
    pub const LEGEND_BORDER: Color = Color::rgb(0x1e, 0x26, 0x35);
}

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const ARROW_MARKER_ID: &str = "arrow";

type Attrs<'a> = &'a [(&'a str, &'a dyn Display)];

struct SvgWriter {
    buf: String,
}

impl SvgWriter {
    fn new() -> Self {
        SvgWriter { buf: String::with_capacity(8 * 1024) }
    }

    fn attrs(&mut self, attrs: Attrs) {
        for (k, v) in attrs {
            self.buf.push_str(&format!(" {}=\"{}\"", k, v));
        }
    }

    fn open(&mut self, tag: &str, attrs: Attrs) {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.attrs(attrs);
        self.buf.push('>');
    }

    fn close(&mut self, tag: &str) {
        self.buf.push_str(&format!("</{}>", tag));
    }

    fn empty(&mut self, tag: &str, attrs: Attrs) {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.attrs(attrs);
        self.buf.push_str("/>");
    }

    fn text(&mut self, attrs: Attrs, content: &str) {
        self.open("text", attrs);
        self.buf.push_str(content);
        self.close("text");
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &str, width: f32) {
        self.empty(
            "line",
            &[("x1", &x1), ("y1", &y1), ("x2", &x2), ("y2", &y2), ("stroke", &stroke), ("stroke-width", &width)],
        );
    }

    // Short horizontal tick centred on (x, y), used for bracket ends.
    fn tick(&mut self, x: f32, y: f32, stroke: &str) {
        self.line(x - 6.0, y, x + 6.0, y, stroke, 3.0);
    }

    fn dot(&mut self, x: f32, y: f32, r: f32, fill: &str) {
        self.empty("circle", &[("cx", &x), ("cy", &y), ("r", &r), ("fill", &fill)]);
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Renders the complete diagram as a standalone SVG document.
///
/// Each call produces a fresh document; nothing is carried over between renders.
pub fn render_svg(scene: &Scene) -> String {
    let l = &scene.layout;
    let mut w = SvgWriter::new();
    let view_box = format!("0 0 {} {}", l.width, l.height);
    w.open(
        "svg",
        &[
            ("xmlns", &SVG_NS),
            ("viewBox", &view_box),
            ("width", &l.width),
            ("height", &l.height),
            ("font-family", &"sans-serif"),
        ],
    );

    draw_axes(&mut w, l);
    draw_base(&mut w, &scene.base);
    if let Some(cat) = &scene.catalyst {
        draw_catalyst(&mut w, cat);
    }
    if scene.heat_overlay {
        draw_heat(&mut w, l, &scene.base);
    }
    draw_legend(&mut w, l);
    draw_defs(&mut w);

    w.close("svg");
    w.finish()
}

fn draw_axes(w: &mut SvgWriter, l: &Layout) {
    let (left, right, top, bottom) = (l.axis_left(), l.axis_right(), l.axis_top(), l.axis_bottom());
    let grid = palette::GRID.hex();
    let axis = palette::AXIS.hex();
    let muted = palette::MUTED.hex();

    w.open("g", &[("id", &"axes")]);
    let mut x = left + 10.0;
    while x <= right {
        w.line(x, top, x, bottom, &grid, 1.0);
        x += 60.0;
    }
    let mut y = top + 20.0;
    while y <= bottom {
        w.line(left, y, right, y, &grid, 1.0);
        y += 60.0;
    }

    w.line(left, bottom, right, bottom, &axis, 2.0); // reaction coordinate
    w.line(left, bottom, left, top, &axis, 2.0); // potential energy

    let x_head = format!(
        "{},{} {},{} {},{}",
        right, bottom, right - 8.0, bottom - 4.0, right - 8.0, bottom + 4.0
    );
    w.empty("polygon", &[("points", &x_head), ("fill", &axis)]);
    let y_head = format!(
        "{},{} {},{} {},{}",
        left, top, left - 4.0, top + 8.0, left + 4.0, top + 8.0
    );
    w.empty("polygon", &[("points", &y_head), ("fill", &axis)]);

    w.text(
        &[("x", &(right - 8.0)), ("y", &(bottom - 10.0)), ("fill", &muted), ("font-size", &14)],
        "Reaction coordinate →",
    );
    w.text(
        &[("x", &(left + 10.0)), ("y", &(top + 12.0)), ("fill", &muted), ("font-size", &14)],
        "Potential energy ↑",
    );
    w.close("g");
}

fn draw_base(w: &mut SvgWriter, c: &CurveDescription) {
    let green = palette::ENDPOINT.hex();
    let pink = palette::TRANSITION.hex();
    let accent = palette::ACCENT.hex();
    let (r, p, ts) = (c.reactant, c.product, c.transition);

    w.empty(
        "path",
        &[("d", &c.path), ("fill", &"none"), ("stroke", &palette::BASE_CURVE.hex()), ("stroke-width", &4)],
    );

    w.text(
        &[("x", &(r.x - 10.0)), ("y", &(r.y + 22.0)), ("fill", &green), ("text-anchor", &"end"), ("font-size", &16)],
        "Reactants",
    );
    w.dot(r.x, r.y, 4.0, &green);
    w.text(
        &[("x", &(p.x + 10.0)), ("y", &(p.y + 22.0)), ("fill", &green), ("text-anchor", &"start"), ("font-size", &16)],
        "Products",
    );
    w.dot(p.x, p.y, 4.0, &green);

    w.dot(ts.x, ts.y, 5.0, &pink);
    w.text(
        &[("x", &ts.x), ("y", &(ts.y - 10.0)), ("fill", &pink), ("text-anchor", &"middle"), ("font-size", &14)],
        "TS",
    );

    // Eₐ bracket: reactant level up to the peak, at the reactant x.
    w.line(r.x, r.y, r.x, ts.y, &accent, 3.0);
    w.text(
        &[("x", &(r.x + 10.0)), ("y", &((r.y + ts.y) / 2.0)), ("fill", &accent), ("font-size", &14)],
        "Eₐ",
    );
    w.tick(r.x, r.y, &accent);
    w.tick(r.x, ts.y, &accent);

    // ΔH bracket right of the products.
    let x_dh = p.x + 45.0;
    w.line(x_dh, r.y, x_dh, p.y, &green, 3.0);
    w.tick(x_dh, r.y, &green);
    w.tick(x_dh, p.y, &green);
    w.text(
        &[("x", &(x_dh + 8.0)), ("y", &((r.y + p.y) / 2.0)), ("fill", &green), ("font-size", &14)],
        "ΔH",
    );
}

fn draw_catalyst(w: &mut SvgWriter, cat: &CurveDescription) {
    let accent = palette::ACCENT.hex();
    let ts = cat.transition;
    let marker = format!("url(#{})", ARROW_MARKER_ID);

    w.empty(
        "path",
        &[
            ("d", &cat.path),
            ("fill", &"none"),
            ("stroke", &accent),
            ("stroke-width", &4),
            ("stroke-dasharray", &"10 8"),
        ],
    );
    w.dot(ts.x, ts.y, 4.0, &accent);
    w.text(
        &[("x", &ts.x), ("y", &(ts.y - 10.0)), ("fill", &accent), ("text-anchor", &"middle"), ("font-size", &13)],
        "TS (a)",
    );

    let pointer = format!(
        "M {} {} C {} {}, {} {}, {} {}",
        ts.x - 120.0,
        ts.y + 70.0,
        ts.x - 80.0,
        ts.y + 20.0,
        ts.x - 40.0,
        ts.y + 10.0,
        ts.x - 6.0,
        ts.y + 4.0
    );
    w.empty(
        "path",
        &[("d", &pointer), ("fill", &"none"), ("stroke", &accent), ("stroke-width", &2), ("marker-end", &marker)],
    );
    w.text(
        &[("x", &(ts.x - 130.0)), ("y", &(ts.y + 92.0)), ("fill", &accent), ("font-size", &14)],
        "lower Eₐ → faster",
    );
}

fn draw_heat(w: &mut SvgWriter, l: &Layout, base: &CurveDescription) {
    let accent = palette::ACCENT.hex();
    let muted = palette::MUTED.hex();
    let ts = base.transition;
    let marker = format!("url(#{})", ARROW_MARKER_ID);

    // More molecules populate the band just under the peak.
    let y_pop = ts.y + 26.0;
    w.empty(
        "line",
        &[
            ("x1", &l.axis_left()),
            ("y1", &y_pop),
            ("x2", &l.axis_right()),
            ("y2", &y_pop),
            ("stroke", &accent),
            ("stroke-width", &2),
            ("stroke-dasharray", &"6 6"),
        ],
    );
    w.text(
        &[
            ("x", &(l.axis_right() - 4.0)),
            ("y", &(y_pop - 8.0)),
            ("fill", &accent),
            ("font-size", &13),
            ("text-anchor", &"end"),
        ],
        "b: +30 °C (more molecules ≥ Eₐ)",
    );

    w.empty(
        "rect",
        &[
            ("x", &l.axis_left()),
            ("y", &l.axis_top()),
            ("width", &(l.axis_right() - l.axis_left())),
            ("height", &base.activation_height()),
            ("fill", &palette::HEAT_SHADE.hex()),
            ("opacity", &"0.10"),
        ],
    );

    let pointer = format!(
        "M {} {} Q {} {} {} {}",
        ts.x + 100.0,
        ts.y + 110.0,
        ts.x + 40.0,
        ts.y + 40.0,
        ts.x + 8.0,
        ts.y + 6.0
    );
    w.empty(
        "path",
        &[("d", &pointer), ("fill", &"none"), ("stroke", &muted), ("stroke-width", &2), ("marker-end", &marker)],
    );
    w.text(
        &[("x", &(ts.x + 108.0)), ("y", &(ts.y + 132.0)), ("fill", &muted), ("font-size", &14)],
        "higher T → more molecules clear Eₐ → faster",
    );
}

fn draw_legend(w: &mut SvgWriter, l: &Layout) {
    let muted = palette::MUTED.hex();
    let accent = palette::ACCENT.hex();
    let transform = format!("translate({}, {})", l.width - 300.0, 60);

    w.open("g", &[("transform", &transform)]);
    w.empty(
        "rect",
        &[
            ("x", &0),
            ("y", &0),
            ("width", &260),
            ("height", &76),
            ("rx", &12),
            ("fill", &palette::LEGEND_FILL.hex()),
            ("stroke", &palette::LEGEND_BORDER.hex()),
        ],
    );
    w.line(16.0, 22.0, 76.0, 22.0, &palette::BASE_CURVE.hex(), 4.0);
    w.text(&[("x", &88), ("y", &26), ("fill", &muted), ("font-size", &14)], "Base reaction coordinate");
    w.empty(
        "line",
        &[
            ("x1", &16),
            ("y1", &46),
            ("x2", &76),
            ("y2", &46),
            ("stroke", &accent),
            ("stroke-width", &4),
            ("stroke-dasharray", &"10 8"),
        ],
    );
    w.text(
        &[("x", &88), ("y", &50), ("fill", &muted), ("font-size", &14)],
        "Dotted: catalyst (a) or +30 °C overlay (b)",
    );
    w.close("g");
}

fn draw_defs(w: &mut SvgWriter) {
    w.open("defs", &[]);
    w.open(
        "marker",
        &[
            ("id", &ARROW_MARKER_ID),
            ("markerWidth", &10),
            ("markerHeight", &7),
            ("refX", &10),
            ("refY", &3.5),
            ("orient", &"auto"),
        ],
    );
    w.empty("polygon", &[("points", &"0 0, 10 3.5, 0 7"), ("fill", &palette::ACCENT.hex())]);
    w.close("marker");
    w.close("defs");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalystParams;
    use crate::model::DiagramSettings;

    fn render(settings: DiagramSettings) -> String {
        render_svg(&Scene::compute(&Layout::default(), &CatalystParams::default(), &settings))
    }

    #[test]
    fn base_document_shape() {
        let svg = render(DiagramSettings { barrier: 1.0, ..Default::default() });
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 960 520\""));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("d=\"M 100 360 C 220 360 350 150 470 150 C 590 150 720 280 840 280\""));
        assert!(svg.contains(">Reactants</text>"));
        assert!(svg.contains(">ΔH</text>"));
        assert!(svg.contains("<marker id=\"arrow\""));
        assert!(!svg.contains("stroke-dasharray=\"6 6\""));
        assert!(!svg.contains("TS (a)"));
    }

    #[test]
    fn grid_line_counts() {
        let svg = render(DiagramSettings::default());
        // 15 vertical (x = 70..=910), 7 horizontal (y = 60..=420)
        assert_eq!(svg.matches("stroke=\"#263042\"").count(), 15 + 7);
    }

    #[test]
    fn overlays_follow_flags() {
        let svg = render(DiagramSettings { catalyst_overlay: true, ..Default::default() });
        assert!(svg.contains("TS (a)"));
        assert!(svg.contains("marker-end=\"url(#arrow)\""));
        assert!(!svg.contains("opacity=\"0.10\""));

        let svg = render(DiagramSettings { heat_overlay: true, ..Default::default() });
        assert!(svg.contains("opacity=\"0.10\""));
        assert!(svg.contains("stroke-dasharray=\"6 6\""));
        assert!(!svg.contains("TS (a)"));
    }

    #[test]
    fn heat_band_spans_activation_height() {
        let svg = render(DiagramSettings { barrier: 1.0, heat_overlay: true, ..Default::default() });
        assert!(svg.contains("<rect x=\"60\" y=\"40\" width=\"860\" height=\"210\""));
    }
}

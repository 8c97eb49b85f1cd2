use nyvo_core::{
    Color, FontStyle, LINE_HEIGHT, ObjectKind, TextAlign, TextStyle, VisualObject,
};

fn color_attr(color: Option<Color>) -> String {
    match color {
        Some(c) => c.to_css(),
        None => "none".to_string(),
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the document as an SVG string sized to the workspace rectangle.
/// Content outside the workspace is clipped by the viewBox, matching the
/// raster exports.
pub fn render_svg(workspace: &VisualObject, objects: &[VisualObject]) -> String {
    let page = workspace.bounds();
    let (width, height) = (page.width, page.height);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"{} {} {width} {height}\">\n",
        page.x, page.y
    ));

    // Page background
    svg.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{width}\" height=\"{height}\" fill=\"{}\" />\n",
        page.x,
        page.y,
        color_attr(workspace.fill)
    ));

    for object in objects {
        render_object_svg(&mut svg, object);
    }

    svg.push_str("</svg>");
    svg
}

fn render_object_svg(out: &mut String, object: &VisualObject) {
    let mut transform = format!("translate({}, {})", object.left, object.top);
    if object.angle != 0.0 {
        transform.push_str(&format!(" rotate({})", object.angle));
    }
    if object.scale_x != 1.0 || object.scale_y != 1.0 {
        transform.push_str(&format!(" scale({}, {})", object.scale_x, object.scale_y));
    }

    let mut group = format!("<g transform=\"{transform}\"");
    if object.opacity < 1.0 {
        group.push_str(&format!(" opacity=\"{}\"", object.opacity));
    }
    group.push_str(">\n");
    out.push_str(&group);

    let mut paint = format!(
        "fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
        color_attr(object.fill),
        color_attr(object.stroke),
        object.stroke_width
    );
    if !object.stroke_dash_array.is_empty() {
        let dashes: Vec<String> = object
            .stroke_dash_array
            .iter()
            .map(|d| d.to_string())
            .collect();
        paint.push_str(&format!(" stroke-dasharray=\"{}\"", dashes.join(" ")));
    }

    match &object.kind {
        ObjectKind::Rect {
            width,
            height,
            rx,
            ry,
        } => {
            out.push_str(&format!(
                "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" rx=\"{rx}\" ry=\"{ry}\" {paint} />\n"
            ));
        }
        ObjectKind::Circle { radius } => {
            out.push_str(&format!(
                "  <circle cx=\"{radius}\" cy=\"{radius}\" r=\"{radius}\" {paint} />\n"
            ));
        }
        ObjectKind::Triangle { width, height } => {
            out.push_str(&format!(
                "  <polygon points=\"{},0 {width},{height} 0,{height}\" {paint} />\n",
                width / 2.0
            ));
        }
        ObjectKind::Polygon { points, .. } => {
            let pts: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
            out.push_str(&format!(
                "  <polygon points=\"{}\" {paint} />\n",
                pts.join(" ")
            ));
        }
        ObjectKind::Textbox { text, width, style } => {
            render_text_svg(out, text, *width, style, &color_attr(object.fill));
        }
        ObjectKind::Image { src, width, height, .. } => {
            out.push_str(&format!(
                "  <image href=\"{}\" width=\"{width}\" height=\"{height}\" />\n",
                xml_escape(src)
            ));
        }
        ObjectKind::Path { points } => {
            let mut d = String::new();
            for (i, p) in points.iter().enumerate() {
                if i == 0 {
                    d.push_str(&format!("M {} {}", p.x, p.y));
                } else {
                    d.push_str(&format!(" L {} {}", p.x, p.y));
                }
            }
            out.push_str(&format!("  <path d=\"{d}\" {paint} />\n"));
        }
    }

    out.push_str("</g>\n");
}

fn render_text_svg(out: &mut String, text: &str, width: f32, style: &TextStyle, fill: &str) {
    let (anchor, x) = match style.text_align {
        TextAlign::Center => ("middle", width / 2.0),
        TextAlign::Right => ("end", width),
        TextAlign::Left | TextAlign::Justify => ("start", 0.0),
    };

    let mut decorations = Vec::new();
    if style.underline {
        decorations.push("underline");
    }
    if style.linethrough {
        decorations.push("line-through");
    }

    let mut y = style.font_size * 0.9; // first baseline
    for line in text.lines() {
        let mut attrs = format!(
            "x=\"{x}\" y=\"{y}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{fill}\" text-anchor=\"{anchor}\"",
            xml_escape(&style.font_family),
            style.font_size,
            style.font_weight
        );
        if style.font_style == FontStyle::Italic {
            attrs.push_str(" font-style=\"italic\"");
        }
        if !decorations.is_empty() {
            attrs.push_str(&format!(" text-decoration=\"{}\"", decorations.join(" ")));
        }
        out.push_str(&format!("  <text {attrs}>{}</text>\n", xml_escape(line)));
        y += style.font_size * LINE_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyvo_core::Point;

    fn workspace() -> VisualObject {
        let mut ws = VisualObject::new(ObjectKind::Rect {
            width: 900.0,
            height: 1200.0,
            rx: 0.0,
            ry: 0.0,
        });
        ws.fill = Some(Color::WHITE);
        ws
    }

    fn blue_rect() -> VisualObject {
        let mut o = VisualObject::new(ObjectKind::Rect {
            width: 400.0,
            height: 400.0,
            rx: 0.0,
            ry: 0.0,
        });
        o.left = 100.0;
        o.top = 100.0;
        o.fill = Some(Color::rgba(0.0, 0.0, 1.0, 1.0));
        o
    }

    #[test]
    fn document_is_framed_by_the_workspace() {
        let svg = render_svg(&workspace(), &[blue_rect()]);

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("width=\"900\" height=\"1200\""));
        assert!(svg.contains("viewBox=\"0 0 900 1200\""));
        assert!(svg.contains("fill=\"rgba(255, 255, 255, 1)\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn transforms_compose_translate_rotate_scale() {
        let mut o = blue_rect();
        o.angle = 45.0;
        o.scale_x = 2.0;
        let svg = render_svg(&workspace(), &[o]);

        assert!(svg.contains("translate(100, 100) rotate(45) scale(2, 1)"));
    }

    #[test]
    fn dash_and_opacity_attributes_appear_only_when_set() {
        let mut o = blue_rect();
        o.stroke = Some(Color::BLACK);
        o.stroke_dash_array = [5.0, 5.0].into_iter().collect();
        o.opacity = 0.5;
        let svg = render_svg(&workspace(), &[o]);
        assert!(svg.contains("stroke-dasharray=\"5 5\""));
        assert!(svg.contains("opacity=\"0.5\""));

        let plain = render_svg(&workspace(), &[blue_rect()]);
        assert!(!plain.contains("stroke-dasharray"));
        assert!(!plain.contains(" opacity="));
    }

    #[test]
    fn text_is_escaped_and_anchored() {
        let style = TextStyle {
            text_align: TextAlign::Center,
            underline: true,
            ..TextStyle::default()
        };
        let mut o = VisualObject::new(ObjectKind::Textbox {
            text: "Fish & <Chips>".to_string(),
            width: 300.0,
            style,
        });
        o.fill = Some(Color::BLACK);
        let svg = render_svg(&workspace(), &[o]);

        assert!(svg.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("x=\"150\""));
        assert!(svg.contains("text-decoration=\"underline\""));
    }

    #[test]
    fn paths_emit_polyline_data() {
        let o = VisualObject::new(ObjectKind::Path {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 5.0),
                Point::new(20.0, 0.0),
            ],
        });
        let svg = render_svg(&workspace(), &[o]);
        assert!(svg.contains("<path d=\"M 0 0 L 10 5 L 20 0\""));
        assert!(svg.contains("fill=\"none\""));
    }
}

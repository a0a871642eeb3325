use std::fmt::Write as _;
use std::io::Write;

use basket_kernel::{build_surface, SurfaceDescriptor};
use basket_types::{BasketConfig, ControlPoint};
use tracing::{debug, instrument};

use crate::errors::EmitError;

/// Shortest text that reads back as `value`, always with a fractional part
/// (`0.0`, `-0.4`, `0.2497`). Negative zero keeps its sign.
pub fn format_coord(value: f64) -> String {
    format!("{value:?}")
}

fn controlpoint_line(point: &ControlPoint) -> String {
    format!(
        "    <controlpoint xx=\"{}\" yy=\"{}\" zz=\"{}\" />",
        format_coord(point.x),
        format_coord(point.y),
        format_coord(point.z)
    )
}

/// Render a surface as a `<nurbs>` element, one control point per line.
pub fn render_nurbs(surface: &SurfaceDescriptor) -> String {
    let mut markup = String::with_capacity(64 * (surface.control_points.len() + 2));
    // Writing into a String cannot fail.
    let _ = writeln!(
        markup,
        "<nurbs degree_u=\"{}\" degree_v=\"{}\" parts_u=\"{}\" parts_v=\"{}\">",
        surface.degree_u, surface.degree_v, surface.parts_u, surface.parts_v
    );
    for point in &surface.control_points {
        markup.push_str(&controlpoint_line(point));
        markup.push('\n');
    }
    markup.push_str("</nurbs>\n");
    markup
}

/// Write the markup for `surface` to `out`.
pub fn write_nurbs(surface: &SurfaceDescriptor, mut out: impl Write) -> Result<(), EmitError> {
    out.write_all(render_nurbs(surface).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Generate the surface described by `config` and write its markup to `out`.
#[instrument(skip_all, fields(degree_u = config.degree_u))]
pub fn emit_basket(config: &BasketConfig, out: impl Write) -> Result<(), EmitError> {
    let surface = build_surface(config)?;
    write_nurbs(&surface, out)?;
    debug!(lines = surface.control_points.len() + 2, "markup written");
    Ok(())
}

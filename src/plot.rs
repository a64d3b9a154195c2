//! Renderers for stability regions and order stars.
//!
//! Both renderers follow the same pipeline: build a sample grid, evaluate a
//! magnitude field over it, threshold at 1 with a contour trace, and draw
//! dashed reference axes. The stability-region renderer discovers its plot
//! bounds; the order-star renderer uses whatever rectangle it is given.

use plotly::{
    color::NamedColor,
    common::{DashType, Line, Marker, MarkerSymbol, Mode},
    contour::{Coloring, Contours, ContoursType, Operation},
    layout::{Axis, GridPattern, Layout, LayoutGrid},
    Contour, Plot, Scatter,
};

use crate::{find_plot_bounds, Boundedness, Bounds, Error, Grid, StabilityFunction};

/// Tolerances handed to the root finder when overlaying roots and poles.
const ROOT_EPSILON: f64 = 1E-12;
const ROOT_MAX_ITER: usize = 1000;

/// Pixel size of the longer plot edge; the shorter edge is scaled to keep
/// the aspect ratio of the bounds rectangle.
const IMAGE_BASE_PX: f64 = 700.0;

/// Options for [`plot_stability_region`].
#[derive(Clone, Debug)]
pub struct StabilityRegionOptions {
    /// Number of gridpoints to use in each direction
    pub resolution: usize,
    /// Color of the stable region
    pub color: String,
    /// If true, the region is filled in (solid); otherwise it is outlined
    pub filled: bool,
    /// If true, overlay the roots of the numerator. Poles are drawn whenever
    /// the denominator is non-constant, independently of this flag.
    pub plot_roots: bool,
    /// Transparency of the contour fill
    pub alpha: f64,
    /// Factor by which to scale `z` before evaluation, often used to
    /// normalize for the stage number of a multistage method
    pub scale_factor: f64,
}

impl Default for StabilityRegionOptions {
    fn default() -> Self {
        Self {
            resolution: 200,
            color: "red".to_owned(),
            filled: true,
            plot_roots: false,
            alpha: 1.0,
            scale_factor: 1.0,
        }
    }
}

/// Options for [`plot_order_star`].
#[derive(Clone, Debug)]
pub struct OrderStarOptions {
    /// Number of gridpoints to use in each direction
    pub resolution: usize,
    /// Limits of the plotting region
    pub bounds: Bounds,
    /// Colors of the inside (`|R/exp| <= 1`) and outside bands
    pub colors: (String, String),
    /// If true, the order star is filled in (solid); otherwise it is outlined
    pub filled: bool,
    /// Draw into this cell of a subplot grid instead of clearing the figure
    pub subplot: Option<Subplot>,
}

impl Default for OrderStarOptions {
    fn default() -> Self {
        Self {
            resolution: 200,
            bounds: Bounds::default(),
            colors: ("white".to_owned(), "blue".to_owned()),
            filled: true,
            subplot: None,
        }
    }
}

/// A cell in a grid of subplots; `index` is 1-based, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subplot {
    pub rows: usize,
    pub cols: usize,
    pub index: usize,
}

/// Plot the region of absolute stability of a rational function, i.e. the
/// set `{z : |p(z)/q(z)| <= 1}`.
///
/// The plot bounds are determined automatically, attempting to include the
/// entire region; a check is performed beforehand for methods with unbounded
/// stability regions, which get a fixed fallback rectangle instead. Both the
/// unbounded and the degenerate empty-region case are reported as warnings,
/// never failures.
///
/// Draws into `fig` when given, otherwise into a fresh figure; either way
/// the figure drawn into is returned. Displaying or exporting it is the
/// caller's business.
///
/// # Errors
/// [`Error::RootOverlay`] if the root finder does not converge on the
/// numerator roots (when `plot_roots` is set) or on the poles (whenever the
/// denominator is non-constant).
pub fn plot_stability_region(
    r: &StabilityFunction<f64>,
    opts: &StabilityRegionOptions,
    fig: Option<Plot>,
) -> Result<Plot, Error> {
    let bounds = resolve_bounds(r);
    let grid = Grid::new(bounds, opts.resolution);
    let field = r.magnitude_field(&grid, opts.scale_factor);

    let mut fig = fig.unwrap_or_else(Plot::new);
    fig.add_trace(
        band_trace(
            &grid,
            field,
            Operation::LessThanOrEqual,
            &opts.color,
            opts.filled,
        )
        .opacity(opts.alpha)
        .name("stability region"),
    );

    if opts.plot_roots {
        let roots = r
            .num()
            .roots(ROOT_EPSILON, ROOT_MAX_ITER)
            .map_err(Error::RootOverlay)?;
        fig.add_trace(marker_trace(&roots, MarkerSymbol::Circle, "roots"));
    }
    if r.den().degree() >= 1 {
        let poles = r
            .den()
            .roots(ROOT_EPSILON, ROOT_MAX_ITER)
            .map_err(Error::RootOverlay)?;
        fig.add_trace(marker_trace(&poles, MarkerSymbol::X, "poles"));
    }

    add_axis_lines(&mut fig, bounds, None);
    fig.set_layout(image_layout(bounds));
    Ok(fig)
}

/// Plot the order star of a rational function, i.e. the set
/// `{z : |p(z)/q(z)/exp(z)| <= 1}`.
///
/// Unlike [`plot_stability_region`] the bounds are taken from the options
/// as-is; no boundedness probing happens. Without a subplot descriptor the
/// figure is cleared and reused; with one, the traces are bound to that
/// cell of an independent subplot grid.
pub fn plot_order_star(r: &StabilityFunction<f64>, opts: &OrderStarOptions, fig: &mut Plot) {
    let grid = Grid::new(opts.bounds, opts.resolution);
    let field = r.order_star_field(&grid);

    let axes = match opts.subplot {
        None => {
            *fig = Plot::new();
            fig.set_layout(image_layout(opts.bounds));
            None
        }
        Some(sp) => {
            fig.set_layout(
                Layout::new()
                    .grid(
                        LayoutGrid::new()
                            .rows(sp.rows)
                            .columns(sp.cols)
                            .pattern(GridPattern::Independent),
                    )
                    .show_legend(false),
            );
            Some((format!("x{}", sp.index), format!("y{}", sp.index)))
        }
    };

    let inside = band_trace(
        &grid,
        field.clone(),
        Operation::LessThanOrEqual,
        &opts.colors.0,
        opts.filled,
    )
    .name("order star");
    let outside = band_trace(
        &grid,
        field,
        Operation::GreaterThan,
        &opts.colors.1,
        opts.filled,
    )
    .name("exterior");
    for mut trace in [inside, outside] {
        if let Some((x_id, y_id)) = &axes {
            trace = trace.x_axis(x_id.as_str()).y_axis(y_id.as_str());
        }
        fig.add_trace(trace);
    }

    add_axis_lines(fig, opts.bounds, axes);
}

/// Pick plot bounds for the stability region, warning about the anomalies
/// that make the automatic search pointless or unreliable.
fn resolve_bounds(r: &StabilityFunction<f64>) -> Bounds {
    #[allow(clippy::cast_precision_loss)]
    let m = r.num().degree() as f64;

    match r.boundedness() {
        Boundedness::Unbounded => {
            log::warn!("the stability region is unbounded");
            Bounds::new(-10.0 * m, m, -5.0 * m, 5.0 * m)
        }
        boundedness => {
            // a genuinely unbounded region can still slip through here when
            // the leading coefficients tie; the search is attempted anyway
            let bounds =
                find_plot_bounds(|z| r.is_stable_at(z), Bounds::new(-10.0, 1.0, -5.0, 5.0));
            if bounds.is_degenerate() {
                log::warn!("no stable region found; is this method zero-stable?");
            }
            if boundedness == Boundedness::MaybeUnbounded {
                log::warn!("the stability region may be unbounded");
            }
            bounds
        }
    }
}

/// A constraint contour selecting one side of the magnitude threshold 1.
///
/// Filled mode colors the satisfied region solid; outline mode draws the
/// level-1 boundary as a 3-wide line instead. Non-finite field values
/// serialize as nulls and stay blank, which is exactly what poles deserve.
fn band_trace(
    grid: &Grid,
    field: Vec<Vec<f64>>,
    operation: Operation,
    color: &str,
    filled: bool,
) -> Box<Contour<Vec<f64>>> {
    let coloring = if filled {
        Coloring::Fill
    } else {
        Coloring::Lines
    };
    let trace = Contour::new(grid.x().to_vec(), grid.y().to_vec(), field)
        .contours(
            Contours::new()
                .type_(ContoursType::Constraint)
                .operation(operation)
                .value(1.0)
                .coloring(coloring),
        )
        .show_scale(false);
    if filled {
        trace.fill_color(color.to_owned())
    } else {
        trace.line(Line::new().width(3.0).color(color.to_owned()))
    }
}

/// Black markers for the roots of one of the two polynomials.
fn marker_trace(
    roots: &[num::Complex<f64>],
    symbol: MarkerSymbol,
    name: &str,
) -> Box<Scatter<f64, f64>> {
    let (re, im): (Vec<_>, Vec<_>) = roots.iter().map(|z| (z.re, z.im)).unzip();
    Scatter::new(re, im)
        .mode(Mode::Markers)
        .marker(Marker::new().symbol(symbol).size(10).color(NamedColor::Black))
        .name(name)
}

/// Dashed real and imaginary axis lines spanning the bounds.
fn add_axis_lines(fig: &mut Plot, bounds: Bounds, axes: Option<(String, String)>) {
    for (xs, ys) in [
        (vec![0.0, 0.0], vec![bounds.y_min, bounds.y_max]),
        (vec![bounds.x_min, bounds.x_max], vec![0.0, 0.0]),
    ] {
        let mut trace = Scatter::new(xs, ys)
            .mode(Mode::Lines)
            .line(
                Line::new()
                    .color(NamedColor::Black)
                    .width(2.0)
                    .dash(DashType::Dash),
            )
            .show_legend(false);
        if let Some((x_id, y_id)) = &axes {
            trace = trace.x_axis(x_id.as_str()).y_axis(y_id.as_str());
        }
        fig.add_trace(trace);
    }
}

/// Fixed axis ranges with pixel dimensions proportional to the rectangle,
/// imitating equal-aspect axis scaling.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn image_layout(bounds: Bounds) -> Layout {
    let width = bounds.width().abs().max(f64::EPSILON);
    let height = bounds.height().abs().max(f64::EPSILON);
    let scale = IMAGE_BASE_PX / width.max(height);

    Layout::new()
        .x_axis(Axis::new().range(vec![bounds.x_min, bounds.x_max]))
        .y_axis(Axis::new().range(vec![bounds.y_min, bounds.y_max]))
        .width((width * scale) as usize)
        .height((height * scale) as usize)
        .show_legend(false)
}

#[cfg(test)]
mod test {
    use num::One;

    use super::resolve_bounds;
    use crate::{Bounds, Poly64, StabilityFunction};

    /// `deg p < deg q` selects the unbounded branch and the fixed fallback
    /// rectangle scaled by the numerator degree.
    #[test]
    fn unbounded_fallback_rectangle() {
        let r = StabilityFunction::new(poly![1.0, 1.0], poly![1.0, 0.0, 0.0, 1.0]);
        assert_eq!(resolve_bounds(&r), Bounds::new(-10.0, 1.0, -5.0, 5.0));
    }

    /// Backward Euler has a degree-zero numerator, which collapses the
    /// fallback rectangle onto the origin. Faithful, if unhelpful.
    #[test]
    fn unbounded_fallback_degree_zero() {
        let r = StabilityFunction::new(Poly64::one(), poly![1.0, -1.0]);
        assert_eq!(resolve_bounds(&r), Bounds::new(0.0, 0.0, 0.0, 0.0));
    }

    /// A bounded region gets discovered bounds enclosing it.
    #[test]
    fn bounded_region_discovered() {
        let r = StabilityFunction::taylor_exp(1);
        let bounds = resolve_bounds(&r);
        assert!(bounds.x_min <= -1.95);
        assert!(bounds.x_max >= -0.05);
        assert!(bounds.y_max >= 0.95);
    }
}

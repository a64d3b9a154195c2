//! End-to-end checks of the region renderers and their bound selection.

use num::{complex::Complex64, One};
use plotly::Plot;
use stability_regions::{
    plot_order_star, plot_stability_region, Boundedness, Bounds, Grid, OrderStarOptions, Poly64,
    StabilityFunction, StabilityRegionOptions, Subplot,
};

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn forward_euler_region_is_rendered() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let r = StabilityFunction::taylor_exp(1);
    let fig = plot_stability_region(&r, &StabilityRegionOptions::default(), None).unwrap();
    let json = fig.to_json();
    // one filled contour plus the two dashed axis lines
    assert_eq!(count_occurrences(&json, "\"type\":\"contour\""), 1);
    assert_eq!(count_occurrences(&json, "\"type\":\"scatter\""), 2);
    // the region is the side of the level-1 set satisfying |R| <= 1
    assert!(json.contains("\"type\":\"constraint\""));
    assert!(json.contains("\"operation\":\"<=\""));
}

/// Poles of a non-constant denominator are drawn even when the root overlay
/// was not requested.
#[test]
fn poles_are_drawn_without_the_root_flag() {
    let r = StabilityFunction::<f64>::pade_exp(1, 1);
    let opts = StabilityRegionOptions {
        resolution: 50,
        ..Default::default()
    };
    let json = plot_stability_region(&r, &opts, None).unwrap().to_json();
    assert!(json.contains("\"name\":\"poles\""));
    assert!(!json.contains("\"name\":\"roots\""));
}

#[test]
fn roots_and_poles_are_overlaid() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    // pade(1,2) has one root and two poles, and an unbounded region
    let r = StabilityFunction::<f64>::pade_exp(1, 2);
    assert_eq!(r.boundedness(), Boundedness::Unbounded);
    let opts = StabilityRegionOptions {
        plot_roots: true,
        resolution: 50,
        ..Default::default()
    };
    let fig = plot_stability_region(&r, &opts, None).unwrap();
    let json = fig.to_json();
    assert!(json.contains("\"name\":\"roots\""));
    assert!(json.contains("\"name\":\"poles\""));
}

#[test]
fn roots_only_for_denominator_free_methods() {
    let r = StabilityFunction::taylor_exp(2);
    let opts = StabilityRegionOptions {
        plot_roots: true,
        resolution: 50,
        ..Default::default()
    };
    let fig = plot_stability_region(&r, &opts, None).unwrap();
    let json = fig.to_json();
    assert!(json.contains("\"name\":\"roots\""));
    // constant denominator: no pole markers
    assert!(!json.contains("\"name\":\"poles\""));
}

#[test]
fn existing_figure_is_drawn_into() {
    let r1 = StabilityFunction::taylor_exp(1);
    let r2 = StabilityFunction::taylor_exp(2);
    let opts = StabilityRegionOptions {
        resolution: 50,
        ..Default::default()
    };
    let fig = plot_stability_region(&r1, &opts, None).unwrap();
    let fig = plot_stability_region(&r2, &opts, Some(fig)).unwrap();
    let json = fig.to_json();
    assert_eq!(count_occurrences(&json, "\"type\":\"contour\""), 2);
}

#[test]
fn outlined_region_uses_contour_lines() {
    let r = StabilityFunction::taylor_exp(1);
    let opts = StabilityRegionOptions {
        filled: false,
        resolution: 50,
        ..Default::default()
    };
    let json = plot_stability_region(&r, &opts, None).unwrap().to_json();
    assert!(json.contains("\"coloring\":\"lines\""));
}

#[test]
fn order_star_clears_the_figure() {
    let r = StabilityFunction::<f64>::pade_exp(2, 2);
    let mut fig = Plot::new();
    plot_order_star(&r, &OrderStarOptions::default(), &mut fig);
    let before = fig.to_json();
    // a second render must replace, not accumulate
    plot_order_star(&r, &OrderStarOptions::default(), &mut fig);
    assert_eq!(before, fig.to_json());
    // one constraint band per side of the level-1 set
    assert_eq!(count_occurrences(&before, "\"type\":\"contour\""), 2);
}

#[test]
fn order_star_subplots_share_one_figure() {
    let mut fig = Plot::new();
    for (index, (k, j)) in [(1, 1), (1, 2), (2, 1), (2, 2)].iter().enumerate() {
        let r = StabilityFunction::<f64>::pade_exp(*k, *j);
        let opts = OrderStarOptions {
            resolution: 50,
            subplot: Some(Subplot {
                rows: 2,
                cols: 2,
                index: index + 1,
            }),
            ..Default::default()
        };
        plot_order_star(&r, &opts, &mut fig);
    }
    let json = fig.to_json();
    // two constraint bands per order star
    assert_eq!(count_occurrences(&json, "\"type\":\"contour\""), 8);
    assert!(json.contains("\"xaxis\":\"x3\""));
}

/// A lattice point landing exactly on a pole yields a non-finite cell; the
/// render completes and the cell serializes as an empty (null) entry.
#[test]
fn pole_on_the_lattice_does_not_abort() {
    // trapezoidal rule: pole at z = 2
    let r = StabilityFunction::<f64>::pade_exp(1, 1);
    let bounds = Bounds::new(0.0, 4.0, -1.0, 1.0);
    // odd resolution so the lattice contains the pole exactly
    let field = r.magnitude_field(&Grid::new(bounds, 5), 1.0);
    assert!(!field[2][2].is_finite());
    assert!(field[2][3].is_finite());

    let mut fig = Plot::new();
    let opts = OrderStarOptions {
        bounds,
        resolution: 5,
        ..Default::default()
    };
    plot_order_star(&r, &opts, &mut fig);
    assert!(fig.to_json().contains("null"));
}

/// `R(0)/exp(0) = 1` for any approximant with `p(0) = q(0) = 1`, so the
/// origin always sits on the boundary of the inside band.
#[test]
fn order_star_ratio_is_one_at_origin() {
    // odd resolution so the lattice contains the origin exactly
    let grid = Grid::new(Bounds::default(), 5);
    for (k, j) in [(0, 0), (1, 1), (3, 2), (2, 4)] {
        let r = StabilityFunction::<f64>::pade_exp(k, j);
        let field = r.order_star_field(&grid);
        assert_eq!(field[2][2], 1.0, "pade({k},{j})");
    }
}

#[test]
fn stability_predicate_forward_euler() {
    let r = StabilityFunction::new(poly_from(&[1.0, 1.0]), Poly64::one());
    assert!(r.is_stable_at(Complex64::from(0.0)));
    assert!(!r.is_stable_at(Complex64::from(3.0)));
}

fn poly_from(ascending: &[f64]) -> Poly64 {
    Poly64::from_real_slice(ascending)
}

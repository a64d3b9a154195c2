//! Renders the stability regions of a few classic one-step methods and a
//! grid of Pade order stars, writing each figure to a self-contained HTML
//! file under `temp/`.

use plotly::Plot;
use stability_regions::{
    plot_order_star, plot_stability_region, OrderStarOptions, StabilityFunction,
    StabilityRegionOptions, Subplot,
};

fn main() {
    let _ = simple_logger::init_with_level(log::Level::Info);
    std::fs::create_dir_all("temp").expect("could not create output directory");

    // explicit Runge-Kutta methods of orders 1 through 4: their stability
    // functions are the truncated Taylor polynomials of exp
    for order in 1..=4 {
        let r = StabilityFunction::taylor_exp(order);
        let opts = StabilityRegionOptions {
            plot_roots: true,
            ..Default::default()
        };
        let fig = plot_stability_region(&r, &opts, None).expect("render failed");
        fig.write_html(format!("temp/rk{order}_stability.html"));
    }

    // the trapezoidal rule, aka the (1,1) Pade approximant; its region is
    // the entire left half-plane, so expect a "may be unbounded" warning
    let trapezoidal = StabilityFunction::<f64>::pade_exp(1, 1);
    let opts = StabilityRegionOptions {
        color: "steelblue".to_owned(),
        filled: false,
        ..Default::default()
    };
    let fig = plot_stability_region(&trapezoidal, &opts, None).expect("render failed");
    fig.write_html("temp/trapezoidal_stability.html");

    // order stars of the diagonal and first off-diagonal Pade approximants
    let mut fig = Plot::new();
    let cells = [(1, 1), (2, 1), (1, 2), (2, 2)];
    for (index, (k, j)) in cells.iter().enumerate() {
        let r = StabilityFunction::<f64>::pade_exp(*k, *j);
        let opts = OrderStarOptions {
            subplot: Some(Subplot {
                rows: 2,
                cols: 2,
                index: index + 1,
            }),
            ..Default::default()
        };
        plot_order_star(&r, &opts, &mut fig);
    }
    fig.write_html("temp/pade_order_stars.html");

    println!("wrote figures to temp/");
}

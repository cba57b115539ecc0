//! Resolution demo: pushes a handful of overlapping shapes apart and prints
//! what happened.
//!
//! Usage:
//! ```text
//! cargo run --example resolve
//! RUST_LOG=planar=trace cargo run --example resolve   # show degenerate-branch events
//! ```

use planar::{Circle, Line, Rect, Result, Vec2};
use tracing::info;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for planar and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planar=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("resolve=info".parse().unwrap_or_default())
        .add_directive("planar=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let wall = Rect::new(0.0, 0.0, 10.0, 10.0);

    let balls = [
        Circle::new(Vec2::new(5.0, 5.0), 10.0),
        Circle::new(Vec2::new(0.0, 5.0), 1.0),
        Circle::new(Vec2::new(-0.5, -0.5), 1.0),
        Circle::new(Vec2::new(50.0, 50.0), 1.0),
    ];
    for ball in balls {
        let push = ball.intersect_rect(&wall);
        info!(%ball, %wall, %push, moved = %ball.moved(push), "circle vs rect");
    }

    let beam = Line::new(Vec2::new(-1.0, 5.0), Vec2::new(5.0, -1.0));
    info!(
        %beam,
        push = %beam.intersect_rect(&wall),
        crossings = ?wall.intersection_points(&beam),
        "line vs rect"
    );

    let orb = Circle::new(Vec2::new(2.0, 2.0), 1.0);
    let ray = Line::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
    info!(
        %orb,
        %ray,
        push = %orb.intersect_line(&ray),
        crossings = ?orb.intersection_points(&ray),
        "circle vs line"
    );

    let a = Circle::new(Vec2::ZERO, 1.0);
    let b = Circle::new(Vec2::new(0.0, 2.0), 1.0);
    info!(union = %a.union(&b), intersect = %a.intersect(&b), "circle pair");

    let sprite = Rect::new(2.0, 2.0, 4.0, 3.0);
    let grown = sprite.resized(sprite.center(), Vec2::new(4.0, 2.0))?;
    info!(%sprite, %grown, "resized about center");

    Ok(())
}

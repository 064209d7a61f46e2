//! Polybool debug runner: applies every boolean operation to a pair of test
//! shapes and prints the results as host shape records.
//!
//! Usage:
//! ```text
//! cargo run --example debug                  # all operations
//! cargo run --example debug -- exclusion     # one operation
//! RUST_LOG=polybool=debug cargo run --example debug
//! ```

use polybool::operations::boolean::ShapeBoolean;
use polybool::shape::Shape;
use polybool::BooleanOp;
use tracing::{error, info};

fn parse_op(name: &str) -> Option<BooleanOp> {
    match name {
        "union" => Some(BooleanOp::Union),
        "intersection" => Some(BooleanOp::Intersect),
        "difference" => Some(BooleanOp::Subtract),
        "exclusion" => Some(BooleanOp::Exclusion),
        _ => None,
    }
}

fn main() {
    // Default: WARN for everything, INFO for polybool.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polybool=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("debug=info".parse().unwrap_or_default())
        .add_directive("polybool=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let ops: Vec<BooleanOp> = match std::env::args().nth(1) {
        Some(name) => match parse_op(&name) {
            Some(op) => vec![op],
            None => {
                error!(%name, "unknown operation, expected union|intersection|difference|exclusion");
                return;
            }
        },
        None => vec![
            BooleanOp::Union,
            BooleanOp::Intersect,
            BooleanOp::Subtract,
            BooleanOp::Exclusion,
        ],
    };

    let rect = Shape::rectangle("rect", 0.0, 0.0, 120.0, 80.0);
    let ellipse = Shape::ellipse("ellipse", 70.0, 30.0, 100.0, 70.0);
    let mut rng = rand::thread_rng();

    for op in ops {
        match ShapeBoolean::new(&rect, &ellipse, op).execute(&mut rng) {
            Ok(shapes) => {
                for shape in &shapes {
                    info!(?op, id = %shape.id, width = shape.width, height = shape.height, "result shape");
                    match serde_json::to_string(shape) {
                        Ok(json) => println!("{json}"),
                        Err(err) => error!(%err, "failed to serialize shape"),
                    }
                }
            }
            Err(err) => error!(?op, %err, "operation failed"),
        }
    }
}

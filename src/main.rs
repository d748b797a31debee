// main.rs
//
// Minimal command-line caller for the arcdiv engine: reads the three points
// and a sampling mode from argv, prints the arc length and each division
// point. All parsing and display lives here; the engine only ever sees
// validated values.
//
// Usage:
//   arcdiv X1 Y1 X2 Y2 X3 Y3 --count N
//   arcdiv X1 Y1 X2 Y2 X3 Y3 --spacing LEN

use std::process::ExitCode;

use arcdiv::float_types::Real;
use arcdiv::{Direction, SamplingRequest, compute_arc};
use nalgebra::Point2;

const USAGE: &str = "usage: arcdiv X1 Y1 X2 Y2 X3 Y3 (--count N | --spacing LEN)";

fn parse_args(args: &[String]) -> Result<([Point2<Real>; 3], SamplingRequest), String> {
    if args.len() != 8 {
        return Err(USAGE.into());
    }

    let mut coords: [Real; 6] = [0.0; 6];
    for (i, raw) in args[..6].iter().enumerate() {
        coords[i] = raw
            .parse::<Real>()
            .map_err(|_| format!("not a number: {raw}"))?;
    }
    let points = [
        Point2::new(coords[0], coords[1]),
        Point2::new(coords[2], coords[3]),
        Point2::new(coords[4], coords[5]),
    ];

    let request = match args[6].as_str() {
        "--count" => {
            let n = args[7]
                .parse::<usize>()
                .map_err(|_| format!("not a point count: {}", args[7]))?;
            SamplingRequest::ByCount(n)
        },
        "--spacing" => {
            let len = args[7]
                .parse::<Real>()
                .map_err(|_| format!("not a length: {}", args[7]))?;
            SamplingRequest::BySpacing(len)
        },
        other => return Err(format!("unknown mode {other}\n{USAGE}")),
    };

    Ok((points, request))
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let ([p1, p2, p3], request) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        },
    };

    let division = match compute_arc(p1, p2, p3, request) {
        Ok(division) => division,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        },
    };

    let direction = match division.direction() {
        Direction::Ccw => "counterclockwise",
        Direction::Cw => "clockwise",
    };
    println!(
        "Center: X={:.4}, Y={:.4}  Radius: {:.4}  ({direction})",
        division.center().x,
        division.center().y,
        division.radius(),
    );
    println!("Arc length: {:.4}", division.arc_length);
    for (i, point) in division.points.iter().enumerate() {
        println!("Point {}: X={:.4}, Y={:.4}", i + 1, point.x, point.y);
    }

    ExitCode::SUCCESS
}

use crate::core::generator::{random_route, random_stop_count};
use crate::domain::model::{CodeList, RouteBatch};
use crate::utils::error::Result;
use rand::Rng;
use std::io::Write;
use std::ops::RangeInclusive;

/// `<origin> <count>`
pub fn write_header<W: Write + ?Sized>(out: &mut W, origin: &str, count: usize) -> Result<()> {
    writeln!(out, "{} {}", origin, count)?;
    Ok(())
}

/// Generates `num_routes` routes and writes each as `<origin><route>`.
///
/// Every route is written as soon as it is drawn; the returned batch holds
/// the routes written so far.
pub fn write_routes<W: Write + ?Sized, R: Rng + ?Sized>(
    out: &mut W,
    codes: &CodeList,
    num_routes: usize,
    origin: &str,
    range: &RangeInclusive<usize>,
    rng: &mut R,
) -> Result<RouteBatch> {
    let mut routes = Vec::new();
    for _ in 0..num_routes {
        let num_stops = random_stop_count(rng, range)?;
        let route = random_route(codes, num_stops, rng)?;
        writeln!(out, "{}{}", origin, route)?;
        routes.push(route);
    }

    Ok(RouteBatch {
        origin: origin.to_string(),
        routes,
    })
}

//! Speed conversions

const METRES_PER_KILOMETRE: f64 = 1_000.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;

pub fn km_per_hour_to_metres_per_second(km_per_hour: f64) -> f64 {
    km_per_hour * METRES_PER_KILOMETRE / SECONDS_PER_HOUR
}

pub fn metres_per_second_to_km_per_hour(metres_per_second: f64) -> f64 {
    metres_per_second * SECONDS_PER_HOUR / METRES_PER_KILOMETRE
}

use chrono::{NaiveDate, Utc};
use riseset::{compute_event, sunrise, sunset, zenith, Coordinate, RiseSetRequest};

fn main() {
    let coord = Coordinate::from_degrees(51.5074, -0.1278);
    let today = Utc::now().date_naive();

    match sunrise(coord, today) {
        Ok(up) => println!("sunrise: {up}"),
        Err(e) => println!("sunrise: {e}"),
    }
    match sunset(coord, today) {
        Ok(down) => println!("sunset: {down}"),
        Err(e) => println!("sunset: {e}"),
    }

    let equinox = NaiveDate::from_ymd_opt(2022, 3, 20).unwrap();
    let dawn = compute_event(
        coord,
        RiseSetRequest::sunrise(equinox).with_zenith(zenith::CIVIL),
    );
    println!("civil dawn on {equinox}: {dawn:?}");
}

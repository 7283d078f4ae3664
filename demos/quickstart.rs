use chrono::Utc;
use kalends::{Calendar, CivilDateTime};

fn main() -> Result<(), kalends::CalendarError> {
    let now = CivilDateTime::from_utc(Utc::now());
    let jdn = now.to_julian_day()?;
    let jdt = now.to_julian_day_time(9)?;

    println!("now:  {now}");
    println!("{jdn}");
    println!("{jdt}");
    println!("back: {}", jdt.to_gregorian(9)?);
    println!("julian reading: {}", jdt.to_julian(9)?);
    println!(
        "leap year under Revised Julian: {}",
        Calendar::RevisedJulian.is_leap_year(now.year())
    );
    Ok(())
}

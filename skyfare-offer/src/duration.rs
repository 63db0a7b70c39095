/// Total minutes of an ISO-8601 duration such as `PT7H15M`.
///
/// Missing hour or minute parts count as zero, a day part (`P1DT2H`) counts
/// 1440 minutes per day and seconds are dropped. Returns `None` for anything
/// that is not a duration.
pub fn parse_duration_minutes(raw: &str) -> Option<u32> {
    let rest = raw.trim().strip_prefix('P')?;
    if rest.is_empty() {
        return None;
    }

    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => (date, time),
        None => (rest, ""),
    };

    let mut minutes: u32 = 0;

    if !date_part.is_empty() {
        let days: u32 = date_part.strip_suffix('D')?.parse().ok()?;
        minutes = minutes.saturating_add(days.saturating_mul(24 * 60));
    }

    let mut number = String::new();
    for c in time_part.chars() {
        match c {
            '0'..='9' | '.' => number.push(c),
            'H' => {
                let hours: u32 = number.parse().ok()?;
                minutes = minutes.saturating_add(hours.saturating_mul(60));
                number.clear();
            }
            'M' => {
                let mins: u32 = number.parse().ok()?;
                minutes = minutes.saturating_add(mins);
                number.clear();
            }
            'S' => {
                number.parse::<f64>().ok()?;
                number.clear();
            }
            _ => return None,
        }
    }

    // Digits without a unit
    if !number.is_empty() {
        return None;
    }

    Some(minutes)
}

use std::cmp::Ordering;

use itertools::Itertools;
use uom::si::f64::Velocity;
use uom::si::velocity;

pub const DEFAULT_WALK_SPEED_KPH: f64 = 5.0;

/// marker appended to names cut at the configured display length.
pub const TRUNCATION_MARKER: &str = "..";

/// deals with the various ways that speed keys can appear. handles
/// valid cases such as:
///   - 45        (45 kph)
///   - 45 mph    (72.4203 kph)
///   - walk      (5 kph)
///
/// and invalid cases that are documented, such as:
///   - 45; 80    (takes the smaller of the two, so, 45 kph)
///
/// see https://wiki.openstreetmap.org/wiki/Key:maxspeed
pub fn deserialize_speed(
    s: &str,
    separator: Option<&str>,
    ignore_invalid_entries: bool,
) -> Result<Option<Velocity>, String> {
    let separated_entries = match separator {
        Some(sep) => s.split(sep).map(str::trim).collect_vec(),
        None => vec![s.trim()],
    };
    match separated_entries[..] {
        [] => Err(format!(
            "internal error: attempting to unpack empty maxspeed value '{s}'"
        )),
        [entry] => {
            match entry.split_whitespace().collect_vec()[..] {
                // see https://wiki.openstreetmap.org/wiki/Key:maxspeed#Possible_tagging_mistakes
                ["unposted"] | ["unknown"] | ["default"] | ["variable"] | ["national"] | ["none"] => {
                    Ok(None)
                }
                ["walk"] => Ok(Some(Velocity::new::<velocity::kilometer_per_hour>(
                    DEFAULT_WALK_SPEED_KPH,
                ))),
                [speed_str] if speed_str.ends_with("mph") => {
                    parse_speed_value(speed_str.trim_end_matches("mph"), ignore_invalid_entries)
                        .map(|o| o.map(|v| Velocity::new::<velocity::mile_per_hour>(v)))
                }
                [speed_str] => parse_speed_value(speed_str, ignore_invalid_entries)
                    .map(|o| o.map(|v| Velocity::new::<velocity::kilometer_per_hour>(v))),
                [speed_str, unit_str] => {
                    let speed = match parse_speed_value(speed_str, ignore_invalid_entries)? {
                        Some(speed) => speed,
                        None => return Ok(None),
                    };
                    match unit_str {
                        "kph" | "km/h" | "kmh" => {
                            Ok(Some(Velocity::new::<velocity::kilometer_per_hour>(speed)))
                        }
                        "mph" => Ok(Some(Velocity::new::<velocity::mile_per_hour>(speed))),
                        _ if !ignore_invalid_entries => Err(format!(
                            "unknown speed unit {unit_str} with value {speed}"
                        )),
                        // some uncommon unit type like knots, we can skip this entry.
                        _ => Ok(None),
                    }
                }
                _ if ignore_invalid_entries => Ok(None),
                _ => Err(format!("unexpected maxspeed entry '{s}'")),
            }
        }
        _ => {
            let maxspeeds = separated_entries
                .iter()
                .map(|e| deserialize_speed(e, None, ignore_invalid_entries))
                .collect::<Result<Vec<_>, _>>()?;
            let min = maxspeeds
                .into_iter()
                .min_by(|a, b| match (a, b) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                    (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Greater),
                })
                .flatten();
            Ok(min)
        }
    }
}

/// parses a numeric speed. zero and NaN are treated as missing.
fn parse_speed_value(speed_str: &str, ignore_invalid_entries: bool) -> Result<Option<f64>, String> {
    let speed_result = speed_str
        .parse::<i64>()
        .map(|i| i as f64)
        .map_err(|e| format!("speed value {speed_str} not a valid number: {e}"))
        .or_else(|e1| {
            speed_str
                .parse::<f64>()
                .map_err(|e2| format!("speed value {speed_str} not a valid number: {e1} {e2}"))
        });
    match speed_result {
        Ok(speed) if speed <= 0.0 || speed.is_nan() => Ok(None),
        Ok(speed) => Ok(Some(speed)),
        Err(e) if !ignore_invalid_entries => Err(e),
        Err(_) => Ok(None),
    }
}

/// reads a `maxspeed`-like tag value in kilometers per hour. malformed values
/// are not an error, they yield None so the caller can apply a default.
pub fn speed_kph(value: Option<&str>) -> Option<f64> {
    let s = value?;
    match deserialize_speed(s, Some(";"), true) {
        Ok(speed) => speed.map(|v| v.get::<velocity::kilometer_per_hour>()),
        Err(e) => {
            log::debug!("ignoring maxspeed value '{s}': {e}");
            None
        }
    }
}

/// reads a `lanes`-like tag value. only strictly positive integers are
/// accepted; for `;`-separated values the first entry is used.
pub fn lanes_count(value: Option<&str>) -> Option<u32> {
    let s = value?;
    let first = s.split(';').next().unwrap_or_default().trim();
    match first.parse::<u32>() {
        Ok(0) => None,
        Ok(lanes) => Some(lanes),
        Err(e) => {
            log::debug!("ignoring lanes value '{s}': {e}");
            None
        }
    }
}

/// bounds a display name to `max_chars` characters, appending [`TRUNCATION_MARKER`]
/// when the name was cut.
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        String::from(name)
    } else {
        let mut out: String = name.chars().take(max_chars).collect();
        out.push_str(TRUNCATION_MARKER);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{deserialize_speed, lanes_count, speed_kph, truncate_name};

    fn assert_close(result: f64, expected: f64) {
        assert!(
            (expected - result).abs() < 0.001,
            "value {result} should be within 0.001 of {expected}"
        );
    }

    #[test]
    fn deserialize_speed_1() {
        //   - 45        (45 kph)
        match deserialize_speed("45", None, false) {
            Ok(Some(speed)) => {
                assert_close(speed.get::<uom::si::velocity::kilometer_per_hour>(), 45.0)
            }
            Ok(None) => panic!("should parse valid speed"),
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn deserialize_speed_2() {
        //   - 45 mph    (72.4203 kph)
        match deserialize_speed("45 mph", None, false) {
            Ok(Some(speed)) => {
                assert_close(speed.get::<uom::si::velocity::mile_per_hour>(), 45.0)
            }
            Ok(None) => panic!("should parse valid speed"),
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn deserialize_speed_walk() {
        match deserialize_speed("walk", None, false) {
            Ok(Some(speed)) => {
                assert_close(speed.get::<uom::si::velocity::kilometer_per_hour>(), 5.0)
            }
            Ok(None) => panic!("should parse valid speed"),
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn deserialize_speed_sep_1() {
        //   - a few speed values, where 3 kph is the minimum
        match deserialize_speed("3.1415 kph;3;2 mph", Some(";"), false) {
            Ok(Some(speed)) => {
                assert_close(speed.get::<uom::si::velocity::kilometer_per_hour>(), 3.0)
            }
            Ok(None) => panic!("should parse valid speed"),
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn deserialize_speed_invalid() {
        assert!(deserialize_speed("fast", None, false).is_err());
        assert!(matches!(deserialize_speed("fast", None, true), Ok(None)));
    }

    #[test]
    fn test_speed_kph_fails_soft() {
        assert_eq!(speed_kph(None), None);
        assert_eq!(speed_kph(Some("FR:urban")), None);
        assert_eq!(speed_kph(Some("signals")), None);
        assert_eq!(speed_kph(Some("0")), None);
        assert_close(speed_kph(Some("90")).unwrap_or_default(), 90.0);
        assert_close(speed_kph(Some("30 mph")).unwrap_or_default(), 48.2803);
    }

    #[test]
    fn test_lanes_count() {
        assert_eq!(lanes_count(Some("3")), Some(3));
        assert_eq!(lanes_count(Some("2;3")), Some(2));
        assert_eq!(lanes_count(Some("0")), None);
        assert_eq!(lanes_count(Some("two")), None);
        assert_eq!(lanes_count(None), None);
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Rue de Rivoli", 45), "Rue de Rivoli");
        let long = "a".repeat(50);
        let truncated = truncate_name(&long, 45);
        assert_eq!(truncated, format!("{}..", "a".repeat(45)));
        // exactly at the bound is not truncated
        let exact = "b".repeat(45);
        assert_eq!(truncate_name(&exact, 45), exact);
        // multibyte characters are counted, not bytes
        let accented = "é".repeat(46);
        assert_eq!(truncate_name(&accented, 45), format!("{}..", "é".repeat(45)));
    }
}

//! `D` and `T` fields: day numbers and seconds of day, low 24 bits big-endian.
//!
//! Both encoders read digits from fixed positions. Separator characters are
//! not checked. A value of the wrong length, or with a non-digit where a
//! digit belongs, becomes three zero bytes, as does a missing value.

/// Length of a `YYYY-MM-DD` date.
pub const DATE_LEN: usize = 10;

/// Length of an `HH:MM` time.
pub const TIME_LEN: usize = 5;

const DATE_DIGITS: [usize; 8] = [0, 1, 2, 3, 5, 6, 8, 9];
const TIME_DIGITS: [usize; 4] = [0, 1, 3, 4];

/// What a clock encoder did with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockOutcome {
    Encoded,
    /// No value; zero sentinel written.
    Absent,
    /// Wrong length or non-digit in a digit position; zero sentinel written.
    Malformed,
}

/// Julian Day Number of a proleptic Gregorian date (Fliegel and Van
/// Flandern). Division truncates toward zero; out-of-range months and days
/// produce a defined but meaningless number.
#[must_use]
pub const fn julian_day(year: i64, month: i64, day: i64) -> i64 {
    let a = (month - 14) / 12;
    (day - 32076) + 1461 * (year + 4800 + a) / 4 + 367 * (month - 2 - a * 12) / 12
        - 3 * ((year + 4900 + a) / 100) / 4
        + 1
}

#[inline]
fn digit(bytes: &[u8], index: usize) -> i64 {
    i64::from(bytes[index]) - i64::from(b'0')
}

fn push_low24(out: &mut Vec<u8>, value: i64) {
    let [_, hi, mid, lo] = ((value & 0x00FF_FFFF) as u32).to_be_bytes();
    out.extend_from_slice(&[hi, mid, lo]);
}

fn classify<'v>(
    value: Option<&'v str>,
    expected_len: usize,
    digit_positions: &[usize],
) -> Result<&'v [u8], ClockOutcome> {
    let text = value.ok_or(ClockOutcome::Absent)?.as_bytes();
    if text.len() != expected_len || !digit_positions.iter().all(|&i| text[i].is_ascii_digit()) {
        return Err(ClockOutcome::Malformed);
    }
    Ok(text)
}

/// Encode a `YYYY-MM-DD` date as its Julian day number.
pub fn encode_date(out: &mut Vec<u8>, value: Option<&str>) -> ClockOutcome {
    match classify(value, DATE_LEN, &DATE_DIGITS) {
        Err(outcome) => {
            out.extend_from_slice(&[0; 3]);
            outcome
        }
        Ok(b) => {
            let year = 1000 * digit(b, 0) + 100 * digit(b, 1) + 10 * digit(b, 2) + digit(b, 3);
            let month = 10 * digit(b, 5) + digit(b, 6);
            let day = 10 * digit(b, 8) + digit(b, 9);
            push_low24(out, julian_day(year, month, day));
            ClockOutcome::Encoded
        }
    }
}

/// Encode an `HH:MM` time as seconds since midnight.
pub fn encode_time(out: &mut Vec<u8>, value: Option<&str>) -> ClockOutcome {
    match classify(value, TIME_LEN, &TIME_DIGITS) {
        Err(outcome) => {
            out.extend_from_slice(&[0; 3]);
            outcome
        }
        Ok(b) => {
            let hour = 10 * digit(b, 0) + digit(b, 1);
            let minute = 10 * digit(b, 3) + digit(b, 4);
            push_low24(out, 3600 * hour + 60 * minute);
            ClockOutcome::Encoded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: Option<&str>) -> (Vec<u8>, ClockOutcome) {
        let mut out = Vec::new();
        let outcome = encode_date(&mut out, value);
        (out, outcome)
    }

    fn time(value: Option<&str>) -> (Vec<u8>, ClockOutcome) {
        let mut out = Vec::new();
        let outcome = encode_time(&mut out, value);
        (out, outcome)
    }

    #[test]
    fn julian_day_reference_points() {
        assert_eq!(julian_day(2000, 1, 1), 2_451_545);
        assert_eq!(julian_day(1970, 1, 1), 2_440_588);
        assert_eq!(julian_day(2024, 2, 29), 2_460_370);
    }

    #[test]
    fn date_encodes_low_24_bits() {
        assert_eq!(
            date(Some("2000-01-01")),
            (vec![0x25, 0x68, 0x59], ClockOutcome::Encoded)
        );
        assert_eq!(
            date(Some("2024-02-29")),
            (vec![0x25, 0x8A, 0xD2], ClockOutcome::Encoded)
        );
    }

    #[test]
    fn delimiters_are_not_validated() {
        assert_eq!(date(Some("2000/01/01")).0, date(Some("2000-01-01")).0);
    }

    #[test]
    fn leap_day_sits_between_neighbours() {
        let feb28 = date(Some("2024-02-28")).0;
        let feb29 = date(Some("2024-02-29")).0;
        let mar01 = date(Some("2024-03-01")).0;
        assert!(feb28 < feb29 && feb29 < mar01);
        assert_eq!(
            date(Some("1900-02-28")).0,
            vec![0x24, 0xD9, 0xE7],
            "1900 is not a leap year"
        );
        assert_eq!(date(Some("1900-03-01")).0, vec![0x24, 0xD9, 0xE8]);
    }

    #[test]
    fn malformed_date_falls_back_to_zero() {
        assert_eq!(
            date(Some("not-a-date")),
            (vec![0, 0, 0], ClockOutcome::Malformed)
        );
        assert_eq!(date(Some("2024-0x-01")).1, ClockOutcome::Malformed);
        assert_eq!(date(Some("2024-1-1")), (vec![0, 0, 0], ClockOutcome::Malformed));
        assert_eq!(date(Some("")), (vec![0, 0, 0], ClockOutcome::Malformed));
        assert_eq!(date(None), (vec![0, 0, 0], ClockOutcome::Absent));
    }

    #[test]
    fn time_encodes_seconds_of_day() {
        assert_eq!(time(Some("00:00")), (vec![0, 0, 0], ClockOutcome::Encoded));
        assert_eq!(time(Some("23:59")).0, vec![0x01, 0x51, 0x44]);
        assert_eq!(time(Some("12:30")).0, vec![0x00, 0xAF, 0xC8]);
    }

    #[test]
    fn time_with_seconds_falls_back_to_zero() {
        assert_eq!(
            time(Some("12:30:15")),
            (vec![0, 0, 0], ClockOutcome::Malformed)
        );
        assert_eq!(time(Some("ab:cd")), (vec![0, 0, 0], ClockOutcome::Malformed));
        assert_eq!(time(None), (vec![0, 0, 0], ClockOutcome::Absent));
    }

    #[test]
    fn out_of_range_fields_still_encode() {
        assert_eq!(time(Some("99:99")).0, vec![0x05, 0x87, 0x64]);
        assert_eq!(date(Some("2024-13-40")).1, ClockOutcome::Encoded);
    }

    #[test]
    fn negative_day_numbers_keep_twos_complement_low_bits() {
        let mut out = Vec::new();
        push_low24(&mut out, -1);
        assert_eq!(out, vec![0xFF, 0xFF, 0xFF]);
    }
}

use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat, Timelike, Utc};

use crate::models::Locale;

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Coarse distance between two instants, before localization.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Distance {
    LessThanXMinutes(i64),
    XMinutes(i64),
    AboutXHours(i64),
    XDays(i64),
    AboutXMonths(i64),
    XMonths(i64),
    AboutXYears(i64),
    OverXYears(i64),
    AlmostXYears(i64),
}

/// `"3 de maio as 20:00h"`, in the offset the instant carries.
pub fn format_absolute(at: &DateTime<FixedOffset>, locale: Locale) -> String {
    let strings = locale.strings();
    let month = strings.months[at.month0() as usize];
    strings
        .absolute_pattern
        .replace("{day}", &at.day().to_string())
        .replace("{month}", month)
        .replace("{hour}", &format!("{:02}", at.hour()))
        .replace("{minute}", &format!("{:02}", at.minute()))
}

/// UTC ISO-8601 with milliseconds, e.g. `2022-05-03T23:00:00.000Z`.
pub fn format_machine(at: &DateTime<FixedOffset>) -> String {
    at.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// "há 5 minutos" / "in 3 days". Instants equal to `now` count as past.
pub fn format_relative(at: &DateTime<FixedOffset>, now: DateTime<Utc>, locale: Locale) -> String {
    let at = at.with_timezone(&Utc);
    let future = at > now;
    let (earlier, later) = if future { (now, at) } else { (at, now) };

    let phrases = &locale.strings().distance;
    let text = match distance(earlier, later) {
        Distance::LessThanXMinutes(n) => phrases.less_than_x_minutes.render(n),
        Distance::XMinutes(n) => phrases.x_minutes.render(n),
        Distance::AboutXHours(n) => phrases.about_x_hours.render(n),
        Distance::XDays(n) => phrases.x_days.render(n),
        Distance::AboutXMonths(n) => phrases.about_x_months.render(n),
        Distance::XMonths(n) => phrases.x_months.render(n),
        Distance::AboutXYears(n) => phrases.about_x_years.render(n),
        Distance::OverXYears(n) => phrases.over_x_years.render(n),
        Distance::AlmostXYears(n) => phrases.almost_x_years.render(n),
    };

    let affix = if future { phrases.future } else { phrases.past };
    affix.replace("{distance}", &text)
}

/// `earlier` must not be after `later`.
pub fn distance(earlier: DateTime<Utc>, later: DateTime<Utc>) -> Distance {
    let seconds = later.signed_duration_since(earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    if minutes < 2 {
        return if minutes == 0 {
            Distance::LessThanXMinutes(1)
        } else {
            Distance::XMinutes(minutes)
        };
    }
    if minutes < 45 {
        return Distance::XMinutes(minutes);
    }
    if minutes < 90 {
        return Distance::AboutXHours(1);
    }
    if minutes < MINUTES_IN_DAY {
        return Distance::AboutXHours(round_div(minutes, 60));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return Distance::XDays(1);
    }
    if minutes < MINUTES_IN_MONTH {
        return Distance::XDays(round_div(minutes, MINUTES_IN_DAY));
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return Distance::AboutXMonths(round_div(minutes, MINUTES_IN_MONTH));
    }

    let months = calendar_months_between(earlier, later);
    if months < 12 {
        return Distance::XMonths(round_div(minutes, MINUTES_IN_MONTH));
    }

    let years = months / 12;
    match months % 12 {
        r if r < 3 => Distance::AboutXYears(years),
        r if r < 9 => Distance::OverXYears(years),
        _ => Distance::AlmostXYears(years + 1),
    }
}

// half rounds up; both operands are non-negative here
fn round_div(value: i64, divisor: i64) -> i64 {
    (value * 2 + divisor) / (divisor * 2)
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());

    let later_rest = (later.day(), later.time());
    let earlier_rest = (earlier.day(), earlier.time());
    if months > 0 && later_rest < earlier_rest {
        months -= 1;
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    fn utc(rfc3339: &str) -> DateTime<Utc> {
        at(rfc3339).with_timezone(&Utc)
    }

    fn ago(now: DateTime<Utc>, d: Duration) -> DateTime<FixedOffset> {
        (now - d).into()
    }

    #[test]
    fn absolute_uses_portuguese_month_names() {
        let published = at("2022-05-03T20:00:00-03:00");
        assert_eq!(format_absolute(&published, Locale::PtBr), "3 de maio as 20:00h");
        assert_eq!(format_absolute(&published, Locale::EnUs), "May 3 at 20:00h");
    }

    #[test]
    fn absolute_pads_hour_and_minute() {
        let published = at("2023-12-25T07:05:00+00:00");
        assert_eq!(format_absolute(&published, Locale::PtBr), "25 de dezembro as 07:05h");
    }

    #[test]
    fn machine_readable_is_utc_with_millis() {
        let published = at("2022-05-03T20:00:00-03:00");
        assert_eq!(format_machine(&published), "2022-05-03T23:00:00.000Z");
    }

    #[test]
    fn relative_short_spans() {
        let now = utc("2022-05-03T20:00:00Z");
        let cases = [
            (Duration::seconds(10), "há menos de um minuto"),
            (Duration::seconds(40), "há 1 minuto"),
            (Duration::minutes(5), "há 5 minutos"),
            (Duration::minutes(60), "há cerca de 1 hora"),
            (Duration::hours(2), "há cerca de 2 horas"),
            (Duration::hours(30), "há 1 dia"),
            (Duration::days(3), "há 3 dias"),
            (Duration::days(40), "há cerca de 1 mês"),
        ];
        for (d, expected) in cases {
            assert_eq!(format_relative(&ago(now, d), now, Locale::PtBr), expected, "{:?}", d);
        }
    }

    #[test]
    fn relative_same_instant_counts_as_past() {
        let now = utc("2022-05-03T20:00:00Z");
        let published: DateTime<FixedOffset> = now.into();
        assert_eq!(format_relative(&published, now, Locale::EnUs), "less than a minute ago");
    }

    #[test]
    fn relative_future_uses_future_affix() {
        let now = utc("2022-05-03T20:00:00Z");
        let later: DateTime<FixedOffset> = (now + Duration::days(3)).into();
        assert_eq!(format_relative(&later, now, Locale::PtBr), "em 3 dias");
        assert_eq!(format_relative(&later, now, Locale::EnUs), "in 3 days");
    }

    #[test]
    fn relative_months_and_years() {
        let now = utc("2022-04-11T00:00:00Z");
        assert_eq!(
            format_relative(&at("2022-01-01T00:00:00Z"), now, Locale::PtBr),
            "há 3 meses"
        );

        let now = utc("2022-05-01T00:00:00Z");
        assert_eq!(
            format_relative(&at("2020-01-01T00:00:00Z"), now, Locale::EnUs),
            "over 2 years ago"
        );
        assert_eq!(
            format_relative(&at("2021-04-01T00:00:00Z"), now, Locale::EnUs),
            "about 1 year ago"
        );

        let now = utc("2021-11-01T00:00:00Z");
        assert_eq!(
            format_relative(&at("2020-01-01T00:00:00Z"), now, Locale::PtBr),
            "há quase 2 anos"
        );
    }

    #[test]
    fn calendar_months_respect_day_of_month() {
        assert_eq!(
            calendar_months_between(utc("2022-01-31T00:00:00Z"), utc("2022-03-30T00:00:00Z")),
            1
        );
        assert_eq!(
            calendar_months_between(utc("2022-01-15T00:00:00Z"), utc("2022-03-15T00:00:00Z")),
            2
        );
    }

    #[test]
    fn round_div_rounds_half_up() {
        assert_eq!(round_div(89, 60), 1);
        assert_eq!(round_div(90, 60), 2);
        assert_eq!(round_div(29, 60), 0);
    }
}

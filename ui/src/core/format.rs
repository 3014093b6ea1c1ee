//! Locale-aware date/time rendering for the header badge.
//!
//! Full date plus short time, shaped per regional locale: `en-US` uses the
//! 12-hour clock with a meridiem suffix, `es-ES` and `fr-FR` use their long
//! date forms with 24-hour clocks. Pure functions of the language and the
//! instant; the header recomputes on every render instead of caching.

use time::{Month, OffsetDateTime, UtcOffset, Weekday};

use crate::core::language::Language;

/// Current wall-clock time, falling back to UTC when the local offset is
/// unavailable.
pub fn local_now() -> OffsetDateTime {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(offset)
}

/// Render `moment` the way the active language's locale would.
pub fn localized_timestamp(lang: Language, moment: OffsetDateTime) -> String {
    let weekday = weekday_name(lang, moment.weekday());
    let month = month_name(lang, moment.month());
    let day = moment.day();
    let year = moment.year();
    let minute = moment.minute();

    match lang {
        Language::En => {
            let (hour, meridiem) = to_twelve_hour(moment.hour());
            format!("{weekday}, {month} {day}, {year} at {hour}:{minute:02} {meridiem}")
        }
        Language::Es => {
            let hour = moment.hour();
            format!("{weekday}, {day} de {month} de {year}, {hour}:{minute:02}")
        }
        Language::Fr => {
            let hour = moment.hour();
            format!("{weekday} {day} {month} {year} à {hour:02}:{minute:02}")
        }
    }
}

fn to_twelve_hour(hour: u8) -> (u8, &'static str) {
    match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    }
}

fn weekday_name(lang: Language, weekday: Weekday) -> &'static str {
    let index = weekday.number_days_from_monday() as usize;
    match lang {
        Language::En => [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ][index],
        Language::Es => [
            "lunes",
            "martes",
            "miércoles",
            "jueves",
            "viernes",
            "sábado",
            "domingo",
        ][index],
        Language::Fr => [
            "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
        ][index],
    }
}

fn month_name(lang: Language, month: Month) -> &'static str {
    let index = month as usize - 1;
    match lang {
        Language::En => [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ][index],
        Language::Es => [
            "enero",
            "febrero",
            "marzo",
            "abril",
            "mayo",
            "junio",
            "julio",
            "agosto",
            "septiembre",
            "octubre",
            "noviembre",
            "diciembre",
        ][index],
        Language::Fr => [
            "janvier",
            "février",
            "mars",
            "avril",
            "mai",
            "juin",
            "juillet",
            "août",
            "septembre",
            "octobre",
            "novembre",
            "décembre",
        ][index],
    }
}

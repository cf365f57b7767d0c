//! Built-in locale data.

/// Order of the numeric date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// `1/15/2024`
    MonthDayYear,
    /// `15.1.2024`
    DayMonthYear,
}

/// Relative time phrases for one language.
#[derive(Debug)]
pub struct RelativeTimeData {
    /// Pattern for future values, `{0}` is replaced by the quantity.
    pub future: &'static str,
    /// Pattern for past values.
    pub past: &'static str,
    /// Singular and plural unit names, in `TimeUnit` order.
    pub units: [(&'static str, &'static str); 7],
    /// Yesterday, today, tomorrow.
    pub days: [&'static str; 3],
    pub now: &'static str,
}

/// Locale settings for formatting.
#[derive(Debug)]
pub struct LocaleData {
    pub language: &'static str,
    pub decimal_separator: char,
    pub thousands_separator: char,
    /// Currency symbol goes after the number (`1.234,50 €`).
    pub currency_after: bool,
    pub percent_suffix: &'static str,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub hour12: bool,
    pub date_order: DateOrder,
    pub date_separator: char,
    /// Pad day and month to two digits in numeric dates.
    pub pad_date: bool,
    /// Words placed between a day and a textual month, and a month and year.
    pub month_joiners: (&'static str, &'static str),
    /// Separator after a weekday and between a date and a time.
    pub field_joiner: &'static str,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
    pub list_and: &'static str,
    pub list_or: &'static str,
    /// Keep the comma before the last list item (`a, b, and c`).
    pub serial_comma: bool,
    pub relative: RelativeTimeData,
}

/// US English locale.
pub static EN: LocaleData = LocaleData {
    language: "en",
    decimal_separator: '.',
    thousands_separator: ',',
    currency_after: false,
    percent_suffix: "%",
    am_string: "AM",
    pm_string: "PM",
    hour12: true,
    date_order: DateOrder::MonthDayYear,
    date_separator: '/',
    pad_date: false,
    month_joiners: (" ", ", "),
    field_joiner: ", ",
    month_names_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    month_names_full: [
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
    ],
    day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    day_names_full: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    list_and: "and",
    list_or: "or",
    serial_comma: true,
    relative: RelativeTimeData {
        future: "in {0}",
        past: "{0} ago",
        units: [
            ("second", "seconds"),
            ("minute", "minutes"),
            ("hour", "hours"),
            ("day", "days"),
            ("week", "weeks"),
            ("month", "months"),
            ("year", "years"),
        ],
        days: ["yesterday", "today", "tomorrow"],
        now: "now",
    },
};

/// German locale.
pub static DE: LocaleData = LocaleData {
    language: "de",
    decimal_separator: ',',
    thousands_separator: '.',
    currency_after: true,
    percent_suffix: "\u{a0}%",
    am_string: "AM",
    pm_string: "PM",
    hour12: false,
    date_order: DateOrder::DayMonthYear,
    date_separator: '.',
    pad_date: false,
    month_joiners: (". ", " "),
    field_joiner: ", ",
    month_names_short: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    month_names_full: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    day_names_short: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    day_names_full: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    list_and: "und",
    list_or: "oder",
    serial_comma: false,
    relative: RelativeTimeData {
        future: "in {0}",
        past: "vor {0}",
        units: [
            ("Sekunde", "Sekunden"),
            ("Minute", "Minuten"),
            ("Stunde", "Stunden"),
            ("Tag", "Tagen"),
            ("Woche", "Wochen"),
            ("Monat", "Monaten"),
            ("Jahr", "Jahren"),
        ],
        days: ["gestern", "heute", "morgen"],
        now: "jetzt",
    },
};

/// French locale.
pub static FR: LocaleData = LocaleData {
    language: "fr",
    decimal_separator: ',',
    thousands_separator: '\u{202f}',
    currency_after: true,
    percent_suffix: "\u{202f}%",
    am_string: "AM",
    pm_string: "PM",
    hour12: false,
    date_order: DateOrder::DayMonthYear,
    date_separator: '/',
    pad_date: true,
    month_joiners: (" ", " "),
    field_joiner: " ",
    month_names_short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    month_names_full: [
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
    ],
    day_names_short: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    day_names_full: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    list_and: "et",
    list_or: "ou",
    serial_comma: false,
    relative: RelativeTimeData {
        future: "dans {0}",
        past: "il y a {0}",
        units: [
            ("seconde", "secondes"),
            ("minute", "minutes"),
            ("heure", "heures"),
            ("jour", "jours"),
            ("semaine", "semaines"),
            ("mois", "mois"),
            ("an", "ans"),
        ],
        days: ["hier", "aujourd’hui", "demain"],
        now: "maintenant",
    },
};

/// Spanish locale.
pub static ES: LocaleData = LocaleData {
    language: "es",
    decimal_separator: ',',
    thousands_separator: '.',
    currency_after: true,
    percent_suffix: "\u{a0}%",
    am_string: "a.\u{a0}m.",
    pm_string: "p.\u{a0}m.",
    hour12: false,
    date_order: DateOrder::DayMonthYear,
    date_separator: '/',
    pad_date: false,
    month_joiners: (" de ", " de "),
    field_joiner: ", ",
    month_names_short: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    month_names_full: [
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
    ],
    day_names_short: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
    day_names_full: [
        "domingo",
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
    ],
    list_and: "y",
    list_or: "o",
    serial_comma: false,
    relative: RelativeTimeData {
        future: "dentro de {0}",
        past: "hace {0}",
        units: [
            ("segundo", "segundos"),
            ("minuto", "minutos"),
            ("hora", "horas"),
            ("día", "días"),
            ("semana", "semanas"),
            ("mes", "meses"),
            ("año", "años"),
        ],
        days: ["ayer", "hoy", "mañana"],
        now: "ahora",
    },
};

/// Returns the built-in data for a lowercase language subtag.
pub fn lookup(language: &str) -> Option<&'static LocaleData> {
    match language {
        "en" => Some(&EN),
        "de" => Some(&DE),
        "fr" => Some(&FR),
        "es" => Some(&ES),
        _ => None,
    }
}

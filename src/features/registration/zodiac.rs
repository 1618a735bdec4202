use std::fmt;

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub fn as_str(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive (month, day) ranges. Capricorn spans the year boundary and is
/// split into two entries so every range compares within a single year.
const SIGN_RANGES: [((u32, u32), (u32, u32), ZodiacSign); 13] = [
    ((3, 21), (4, 19), ZodiacSign::Aries),
    ((4, 20), (5, 20), ZodiacSign::Taurus),
    ((5, 21), (6, 20), ZodiacSign::Gemini),
    ((6, 21), (7, 22), ZodiacSign::Cancer),
    ((7, 23), (8, 22), ZodiacSign::Leo),
    ((8, 23), (9, 22), ZodiacSign::Virgo),
    ((9, 23), (10, 22), ZodiacSign::Libra),
    ((10, 23), (11, 21), ZodiacSign::Scorpio),
    ((11, 22), (12, 21), ZodiacSign::Sagittarius),
    ((12, 22), (12, 31), ZodiacSign::Capricorn),
    ((1, 1), (1, 19), ZodiacSign::Capricorn),
    ((1, 20), (2, 18), ZodiacSign::Aquarius),
    ((2, 19), (3, 20), ZodiacSign::Pisces),
];

/// Maps a birth date to its sign by month/day lookup. The ranges cover
/// every day of the year, so the fallback arm is unreachable.
pub fn sign_for(birth_date: NaiveDate) -> ZodiacSign {
    let key = (birth_date.month(), birth_date.day());

    SIGN_RANGES
        .iter()
        .find(|(start, end, _)| key >= *start && key <= *end)
        .map(|&(_, _, sign)| sign)
        .unwrap_or(ZodiacSign::Capricorn)
}

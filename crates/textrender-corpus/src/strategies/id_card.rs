use chrono::{Datelike, Days, NaiveDate};
use rand::{Rng, RngCore};

use super::{CorpusSource, CorpusStrategy};
use crate::errors::{CorpusError, CorpusResult};

/// Positional weights of the 17 body digits.
pub const ID_WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
/// Check character indexed by the weighted sum modulo 11.
pub const CHECK_CODES: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

const AREA_CODE_MIN: u32 = 110_000;
const AREA_CODE_MAX: u32 = 690_000;
const AGE_MIN: i32 = -60;
const AGE_MAX: i32 = 60;

/// Parity of the three-digit sequence segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Bit 0, even sequence.
    Female,
    /// Bit 1, odd sequence.
    Male,
}

impl Gender {
    pub fn from_bit(bit: u8) -> Self {
        if bit % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    pub fn bit(self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }
}

/// Synthetic 18-character region identifiers with a valid check digit.
#[derive(Debug, Clone)]
pub struct IdCorpus {
    source: CorpusSource,
}

impl CorpusStrategy for IdCorpus {
    fn load(source: CorpusSource, _rng: &mut dyn RngCore) -> CorpusResult<Self> {
        Ok(Self { source })
    }

    fn source(&self) -> &CorpusSource {
        &self.source
    }

    fn get_sample(&self, rng: &mut dyn RngCore) -> CorpusResult<String> {
        let area_code = rng.random_range(AREA_CODE_MIN..AREA_CODE_MAX);
        let age = rng.random_range(AGE_MIN..AGE_MAX);
        let gender = Gender::from_bit(rng.random_range(0..2));
        generate_id_number(area_code, age, gender, self.source.today, rng)
    }
}

/// Builds one identifier: area code, birth date, gendered sequence, check digit.
///
/// The birth date is 1 January of `today.year() - age` plus up to 364 days.
pub fn generate_id_number(
    area_code: u32,
    age: i32,
    gender: Gender,
    today: NaiveDate,
    rng: &mut dyn RngCore,
) -> CorpusResult<String> {
    if !(100_000..=999_999).contains(&area_code) {
        return Err(CorpusError::InvalidConfig(format!(
            "area code {area_code} must have six digits"
        )));
    }

    let year = today.year() - age;
    if !(0..=9999).contains(&year) {
        return Err(CorpusError::InvalidConfig(format!(
            "birth year {year} is outside 0..=9999"
        )));
    }
    let offset = rng.random_range(0..=364_u64);
    let birth_date = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|start| start.checked_add_days(Days::new(offset)))
        .ok_or_else(|| CorpusError::InvalidConfig(format!("no calendar date in year {year}")))?;

    let sequence = sequence_number(rng.random_range(0..999), gender);
    let mut id = format!("{area_code}{}{sequence:03}", birth_date.format("%Y%m%d"));
    let check = id_check_digit(&id).ok_or_else(|| {
        CorpusError::InvalidConfig(format!("identifier body {id} is not 17 digits"))
    })?;
    id.push(check);
    Ok(id)
}

fn sequence_number(draw: u32, gender: Gender) -> u32 {
    match gender {
        Gender::Female if draw % 2 == 1 => draw + 1,
        Gender::Male if draw % 2 == 0 => draw.checked_sub(1).unwrap_or(1),
        _ => draw,
    }
}

/// Check character for a 17-digit body, or `None` if the body is malformed.
pub fn id_check_digit(body: &str) -> Option<char> {
    if body.len() != ID_WEIGHTS.len() {
        return None;
    }
    let mut sum = 0_u32;
    for (ch, weight) in body.chars().zip(ID_WEIGHTS) {
        sum += ch.to_digit(10)? * weight;
    }
    Some(CHECK_CODES[(sum % 11) as usize])
}

pub fn is_valid_id_number(id: &str) -> bool {
    if !id.is_ascii() || id.len() != ID_WEIGHTS.len() + 1 {
        return false;
    }
    let (body, check) = id.split_at(ID_WEIGHTS.len());
    id_check_digit(body).is_some_and(|expected| check.starts_with(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_digit_matches_known_identifier() {
        assert_eq!(id_check_digit("11010519491231002"), Some('X'));
        assert!(is_valid_id_number("11010519491231002X"));
        assert!(!is_valid_id_number("110105194912310021"));
    }

    #[test]
    fn check_digit_rejects_malformed_body() {
        assert_eq!(id_check_digit("1101051949123100"), None);
        assert_eq!(id_check_digit("1101051949123100a"), None);
    }

    #[test]
    fn sequence_parity_follows_gender() {
        assert_eq!(sequence_number(4, Gender::Female), 4);
        assert_eq!(sequence_number(5, Gender::Female), 6);
        assert_eq!(sequence_number(997, Gender::Female), 998);
        assert_eq!(sequence_number(5, Gender::Male), 5);
        assert_eq!(sequence_number(4, Gender::Male), 3);
        assert_eq!(sequence_number(0, Gender::Male), 1);
    }
}

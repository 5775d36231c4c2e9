use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::deal::NewDeal;
use crate::domain::types::{ClientId, TourOperator};
use crate::forms::FormError;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, PartialEq, Eq)]
/// Raw values of the create-deal form, exactly as submitted.
pub struct AddDealForm {
    /// Value of the selected client option.
    #[validate(length(min = 1))]
    #[serde(default)]
    pub client_id: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub deal_amount: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub commission_percent: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub tour_operator: String,
    /// `YYYY-MM-DD` as produced by a date input.
    #[validate(length(min = 1))]
    #[serde(default)]
    pub deal_date: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub payment_due_date: String,
    #[serde(default)]
    pub description: String,
}

/// Length of the leading run of ASCII digits in `bytes` from `start`.
fn digits_from(bytes: &[u8], start: usize) -> usize {
    bytes[start.min(bytes.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

/// Leading integer of `raw`, ignoring whatever trails it: `"12abc"` and
/// `"3.0"` both read as their integer part.
fn integer_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = digits_from(bytes, sign);
    if digits == 0 {
        return "";
    }
    &raw[..sign + digits]
}

/// Leading decimal number of `raw` (sign, digits, fraction, exponent),
/// ignoring whatever trails it.
fn decimal_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let integer = digits_from(bytes, end);
    end += integer;
    let mut mantissa = integer;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(bytes, end + 1);
        if integer > 0 || fraction > 0 {
            end += 1 + fraction;
            mantissa += fraction;
        }
    }
    if mantissa == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(bytes, end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    &raw[..end]
}

/// Zero and negative ids count as missing, same as an empty field.
fn parse_id(raw: &str) -> Option<ClientId> {
    integer_prefix(raw.trim())
        .parse::<i32>()
        .ok()
        .and_then(|id| ClientId::new(id).ok())
}

/// Zero and non-finite values count as missing.
fn parse_number(raw: &str) -> Option<f64> {
    decimal_prefix(raw.trim())
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value != 0.0)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

impl TryFrom<AddDealForm> for NewDeal {
    type Error = FormError;

    fn try_from(form: AddDealForm) -> Result<Self, Self::Error> {
        form.validate().map_err(|_| FormError::MissingDealFields)?;

        let (
            Some(client_id),
            Some(deal_amount),
            Some(commission_percent),
            Ok(tour_operator),
            Some(deal_date),
            Some(payment_due_date),
        ) = (
            parse_id(&form.client_id),
            parse_number(&form.deal_amount),
            parse_number(&form.commission_percent),
            TourOperator::new(form.tour_operator),
            parse_date(&form.deal_date),
            parse_date(&form.payment_due_date),
        )
        else {
            return Err(FormError::MissingDealFields);
        };

        let description = Some(form.description.trim().to_string()).filter(|s| !s.is_empty());

        Ok(NewDeal {
            client_id,
            deal_amount,
            commission_percent,
            tour_operator,
            deal_date,
            payment_due_date,
            description,
        })
    }
}

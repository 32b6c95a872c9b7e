use crate::{dto::input::PlanPrice, error::Error};

const CENTS_PER_UNIT: i64 = 100;

///
/// Converts price in currency units to the smallest currency unit.
/// Conversion works on decimal digits so `"19.99"` is exactly `1999`.
///
pub fn unit_amount(price: &PlanPrice) -> Result<i64, Error> {
    let text = price.as_decimal_text();
    let (units, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (units.is_empty() && fraction.is_empty()) || !is_digits(units) || !is_digits(fraction) {
        return Err(Error::Validation("price must be a non-negative number"));
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > 2 {
        return Err(Error::Validation("price must have at most 2 decimal places"));
    }

    let units = match units.is_empty() {
        true => 0,
        false => units
            .parse::<i64>()
            .map_err(|_| Error::Validation("price too large"))?,
    };
    let cents = format!("{fraction:0<2}")
        .parse::<i64>()
        .map_err(|_| Error::Validation("price must be a non-negative number"))?;

    units
        .checked_mul(CENTS_PER_UNIT)
        .and_then(|amount| amount.checked_add(cents))
        .ok_or(Error::Validation("price too large"))
}

#[cfg(test)]
mod test {
    use super::*;

    fn text(price: &str) -> PlanPrice {
        PlanPrice::Text(price.to_string())
    }

    fn number(price: f64) -> PlanPrice {
        PlanPrice::Number(serde_json::Number::from_f64(price).unwrap())
    }

    #[test]
    fn numeric_string() {
        assert_eq!(unit_amount(&text("19.99")).unwrap(), 1999);
        assert_eq!(unit_amount(&text("20")).unwrap(), 2000);
        assert_eq!(unit_amount(&text("0.5")).unwrap(), 50);
        assert_eq!(unit_amount(&text(".5")).unwrap(), 50);
        assert_eq!(unit_amount(&text("7.")).unwrap(), 700);
        assert_eq!(unit_amount(&text(" 4.10 ")).unwrap(), 410);
        assert_eq!(unit_amount(&text("19.900")).unwrap(), 1990);
        assert_eq!(unit_amount(&text("0")).unwrap(), 0);
    }

    #[test]
    fn json_number() {
        assert_eq!(unit_amount(&number(19.99)).unwrap(), 1999);
        assert_eq!(unit_amount(&number(0.29)).unwrap(), 29);
        assert_eq!(unit_amount(&number(100.0)).unwrap(), 10000);
        assert_eq!(
            unit_amount(&PlanPrice::Number(serde_json::Number::from(49))).unwrap(),
            4900
        );
    }

    #[test]
    fn too_many_decimal_places() {
        assert!(matches!(
            unit_amount(&text("19.999")),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn not_a_number() {
        for price in ["", ".", "abc", "-5", "1e3", "19,99", "1.2.3", "+3"] {
            assert!(
                matches!(unit_amount(&text(price)), Err(Error::Validation(_))),
                "price {price:?}"
            );
        }
        assert!(matches!(
            unit_amount(&number(-1.5)),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn too_large() {
        assert!(matches!(
            unit_amount(&text("92233720368547758.08")),
            Err(Error::Validation(_))
        ));
    }
}

use std::fmt;

use crate::error::TypeError;

/// Number of fields in a record: country, code, product, cost, quantity.
pub const FIELD_COUNT: usize = 5;

/// One line of shoe stock.
///
/// The code is used as a lookup key but nothing enforces its uniqueness.
/// Beyond the two numeric fields parsing, no validation is applied: empty
/// strings and negative numbers are accepted as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct ShoeRecord {
    /// Country the stock is held in.
    pub country: String,
    /// Stock code, matched exactly by search.
    pub code: String,
    /// Product name.
    pub product: String,
    /// Unit cost.
    pub cost: f64,
    /// Units on hand.
    pub quantity: i64,
}

impl ShoeRecord {
    /// Create a record from already-typed values.
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: f64,
        quantity: i64,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Create a record from five raw text fields.
    ///
    /// Cost must parse as a decimal and quantity as a whole number; surrounding
    /// whitespace on the numeric fields is ignored. Text fields are kept
    /// verbatim.
    pub fn parse(
        country: &str,
        code: &str,
        product: &str,
        cost: &str,
        quantity: &str,
    ) -> Result<Self, TypeError> {
        let cost = parse_cost(cost)?;
        let quantity = parse_quantity(quantity)?;
        Ok(Self::new(country, code, product, cost, quantity))
    }

    /// Create a record from a slice of exactly [`FIELD_COUNT`] raw fields.
    pub fn from_fields(fields: &[&str]) -> Result<Self, TypeError> {
        match fields {
            [country, code, product, cost, quantity] => {
                Self::parse(country, code, product, cost, quantity)
            }
            _ => Err(TypeError::FieldCount {
                expected: FIELD_COUNT,
                actual: fields.len(),
            }),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Stock value of this line: `cost * quantity`.
    pub fn value(&self) -> f64 {
        self.cost * self.quantity as f64
    }
}

/// Parse a cost field. `NaN` and infinities are rejected.
pub fn parse_cost(raw: &str) -> Result<f64, TypeError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|cost| cost.is_finite())
        .ok_or_else(|| TypeError::InvalidCost(raw.to_string()))
}

/// Parse a quantity field.
pub fn parse_quantity(raw: &str) -> Result<i64, TypeError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TypeError::InvalidQuantity(raw.to_string()))
}

/// Render a decimal the way operators expect to read it.
///
/// Whole values keep one fractional digit (`50.0`); everything else uses the
/// shortest representation that parses back to the same value (`12.5`).
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl fmt::Display for ShoeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.country,
            self.code,
            self.product,
            format_decimal(self.cost),
            self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_valid_fields() {
        let shoe = ShoeRecord::parse("UK", "SC01", "Boot", "50.0", "2").unwrap();
        assert_eq!(shoe.country(), "UK");
        assert_eq!(shoe.code(), "SC01");
        assert_eq!(shoe.product(), "Boot");
        assert_eq!(shoe.cost(), 50.0);
        assert_eq!(shoe.quantity(), 2);
    }

    #[test]
    fn parse_trims_numeric_fields() {
        let shoe = ShoeRecord::parse("UK", "SC01", "Boot", " 12.5 ", "7 ").unwrap();
        assert_eq!(shoe.cost(), 12.5);
        assert_eq!(shoe.quantity(), 7);
    }

    #[test]
    fn parse_keeps_text_fields_verbatim() {
        let shoe = ShoeRecord::parse(" UK", "", "Air Max ", "1", "1").unwrap();
        assert_eq!(shoe.country(), " UK");
        assert_eq!(shoe.code(), "");
        assert_eq!(shoe.product(), "Air Max ");
    }

    #[test]
    fn parse_accepts_negative_values() {
        let shoe = ShoeRecord::parse("UK", "SC01", "Boot", "-3.5", "-4").unwrap();
        assert_eq!(shoe.cost(), -3.5);
        assert_eq!(shoe.quantity(), -4);
    }

    #[test]
    fn parse_rejects_bad_cost() {
        let err = ShoeRecord::parse("UK", "SC01", "Boot", "fifty", "2").unwrap_err();
        assert_eq!(err, TypeError::InvalidCost("fifty".into()));
    }

    #[test]
    fn parse_rejects_non_finite_cost() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity"] {
            let err = ShoeRecord::parse("UK", "SC01", "Boot", raw, "2").unwrap_err();
            assert_eq!(err, TypeError::InvalidCost(raw.into()));
        }
    }

    #[test]
    fn parse_rejects_fractional_quantity() {
        let err = ShoeRecord::parse("UK", "SC01", "Boot", "50", "2.5").unwrap_err();
        assert_eq!(err, TypeError::InvalidQuantity("2.5".into()));
    }

    #[test]
    fn from_fields_checks_arity() {
        let err = ShoeRecord::from_fields(&["UK", "SC01", "Boot", "50.0"]).unwrap_err();
        assert_eq!(err, TypeError::FieldCount { expected: 5, actual: 4 });

        let err = ShoeRecord::from_fields(&["UK", "SC01", "Boot", "Extra", "50.0", "2"])
            .unwrap_err();
        assert_eq!(err, TypeError::FieldCount { expected: 5, actual: 6 });
    }

    #[test]
    fn value_is_cost_times_quantity() {
        let shoe = ShoeRecord::new("UK", "SC01", "Boot", 10.0, 3);
        assert_eq!(shoe.value(), 30.0);
    }

    #[test]
    fn display_format() {
        let shoe = ShoeRecord::new("UK", "SC01", "Boot", 50.0, 2);
        assert_eq!(shoe.to_string(), "UK, SC01, Boot, 50.0, 2");

        let shoe = ShoeRecord::new("US", "SC02", "Sandal", 19.99, 10);
        assert_eq!(shoe.to_string(), "US, SC02, Sandal, 19.99, 10");
    }

    #[test]
    fn format_decimal_whole_and_fractional() {
        assert_eq!(format_decimal(30.0), "30.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(12.25), "12.25");
        assert_eq!(format_decimal(-4.0), "-4.0");
    }

    proptest! {
        #[test]
        fn format_decimal_parses_back(value in -1.0e12f64..1.0e12f64) {
            let rendered = format_decimal(value);
            prop_assert_eq!(parse_cost(&rendered).unwrap(), value);
        }

        #[test]
        fn quantity_roundtrips_through_text(quantity in any::<i64>()) {
            prop_assert_eq!(parse_quantity(&quantity.to_string()).unwrap(), quantity);
        }
    }
}

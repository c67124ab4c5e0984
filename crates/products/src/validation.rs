//! Field-level validation of catalog records.
//!
//! Validation never fails: every product maps to zero or more [`ValidationError`]s,
//! produced in input order and, within a product, in [`Rule::ALL`] order.

use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductId};

/// Highest acceptable `rating.rate`.
pub const MAX_RATING_RATE: f64 = 5.0;

/// Product field a defect refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "rating.rate")]
    RatingRate,
    #[serde(rename = "rating.count")]
    RatingCount,
    #[serde(rename = "description")]
    Description,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Price => "price",
            Field::RatingRate => "rating.rate",
            Field::RatingCount => "rating.count",
            Field::Description => "description",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The offending value carried by a defect.
///
/// Written to JSON as the bare value. Decoding picks the first variant that fits, so
/// integers come back as `Integer` and numbers with a fractional part or exponent as
/// `Decimal` (serde_json always writes `f64` with one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActualValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl core::fmt::Display for ActualValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ActualValue::Text(s) => f.write_str(s),
            ActualValue::Integer(n) => core::fmt::Display::fmt(n, f),
            ActualValue::Decimal(x) => core::fmt::Display::fmt(x, f),
        }
    }
}

/// One detected rule violation, scoped to a single field of a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub product_id: ProductId,
    pub title: String,
    pub field: Field,
    pub message: String,
    pub actual_value: ActualValue,
}

impl ValidationError {
    fn new(product: &Product, rule: Rule, actual_value: ActualValue) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            field: rule.field(),
            message: rule.message().to_string(),
            actual_value,
        }
    }
}

/// A single validation rule.
///
/// Rules are checked independently; the two title rules cannot both fire because
/// `BlankTitle` only applies to non-empty titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    EmptyTitle,
    BlankTitle,
    NegativePrice,
    RatingRateTooHigh,
    ZeroPrice,
    NegativeRatingCount,
    EmptyDescription,
}

impl Rule {
    /// Every rule, in evaluation order.
    pub const ALL: [Rule; 7] = [
        Rule::EmptyTitle,
        Rule::BlankTitle,
        Rule::NegativePrice,
        Rule::RatingRateTooHigh,
        Rule::ZeroPrice,
        Rule::NegativeRatingCount,
        Rule::EmptyDescription,
    ];

    pub fn field(self) -> Field {
        match self {
            Rule::EmptyTitle | Rule::BlankTitle => Field::Title,
            Rule::NegativePrice | Rule::ZeroPrice => Field::Price,
            Rule::RatingRateTooHigh => Field::RatingRate,
            Rule::NegativeRatingCount => Field::RatingCount,
            Rule::EmptyDescription => Field::Description,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rule::EmptyTitle => "Title is empty",
            Rule::BlankTitle => "Title contains only whitespace",
            Rule::NegativePrice => "Price is negative",
            Rule::RatingRateTooHigh => "Rating rate exceeds 5",
            Rule::ZeroPrice => "Price is zero",
            Rule::NegativeRatingCount => "Rating count is negative",
            Rule::EmptyDescription => "Description is empty",
        }
    }

    /// Returns the offending value when `product` violates this rule.
    pub fn check(self, product: &Product) -> Option<ActualValue> {
        let violated = match self {
            Rule::EmptyTitle => product.title.is_empty(),
            Rule::BlankTitle => !product.title.is_empty() && product.title.trim().is_empty(),
            Rule::NegativePrice => product.price < 0.0,
            Rule::RatingRateTooHigh => product.rating.rate > MAX_RATING_RATE,
            Rule::ZeroPrice => product.price == 0.0,
            Rule::NegativeRatingCount => product.rating.count < 0,
            Rule::EmptyDescription => product.description.is_empty(),
        };
        if !violated {
            return None;
        }

        Some(match self.field() {
            Field::Title => ActualValue::Text(product.title.clone()),
            Field::Price => ActualValue::Decimal(product.price),
            Field::RatingRate => ActualValue::Decimal(product.rating.rate),
            Field::RatingCount => ActualValue::Integer(product.rating.count),
            Field::Description => ActualValue::Text(product.description.clone()),
        })
    }
}

/// Validate a single product.
pub fn validate_product(product: &Product) -> Vec<ValidationError> {
    Rule::ALL
        .iter()
        .filter_map(|&rule| {
            rule.check(product)
                .map(|value| ValidationError::new(product, rule, value))
        })
        .collect()
}

/// Validate a sequence of products.
pub fn validate_products(products: &[Product]) -> Vec<ValidationError> {
    products.iter().flat_map(validate_product).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Rating;

    fn valid_product() -> Product {
        Product {
            id: ProductId::new(1),
            title: "Test Product".to_string(),
            price: 10.5,
            description: "Test".to_string(),
            category: "test".to_string(),
            image: "test.jpg".to_string(),
            rating: Rating { rate: 4.5, count: 10 },
        }
    }

    fn messages(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn valid_product_yields_no_errors() {
        assert!(validate_product(&valid_product()).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(validate_products(&[]).is_empty());
    }

    #[test]
    fn empty_title_is_reported_once() {
        let product = Product { title: String::new(), ..valid_product() };

        let errors = validate_product(&product);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Title);
        assert_eq!(errors[0].message, "Title is empty");
        assert_eq!(errors[0].actual_value, ActualValue::Text(String::new()));
    }

    #[test]
    fn whitespace_title_is_reported_once() {
        let product = Product { title: "   ".to_string(), ..valid_product() };

        let errors = validate_product(&product);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Title);
        assert_eq!(errors[0].message, "Title contains only whitespace");
        assert_eq!(errors[0].actual_value, ActualValue::Text("   ".to_string()));
    }

    #[test]
    fn tabs_and_newlines_count_as_whitespace() {
        let product = Product { title: "\t\n ".to_string(), ..valid_product() };
        assert_eq!(messages(&validate_product(&product)), ["Title contains only whitespace"]);
    }

    #[test]
    fn negative_price_is_reported() {
        let product = Product { price: -10.5, ..valid_product() };

        let errors = validate_product(&product);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Price);
        assert_eq!(errors[0].message, "Price is negative");
        assert_eq!(errors[0].actual_value, ActualValue::Decimal(-10.5));
    }

    #[test]
    fn zero_price_is_reported_as_zero_not_negative() {
        let product = Product { price: 0.0, ..valid_product() };
        assert_eq!(messages(&validate_product(&product)), ["Price is zero"]);
    }

    #[test]
    fn rating_rate_of_exactly_five_is_accepted() {
        let product = Product { rating: Rating { rate: 5.0, count: 1 }, ..valid_product() };
        assert!(validate_product(&product).is_empty());
    }

    #[test]
    fn rating_rate_above_five_is_reported() {
        let product = Product { rating: Rating { rate: 5.5, count: 10 }, ..valid_product() };

        let errors = validate_product(&product);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::RatingRate);
        assert_eq!(errors[0].actual_value, ActualValue::Decimal(5.5));
    }

    #[test]
    fn rating_and_description_defects_fire_in_rule_order() {
        let product = Product {
            description: String::new(),
            rating: Rating { rate: 5.5, count: -5 },
            ..valid_product()
        };

        let errors = validate_product(&product);
        assert_eq!(
            messages(&errors),
            ["Rating rate exceeds 5", "Rating count is negative", "Description is empty"]
        );
        assert_eq!(errors[1].field, Field::RatingCount);
        assert_eq!(errors[1].actual_value, ActualValue::Integer(-5));
    }

    #[test]
    fn multiple_defects_on_one_product() {
        let product = Product {
            title: String::new(),
            price: -10.5,
            description: String::new(),
            rating: Rating { rate: 5.5, count: -5 },
            ..valid_product()
        };

        let errors = validate_product(&product);
        assert_eq!(
            messages(&errors),
            [
                "Title is empty",
                "Price is negative",
                "Rating rate exceeds 5",
                "Rating count is negative",
                "Description is empty",
            ]
        );
        assert!(errors.iter().all(|e| e.product_id == ProductId::new(1)));
    }

    #[test]
    fn errors_follow_input_product_order() {
        let first = Product { id: ProductId::new(9), description: String::new(), ..valid_product() };
        let second = Product { id: ProductId::new(3), price: 0.0, ..valid_product() };

        let errors = validate_products(&[first, valid_product(), second]);
        let ids: Vec<i64> = errors.iter().map(|e| e.product_id.get()).collect();
        assert_eq!(ids, [9, 3]);
    }

    #[test]
    fn errors_carry_the_product_title() {
        let product = Product { title: "Broken".to_string(), price: -1.0, ..valid_product() };
        assert_eq!(validate_product(&product)[0].title, "Broken");
    }

    #[test]
    fn field_names_serialize_with_dotted_paths() {
        let json = serde_json::to_string(&[Field::RatingRate, Field::RatingCount, Field::Title]).unwrap();
        assert_eq!(json, r#"["rating.rate","rating.count","title"]"#);
        for rule in Rule::ALL {
            let field = rule.field();
            assert_eq!(serde_json::to_string(&field).unwrap(), format!("\"{field}\""));
        }
    }

    #[test]
    fn actual_value_keeps_its_variant_through_json() {
        let values = vec![
            ActualValue::Text("  ".to_string()),
            ActualValue::Integer(-10),
            ActualValue::Decimal(-19.99),
            ActualValue::Decimal(6.0),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["  ",-10,-19.99,6.0]"#);

        let back: Vec<ActualValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn actual_value_displays_bare() {
        assert_eq!(ActualValue::Decimal(6.0).to_string(), "6");
        assert_eq!(ActualValue::Decimal(-9.99).to_string(), "-9.99");
        assert_eq!(ActualValue::Integer(-10).to_string(), "-10");
        assert_eq!(ActualValue::Text("x".into()).to_string(), "x");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_product() -> impl Strategy<Value = Product> {
            (
                any::<i64>(),
                prop_oneof![Just(String::new()), Just("  ".to_string()), "[A-Za-z][A-Za-z0-9 ]{0,40}"],
                prop_oneof![Just(0.0), -1000.0f64..1000.0],
                prop_oneof![Just(String::new()), "[a-z ]{1,40}"],
                0.0f64..10.0,
                -100i64..1000,
            )
                .prop_map(|(id, title, price, description, rate, count)| Product {
                    id: ProductId::new(id),
                    title,
                    price,
                    description,
                    category: "test".to_string(),
                    image: String::new(),
                    rating: Rating { rate, count },
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: well-formed products never produce defects.
            #[test]
            fn well_formed_products_have_no_defects(
                id in any::<i64>(),
                title in "[A-Za-z][A-Za-z0-9 ]{0,60}",
                price in 0.01f64..100_000.0,
                description in "[A-Za-z][a-z ]{0,80}",
                rate in 0.0f64..=5.0,
                count in 0i64..1_000_000,
            ) {
                let product = Product {
                    id: ProductId::new(id),
                    title,
                    price,
                    description,
                    category: String::new(),
                    image: String::new(),
                    rating: Rating { rate, count },
                };
                prop_assert!(validate_product(&product).is_empty());
            }

            /// Property: defects are grouped by product in input order, rules in fixed order.
            #[test]
            fn defects_are_ordered_by_product_then_rule(products in prop::collection::vec(any_product(), 0..20)) {
                let mut expected: Vec<(i64, &str)> = Vec::new();
                for p in &products {
                    let id = p.id.get();
                    if p.title.is_empty() {
                        expected.push((id, "Title is empty"));
                    } else if p.title.trim().is_empty() {
                        expected.push((id, "Title contains only whitespace"));
                    }
                    if p.price < 0.0 {
                        expected.push((id, "Price is negative"));
                    }
                    if p.rating.rate > 5.0 {
                        expected.push((id, "Rating rate exceeds 5"));
                    }
                    if p.price == 0.0 {
                        expected.push((id, "Price is zero"));
                    }
                    if p.rating.count < 0 {
                        expected.push((id, "Rating count is negative"));
                    }
                    if p.description.is_empty() {
                        expected.push((id, "Description is empty"));
                    }
                }

                let errors = validate_products(&products);
                let actual: Vec<(i64, &str)> = errors
                    .iter()
                    .map(|e| (e.product_id.get(), e.message.as_str()))
                    .collect();
                prop_assert_eq!(actual, expected);
            }

            /// Property: a product trips at most one title rule and at most one price rule.
            #[test]
            fn title_and_price_rules_are_exclusive(product in any_product()) {
                let errors = validate_product(&product);
                let titles = errors.iter().filter(|e| e.field == Field::Title).count();
                let prices = errors.iter().filter(|e| e.field == Field::Price).count();
                prop_assert!(titles <= 1);
                prop_assert!(prices <= 1);
            }
        }
    }
}

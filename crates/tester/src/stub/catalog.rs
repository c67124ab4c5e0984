//! Fixed sample catalog served in self-test mode.

use catalogcheck_products::{Product, ProductId, Rating};

fn product(
    id: i64,
    title: &str,
    price: f64,
    description: &str,
    category: &str,
    image: &str,
    rating: Rating,
) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price,
        description: description.to_string(),
        category: category.to_string(),
        image: image.to_string(),
        rating,
    }
}

/// Five products: the first is valid, the other four carry deliberate defects.
pub fn defective_catalog() -> Vec<Product> {
    vec![
        product(
            1,
            "Good Product",
            19.99,
            "This is a good product with no defects",
            "good",
            "good.jpg",
            Rating { rate: 4.5, count: 120 },
        ),
        product(
            2,
            "",
            29.99,
            "This product has an empty title",
            "defective",
            "empty-title.jpg",
            Rating { rate: 3.5, count: 80 },
        ),
        product(
            3,
            "Negative Price Product",
            -9.99,
            "This product has a negative price",
            "defective",
            "negative-price.jpg",
            Rating { rate: 2.5, count: 40 },
        ),
        product(
            4,
            "High Rating Product",
            39.99,
            "This product has a rating over 5",
            "defective",
            "high-rating.jpg",
            Rating { rate: 5.5, count: 60 },
        ),
        product(
            5,
            "Multiple Problems",
            -19.99,
            "",
            "defective",
            "multiple-problems.jpg",
            Rating { rate: 6.0, count: -10 },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogcheck_products::{validate_product, validate_products};

    #[test]
    fn first_product_is_clean() {
        let catalog = defective_catalog();
        assert!(validate_product(&catalog[0]).is_empty());
    }

    #[test]
    fn every_other_product_has_defects() {
        let catalog = defective_catalog();
        let per_product: Vec<usize> = catalog.iter().map(|p| validate_product(p).len()).collect();
        assert_eq!(per_product, [0, 1, 1, 1, 4]);
        assert_eq!(validate_products(&catalog).len(), 7);
    }
}

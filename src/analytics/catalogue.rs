use crate::model::Product;
use pipeline_framework::{group_by, OrderedGroups};

/// Groups products by category, in first-seen category order.
pub fn group_products_by_category(products: &[Product]) -> OrderedGroups<String, Product> {
    group_by(products.iter().cloned(), |product| {
        product.category().to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_data;

    #[test]
    fn test_categories_in_catalogue_order() {
        let data = seed_data().unwrap();
        let grouped = group_products_by_category(&data.products);

        let categories: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["electronics", "clothing", "books"]);

        let clothing: Vec<&str> = grouped
            .get("clothing")
            .unwrap()
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(clothing, vec!["T-shirt", "Jeans"]);
    }
}

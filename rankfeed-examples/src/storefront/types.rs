//! Data shapes for the storefront collaborators.
//!
//! `Product` is the shape the domain holds, `ProductDto` the shape that
//! crosses a boundary; the two conversions are total, field-for-field,
//! and perform no validation. `CreateOrderRequest` is the inbound order
//! shape; line order is meaningful and preserved through serialization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single requested order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Identifier of the ordered product.
    pub product_id: u64,
    /// Number of units requested.
    pub quantity: u32,
}

/// Request shape for creating an order: an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// The requested lines, in submission order.
    pub lines: Vec<OrderLine>,
}

/// A product as the domain holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Unit price as a decimal currency amount.
    pub price: Decimal,
    /// Catalog category the product is listed under.
    pub category: String,
    /// Units currently on stock.
    pub stock: u32,
}

/// Transfer shape for a product crossing a boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    /// Product identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Unit price as a decimal currency amount.
    pub price: Decimal,
    /// Catalog category the product is listed under.
    pub category: String,
    /// Units currently on stock.
    pub stock: u32,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            category: product.category,
            stock: product.stock,
        }
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            price: dto.price,
            category: dto.category,
            stock: dto.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn racket() -> Product {
        Product {
            id: 7,
            name: "Pro Staff Racket".to_string(),
            price: dec!(249.99),
            category: "Rackets".to_string(),
            stock: 12,
        }
    }

    #[test]
    fn domain_to_transfer_is_field_for_field() {
        let product = racket();

        let dto = ProductDto::from(product.clone());

        assert_eq!(dto.id, product.id);
        assert_eq!(dto.name, product.name);
        assert_eq!(dto.price, product.price);
        assert_eq!(dto.category, product.category);
        assert_eq!(dto.stock, product.stock);
    }

    #[test]
    fn transfer_to_domain_is_field_for_field() {
        let dto = ProductDto::from(racket());

        let product = Product::from(dto.clone());

        assert_eq!(product.id, dto.id);
        assert_eq!(product.name, dto.name);
        assert_eq!(product.price, dto.price);
        assert_eq!(product.category, dto.category);
        assert_eq!(product.stock, dto.stock);
    }

    #[test]
    fn order_request_preserves_line_order_through_serde() {
        let request = CreateOrderRequest {
            lines: vec![
                OrderLine {
                    product_id: 7,
                    quantity: 2,
                },
                OrderLine {
                    product_id: 3,
                    quantity: 1,
                },
            ],
        };

        let json = serde_json::to_string(&request).expect("request serializes");
        let decoded: CreateOrderRequest =
            serde_json::from_str(&json).expect("request deserializes");

        assert_eq!(decoded, request, "line order is meaningful and preserved");
    }
}

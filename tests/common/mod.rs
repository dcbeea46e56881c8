//! Shared fixtures shaped like the backend's payloads.

#![allow(dead_code)]

use chrono::NaiveDate;
use craftshop_sdk::models::{CustomItem, LineKind, Product, Sale, SaleDetail};

pub fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: String::new(),
        price,
        stock,
        measurements: "20x30".to_string(),
        on_offer: false,
        featured: false,
        category: Some("Madera".to_string()),
        images: Vec::new(),
    }
}

pub fn custom_item(id: i64, name: &str, price: f64) -> CustomItem {
    CustomItem {
        id,
        name: name.to_string(),
        description: "pedido a medida".to_string(),
        measurements: "50x20".to_string(),
        price,
    }
}

pub fn sale(id: i64, date: &str) -> Sale {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .expect("fixture date")
        .and_hms_opt(12, 0, 0)
        .expect("fixture time");
    Sale {
        id,
        date,
        total: 0.0,
    }
}

pub fn catalog_detail(id: i64, sale_id: i64, name: &str, quantity: i64, unit_price: f64) -> SaleDetail {
    SaleDetail {
        id,
        sale_id: Some(sale_id),
        kind: Some(LineKind::Catalog),
        quantity,
        unit_price,
        product_name: Some(name.to_string()),
        custom_name: None,
    }
}

pub fn custom_detail(id: i64, sale_id: i64, name: &str, unit_price: f64) -> SaleDetail {
    SaleDetail {
        id,
        sale_id: Some(sale_id),
        kind: Some(LineKind::Custom),
        quantity: 1,
        unit_price,
        product_name: None,
        custom_name: Some(name.to_string()),
    }
}

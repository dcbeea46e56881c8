use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://gyg-production.up.railway.app";

pub const PRODUCTS_PATH: &str = "api/articulos";
pub const CATEGORIES_PATH: &str = "api/categorias";
pub const CUSTOM_ORDERS_PATH: &str = "pedidos_personalizados";
pub const CUSTOM_ORDERS_AVAILABLE_PATH: &str = "pedidos_personalizados/disponibles";
pub const SALES_PATH: &str = "ventas";

pub fn product_path(id: i64) -> String {
    format!("{}/{}", PRODUCTS_PATH, id)
}

pub fn category_path(id: i64) -> String {
    format!("{}/{}", CATEGORIES_PATH, id)
}

pub fn sale_detail_path(sale_id: i64) -> String {
    format!("{}/{}/detalle", SALES_PATH, sale_id)
}

pub fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

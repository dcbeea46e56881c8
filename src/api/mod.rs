pub mod categories;
pub mod custom;
pub mod products;
pub mod sales;

pub use categories::CategoriesApi;
pub use custom::CustomOrdersApi;
pub use products::ProductsApi;
pub use sales::SalesApi;

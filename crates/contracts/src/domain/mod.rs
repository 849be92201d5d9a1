pub mod a001_brand;
pub mod a002_category;
pub mod a003_product;
pub mod a004_order;
pub mod a005_sale_program;

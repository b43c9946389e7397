mod product_registration;

pub use product_registration::ProductRegistration;

pub mod stub_storefront;

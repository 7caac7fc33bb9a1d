//! Shop server access: the add-to-cart call and the listing endpoints used to
//! fill the catalog.

mod cart;
mod client;

pub use cart::{CART_ERROR_MESSAGE, CartCounter, CartOutcome, CartWorker, Notifier, apply_cart_outcome};
pub use client::{CartUpdate, RemoteProduct, RemoteTrack, ShopClient, ShopError};

#[cfg(test)]
mod tests;

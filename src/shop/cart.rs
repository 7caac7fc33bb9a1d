//! Applying cart results to the page, and the worker that issues requests.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, error, info};

use super::client::{CartUpdate, ShopClient, ShopError};

/// Shown when adding to the cart fails for any reason.
pub const CART_ERROR_MESSAGE: &str = "Error adding product to cart";

/// Shows a message to the user.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// The navbar cart counter. A page without one ignores updates.
pub trait CartCounter {
    fn set_cart_count(&mut self, count: u32);
}

/// Surface the result of an add-to-cart request. No retry on failure.
pub fn apply_cart_outcome<S>(result: Result<CartUpdate, ShopError>, surface: &mut S)
where
    S: Notifier + CartCounter,
{
    match result {
        Ok(update) => {
            info!(cart_total = update.cart_total, "cart updated");
            surface.alert(&update.message);
            surface.set_cart_count(update.cart_total);
        }
        Err(e) => {
            error!(error = %e, "add to cart failed");
            surface.alert(CART_ERROR_MESSAGE);
        }
    }
}

#[derive(Debug)]
enum CartCmd {
    Add(String),
    Quit,
}

/// A finished add-to-cart request.
#[derive(Debug)]
pub struct CartOutcome {
    pub product_id: String,
    pub result: Result<CartUpdate, ShopError>,
}

/// Runs cart requests on a background thread so the event loop never blocks
/// on the network.
pub struct CartWorker {
    tx: Sender<CartCmd>,
    rx: Receiver<CartOutcome>,
}

impl CartWorker {
    pub fn spawn(client: ShopClient) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<CartCmd>();
        let (out_tx, out_rx) = mpsc::channel::<CartOutcome>();

        thread::spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    CartCmd::Add(product_id) => {
                        let result = client.add_to_cart(&product_id);
                        if out_tx.send(CartOutcome { product_id, result }).is_err() {
                            break;
                        }
                    }
                    CartCmd::Quit => break,
                }
            }
            debug!("cart worker stopped");
        });

        Self {
            tx: cmd_tx,
            rx: out_rx,
        }
    }

    /// Queue an add-to-cart request.
    pub fn add_to_cart(&self, product_id: impl Into<String>) {
        let _ = self.tx.send(CartCmd::Add(product_id.into()));
    }

    /// A finished request, if one is ready.
    pub fn try_recv(&self) -> Option<CartOutcome> {
        self.rx.try_recv().ok()
    }

    pub fn quit(&self) {
        let _ = self.tx.send(CartCmd::Quit);
    }
}

//! Custom actions for the Product actor.
//!
//! Stock reservation has to be atomic with respect to every other request
//! touching the same product, which is exactly what an action gives us: the
//! check and the decrement run inside the actor, so concurrent orders can
//! never reserve the same units twice.

/// Resource-specific operations on a product.
#[derive(Debug)]
pub enum ProductAction {
    /// Reserve this many units, failing without side effects when the
    /// inventory is insufficient.
    ReserveStock(u32),
}

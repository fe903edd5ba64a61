//! Custom actions for the Product actor.
//!
//! Every stock change goes through one of these actions. The product actor
//! handles one message at a time, so a reservation's check and its decrement
//! happen in the same step and cannot interleave with another reservation.

/// Stock operations on a single product.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level.
    CheckStock,
    /// Overwrites the stock level with an absolute value.
    SetStock(u32),
    /// Takes `quantity` units out of stock.
    ///
    /// # Errors
    /// Fails with `InsufficientStock` if `quantity` exceeds the stock on hand;
    /// the stock is left untouched.
    ReserveStock(u32),
    /// Puts `quantity` units back into stock.
    ReleaseStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
///
/// Each variant carries the stock level after the action.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    SetStock(u32),
    ReserveStock(u32),
    ReleaseStock(u32),
}

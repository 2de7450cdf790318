//! Database Models

// Serde helpers
pub mod serde_thing;

pub mod member;
pub mod order;
pub mod print_file;

// Re-exports
pub use member::{Member, MemberCreate, MemberType};
pub use order::{ColorMode, Order, OrderCreate, OrderStatus, OrderStatusUpdate, TimeSlot};
pub use print_file::{PrintFile, PrintFileCreate};

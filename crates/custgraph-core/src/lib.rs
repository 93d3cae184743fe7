//! custgraph Core Library
//!
//! Customer model, form payloads and the storage seam shared by the
//! graph layer and the web front-end.

pub mod error;
pub mod memory;
pub mod model;
pub mod store;

pub use error::{CustError, CustResult};
pub use memory::MemoryStore;
pub use model::{Customer, CustomerUpdate, NewCustomer};
pub use store::CustomerStore;

mod clock;
pub use clock::{Clock, IdGenerator, SystemClock};

mod config;
pub use config::Config;

mod fuzz;

mod persistence;
pub use persistence::{MemorySlot, Persistence};

mod store;
pub use store::CommentStore;

pub mod api {
    pub use remarque_api::*;
}

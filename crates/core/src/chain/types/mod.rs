mod chain;
pub use chain::Chain;

mod network;
pub use network::{Network, NetworkType};

mod page_id;
pub use page_id::{PageId, ParsePageIdError};

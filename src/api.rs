mod interface;
mod server;

pub use interface::{DynAPI, Icon, MapAPI, MapSnapshot, OverlayAPI, API};
pub use server::serve;

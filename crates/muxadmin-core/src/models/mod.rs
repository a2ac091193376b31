pub mod asset;
pub mod list;
pub mod playback;
pub mod settings;
pub mod upload;

pub use asset::*;
pub use list::*;
pub use playback::*;
pub use settings::*;
pub use upload::*;

pub mod errors;
pub mod message;
pub mod types;

pub use errors::{ConfigError, DeliveryError, LauncherError, PlatformError, ToolboxError};
pub use message::FrameMessage;
pub use types::{Point, Rect, Size, Theme, ToolDescriptor, ToolId, ViewId};

pub type Result<T> = std::result::Result<T, ToolboxError>;

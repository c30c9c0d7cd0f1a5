mod response;
pub use self::response::{ApiResponse, History, ResponseMetadata};

mod message;
pub use self::message::Message;

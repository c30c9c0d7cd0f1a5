mod common;
#[cfg(test)]
pub(crate) use self::common::encode_params;
pub use self::common::{resolve_channel, Method, Params, Request, RequestCommon};
mod chat;
pub use self::chat::{DeleteMessage, PostMessage};

mod history;
pub use self::history::{HistoryQuery, DEFAULT_HISTORY_COUNT};

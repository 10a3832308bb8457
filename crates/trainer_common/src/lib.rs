//! Types shared by everything that speaks the trainer API.
//!
//! The API is a single collection resource at [`BASE_PATH`]. Records carry no
//! identifier: list responses are positional, and update/delete requests name
//! their target by the full original record.

pub mod messages;
pub use messages::*;

pub mod originals;
pub use originals::Originals;

/// Collection path for every trainer operation. Identity travels in the body,
/// never in the path.
pub const BASE_PATH: &str = "/api/v1/trainer";

/// HTTP status codes the trainer API answers with.
pub mod status {
    /// Successful list or update.
    pub const OK: u16 = 200;
    /// Successful create.
    pub const CREATED: u16 = 201;
    /// Successful delete.
    pub const NO_CONTENT: u16 = 204;
    /// The server rejected the request body.
    pub const BAD_REQUEST: u16 = 400;

    /// Human readable name for the statuses above, used in user-facing text.
    pub fn reason(code: u16) -> &'static str {
        match code {
            OK => "200 OK",
            CREATED => "201 Created",
            NO_CONTENT => "204 No Content",
            BAD_REQUEST => "400 Bad Request",
            _ => "an unknown status",
        }
    }
}

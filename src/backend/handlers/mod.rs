//! HTTP Handlers
//!
//! One module per endpoint family:
//!
//! - **`check`** - `GET /api/check`
//! - **`sync`** - `POST /api/sync`
//! - **`verify`** - `POST /api/mal-verify`
//! - **`mock`** - canned `/api/mock/*` endpoints

pub mod check;
pub mod sync;
pub mod verify;
pub mod mock;

pub use check::check;
pub use mock::{mock_check, mock_mal_verify, mock_sync};
pub use sync::sync;
pub use verify::mal_verify;

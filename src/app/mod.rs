// Transport glue: API gateway events in, response envelopes out. Depends on
// the core, never the other way round.

pub mod handlers;
pub mod request;
pub mod response;

pub use handlers::{handle_event, handle_factorial_event, handle_prime_event};
pub use response::ApiResponse;

pub mod http;
pub mod session;
pub mod time;

pub use http::{ApiClient, ApiClientError, HttpAuthApi, HttpSurveyApi};
pub use session::FileSessionTokenStore;
pub use time::SystemClock;

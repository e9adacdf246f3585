pub mod mock_page;
pub mod mock_submission_client;

#[allow(unused_imports)]
pub use mock_page::{MockConfirmationView, MockForm, MockNotifier};
#[allow(unused_imports)]
pub use mock_submission_client::{MockResponse, MockSubmissionClient};

//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use super::configure;
use super::state::{HttpState, HttpStatePorts};
use crate::domain::ports::{
    MockCommitSummarizer, MockLoginService, MockSignupService, MockUserProfileQuery,
};

/// Mocked driving ports. Untouched mocks have no expectations, so any call
/// into them fails the test.
#[derive(Default)]
pub struct TestPorts {
    pub signup: MockSignupService,
    pub login: MockLoginService,
    pub profile: MockUserProfileQuery,
    pub summarizer: MockCommitSummarizer,
}

impl TestPorts {
    /// Wrap the mocks as handler state.
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(HttpStatePorts {
            signup: Arc::new(self.signup),
            login: Arc::new(self.login),
            profile: Arc::new(self.profile),
            summarizer: Arc::new(self.summarizer),
        }))
    }
}

/// Build an app serving every endpoint over the given mocks.
pub fn test_app(
    ports: TestPorts,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(ports.into_state()).configure(configure)
}

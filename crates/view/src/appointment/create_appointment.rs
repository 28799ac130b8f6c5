use crate::{error::ViewError, shared::usecase::UseCase};
use calendar_client_domain::{Appointment, AppointmentDraft, DraftField};
use calendar_client_infra::{APIError, ClientContext};

/// Submits a draft after checking that the fields the backend
/// needs are filled in. Nothing is sent when a field is missing.
#[derive(Debug)]
pub struct CreateAppointmentUseCase {
    pub draft: AppointmentDraft,
}

#[derive(Debug)]
pub enum UseCaseError {
    MissingFields(Vec<DraftField>),
    Backend(APIError),
}

impl From<UseCaseError> for ViewError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingFields(missing) => Self::Validation { missing },
            UseCaseError::Backend(e) => Self::Backend(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateAppointmentUseCase {
    type Response = Appointment;

    type Errors = UseCaseError;

    const NAME: &'static str = "CreateAppointment";

    async fn execute(&mut self, ctx: &ClientContext) -> Result<Self::Response, Self::Errors> {
        let missing = self.draft.missing_fields(ctx.backend.required_fields());
        if !missing.is_empty() {
            return Err(UseCaseError::MissingFields(missing));
        }

        ctx.backend
            .create_appointment(&self.draft)
            .await
            .map_err(UseCaseError::Backend)
    }
}

use crate::{error::ViewError, shared::usecase::UseCase};
use calendar_client_domain::{Calendar, ID};
use calendar_client_infra::{APIError, ClientContext, StatusCode};

#[derive(Debug)]
pub struct GetCalendarUseCase {
    pub calendar_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    Backend(APIError),
}

impl From<UseCaseError> for ViewError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(calendar_id) => Self::CalendarNotFound(calendar_id),
            UseCaseError::Backend(e) => Self::Backend(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCalendarUseCase {
    type Response = Calendar;

    type Errors = UseCaseError;

    const NAME: &'static str = "GetCalendar";

    async fn execute(&mut self, ctx: &ClientContext) -> Result<Self::Response, Self::Errors> {
        match ctx.backend.get_calendar(&self.calendar_id).await {
            Ok(calendar) => Ok(calendar),
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => {
                Err(UseCaseError::NotFound(self.calendar_id.clone()))
            }
            Err(e) => Err(UseCaseError::Backend(e)),
        }
    }
}

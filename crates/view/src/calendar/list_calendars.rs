use crate::shared::usecase::UseCase;
use calendar_client_domain::Calendar;
use calendar_client_infra::{APIError, ClientContext};

#[derive(Debug, Default)]
pub struct ListCalendarsUseCase;

#[async_trait::async_trait(?Send)]
impl UseCase for ListCalendarsUseCase {
    type Response = Vec<Calendar>;

    type Errors = APIError;

    const NAME: &'static str = "ListCalendars";

    async fn execute(&mut self, ctx: &ClientContext) -> Result<Self::Response, Self::Errors> {
        ctx.backend.list_calendars().await
    }
}

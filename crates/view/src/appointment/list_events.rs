use crate::shared::usecase::UseCase;
use calendar_client_domain::{Appointment, ID};
use calendar_client_infra::{APIError, ClientContext};

#[derive(Debug)]
pub struct ListEventsUseCase {
    pub calendar_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListEventsUseCase {
    type Response = Vec<Appointment>;

    type Errors = APIError;

    const NAME: &'static str = "ListEvents";

    async fn execute(&mut self, ctx: &ClientContext) -> Result<Self::Response, Self::Errors> {
        ctx.backend.list_events(&self.calendar_id).await
    }
}

use crate::shared::usecase::UseCase;
use calendar_client_domain::ID;
use calendar_client_infra::{APIError, ClientContext};

#[derive(Debug)]
pub struct DeleteAppointmentUseCase {
    pub event_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteAppointmentUseCase {
    type Response = ();

    type Errors = APIError;

    const NAME: &'static str = "DeleteAppointment";

    async fn execute(&mut self, ctx: &ClientContext) -> Result<Self::Response, Self::Errors> {
        ctx.backend.delete_appointment(&self.event_id).await
    }
}

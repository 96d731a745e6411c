use std::sync::Arc;

use domain_users::{NewUser, UserRepository, UserService, UserUpdate};
use grpc_client::ToTonicResult;
use rpc::user::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, GetRequest, GetResponse,
    UpdateRequest, UpdateResponse, user_service_server::UserService as UserServiceRpc,
};
use tonic::{Request, Response, Status};

/// gRPC façade over [`UserService`]: decodes the request, makes one service
/// call and maps the outcome to a response or a `Status`.
pub struct UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    service: Arc<UserService<R>>,
}

impl<R> UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    pub fn new(service: UserService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Identifiers come from a BIGSERIAL column and are never zero or negative.
fn require_id(id: i64) -> Result<i64, Status> {
    if id > 0 {
        Ok(id)
    } else {
        Err(format!("user id must be positive, got {id}")).to_tonic()
    }
}

#[tonic::async_trait]
impl<R> UserServiceRpc for UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        let input = NewUser::from(request.into_inner());

        let id = self.service.create_user(input).await?;

        Ok(Response::new(CreateResponse { id }))
    }

    async fn get(&self, request: Request<GetRequest>) -> Result<Response<GetResponse>, Status> {
        let id = require_id(request.into_inner().id)?;

        let user = self.service.get_user(id).await?;

        Ok(Response::new(user.into()))
    }

    async fn update(
        &self,
        request: Request<UpdateRequest>,
    ) -> Result<Response<UpdateResponse>, Status> {
        let req = request.into_inner();
        let id = require_id(req.id)?;
        let input = UserUpdate::from(req);

        self.service.update_user(id, input).await?;

        Ok(Response::new(UpdateResponse {}))
    }

    async fn delete(
        &self,
        request: Request<DeleteRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let id = require_id(request.into_inner().id)?;

        self.service.delete_user(id).await?;

        Ok(Response::new(DeleteResponse {}))
    }
}

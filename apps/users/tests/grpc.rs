//! End-to-end tests: a real tonic server on a loopback listener, backed by
//! the in-memory repository, driven through the generated client.

use domain_users::{InMemoryUserRepository, UserService};
use grpc_client::server::ServerConfig;
use rpc::user::user_service_client::UserServiceClient;
use rpc::user::{CreateRequest, DeleteRequest, GetRequest, Role, UpdateRequest, UserInfo};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::Code;
use tonic::codec::CompressionEncoding;
use tonic::transport::{Channel, Server};
use users_server::server::user_service_server;

async fn spawn_server(config: ServerConfig) -> UserServiceClient<Channel> {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = UserService::new(InMemoryUserRepository::new());

    tokio::spawn(async move {
        config
            .apply(Server::builder())
            .add_service(user_service_server(service, &config))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    UserServiceClient::connect(format!("http://{addr}"))
        .await
        .unwrap()
}

async fn get(client: &mut UserServiceClient<Channel>, id: i64) -> Result<UserInfo, tonic::Status> {
    let response = client.get(GetRequest { id }).await?.into_inner();
    Ok(response.user.expect("get response carries a user"))
}

fn instant(ts: Option<prost_types::Timestamp>) -> (i64, i32) {
    let ts = ts.expect("timestamp is set");
    (ts.seconds, ts.nanos)
}

#[tokio::test]
async fn test_user_lifecycle() {
    let mut client = spawn_server(ServerConfig::new().with_request_timeout(5)).await;

    let id = client
        .create(CreateRequest {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            role: Role::User as i32,
            password: "p1".into(),
        })
        .await
        .unwrap()
        .into_inner()
        .id;
    assert_eq!(id, 1);

    let user = get(&mut client, id).await.unwrap();
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@x.com");
    assert_eq!(user.role(), Role::User);
    assert_eq!(user.password, "p1");
    assert_eq!(user.password_confirm, "p1");
    let before = user;

    tokio::time::sleep(Duration::from_millis(50)).await;

    client
        .update(UpdateRequest {
            id,
            name: None,
            email: Some("ana2@x.com".into()),
            role: Role::Admin as i32,
        })
        .await
        .unwrap();

    let user = get(&mut client, id).await.unwrap();
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana2@x.com");
    assert_eq!(user.role(), Role::Admin);
    assert_eq!(user.password, "p1");
    assert_eq!(instant(user.created_at), instant(before.created_at));
    assert!(instant(user.updated_at) > instant(before.updated_at));

    client.delete(DeleteRequest { id }).await.unwrap();

    let status = get(&mut client, id).await.unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_missing_and_invalid_ids() {
    let mut client = spawn_server(ServerConfig::default()).await;

    let status = get(&mut client, 7).await.unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    let status = client.delete(DeleteRequest { id: 7 }).await.unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    let status = get(&mut client, 0).await.unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = client
        .update(UpdateRequest {
            id: -1,
            name: Some("X".into()),
            email: None,
            role: Role::User as i32,
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_update_right_after_create_is_visible_in_updated_at() {
    let mut client = spawn_server(ServerConfig::default()).await;

    let id = client
        .create(CreateRequest {
            name: "Quick".into(),
            email: "quick@x.com".into(),
            role: Role::User as i32,
            password: "pw".into(),
        })
        .await
        .unwrap()
        .into_inner()
        .id;
    let before = get(&mut client, id).await.unwrap();

    client
        .update(UpdateRequest {
            id,
            name: Some("Quicker".into()),
            email: None,
            role: Role::User as i32,
        })
        .await
        .unwrap();
    let after = get(&mut client, id).await.unwrap();

    assert!(instant(after.updated_at) > instant(before.updated_at));
}

#[tokio::test]
async fn test_delete_missing_id_leaves_existing_user_alone() {
    let mut client = spawn_server(ServerConfig::default()).await;

    let id = client
        .create(CreateRequest {
            name: "Keep".into(),
            email: "keep@x.com".into(),
            role: Role::Admin as i32,
            password: "pw".into(),
        })
        .await
        .unwrap()
        .into_inner()
        .id;
    let before = get(&mut client, id).await.unwrap();

    let status = client
        .delete(DeleteRequest { id: id + 1 })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    let after = get(&mut client, id).await.unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_oversized_request_is_rejected() {
    let mut client = spawn_server(ServerConfig::default().with_max_message_size(1024)).await;

    let status = client
        .create(CreateRequest {
            name: "n".repeat(4096),
            email: "big@x.com".into(),
            role: Role::User as i32,
            password: "pw".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        status.code(),
        Code::OutOfRange | Code::ResourceExhausted
    ));
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let client = spawn_server(ServerConfig::default()).await;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let mut client = client.clone();
            tokio::spawn(async move {
                client
                    .create(CreateRequest {
                        name: format!("user-{i}"),
                        email: format!("user-{i}@x.com"),
                        role: Role::User as i32,
                        password: "pw".into(),
                    })
                    .await
                    .unwrap()
                    .into_inner()
                    .id
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 16);
    assert!(ids.iter().all(|id| *id > 0));
}

#[tokio::test]
async fn test_zstd_compressed_client() {
    let client = spawn_server(ServerConfig::default().with_compression(true)).await;
    let mut client = client
        .send_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Zstd);

    let id = client
        .create(CreateRequest {
            name: "Zed".into(),
            email: "zed@x.com".into(),
            role: Role::Admin as i32,
            password: "pw".into(),
        })
        .await
        .unwrap()
        .into_inner()
        .id;

    let user = get(&mut client, id).await.unwrap();
    assert_eq!(user.role(), Role::Admin);
}

//! Integration tests driving the real client against an in-process mock of
//! the remote API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Multipart, Path, Query};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use api::{
    ApiClient, ApiConfig, ApiError, Credentials, KeyValueStore, MemoryStore, NewBooking,
    NewComment, PageQuery, AUTH_TOKEN_KEY, TOKEN_KEY, USER_KEY,
};

fn envelope(content: Value) -> Json<Value> {
    Json(json!({ "statusCode": 200, "message": "ok", "content": content }))
}

fn room_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "tenPhong": name,
        "khach": 2,
        "phongNgu": 1,
        "giuong": 1,
        "phongTam": 1,
        "moTa": "",
        "giaTien": 40,
        "wifi": true,
        "maViTri": 1
    })
}

fn user_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", id),
        "phone": "0912345678",
        "birthday": "1990-01-01",
        "gender": true,
        "role": "USER"
    })
}

fn location_json(id: i64) -> Value {
    json!({
        "id": id,
        "tenViTri": format!("Location {id}"),
        "tinhThanh": "Ho Chi Minh",
        "quocGia": "Viet Nam",
        "hinhAnh": null
    })
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> (ApiClient<MemoryStore>, MemoryStore) {
    let backing = MemoryStore::new();
    let client = ApiClient::with_store(ApiConfig::new(base_url, "test-key"), backing.clone());
    (client, backing)
}

fn sample_booking() -> NewBooking {
    NewBooking {
        room_id: 12,
        check_in: "2026-09-01".parse().unwrap(),
        check_out: "2026-09-04".parse().unwrap(),
        guest_count: 2,
        user_id: 7,
    }
}

#[tokio::test]
async fn test_create_booking_rejects_inverted_dates_without_calling() {
    let hits = Arc::new(AtomicUsize::new(0));
    let handler_hits = hits.clone();
    let app = Router::new().route(
        "/api/dat-phong",
        post(move |Json(_): Json<Value>| {
            let hits = handler_hits.clone();
            async move {
                hits.fetch_add(1, Ordering::Relaxed);
                envelope(json!({
                    "id": 1, "maPhong": 12, "ngayDen": "2026-09-01",
                    "ngayDi": "2026-09-04", "soLuongKhach": 2, "maNguoiDung": 7
                }))
            }
        }),
    );
    let base = serve(app).await;
    let (client, _) = client(&base);

    let mut booking = sample_booking();
    booking.check_out = booking.check_in;
    let err = client.create_booking(&booking).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    booking.check_out = "2026-08-30".parse().unwrap();
    let err = client.create_booking(&booking).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    assert_eq!(hits.load(Ordering::Relaxed), 0);

    // Sanity: a well-formed booking does go out.
    let booking = sample_booking();
    let created = client.create_booking(&booking).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(hits.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn test_create_comment_rejects_bad_stars_without_calling() {
    // Unroutable base: any request would surface as a transport error.
    let (client, _) = client("http://127.0.0.1:9");

    let mut comment = NewComment {
        room_id: 12,
        commenter_id: 7,
        date: "2026-07-14T09:30:00Z".parse().unwrap(),
        content: "Great stay".to_string(),
        stars: 0,
    };
    assert!(matches!(
        client.create_comment(&comment).await.unwrap_err(),
        ApiError::Validation(_)
    ));

    comment.stars = 6;
    assert!(matches!(
        client.create_comment(&comment).await.unwrap_err(),
        ApiError::Validation(_)
    ));

    comment.stars = 4;
    comment.content = "   ".to_string();
    assert!(matches!(
        client.create_comment(&comment).await.unwrap_err(),
        ApiError::Validation(_)
    ));
}

#[tokio::test]
async fn test_rooms_use_server_paging() {
    let app = Router::new().route(
        "/api/phong-thue/phan-trang-tim-kiem",
        get(|Query(params): Query<Vec<(String, String)>>| async move {
            assert!(params.contains(&("pageIndex".to_string(), "1".to_string())));
            assert!(params.contains(&("pageSize".to_string(), "10".to_string())));
            envelope(json!({
                "pageIndex": 1,
                "pageSize": 10,
                "totalRow": 23,
                "keywords": null,
                "data": [room_json(1, "A"), room_json(2, "B"), room_json(3, "C")]
            }))
        }),
    );
    let base = serve(app).await;
    let (client, _) = client(&base);

    let page = client.get_rooms(&PageQuery::new(1, 10)).await.unwrap();
    assert_eq!(page.total_row, 23);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].name, "A");
}

#[tokio::test]
async fn test_locations_slice_client_side_when_unpaged() {
    let app = Router::new().route(
        "/api/vi-tri/phan-trang-tim-kiem",
        get(|| async {
            envelope(Value::Array((1..=7).map(location_json).collect()))
        }),
    );
    let base = serve(app).await;
    let (client, _) = client(&base);

    let page = client.get_locations(&PageQuery::new(2, 3)).await.unwrap();
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].id, 4);
    assert_eq!(page.total_row, 7);
    assert_eq!(page.total_pages, 3);

    // Short last page: min(pageSize, totalRow - (pageIndex-1)*pageSize).
    let page = client.get_locations(&PageQuery::new(3, 3)).await.unwrap();
    assert_eq!(page.items.len(), 1);

    let page = client.get_locations(&PageQuery::new(9, 3)).await.unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_users_fall_back_to_full_collection() {
    let app = Router::new()
        .route(
            "/api/users/phan-trang-tim-kiem",
            get(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "statusCode": 400, "message": "paging unsupported" })),
                )
            }),
        )
        .route(
            "/api/users",
            get(|| async { envelope(Value::Array((1..=5).map(|i| user_json(i, "U")).collect())) }),
        );
    let base = serve(app).await;
    let (client, _) = client(&base);

    let page = client.get_users(&PageQuery::new(1, 2)).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_row, 5);
    assert_eq!(page.total_pages, 3);
}

#[tokio::test]
async fn test_comments_by_room_handle_both_shapes() {
    let app = Router::new().route(
        "/api/binh-luan/lay-binh-luan-theo-phong/{id}",
        get(|Path(id): Path<i64>| async move {
            let comment = |i: i64| {
                json!({
                    "id": i,
                    "ngayBinhLuan": "2026-07-14T09:30:00Z",
                    "noiDung": format!("comment {i}"),
                    "saoBinhLuan": 5,
                    "tenNguoiBinhLuan": "Minh",
                    "avatar": null
                })
            };
            if id == 1 {
                envelope(json!({
                    "pageIndex": 1,
                    "pageSize": 5,
                    "totalRow": 11,
                    "data": (1..=5).map(comment).collect::<Vec<_>>()
                }))
            } else {
                envelope(Value::Array((1..=7).map(comment).collect()))
            }
        }),
    );
    let base = serve(app).await;
    let (client, _) = client(&base);

    let page = client
        .get_comments_by_room(1, &PageQuery::new(1, 5))
        .await
        .unwrap();
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 5);

    let page = client
        .get_comments_by_room(2, &PageQuery::new(3, 3))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].content, "comment 7");
}

#[tokio::test]
async fn test_sign_in_persists_session_and_logout_clears_it() {
    let app = Router::new().route(
        "/api/auth/signin",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["email"], "lan@example.com");
            envelope(json!({ "user": user_json(7, "Lan"), "token": "tok-abc" }))
        }),
    );
    let base = serve(app).await;
    let (client, backing) = client(&base);

    let user = client
        .sign_in(&Credentials {
            email: "lan@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.id, 7);
    assert!(client.is_authenticated());
    assert_eq!(backing.get(AUTH_TOKEN_KEY).as_deref(), Some("tok-abc"));
    assert_eq!(backing.get(TOKEN_KEY).as_deref(), Some("tok-abc"));
    assert!(backing.get(USER_KEY).is_some());
    assert_eq!(client.current_user().unwrap().name, "Lan");

    client.logout();
    assert!(!client.is_authenticated());
    assert!(backing.get(AUTH_TOKEN_KEY).is_none());
    assert!(backing.get(TOKEN_KEY).is_none());
    assert!(backing.get(USER_KEY).is_none());

    // Logging out with nothing stored is still fine.
    client.logout();
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_flags_login() {
    let app = Router::new().route(
        "/api/dat-phong",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "statusCode": 401, "message": "token expired" })),
            )
        }),
    );
    let base = serve(app).await;
    let (client, backing) = client(&base);
    backing.set(AUTH_TOKEN_KEY, "stale");
    backing.set(TOKEN_KEY, "stale");

    let err = client.get_bookings().await.unwrap_err();
    assert!(err.requires_login());
    assert_eq!(err.status_code(), Some(401));
    assert!(backing.get(AUTH_TOKEN_KEY).is_none());
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_server_error_surfaces_envelope_message() {
    let app = Router::new().route(
        "/api/vi-tri/{id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "statusCode": 404, "message": "Location not found" })),
            )
        }),
    );
    let base = serve(app).await;
    let (client, _) = client(&base);

    let err = client.get_location(99).await.unwrap_err();
    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Location not found");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_sends_formfile_part() {
    let app = Router::new().route(
        "/api/phong-thue/upload-hinh-phong",
        post(
            |Query(params): Query<Vec<(String, String)>>, mut multipart: Multipart| async move {
                assert!(params.contains(&("maPhong".to_string(), "12".to_string())));
                let field = multipart.next_field().await.unwrap().unwrap();
                assert_eq!(field.name(), Some("formFile"));
                assert_eq!(field.file_name(), Some("room.jpg"));
                let bytes = field.bytes().await.unwrap();
                assert_eq!(&bytes[..], b"fake-image");
                envelope(room_json(12, "Seaside studio"))
            },
        ),
    );
    let base = serve(app).await;
    let (client, _) = client(&base);

    let room = client
        .upload_room_image(12, "room.jpg", b"fake-image".to_vec())
        .await
        .unwrap();
    assert_eq!(room.id, 12);
}

#[tokio::test]
async fn test_transport_failure_is_not_a_server_error() {
    let (client, _) = client("http://127.0.0.1:9");
    let err = client.get_bookings().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(!err.requires_login());
}

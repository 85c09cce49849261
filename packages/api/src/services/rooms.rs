//! Room listings: browsing, admin CRUD and image upload.

use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Room;
use crate::paging::{Page, PageQuery};
use crate::validate;

fn check(room: &Room) -> Result<(), ApiError> {
    validate::require(&room.name, "room name")?;
    validate::guest_count(room.guests)?;
    Ok(())
}

impl<S: KeyValueStore> ApiClient<S> {
    /// Rooms, paged server-side with a client-side fallback slice.
    pub async fn get_rooms(&self, query: &PageQuery) -> Result<Page<Room>, ApiError> {
        self.get_paged("/api/phong-thue/phan-trang-tim-kiem", "/api/phong-thue", query)
            .await
    }

    pub async fn get_room(&self, room_id: i64) -> Result<Room, ApiError> {
        self.get(&format!("/api/phong-thue/{room_id}")).await
    }

    /// All rooms at one location; the endpoint is unpaged upstream.
    pub async fn get_rooms_by_location(&self, location_id: i64) -> Result<Vec<Room>, ApiError> {
        self.get_query(
            "/api/phong-thue/lay-phong-theo-vi-tri",
            &[("maViTri", location_id.to_string())],
        )
        .await
    }

    pub async fn create_room(&self, room: &Room) -> Result<Room, ApiError> {
        check(room)?;
        self.post("/api/phong-thue", room).await
    }

    pub async fn update_room(&self, room_id: i64, room: &Room) -> Result<Room, ApiError> {
        check(room)?;
        self.put(&format!("/api/phong-thue/{room_id}"), room).await
    }

    pub async fn delete_room(&self, room_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/phong-thue/{room_id}")).await
    }

    /// Multipart upload of a room photo; the server stores it and returns
    /// the updated room.
    pub async fn upload_room_image(
        &self,
        room_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Room, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("formFile", part);
        self.post_multipart(
            "/api/phong-thue/upload-hinh-phong",
            &[("maPhong", room_id.to_string())],
            form,
        )
        .await
    }
}

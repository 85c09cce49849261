//! Locations: browsing, admin CRUD and image upload.

use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Location;
use crate::paging::{Page, PageQuery};
use crate::validate;

fn check(location: &Location) -> Result<(), ApiError> {
    validate::require(&location.name, "location name")?;
    validate::require(&location.province, "province")?;
    validate::require(&location.country, "country")?;
    Ok(())
}

impl<S: KeyValueStore> ApiClient<S> {
    /// Locations, paged server-side with a client-side fallback slice.
    pub async fn get_locations(&self, query: &PageQuery) -> Result<Page<Location>, ApiError> {
        self.get_paged("/api/vi-tri/phan-trang-tim-kiem", "/api/vi-tri", query)
            .await
    }

    pub async fn get_location(&self, location_id: i64) -> Result<Location, ApiError> {
        self.get(&format!("/api/vi-tri/{location_id}")).await
    }

    pub async fn create_location(&self, location: &Location) -> Result<Location, ApiError> {
        check(location)?;
        self.post("/api/vi-tri", location).await
    }

    pub async fn update_location(
        &self,
        location_id: i64,
        location: &Location,
    ) -> Result<Location, ApiError> {
        check(location)?;
        self.put(&format!("/api/vi-tri/{location_id}"), location)
            .await
    }

    pub async fn delete_location(&self, location_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/vi-tri/{location_id}")).await
    }

    pub async fn upload_location_image(
        &self,
        location_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Location, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("formFile", part);
        self.post_multipart(
            "/api/vi-tri/upload-hinh-vitri",
            &[("maViTri", location_id.to_string())],
            form,
        )
        .await
    }
}

//! Account administration.

use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{NewUser, User};
use crate::paging::{Page, PageQuery};
use crate::validate;

impl<S: KeyValueStore> ApiClient<S> {
    /// Users, paged server-side with a client-side fallback slice.
    pub async fn get_users(&self, query: &PageQuery) -> Result<Page<User>, ApiError> {
        self.get_paged("/api/users/phan-trang-tim-kiem", "/api/users", query)
            .await
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User, ApiError> {
        self.get(&format!("/api/users/{user_id}")).await
    }

    /// Name search; unpaged upstream.
    pub async fn search_users(&self, keyword: &str) -> Result<Vec<User>, ApiError> {
        validate::require(keyword, "keyword")?;
        self.get(&format!("/api/users/search/{keyword}")).await
    }

    /// Admin creation; same payload and checks as registration.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError> {
        validate::require(&new_user.name, "name")?;
        validate::email(&new_user.email)?;
        validate::require(&new_user.password, "password")?;
        validate::phone_vn(&new_user.phone)?;
        self.post("/api/users", new_user).await
    }

    pub async fn update_user(&self, user_id: i64, user: &User) -> Result<User, ApiError> {
        validate::require(&user.name, "name")?;
        validate::email(&user.email)?;
        if let Some(phone) = &user.phone {
            validate::phone_vn(phone)?;
        }
        self.put(&format!("/api/users/{user_id}"), user).await
    }

    /// Deletion goes through a query parameter, not a path segment — an
    /// oddity of the remote API.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.delete_query("/api/users", &[("id", user_id.to_string())])
            .await
    }

    pub async fn upload_avatar(&self, file_name: &str, bytes: Vec<u8>) -> Result<User, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("formFile", part);
        self.post_multipart("/api/users/upload-avatar", &[], form)
            .await
    }
}

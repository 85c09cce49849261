//! Room reviews.

use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Comment, NewComment, RoomComment};
use crate::paging::{Page, PageQuery, PagedOrFull};
use crate::validate;

fn check(comment: &NewComment) -> Result<(), ApiError> {
    validate::star_rating(comment.stars)?;
    validate::require(&comment.content, "comment")?;
    Ok(())
}

impl<S: KeyValueStore> ApiClient<S> {
    /// Every comment on the platform (admin listing); unpaged upstream.
    pub async fn get_comments(&self) -> Result<Vec<Comment>, ApiError> {
        self.get("/api/binh-luan").await
    }

    /// Comments for one room. The endpoint answers either shape; a plain
    /// array is sliced locally to the requested page.
    pub async fn get_comments_by_room(
        &self,
        room_id: i64,
        query: &PageQuery,
    ) -> Result<Page<RoomComment>, ApiError> {
        let response: PagedOrFull<RoomComment> = self
            .get_query(
                &format!("/api/binh-luan/lay-binh-luan-theo-phong/{room_id}"),
                &query.query_pairs(),
            )
            .await?;
        Ok(Page::from_response(response, query))
    }

    /// Post a review. Star range and content are checked before any
    /// request is made.
    pub async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ApiError> {
        check(comment)?;
        self.post("/api/binh-luan", comment).await
    }

    pub async fn update_comment(
        &self,
        comment_id: i64,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        check(comment)?;
        self.put(&format!("/api/binh-luan/{comment_id}"), comment)
            .await
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/binh-luan/{comment_id}")).await
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review attached to a room, as stored by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "maPhong")]
    pub room_id: i64,
    #[serde(rename = "maNguoiBinhLuan")]
    pub commenter_id: i64,
    #[serde(rename = "ngayBinhLuan")]
    pub date: DateTime<Utc>,
    #[serde(rename = "noiDung")]
    pub content: String,
    #[serde(rename = "saoBinhLuan")]
    pub stars: u8,
}

/// Payload for creating or replacing a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    #[serde(rename = "maPhong")]
    pub room_id: i64,
    #[serde(rename = "maNguoiBinhLuan")]
    pub commenter_id: i64,
    #[serde(rename = "ngayBinhLuan")]
    pub date: DateTime<Utc>,
    #[serde(rename = "noiDung")]
    pub content: String,
    #[serde(rename = "saoBinhLuan")]
    pub stars: u8,
}

/// The enriched row the per-room listing returns: the comment plus the
/// commenter's display name and avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomComment {
    pub id: i64,
    #[serde(rename = "ngayBinhLuan")]
    pub date: DateTime<Utc>,
    #[serde(rename = "noiDung")]
    pub content: String,
    #[serde(rename = "saoBinhLuan")]
    pub stars: u8,
    #[serde(rename = "tenNguoiBinhLuan", default)]
    pub commenter_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_comment_wire_shape() {
        let body = r#"{
            "id": 5,
            "ngayBinhLuan": "2026-07-14T09:30:00Z",
            "noiDung": "Great stay, very clean.",
            "saoBinhLuan": 5,
            "tenNguoiBinhLuan": "Minh Tran",
            "avatar": null
        }"#;
        let comment: RoomComment = serde_json::from_str(body).unwrap();
        assert_eq!(comment.stars, 5);
        assert_eq!(comment.commenter_name, "Minh Tran");
        assert!(comment.avatar.is_none());
    }
}

use serde::{Deserialize, Serialize};

/// A bookable location (city or area) as served by the remote API.
///
/// Creation posts the same shape with `id` zero; the server assigns the
/// real id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Location {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "tenViTri")]
    pub name: String,
    #[serde(rename = "tinhThanh")]
    pub province: String,
    #[serde(rename = "quocGia")]
    pub country: String,
    #[serde(rename = "hinhAnh", default)]
    pub image: Option<String>,
}

use serde::{Deserialize, Serialize};

/// A rentable room listing.
///
/// Amenity flags default to `false` when the API omits them. As with
/// [`crate::models::Location`], creation posts the shape with `id` zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Room {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "tenPhong")]
    pub name: String,
    #[serde(rename = "khach")]
    pub guests: u32,
    #[serde(rename = "phongNgu")]
    pub bedrooms: u32,
    #[serde(rename = "giuong")]
    pub beds: u32,
    #[serde(rename = "phongTam")]
    pub bathrooms: u32,
    #[serde(rename = "moTa", default)]
    pub description: String,
    /// Nightly price in the platform's currency unit.
    #[serde(rename = "giaTien")]
    pub price: i64,
    #[serde(rename = "mayGiat", default)]
    pub washer: bool,
    #[serde(rename = "banLa", default)]
    pub iron: bool,
    #[serde(rename = "tivi", default)]
    pub tv: bool,
    #[serde(rename = "dieuHoa", default)]
    pub air_conditioning: bool,
    #[serde(default)]
    pub wifi: bool,
    #[serde(rename = "bep", default)]
    pub kitchen: bool,
    #[serde(rename = "doXe", default)]
    pub parking: bool,
    #[serde(rename = "hoBoi", default)]
    pub pool: bool,
    #[serde(rename = "banUi", default)]
    pub ironing_board: bool,
    #[serde(rename = "maViTri")]
    pub location_id: i64,
    #[serde(rename = "hinhAnh", default)]
    pub image: Option<String>,
}

impl Room {
    /// Display labels for the amenities this room has.
    pub fn amenities(&self) -> Vec<&'static str> {
        let flags = [
            (self.wifi, "Wifi"),
            (self.air_conditioning, "Air conditioning"),
            (self.kitchen, "Kitchen"),
            (self.washer, "Washer"),
            (self.tv, "TV"),
            (self.iron, "Iron"),
            (self.ironing_board, "Ironing board"),
            (self.parking, "Free parking"),
            (self.pool, "Pool"),
        ];
        flags
            .into_iter()
            .filter_map(|(present, label)| present.then_some(label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_wire_shape_with_missing_flags() {
        let body = r#"{
            "id": 12,
            "tenPhong": "Seaside studio",
            "khach": 2,
            "phongNgu": 1,
            "giuong": 1,
            "phongTam": 1,
            "moTa": "Small studio by the beach",
            "giaTien": 45,
            "wifi": true,
            "hoBoi": true,
            "maViTri": 3
        }"#;
        let room: Room = serde_json::from_str(body).unwrap();
        assert_eq!(room.name, "Seaside studio");
        assert!(room.wifi);
        assert!(room.pool);
        assert!(!room.washer);
        assert_eq!(room.amenities(), vec!["Wifi", "Pool"]);
    }
}

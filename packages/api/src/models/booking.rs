use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stay reservation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    #[serde(rename = "maPhong")]
    pub room_id: i64,
    #[serde(rename = "ngayDen")]
    pub check_in: NaiveDate,
    #[serde(rename = "ngayDi")]
    pub check_out: NaiveDate,
    #[serde(rename = "soLuongKhach")]
    pub guest_count: u32,
    #[serde(rename = "maNguoiDung")]
    pub user_id: i64,
}

/// Payload for creating or replacing a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    #[serde(rename = "maPhong")]
    pub room_id: i64,
    #[serde(rename = "ngayDen")]
    pub check_in: NaiveDate,
    #[serde(rename = "ngayDi")]
    pub check_out: NaiveDate,
    #[serde(rename = "soLuongKhach")]
    pub guest_count: u32,
    #[serde(rename = "maNguoiDung")]
    pub user_id: i64,
}

impl NewBooking {
    /// Length of the stay in nights. Negative when the dates are inverted;
    /// validation rejects those before any request is made.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_wire_round_trip() {
        let body = r#"{"id":1,"maPhong":12,"ngayDen":"2026-09-01","ngayDi":"2026-09-04","soLuongKhach":2,"maNguoiDung":7}"#;
        let booking: Booking = serde_json::from_str(body).unwrap();
        assert_eq!(booking.check_in, date("2026-09-01"));
        assert_eq!(booking.guest_count, 2);

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["ngayDi"], "2026-09-04");
    }

    #[test]
    fn test_nights() {
        let booking = NewBooking {
            room_id: 12,
            check_in: date("2026-09-01"),
            check_out: date("2026-09-04"),
            guest_count: 2,
            user_id: 7,
        };
        assert_eq!(booking.nights(), 3);
    }
}

use dioxus::prelude::*;

use ui::AuthProvider;
use views::{
    AdminBookings, AdminLocations, AdminRooms, AdminUsers, Home, LocationRooms, Login, Profile,
    Register, RoomDetail, Rooms,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/rooms")]
    Rooms {},
    #[route("/rooms/:room_id")]
    RoomDetail { room_id: i64 },
    #[route("/locations/:location_id/rooms")]
    LocationRooms { location_id: i64 },
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/locations")]
    AdminLocations {},
    #[route("/admin/rooms")]
    AdminRooms {},
    #[route("/admin/bookings")]
    AdminBookings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
